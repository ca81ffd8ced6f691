//! The category-aware scoring engine.

use crate::config::{CategoryConfig, Direction, MetricRange};
use crate::tier::Tier;
use navlens_core::Category;
use navlens_metrics::{DataQuality, MetricsRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum share of a category's total weight that must be evaluable
/// before a score is produced.
pub const MIN_WEIGHT_APPLIED: f64 = 30.0;

/// Confidence in a produced score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reliability {
    /// The fund's history cannot support a score at all.
    Insufficient,
    /// Scored, but the fund is under three years old.
    Preliminary,
    /// Scored, but many configured metrics were missing.
    Moderate,
    /// Scored on a full track record.
    High,
}

/// A single metric's normalization breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetric {
    /// Raw value from the metrics record.
    pub raw: f64,
    /// Value rescaled to 0-100 within the configured range.
    pub normalized: f64,
    /// Configured weight.
    pub weight: f64,
}

/// The scoring engine's output for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Final 0-100 score, rounded to two decimals.
    pub total: f64,
    /// Category whose configuration produced the score.
    pub category: Category,
    /// Discrete tier for the score.
    pub tier: Tier,
    /// Per-metric normalization breakdown.
    pub normalized_metrics: BTreeMap<String, NormalizedMetric>,
    /// Per-metric contribution to the pre-rescale total.
    pub contributions: BTreeMap<String, f64>,
    /// Configured metrics that were null in the metrics record.
    pub missing_metrics: Vec<String>,
    /// Sum of weights actually evaluated.
    pub weight_applied: f64,
    /// Whether the total was rescaled for partial coverage.
    pub adjusted: bool,
    /// Confidence in the score.
    pub reliability: Reliability,
    /// Human-readable reason for the reliability level.
    pub reliability_reason: String,
    /// Number of metrics that contributed.
    pub total_metrics_used: usize,
    /// Number of metrics the category configures.
    pub total_metrics_available: usize,
    /// False for the early-exit records.
    pub has_sufficient_data: bool,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Clamp a raw value into the configured range and rescale to 0-100,
/// inverting when lower values are better.
pub fn normalize_metric(value: f64, range: MetricRange) -> f64 {
    let clamped = value.clamp(range.min, range.max);
    let span = range.max - range.min;
    let mut normalized = if span == 0.0 {
        0.5
    } else {
        (clamped - range.min) / span
    };
    if range.direction == Direction::LowerBetter {
        normalized = 1.0 - normalized;
    }
    normalized * 100.0
}

fn insufficient_record(
    category: Category,
    config: &CategoryConfig,
    normalized_metrics: BTreeMap<String, NormalizedMetric>,
    contributions: BTreeMap<String, f64>,
    missing_metrics: Vec<String>,
    weight_applied: f64,
    reason: String,
) -> ScoreRecord {
    let used = normalized_metrics.len();
    ScoreRecord {
        total: 0.0,
        category,
        tier: Tier::InsufficientData,
        normalized_metrics,
        contributions,
        missing_metrics,
        weight_applied: round2(weight_applied),
        adjusted: false,
        reliability: Reliability::Insufficient,
        reliability_reason: reason,
        total_metrics_used: used,
        total_metrics_available: config.weights.len(),
        has_sufficient_data: false,
    }
}

/// Score a metrics record against a category's configuration.
///
/// Pure and total: unknown categories fall back to the balanced
/// configuration upstream (via [`Category::from_label`]), unreliable or
/// thinly-covered records come back as `insufficient_data`, and the
/// function never fails.
pub fn compute_score(metrics: &MetricsRecord, category: Category) -> ScoreRecord {
    let config = CategoryConfig::for_category(category);

    let fund_age = metrics.fund_age_years.unwrap_or(0.0);

    // Funds without a trustworthy history get no score at all.
    if !metrics.is_statistically_reliable || metrics.data_quality == DataQuality::Insufficient {
        let missing: Vec<String> = config
            .weights
            .iter()
            .map(|(m, _)| m.as_str().to_string())
            .collect();
        return insufficient_record(
            category,
            config,
            BTreeMap::new(),
            BTreeMap::new(),
            missing,
            0.0,
            format!("Insufficient historical data (Fund age: {fund_age:.1} years)"),
        );
    }

    let mut total_score = 0.0;
    let mut weight_applied = 0.0;
    let mut normalized_metrics = BTreeMap::new();
    let mut contributions = BTreeMap::new();
    let mut missing_metrics = Vec::new();

    for (metric, weight) in config.weights {
        let Some(value) = metric.extract(metrics) else {
            missing_metrics.push(metric.as_str().to_string());
            continue;
        };
        let Some(range) = config.range_for(*metric) else {
            missing_metrics.push(metric.as_str().to_string());
            continue;
        };

        let normalized = normalize_metric(value, range);
        normalized_metrics.insert(
            metric.as_str().to_string(),
            NormalizedMetric {
                raw: value,
                normalized: round2(normalized),
                weight: *weight,
            },
        );

        let contribution = normalized * weight / 100.0;
        contributions.insert(metric.as_str().to_string(), round2(contribution));

        total_score += contribution;
        weight_applied += weight;
    }

    // Passing the age bar is not enough if the specific metrics a category
    // cares about are largely absent.
    if weight_applied < MIN_WEIGHT_APPLIED {
        let used = normalized_metrics.len();
        let available = config.weights.len();
        return insufficient_record(
            category,
            config,
            normalized_metrics,
            contributions,
            missing_metrics,
            weight_applied,
            format!("Too few metrics available ({used}/{available})"),
        );
    }

    // Rescale so partial coverage does not structurally depress the score.
    let adjusted = weight_applied > 0.0 && weight_applied < 100.0;
    if adjusted {
        total_score *= 100.0 / weight_applied;
    }

    let tier = Tier::for_score(total_score);

    let (reliability, reliability_reason) = if fund_age < 3.0 {
        (
            Reliability::Preliminary,
            format!("Fund age: {fund_age:.1} years (need 3+ years)"),
        )
    } else if missing_metrics.len() > 5 {
        (
            Reliability::Moderate,
            format!("{} metrics missing", missing_metrics.len()),
        )
    } else {
        (
            Reliability::High,
            "Sufficient data and track record".to_string(),
        )
    };

    ScoreRecord {
        total: round2(total_score),
        category,
        tier,
        total_metrics_used: normalized_metrics.len(),
        total_metrics_available: config.weights.len(),
        normalized_metrics,
        contributions,
        missing_metrics,
        weight_applied: round2(weight_applied),
        adjusted,
        reliability,
        reliability_reason,
        has_sufficient_data: true,
    }
}

/// Score a metrics record against a free-form category label.
///
/// Unknown labels silently fall back to the balanced configuration.
pub fn compute_score_for_label(metrics: &MetricsRecord, label: &str) -> ScoreRecord {
    compute_score(metrics, Category::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reliable_equity_metrics() -> MetricsRecord {
        let mut rec = MetricsRecord::empty("test");
        rec.is_statistically_reliable = true;
        rec.data_quality = DataQuality::High;
        rec.fund_age_years = Some(5.2);
        rec.cagr = Some(0.18);
        rec.rolling_3y = Some(0.15);
        rec.rolling_5y = Some(0.14);
        rec.volatility = Some(0.20);
        rec.max_drawdown = Some(-0.25);
        rec.downside_deviation = Some(0.15);
        rec.sharpe = Some(1.8);
        rec.sortino = Some(2.1);
        rec.consistency_score = Some(72.0);
        rec.positive_months_pct = Some(65.0);
        rec
    }

    #[test]
    fn test_normalize_higher_better() {
        let r = MetricRange {
            min: 0.0,
            max: 0.2,
            direction: Direction::HigherBetter,
        };
        assert_relative_eq!(normalize_metric(0.1, r), 50.0);
        assert_relative_eq!(normalize_metric(0.2, r), 100.0);
        assert_relative_eq!(normalize_metric(0.5, r), 100.0); // clamped
        assert_relative_eq!(normalize_metric(-1.0, r), 0.0); // clamped
    }

    #[test]
    fn test_normalize_lower_better_inverts() {
        let r = MetricRange {
            min: 0.1,
            max: 0.4,
            direction: Direction::LowerBetter,
        };
        assert_relative_eq!(normalize_metric(0.1, r), 100.0);
        assert_relative_eq!(normalize_metric(0.4, r), 0.0);
        assert_relative_eq!(normalize_metric(0.25, r), 50.0);
    }

    #[test]
    fn test_strong_equity_fund_scores_well() {
        let record = compute_score(&reliable_equity_metrics(), Category::Equity);
        assert!(record.has_sufficient_data);
        assert!(record.total > 60.0, "total {}", record.total);
        assert_ne!(record.tier, Tier::InsufficientData);
        // Benchmark placeholders are absent and recorded as such
        assert!(record.missing_metrics.contains(&"alpha".to_string()));
        assert_eq!(record.reliability, Reliability::High);
    }

    #[test]
    fn test_unreliable_record_early_exit() {
        let mut rec = reliable_equity_metrics();
        rec.is_statistically_reliable = false;
        for category in [Category::Equity, Category::Debt, Category::Other] {
            let record = compute_score(&rec, category);
            assert_eq!(record.total, 0.0);
            assert_eq!(record.tier, Tier::InsufficientData);
            assert!(!record.has_sufficient_data);
            assert_eq!(record.weight_applied, 0.0);
            assert_eq!(
                record.missing_metrics.len(),
                record.total_metrics_available
            );
        }
    }

    #[test]
    fn test_insufficient_quality_early_exit() {
        let mut rec = reliable_equity_metrics();
        rec.data_quality = DataQuality::Insufficient;
        let record = compute_score(&rec, Category::Equity);
        assert_eq!(record.tier, Tier::InsufficientData);
        assert_eq!(record.total, 0.0);
    }

    #[test]
    fn test_thin_coverage_gate() {
        let mut rec = MetricsRecord::empty("test");
        rec.is_statistically_reliable = true;
        rec.data_quality = DataQuality::High;
        rec.fund_age_years = Some(4.0);
        // Only cagr present: 20% weight for equity, under the 30% bar
        rec.cagr = Some(0.15);
        let record = compute_score(&rec, Category::Equity);
        assert_eq!(record.tier, Tier::InsufficientData);
        assert_eq!(record.total, 0.0);
        assert!(!record.has_sufficient_data);
        // The partial breakdown is preserved
        assert_eq!(record.total_metrics_used, 1);
    }

    #[test]
    fn test_rescaling_half_coverage_perfect_scores() {
        let mut rec = MetricsRecord::empty("test");
        rec.is_statistically_reliable = true;
        rec.data_quality = DataQuality::High;
        rec.fund_age_years = Some(6.0);
        // Equity: cagr 20 + rolling_3y 10 + rolling_5y 10 + volatility 10
        // = 50% coverage, every value pinned at its best bound
        rec.cagr = Some(0.30);
        rec.rolling_3y = Some(0.25);
        rec.rolling_5y = Some(0.20);
        rec.volatility = Some(0.10);
        let record = compute_score(&rec, Category::Equity);
        assert!(record.adjusted);
        assert_relative_eq!(record.weight_applied, 50.0);
        assert_relative_eq!(record.total, 100.0);
        assert_eq!(record.tier, Tier::Excellent);
    }

    #[test]
    fn test_unknown_label_uses_balanced_config() {
        let rec = reliable_equity_metrics();
        let fallback = compute_score_for_label(&rec, "Foo");
        let hybrid = compute_score(&rec, Category::Hybrid);
        assert_eq!(fallback.total, hybrid.total);
        assert_eq!(fallback.tier, hybrid.tier);
        assert_eq!(fallback.category, Category::Other);
    }

    #[test]
    fn test_debt_fund_with_debt_config() {
        let mut rec = MetricsRecord::empty("test");
        rec.is_statistically_reliable = true;
        rec.data_quality = DataQuality::High;
        rec.fund_age_years = Some(7.5);
        rec.cagr = Some(0.07);
        rec.rolling_3y = Some(0.065);
        rec.rolling_5y = Some(0.06);
        rec.volatility = Some(0.03);
        rec.max_drawdown = Some(-0.05);
        rec.downside_deviation = Some(0.02);
        rec.sharpe = Some(2.5);
        rec.sortino = Some(3.0);
        rec.consistency_score = Some(85.0);
        rec.positive_months_pct = Some(78.0);
        rec.current_drawdown_pct = Some(-0.01);
        let record = compute_score(&rec, Category::Debt);
        assert!(record.total > 60.0, "total {}", record.total);
        // Income funds score identically to debt funds
        let income = compute_score(&rec, Category::Income);
        assert_eq!(record.total, income.total);
    }

    #[test]
    fn test_preliminary_reliability_for_young_scored_fund() {
        let mut rec = reliable_equity_metrics();
        rec.fund_age_years = Some(2.5);
        let record = compute_score(&rec, Category::Equity);
        assert!(record.has_sufficient_data);
        assert_eq!(record.reliability, Reliability::Preliminary);
    }

    #[test]
    fn test_score_serializes_cleanly() {
        let record = compute_score(&reliable_equity_metrics(), Category::Equity);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["category"], "Equity");
        assert!(value["total"].as_f64().unwrap() > 0.0);
        assert!(value["normalized_metrics"]["cagr"]["normalized"].is_number());
    }
}
