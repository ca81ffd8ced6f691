//! The metrics record: the fixed-shape output of the metrics engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data-quality assessment for a fund's NAV history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    /// Under one year of history; metrics are not meaningful.
    Insufficient,
    /// One to three years of history.
    Preliminary,
    /// Three-plus years but fewer than 365 records.
    Moderate,
    /// Three-plus years and at least 365 records.
    High,
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Insufficient => "insufficient",
            Self::Preliminary => "preliminary",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Flat record of every metric the engine computes, plus data-quality
/// metadata.
///
/// A field is `None` exactly when it could not be computed from the
/// available history; that is a valid outcome, not an error. Serialized
/// field names are a stable output contract.
///
/// # Unit conventions
///
/// Inherited from the upstream pipeline and preserved as-is:
///
/// - decimal fractions (0.15 = 15%): `cagr`, `rolling_*`, `volatility`,
///   `downside_deviation`, `max_drawdown`, `value_at_risk_95`,
///   `conditional_var_95`, `pain_index`;
/// - percentage points (15.5 = 15.5%): `abs_return_*`, `ulcer_index`,
///   `consistency_score`, `positive_months_pct`, `current_drawdown_pct`;
/// - unitless ratios: `sharpe`, `sortino`, `calmar_ratio`,
///   `gain_to_pain_ratio`, `skewness`, `kurtosis`;
/// - day counts: `avg_drawdown_duration_days`, `max_recovery_time_days`,
///   `days_since_peak`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    // Core return metrics
    /// Compound annual growth rate over the full span (decimal).
    pub cagr: Option<f64>,
    /// Mean of annualized rolling 1-year returns (decimal).
    pub rolling_1y: Option<f64>,
    /// Mean of annualized rolling 3-year returns (decimal).
    pub rolling_3y: Option<f64>,
    /// Mean of annualized rolling 5-year returns (decimal).
    pub rolling_5y: Option<f64>,

    // Absolute point-to-point returns (percentage points)
    /// 1-month absolute return.
    pub abs_return_1m: Option<f64>,
    /// 3-month absolute return.
    pub abs_return_3m: Option<f64>,
    /// 6-month absolute return.
    pub abs_return_6m: Option<f64>,
    /// 1-year absolute return.
    pub abs_return_1y: Option<f64>,
    /// 2-year absolute return.
    pub abs_return_2y: Option<f64>,
    /// 3-year absolute return.
    pub abs_return_3y: Option<f64>,
    /// 5-year absolute return.
    pub abs_return_5y: Option<f64>,
    /// 7-year absolute return.
    pub abs_return_7y: Option<f64>,
    /// 10-year absolute return.
    pub abs_return_10y: Option<f64>,

    // Risk metrics
    /// Annualized volatility of daily returns (decimal).
    pub volatility: Option<f64>,
    /// Annualized standard deviation of negative daily returns (decimal).
    pub downside_deviation: Option<f64>,
    /// Worst peak-to-trough decline (signed negative decimal).
    pub max_drawdown: Option<f64>,
    /// Root-mean-square of the drawdown-percentage series.
    pub ulcer_index: Option<f64>,
    /// 5th percentile of daily returns (decimal).
    pub value_at_risk_95: Option<f64>,
    /// Mean of daily returns at or below the 5th percentile (decimal).
    pub conditional_var_95: Option<f64>,

    // Risk-adjusted returns
    /// Sharpe ratio against the 6.5% annual risk-free rate.
    pub sharpe: Option<f64>,
    /// Sortino ratio against the 6.5% annual risk-free rate.
    pub sortino: Option<f64>,
    /// CAGR over the magnitude of maximum drawdown.
    pub calmar_ratio: Option<f64>,
    /// Total return over the sum of absolute negative daily returns.
    pub gain_to_pain_ratio: Option<f64>,

    // Consistency metrics (percentage points)
    /// Percentage of calendar months with a positive NAV change.
    pub consistency_score: Option<f64>,
    /// Same measure as `consistency_score`, kept as a separate key.
    pub positive_months_pct: Option<f64>,
    /// Mean of squared drawdown fractions.
    pub pain_index: Option<f64>,

    // Recovery metrics
    /// Mean length in days of completed drawdown runs.
    pub avg_drawdown_duration_days: Option<f64>,
    /// Longest peak-to-peak recovery in days.
    pub max_recovery_time_days: Option<f64>,
    /// Current decline from the all-time-high NAV (percentage points).
    pub current_drawdown_pct: Option<f64>,
    /// Days elapsed since the all-time-high NAV.
    pub days_since_peak: Option<f64>,

    // Distribution metrics
    /// Bias-corrected skewness of daily returns.
    pub skewness: Option<f64>,
    /// Bias-corrected excess kurtosis of daily returns.
    pub kurtosis: Option<f64>,

    // Fund metadata
    /// Span of the series in years.
    pub fund_age_years: Option<f64>,
    /// Whether the history clears the age and record-count bar.
    pub is_statistically_reliable: bool,
    /// Data-quality tier.
    pub data_quality: DataQuality,
    /// Human-readable reason for the quality assessment.
    pub data_quality_reason: String,

    // Benchmark-relative placeholders: a benchmark series is not wired in
    // yet, so these are always None but remain part of the contract.
    /// Benchmark-relative alpha (reserved).
    pub alpha: Option<f64>,
    /// Benchmark beta (reserved).
    pub beta: Option<f64>,
    /// R-squared against the benchmark (reserved).
    pub r_squared: Option<f64>,
    /// Information ratio against the benchmark (reserved).
    pub information_ratio: Option<f64>,
    /// Tracking error against the benchmark (reserved).
    pub tracking_error: Option<f64>,
    /// Up-market capture ratio (reserved).
    pub up_capture: Option<f64>,
    /// Down-market capture ratio (reserved).
    pub down_capture: Option<f64>,
}

impl MetricsRecord {
    /// An all-null record tagged with the reason computation was skipped.
    pub fn empty(reason: impl Into<String>) -> Self {
        Self {
            cagr: None,
            rolling_1y: None,
            rolling_3y: None,
            rolling_5y: None,
            abs_return_1m: None,
            abs_return_3m: None,
            abs_return_6m: None,
            abs_return_1y: None,
            abs_return_2y: None,
            abs_return_3y: None,
            abs_return_5y: None,
            abs_return_7y: None,
            abs_return_10y: None,
            volatility: None,
            downside_deviation: None,
            max_drawdown: None,
            ulcer_index: None,
            value_at_risk_95: None,
            conditional_var_95: None,
            sharpe: None,
            sortino: None,
            calmar_ratio: None,
            gain_to_pain_ratio: None,
            consistency_score: None,
            positive_months_pct: None,
            pain_index: None,
            avg_drawdown_duration_days: None,
            max_recovery_time_days: None,
            current_drawdown_pct: None,
            days_since_peak: None,
            skewness: None,
            kurtosis: None,
            fund_age_years: None,
            is_statistically_reliable: false,
            data_quality: DataQuality::Insufficient,
            data_quality_reason: reason.into(),
            alpha: None,
            beta: None,
            r_squared: None,
            information_ratio: None,
            tracking_error: None,
            up_capture: None,
            down_capture: None,
        }
    }

    /// Iterator over every numeric field with its serialized name.
    ///
    /// Useful for contract checks: every value yielded here must be finite
    /// or `None`.
    pub fn numeric_fields(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("cagr", self.cagr),
            ("rolling_1y", self.rolling_1y),
            ("rolling_3y", self.rolling_3y),
            ("rolling_5y", self.rolling_5y),
            ("abs_return_1m", self.abs_return_1m),
            ("abs_return_3m", self.abs_return_3m),
            ("abs_return_6m", self.abs_return_6m),
            ("abs_return_1y", self.abs_return_1y),
            ("abs_return_2y", self.abs_return_2y),
            ("abs_return_3y", self.abs_return_3y),
            ("abs_return_5y", self.abs_return_5y),
            ("abs_return_7y", self.abs_return_7y),
            ("abs_return_10y", self.abs_return_10y),
            ("volatility", self.volatility),
            ("downside_deviation", self.downside_deviation),
            ("max_drawdown", self.max_drawdown),
            ("ulcer_index", self.ulcer_index),
            ("value_at_risk_95", self.value_at_risk_95),
            ("conditional_var_95", self.conditional_var_95),
            ("sharpe", self.sharpe),
            ("sortino", self.sortino),
            ("calmar_ratio", self.calmar_ratio),
            ("gain_to_pain_ratio", self.gain_to_pain_ratio),
            ("consistency_score", self.consistency_score),
            ("positive_months_pct", self.positive_months_pct),
            ("pain_index", self.pain_index),
            ("avg_drawdown_duration_days", self.avg_drawdown_duration_days),
            ("max_recovery_time_days", self.max_recovery_time_days),
            ("current_drawdown_pct", self.current_drawdown_pct),
            ("days_since_peak", self.days_since_peak),
            ("skewness", self.skewness),
            ("kurtosis", self.kurtosis),
            ("fund_age_years", self.fund_age_years),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("r_squared", self.r_squared),
            ("information_ratio", self.information_ratio),
            ("tracking_error", self.tracking_error),
            ("up_capture", self.up_capture),
            ("down_capture", self.down_capture),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let rec = MetricsRecord::empty("insufficient_nav_data");
        assert!(!rec.is_statistically_reliable);
        assert_eq!(rec.data_quality, DataQuality::Insufficient);
        assert_eq!(rec.data_quality_reason, "insufficient_nav_data");
        assert!(rec.numeric_fields().iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_data_quality_serializes_lowercase() {
        let json = serde_json::to_string(&DataQuality::High).unwrap();
        assert_eq!(json, "\"high\"");
        let json = serde_json::to_string(&DataQuality::Preliminary).unwrap();
        assert_eq!(json, "\"preliminary\"");
    }

    #[test]
    fn test_serialized_shape_keeps_null_keys() {
        let rec = MetricsRecord::empty("insufficient_nav_data");
        let value = serde_json::to_value(&rec).unwrap();
        let obj = value.as_object().unwrap();
        // Benchmark placeholders must appear as keys even when null.
        for key in ["alpha", "beta", "up_capture", "down_capture"] {
            assert!(obj.contains_key(key), "missing key {key}");
            assert!(obj[key].is_null());
        }
        assert_eq!(obj["data_quality"], "insufficient");
    }
}
