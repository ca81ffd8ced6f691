#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! NAV-derived performance and risk metrics engine.
//!
//! Given a fund's NAV time series, [`compute_metrics`] produces a
//! fixed-shape [`MetricsRecord`]: return metrics (CAGR, rolling and
//! point-to-point returns), risk metrics (volatility, drawdowns, Ulcer
//! Index, VaR/CVaR), risk-adjusted ratios (Sharpe, Sortino, Calmar),
//! consistency and recovery statistics, and distribution shape, plus a
//! data-quality assessment.
//!
//! The engine is a pure function of its input: no I/O, no shared state,
//! and it never fails. Malformed rows are dropped during preprocessing; a
//! metric that cannot be computed from the available history is `None`;
//! and any non-finite intermediate collapses the single affected field,
//! never the record.
//!
//! # Example
//!
//! ```
//! use navlens_core::NavRow;
//! use navlens_metrics::compute_metrics;
//!
//! let rows = vec![
//!     NavRow::new("01-01-2020", 10.0),
//!     NavRow::new("02-01-2020", 10.1),
//! ];
//! let record = compute_metrics(&rows);
//! // Two days of history: everything is null but the record is valid.
//! assert!(record.cagr.is_none());
//! assert!(!record.is_statistically_reliable);
//! ```

pub mod consistency;
pub mod distribution;
mod guard;
pub mod quality;
pub mod ratios;
pub mod record;
pub mod recovery;
pub mod returns;
pub mod risk;

pub use quality::{QualityAssessment, MIN_RELIABLE_AGE_YEARS, MIN_RELIABLE_RECORDS};
pub use ratios::RISK_FREE_RATE;
pub use record::{DataQuality, MetricsRecord};

use guard::guarded;
use navlens_core::{NavRow, NavSeries};

/// Compute every metric from raw NAV rows.
///
/// Rows with unparseable dates or non-positive navs are dropped; duplicate
/// dates keep the last row. Fewer than two raw rows yields an all-null
/// record tagged `insufficient_nav_data`; fewer than two surviving rows
/// yields `insufficient_valid_data`. This function never panics and its
/// output depends only on its input.
pub fn compute_metrics(rows: &[NavRow]) -> MetricsRecord {
    if rows.len() < 2 {
        return MetricsRecord::empty("insufficient_nav_data");
    }
    let series = NavSeries::from_rows(rows);
    if series.len() < 2 {
        return MetricsRecord::empty("insufficient_valid_data");
    }
    compute_metrics_for_series(&series)
}

/// Compute every metric from a pre-validated series.
pub fn compute_metrics_for_series(series: &NavSeries) -> MetricsRecord {
    if series.len() < 2 {
        return MetricsRecord::empty("insufficient_valid_data");
    }

    let assessment = quality::assess(series);

    MetricsRecord {
        // Core return metrics
        cagr: guarded(|| returns::cagr(series)),
        rolling_1y: guarded(|| returns::rolling_return_mean(series, 365)),
        rolling_3y: guarded(|| returns::rolling_return_mean(series, 1095)),
        rolling_5y: guarded(|| returns::rolling_return_mean(series, 1825)),

        // Absolute returns
        abs_return_1m: guarded(|| returns::absolute_return(series, 30)),
        abs_return_3m: guarded(|| returns::absolute_return(series, 90)),
        abs_return_6m: guarded(|| returns::absolute_return(series, 180)),
        abs_return_1y: guarded(|| returns::absolute_return(series, 365)),
        abs_return_2y: guarded(|| returns::absolute_return(series, 730)),
        abs_return_3y: guarded(|| returns::absolute_return(series, 1095)),
        abs_return_5y: guarded(|| returns::absolute_return(series, 1825)),
        abs_return_7y: guarded(|| returns::absolute_return(series, 2555)),
        abs_return_10y: guarded(|| returns::absolute_return(series, 3650)),

        // Risk metrics
        volatility: guarded(|| risk::volatility(series)),
        downside_deviation: guarded(|| risk::downside_deviation(series)),
        max_drawdown: guarded(|| risk::max_drawdown(series)),
        ulcer_index: guarded(|| risk::ulcer_index(series)),
        value_at_risk_95: guarded(|| risk::value_at_risk_95(series)),
        conditional_var_95: guarded(|| risk::conditional_var_95(series)),

        // Risk-adjusted returns
        sharpe: guarded(|| ratios::sharpe(series)),
        sortino: guarded(|| ratios::sortino(series)),
        calmar_ratio: guarded(|| ratios::calmar_ratio(series)),
        gain_to_pain_ratio: guarded(|| ratios::gain_to_pain_ratio(series)),

        // Consistency metrics
        consistency_score: guarded(|| consistency::consistency_score(series)),
        positive_months_pct: guarded(|| consistency::positive_months_pct(series)),
        pain_index: guarded(|| consistency::pain_index(series)),

        // Recovery metrics
        avg_drawdown_duration_days: guarded(|| recovery::avg_drawdown_duration_days(series)),
        max_recovery_time_days: guarded(|| recovery::max_recovery_time_days(series)),
        current_drawdown_pct: guarded(|| recovery::current_drawdown_pct(series)),
        days_since_peak: guarded(|| recovery::days_since_peak(series)),

        // Distribution metrics
        skewness: guarded(|| distribution::skewness(series)),
        kurtosis: guarded(|| distribution::kurtosis(series)),

        // Fund metadata
        fund_age_years: guarded(|| Some(assessment.fund_age_years)),
        is_statistically_reliable: assessment.is_reliable,
        data_quality: assessment.quality,
        data_quality_reason: assessment.reason,

        // Benchmark placeholders: no benchmark series wired in yet
        alpha: None,
        beta: None,
        r_squared: None,
        information_ratio: None,
        tracking_error: None,
        up_capture: None,
        down_capture: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_two_rows_is_empty_record() {
        let record = compute_metrics(&[NavRow::new("01-01-2020", 10.0)]);
        assert_eq!(record.data_quality_reason, "insufficient_nav_data");
        assert!(record.numeric_fields().iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_all_invalid_rows_is_empty_record() {
        let rows = vec![
            NavRow::new("junk", 10.0),
            NavRow::new("more junk", "N.A."),
            NavRow::new("01-01-2020", -3.0),
        ];
        let record = compute_metrics(&rows);
        assert_eq!(record.data_quality_reason, "insufficient_valid_data");
        assert!(!record.is_statistically_reliable);
    }

    #[test]
    fn test_benchmark_placeholders_stay_null() {
        let rows: Vec<NavRow> = (0..1500)
            .map(|i| {
                let date = navlens_core::types::parse_date("2019-01-01").unwrap()
                    + chrono::Duration::days(i);
                NavRow::new(date.format("%Y-%m-%d").to_string(), 10.0 + i as f64 * 0.01)
            })
            .collect();
        let record = compute_metrics(&rows);
        assert!(record.is_statistically_reliable);
        assert!(record.alpha.is_none());
        assert!(record.beta.is_none());
        assert!(record.information_ratio.is_none());
        assert!(record.tracking_error.is_none());
    }
}
