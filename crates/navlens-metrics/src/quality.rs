//! Reliability gate: fund age and record-count assessment.

use crate::record::DataQuality;
use navlens_core::NavSeries;

/// Minimum fund age in years for statistically reliable metrics.
pub const MIN_RELIABLE_AGE_YEARS: f64 = 3.0;

/// Minimum number of NAV records for statistically reliable metrics.
pub const MIN_RELIABLE_RECORDS: usize = 365;

/// Outcome of the data-quality assessment for a series.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityAssessment {
    /// Fund age in years (span / 365.25).
    pub fund_age_years: f64,
    /// Whether the age and record-count bar is cleared.
    pub is_reliable: bool,
    /// Quality tier.
    pub quality: DataQuality,
    /// Human-readable reason for the tier.
    pub reason: String,
}

/// Assess the statistical quality of a validated NAV series.
///
/// Tiers are mutually exclusive, first match wins: under a year of history
/// is `insufficient`, one to three years is `preliminary`, three-plus years
/// with a thin record count is `moderate`, everything else is `high`.
pub fn assess(series: &NavSeries) -> QualityAssessment {
    let age = series.age_years();
    let rows = series.len();
    let is_reliable = age >= MIN_RELIABLE_AGE_YEARS && rows >= MIN_RELIABLE_RECORDS;

    let (quality, reason) = if age < 1.0 {
        (
            DataQuality::Insufficient,
            format!("Fund age: {age:.1} years (need 3+ years)"),
        )
    } else if age < MIN_RELIABLE_AGE_YEARS {
        (
            DataQuality::Preliminary,
            format!("Fund age: {age:.1} years (preliminary)"),
        )
    } else if rows < MIN_RELIABLE_RECORDS {
        (
            DataQuality::Moderate,
            format!("{rows} NAV records (good but limited)"),
        )
    } else {
        (
            DataQuality::High,
            format!("{rows} NAV records over {age:.1} years"),
        )
    };

    QualityAssessment {
        fund_age_years: age,
        is_reliable,
        quality,
        reason,
    }
}
