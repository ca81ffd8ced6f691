//! Common types used throughout the navlens engine.
//!
//! This module defines the raw and validated representations of a NAV
//! (Net Asset Value) time series, along with the fund category enumeration
//! used by the scoring engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// Date formats accepted for raw NAV rows, tried in order.
///
/// AMFI exports use `DD-MM-YYYY` or `DD-Mon-YYYY`; API payloads typically
/// use ISO `YYYY-MM-DD`. Slash-separated variants are accepted as a lenient
/// fallback.
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%b-%Y"];

/// A raw NAV value as it appears in upstream payloads.
///
/// Upstream sources are inconsistent: some emit JSON numbers, some emit
/// numeric strings (`"43.2751"`). Both are accepted; coercion happens in
/// [`NavSeries::from_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavValue {
    /// A JSON number.
    Number(f64),
    /// A numeric string.
    Text(String),
}

impl NavValue {
    /// Coerce the raw value to a positive `f64`, if possible.
    ///
    /// Returns `None` for non-numeric text, non-finite numbers, and values
    /// that are zero or negative (a NAV is a price and must be positive).
    pub fn as_positive_f64(&self) -> Option<f64> {
        let v = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (v.is_finite() && v > 0.0).then_some(v)
    }
}

impl From<f64> for NavValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for NavValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A single raw, untrusted NAV row as supplied by an upstream loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavRow {
    /// Observation date, in any of the supported string formats.
    pub date: String,
    /// Per-unit NAV, as a number or numeric string.
    pub nav: NavValue,
}

impl NavRow {
    /// Convenience constructor for a raw row.
    pub fn new(date: impl Into<String>, nav: impl Into<NavValue>) -> Self {
        Self {
            date: date.into(),
            nav: nav.into(),
        }
    }
}

/// A validated NAV observation: a calendar date and a positive price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Observation date.
    pub date: Date,
    /// Per-unit NAV, strictly positive.
    pub nav: f64,
}

/// Parse a date string against the supported formats, in order.
pub fn parse_date(s: &str) -> Option<Date> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// A validated, sorted, deduplicated NAV time series.
///
/// Invariants enforced by construction:
///
/// - dates strictly increasing, no duplicates;
/// - every `nav` is finite and strictly positive.
///
/// Malformed rows (unparseable date, non-numeric or non-positive nav) are
/// dropped during construction, never reported as errors. Duplicate dates
/// keep the last occurrence in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    /// Build a validated series from raw rows.
    ///
    /// # Example
    ///
    /// ```
    /// use navlens_core::{NavRow, NavSeries};
    ///
    /// let rows = vec![
    ///     NavRow::new("02-01-2020", 10.05),
    ///     NavRow::new("01-01-2020", "10.00"),
    ///     NavRow::new("garbage", 10.10), // dropped
    /// ];
    /// let series = NavSeries::from_rows(&rows);
    /// assert_eq!(series.len(), 2);
    /// ```
    pub fn from_rows(rows: &[NavRow]) -> Self {
        let mut points: Vec<NavPoint> = rows
            .iter()
            .filter_map(|row| {
                let date = parse_date(&row.date)?;
                let nav = row.nav.as_positive_f64()?;
                Some(NavPoint { date, nav })
            })
            .collect();

        // Stable sort keeps input order within a date, so dedup keeps the
        // last row written for that date.
        points.sort_by_key(|p| p.date);
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();

        Self { points }
    }

    /// Build a series directly from validated points.
    ///
    /// Points are sorted and deduplicated by date (last wins); non-positive
    /// or non-finite navs are dropped.
    pub fn from_points(points: Vec<NavPoint>) -> Self {
        let mut points: Vec<NavPoint> = points
            .into_iter()
            .filter(|p| p.nav.is_finite() && p.nav > 0.0)
            .collect();
        points.sort_by_key(|p| p.date);
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();
        Self { points }
    }

    /// The validated observations, sorted ascending by date.
    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First (oldest) observation.
    pub fn first(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    /// Last (most recent) observation.
    pub fn last(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// Calendar days between the first and last observation.
    pub fn span_days(&self) -> i64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (last.date - first.date).num_days(),
            _ => 0,
        }
    }

    /// Fund age in years (span / 365.25).
    pub fn age_years(&self) -> f64 {
        self.span_days() as f64 / 365.25
    }

    /// Simple day-over-day returns, non-finite values excluded.
    ///
    /// With all navs positive the returns are finite by construction, but
    /// the filter keeps the invariant explicit.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| (w[1].nav - w[0].nav) / w[0].nav)
            .filter(|r| r.is_finite())
            .collect()
    }

    /// The NAV value of the last observation on or before `target`.
    pub fn nav_at_or_before(&self, target: Date) -> Option<f64> {
        self.points
            .iter()
            .rev()
            .find(|p| p.date <= target)
            .map(|p| p.nav)
    }
}

/// Fund category, as classified by AMFI scheme taxonomy.
///
/// The scoring engine keys its weight and range tables on this enum.
/// Unknown labels fall back to [`Category::Other`], which scores with the
/// balanced (Hybrid) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Equity funds: growth-oriented, higher volatility.
    Equity,
    /// Debt funds: stability and consistency over raw returns.
    Debt,
    /// Hybrid funds: balanced equity/debt allocation.
    Hybrid,
    /// Income funds: scored with the debt configuration.
    Income,
    /// Solution-oriented funds (retirement, children): scored as hybrid.
    #[serde(rename = "Solution Oriented")]
    SolutionOriented,
    /// Anything else: scored with the balanced configuration.
    Other,
}

impl Category {
    /// Match a category label case-sensitively, falling back to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Equity" => Self::Equity,
            "Debt" => Self::Debt,
            "Hybrid" => Self::Hybrid,
            "Income" => Self::Income,
            "Solution Oriented" => Self::SolutionOriented,
            _ => Self::Other,
        }
    }

    /// The canonical label for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "Equity",
            Self::Debt => "Debt",
            Self::Hybrid => "Hybrid",
            Self::Income => "Income",
            Self::SolutionOriented => "Solution Oriented",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
