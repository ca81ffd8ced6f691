//! Point-to-point and rolling return metrics.

use chrono::Duration;
use navlens_core::NavSeries;

/// Rows required before a CAGR is considered meaningful.
const MIN_CAGR_ROWS: usize = 365;

/// Extra rows beyond the window required for a rolling-return mean.
const ROLLING_MARGIN_ROWS: usize = 30;

/// Compound annual growth rate over the full span, as a decimal.
///
/// `None` when the series has fewer than 365 rows, spans less than a year,
/// or has a degenerate endpoint.
pub fn cagr(series: &NavSeries) -> Option<f64> {
    if series.len() < MIN_CAGR_ROWS {
        return None;
    }
    let start = series.first()?;
    let end = series.last()?;
    let years = series.age_years();
    if years < 1.0 || start.nav <= 0.0 || end.nav <= 0.0 {
        return None;
    }
    Some((end.nav / start.nav).powf(1.0 / years) - 1.0)
}

/// Absolute return over the trailing `days`, in percentage points.
///
/// The base observation is the last one on or before `latest - days`;
/// `None` when the history does not reach that far back.
pub fn absolute_return(series: &NavSeries, days: i64) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let latest = series.last()?;
    let target = latest.date - Duration::days(days);
    let past_nav = series.nav_at_or_before(target)?;
    if past_nav <= 0.0 {
        return None;
    }
    Some((latest.nav - past_nav) / past_nav * 100.0)
}

/// Mean of annualized returns over every sliding window of `window_days`
/// rows, as a decimal.
///
/// On a gap-filled daily series the row offset and the calendar window
/// coincide. `None` when the series is shorter than the window plus a
/// 30-row margin.
pub fn rolling_return_mean(series: &NavSeries, window_days: usize) -> Option<f64> {
    if series.len() < window_days + ROLLING_MARGIN_ROWS {
        return None;
    }
    let points = series.points();
    let years = window_days as f64 / 365.25;

    let window_returns: Vec<f64> = (0..points.len() - window_days)
        .filter_map(|i| {
            let start = points[i].nav;
            let end = points[i + window_days].nav;
            (start > 0.0 && end > 0.0).then(|| (end / start).powf(1.0 / years) - 1.0)
        })
        .collect();

    if window_returns.is_empty() {
        return None;
    }
    navlens_core::stats::mean(&window_returns)
}
