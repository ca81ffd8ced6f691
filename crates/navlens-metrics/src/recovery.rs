//! Drawdown-duration and recovery-time metrics.

use crate::risk::MIN_RETURN_OBS;
use navlens_core::NavSeries;

/// Current decline from the all-time-high NAV, in percentage points.
///
/// Zero when the latest observation is the peak; otherwise negative.
pub fn current_drawdown_pct(series: &NavSeries) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let current = series.last()?.nav;
    let peak = series
        .points()
        .iter()
        .map(|p| p.nav)
        .fold(f64::MIN, f64::max);
    if peak <= 0.0 {
        return None;
    }
    Some((current - peak) / peak * 100.0)
}

/// Days elapsed from the first occurrence of the all-time-high NAV to the
/// latest observation.
pub fn days_since_peak(series: &NavSeries) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let points = series.points();
    let peak = points
        .iter()
        .max_by(|a, b| a.nav.partial_cmp(&b.nav).unwrap_or(std::cmp::Ordering::Equal))?
        .nav;
    // First date the peak was reached
    let peak_date = points.iter().find(|p| p.nav >= peak)?.date;
    let latest = series.last()?.date;
    Some((latest - peak_date).num_days() as f64)
}

/// Dates at which the series sets (or ties) a new running-max peak.
fn peak_dates(series: &NavSeries) -> Vec<navlens_core::Date> {
    let mut running_max = f64::MIN;
    series
        .points()
        .iter()
        .filter_map(|p| {
            running_max = running_max.max(p.nav);
            (p.nav == running_max).then_some(p.date)
        })
        .collect()
}

/// Longest gap in days between consecutive running-max peaks.
///
/// A recovery completes when the NAV sets a new peak; the gap between one
/// peak and the next bounds the time spent under water. `None` with fewer
/// than two peaks (a drawdown still open at the end of the series is not a
/// completed recovery).
pub fn max_recovery_time_days(series: &NavSeries) -> Option<f64> {
    if series.len() < MIN_RETURN_OBS {
        return None;
    }
    let peaks = peak_dates(series);
    peaks
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .max()
        .map(|d| d as f64)
}

/// Mean length in observations of completed below-peak runs.
///
/// A run is the contiguous stretch where the NAV sits under its running
/// max; it completes when a new peak (or tie) is reached. A trailing
/// unfinished run is not counted.
pub fn avg_drawdown_duration_days(series: &NavSeries) -> Option<f64> {
    if series.len() < MIN_RETURN_OBS {
        return None;
    }
    let mut running_max = f64::MIN;
    let mut durations: Vec<f64> = Vec::new();
    let mut current = 0usize;

    for p in series.points() {
        running_max = running_max.max(p.nav);
        if p.nav < running_max {
            current += 1;
        } else if current > 0 {
            durations.push(current as f64);
            current = 0;
        }
    }

    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<f64>() / durations.len() as f64)
}
