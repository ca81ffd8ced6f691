//! Shape statistics of the daily-return distribution.

use crate::risk::MIN_RETURN_OBS;
use navlens_core::stats;
use navlens_core::NavSeries;

/// Bias-corrected skewness of daily returns.
pub fn skewness(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    stats::skewness(&returns)
}

/// Bias-corrected excess kurtosis of daily returns.
pub fn kurtosis(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    stats::excess_kurtosis(&returns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use navlens_core::{NavRow, NavSeries};

    fn daily_series(navs: &[f64]) -> NavSeries {
        let start = navlens_core::types::parse_date("2021-01-01").unwrap();
        let rows: Vec<NavRow> = navs
            .iter()
            .enumerate()
            .map(|(i, nav)| {
                let date = start + Duration::days(i as i64);
                NavRow::new(date.format("%Y-%m-%d").to_string(), *nav)
            })
            .collect();
        NavSeries::from_rows(&rows)
    }

    #[test]
    fn test_crash_day_produces_negative_skew() {
        let mut nav = 100.0;
        let navs: Vec<f64> = (0..120)
            .map(|i| {
                // steady gains with one severe down day
                nav *= if i == 60 { 0.90 } else { 1.001 + (i % 3) as f64 * 0.0005 };
                nav
            })
            .collect();
        let series = daily_series(&navs);
        assert!(skewness(&series).unwrap() < 0.0);
        // A single extreme observation fattens the tails
        assert!(kurtosis(&series).unwrap() > 0.0);
    }

    #[test]
    fn test_short_series_is_none() {
        let navs: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let series = daily_series(&navs);
        assert_eq!(skewness(&series), None);
        assert_eq!(kurtosis(&series), None);
    }
}
