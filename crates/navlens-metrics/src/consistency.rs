//! Month-level consistency metrics and the pain index.

use crate::risk::{drawdown_series, MIN_RETURN_OBS};
use chrono::Datelike;
use navlens_core::NavSeries;

/// Rows required before monthly grouping is attempted.
const MIN_ROWS_FOR_MONTHLY: usize = 60;

/// Qualifying calendar months required for a consistency score.
const MIN_MONTHS: usize = 12;

/// Intra-month returns, one per calendar month with at least two
/// observations: `(last_nav - first_nav) / first_nav`.
///
/// `None` when the series is too short or fewer than 12 months qualify.
pub(crate) fn monthly_returns(series: &NavSeries) -> Option<Vec<f64>> {
    if series.len() < MIN_ROWS_FOR_MONTHLY {
        return None;
    }

    let mut returns = Vec::new();
    let points = series.points();
    let mut i = 0;
    while i < points.len() {
        let month_key = (points[i].date.year(), points[i].date.month());
        let mut j = i;
        while j + 1 < points.len()
            && (points[j + 1].date.year(), points[j + 1].date.month()) == month_key
        {
            j += 1;
        }
        // A single observation says nothing about the month's direction
        if j > i {
            let start = points[i].nav;
            let end = points[j].nav;
            if start > 0.0 && end > 0.0 {
                returns.push((end - start) / start);
            }
        }
        i = j + 1;
    }

    (returns.len() >= MIN_MONTHS).then_some(returns)
}

/// Percentage of calendar months with a positive intra-month NAV change,
/// in percentage points.
pub fn consistency_score(series: &NavSeries) -> Option<f64> {
    let returns = monthly_returns(series)?;
    let positive = returns.iter().filter(|r| **r > 0.0).count();
    Some(positive as f64 / returns.len() as f64 * 100.0)
}

/// Alias of [`consistency_score`], kept as its own output key.
pub fn positive_months_pct(series: &NavSeries) -> Option<f64> {
    consistency_score(series)
}

/// Pain index: mean of squared drawdown fractions. Non-negative.
pub fn pain_index(series: &NavSeries) -> Option<f64> {
    if series.len() < MIN_RETURN_OBS {
        return None;
    }
    let dd = drawdown_series(series);
    let finite: Vec<f64> = dd.iter().copied().filter(|d| d.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let mean_sq = finite.iter().map(|d| d * d).sum::<f64>() / finite.len() as f64;
    Some(mean_sq.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;
    use navlens_core::{NavRow, NavSeries};

    fn daily_series(navs: &[f64]) -> NavSeries {
        let start = navlens_core::types::parse_date("2019-01-01").unwrap();
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
    fn test_all_rising_months_score_100() {
        let navs: Vec<f64> = (0..400).map(|i| 100.0 + i as f64 * 0.1).collect();
        let series = daily_series(&navs);
        assert_relative_eq!(consistency_score(&series).unwrap(), 100.0);
        assert_eq!(
            consistency_score(&series),
            positive_months_pct(&series)
        );
    }

    #[test]
    fn test_alternating_months_score_half() {
        // 14 months: odd months fall, even months rise
        let mut nav = 100.0;
        let mut navs = Vec::new();
        for month in 0..14 {
            let step = if month % 2 == 0 { 0.1 } else { -0.05 };
            for _ in 0..30 {
                nav += step;
                navs.push(nav);
            }
        }
        let series = daily_series(&navs);
        let score = consistency_score(&series).unwrap();
        assert!((40.0..=60.0).contains(&score), "score {score}");
    }

    #[test]
    fn test_too_few_months_is_none() {
        let navs: Vec<f64> = (0..90).map(|i| 100.0 + i as f64).collect();
        let series = daily_series(&navs);
        assert_eq!(consistency_score(&series), None);
    }

    #[test]
    fn test_pain_index_zero_for_monotone() {
        let navs: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
        let series = daily_series(&navs);
        assert_relative_eq!(pain_index(&series).unwrap(), 0.0);
    }

    #[test]
    fn test_pain_index_positive_with_drawdowns() {
        let mut navs: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        navs.extend((0..50).map(|i| 148.0 - i as f64));
        let series = daily_series(&navs);
        assert!(pain_index(&series).unwrap() > 0.0);
    }
}
