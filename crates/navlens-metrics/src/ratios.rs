//! Risk-adjusted return ratios.

use crate::returns::cagr;
use crate::risk::{
    downside_deviation, max_drawdown, volatility, MIN_RETURN_OBS, TRADING_DAYS_PER_YEAR,
};
use navlens_core::stats;
use navlens_core::NavSeries;

/// Annual risk-free rate used in Sharpe and Sortino (Indian T-bill proxy).
pub const RISK_FREE_RATE: f64 = 0.065;

/// Annualized mean daily return, shared numerator of Sharpe and Sortino.
fn annualized_mean_return(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    stats::mean(&returns).map(|m| m * TRADING_DAYS_PER_YEAR)
}

/// Sharpe ratio: annualized excess return over annualized volatility.
pub fn sharpe(series: &NavSeries) -> Option<f64> {
    let annual_return = annualized_mean_return(series)?;
    let annual_vol = volatility(series)?;
    Some((annual_return - RISK_FREE_RATE) / annual_vol)
}

/// Sortino ratio: annualized excess return over downside deviation.
pub fn sortino(series: &NavSeries) -> Option<f64> {
    let annual_return = annualized_mean_return(series)?;
    let downside = downside_deviation(series)?;
    Some((annual_return - RISK_FREE_RATE) / downside)
}

/// Calmar ratio: CAGR over the magnitude of maximum drawdown.
///
/// `None` when either input is unavailable or the drawdown is zero.
pub fn calmar_ratio(series: &NavSeries) -> Option<f64> {
    let cagr = cagr(series)?;
    let max_dd = max_drawdown(series)?;
    if max_dd == 0.0 {
        return None;
    }
    Some(cagr / max_dd.abs())
}

/// Gain-to-pain ratio: total return over the summed magnitude of negative
/// daily returns.
pub fn gain_to_pain_ratio(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    let start = series.first()?.nav;
    let end = series.last()?.nav;
    let total_return = end / start - 1.0;

    let negatives: Vec<f64> = returns.into_iter().filter(|r| *r < 0.0).collect();
    if negatives.is_empty() {
        return None;
    }
    let pain: f64 = negatives.iter().map(|r| r.abs()).sum();
    if pain == 0.0 {
        return None;
    }
    Some(total_return / pain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use navlens_core::{NavRow, NavSeries};

    fn series_from_navs(navs: &[f64]) -> NavSeries {
        let start = navlens_core::types::parse_date("2016-01-01").unwrap();
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

    /// Two years of alternating gains and varied small losses: positive
    /// drift with plenty of losing days.
    fn drifting_series() -> NavSeries {
        let mut nav = 100.0;
        let navs: Vec<f64> = (0..730)
            .map(|i| {
                let factor = if i % 2 == 0 {
                    1.008
                } else {
                    0.997 - (i % 7) as f64 * 0.0004
                };
                nav *= factor;
                nav
            })
            .collect();
        series_from_navs(&navs)
    }

    #[test]
    fn test_sharpe_positive_for_strong_drift() {
        let sharpe = sharpe(&drifting_series()).unwrap();
        assert!(sharpe > 0.0, "expected positive sharpe, got {sharpe}");
    }

    #[test]
    fn test_sortino_exceeds_sharpe_here() {
        // Downside deviation uses only the mild losing days, so the
        // denominator is smaller than total volatility.
        let s = drifting_series();
        assert!(sortino(&s).unwrap() > sharpe(&s).unwrap());
    }

    #[test]
    fn test_calmar_none_without_drawdown() {
        let navs: Vec<f64> = (0..400).map(|i| 100.0 + i as f64).collect();
        let series = series_from_navs(&navs);
        assert!(cagr(&series).is_some());
        assert_eq!(calmar_ratio(&series), None);
    }

    #[test]
    fn test_calmar_positive_with_drawdown() {
        let mut navs: Vec<f64> = (0..400).map(|i| 100.0 + i as f64 * 0.5).collect();
        navs.push(250.0); // dip below the running peak
        navs.extend((0..50).map(|i| 255.0 + i as f64));
        let series = series_from_navs(&navs);
        let calmar = calmar_ratio(&series).unwrap();
        assert!(calmar > 0.0);
    }

    #[test]
    fn test_gain_to_pain_requires_losing_days() {
        let navs: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
        let series = series_from_navs(&navs);
        assert_eq!(gain_to_pain_ratio(&series), None);

        let g2p = gain_to_pain_ratio(&drifting_series()).unwrap();
        assert!(g2p > 0.0);
    }
}
