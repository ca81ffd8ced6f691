//! Volatility, drawdown, and tail-risk metrics.

use navlens_core::stats::{self, MIN_STD_THRESHOLD};
use navlens_core::NavSeries;
use ndarray::Array1;

/// Daily-return observations required for distribution-based risk metrics.
pub(crate) const MIN_RETURN_OBS: usize = 30;

/// Negative-return observations required for downside statistics.
pub(crate) const MIN_NEGATIVE_OBS: usize = 5;

/// Trading days per year used for annualization.
pub(crate) const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Drawdown fraction at each observation: `(nav - cummax) / cummax`.
///
/// Always non-positive; zero at every new running-max peak.
pub(crate) fn drawdown_series(series: &NavSeries) -> Array1<f64> {
    let mut running_max = f64::MIN;
    series
        .points()
        .iter()
        .map(|p| {
            running_max = running_max.max(p.nav);
            (p.nav - running_max) / running_max
        })
        .collect::<Vec<f64>>()
        .into()
}

/// Annualized volatility of daily returns, as a decimal.
///
/// `None` with fewer than 30 return observations or zero variance.
pub fn volatility(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    let std = stats::sample_std(&returns)?;
    if std < MIN_STD_THRESHOLD {
        return None;
    }
    Some(std * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Annualized standard deviation of strictly negative daily returns.
///
/// `None` with fewer than 5 negative observations or zero variance.
pub fn downside_deviation(series: &NavSeries) -> Option<f64> {
    if series.daily_returns().len() < MIN_RETURN_OBS {
        return None;
    }
    let negatives: Vec<f64> = series
        .daily_returns()
        .into_iter()
        .filter(|r| *r < 0.0)
        .collect();
    if negatives.len() < MIN_NEGATIVE_OBS {
        return None;
    }
    let std = stats::sample_std(&negatives)?;
    if std < MIN_STD_THRESHOLD {
        return None;
    }
    Some(std * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Maximum drawdown: the minimum of the drawdown series. Signed negative
/// decimal; exactly zero for a monotonically non-decreasing series.
pub fn max_drawdown(series: &NavSeries) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    drawdown_series(series)
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .fold(None, |acc: Option<f64>, d| {
            Some(acc.map_or(d, |a| a.min(d)))
        })
}

/// Ulcer Index: root-mean-square of the drawdown series expressed in
/// percentage points.
pub fn ulcer_index(series: &NavSeries) -> Option<f64> {
    if series.len() < MIN_RETURN_OBS {
        return None;
    }
    let dd_pct: Vec<f64> = drawdown_series(series)
        .iter()
        .map(|d| d * 100.0)
        .filter(|d| d.is_finite())
        .collect();
    if dd_pct.is_empty() {
        return None;
    }
    let mean_sq = dd_pct.iter().map(|d| d * d).sum::<f64>() / dd_pct.len() as f64;
    Some(mean_sq.sqrt())
}

/// Value at Risk at 95% confidence: the 5th percentile of daily returns,
/// as a decimal.
pub fn value_at_risk_95(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    stats::percentile(&returns, 0.05)
}

/// Conditional VaR (expected shortfall) at 95%: the mean of daily returns
/// at or below the 5th percentile.
pub fn conditional_var_95(series: &NavSeries) -> Option<f64> {
    let returns = series.daily_returns();
    if returns.len() < MIN_RETURN_OBS {
        return None;
    }
    let var = stats::percentile(&returns, 0.05)?;
    let tail: Vec<f64> = returns.into_iter().filter(|r| *r <= var).collect();
    stats::mean(&tail)
}
