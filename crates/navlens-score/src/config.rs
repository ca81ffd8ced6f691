//! Static per-category scoring configuration.
//!
//! Weights and normalization ranges are data, not code: one table per
//! asset class, dispatched on [`Category`]. Income funds reuse the debt
//! tables; solution-oriented and uncategorized funds reuse the hybrid
//! (balanced) tables.

use navlens_core::Category;
use navlens_metrics::MetricsRecord;
use serde::{Deserialize, Serialize};

/// Whether larger or smaller raw values are better for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Larger raw values normalize toward 100.
    HigherBetter,
    /// Smaller raw values normalize toward 100.
    LowerBetter,
}

/// Normalization range for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    /// Lower clamp bound.
    pub min: f64,
    /// Upper clamp bound.
    pub max: f64,
    /// Orientation of the metric.
    pub direction: Direction,
}

const fn range(min: f64, max: f64, direction: Direction) -> MetricRange {
    MetricRange { min, max, direction }
}

/// The metrics a category configuration may weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredMetric {
    /// Compound annual growth rate.
    Cagr,
    /// Mean rolling 3-year return.
    Rolling3y,
    /// Mean rolling 5-year return.
    Rolling5y,
    /// Annualized volatility.
    Volatility,
    /// Maximum drawdown.
    MaxDrawdown,
    /// Downside deviation.
    DownsideDeviation,
    /// Sharpe ratio.
    Sharpe,
    /// Sortino ratio.
    Sortino,
    /// Consistency score.
    ConsistencyScore,
    /// Positive-months percentage.
    PositiveMonthsPct,
    /// Current drawdown percentage.
    CurrentDrawdownPct,
    /// Benchmark alpha (placeholder metric, currently always missing).
    Alpha,
    /// Benchmark information ratio (placeholder metric).
    InformationRatio,
}

impl ScoredMetric {
    /// The metric's serialized field name in the metrics record.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cagr => "cagr",
            Self::Rolling3y => "rolling_3y",
            Self::Rolling5y => "rolling_5y",
            Self::Volatility => "volatility",
            Self::MaxDrawdown => "max_drawdown",
            Self::DownsideDeviation => "downside_deviation",
            Self::Sharpe => "sharpe",
            Self::Sortino => "sortino",
            Self::ConsistencyScore => "consistency_score",
            Self::PositiveMonthsPct => "positive_months_pct",
            Self::CurrentDrawdownPct => "current_drawdown_pct",
            Self::Alpha => "alpha",
            Self::InformationRatio => "information_ratio",
        }
    }

    /// Pull this metric's raw value out of a metrics record.
    pub const fn extract(&self, record: &MetricsRecord) -> Option<f64> {
        match self {
            Self::Cagr => record.cagr,
            Self::Rolling3y => record.rolling_3y,
            Self::Rolling5y => record.rolling_5y,
            Self::Volatility => record.volatility,
            Self::MaxDrawdown => record.max_drawdown,
            Self::DownsideDeviation => record.downside_deviation,
            Self::Sharpe => record.sharpe,
            Self::Sortino => record.sortino,
            Self::ConsistencyScore => record.consistency_score,
            Self::PositiveMonthsPct => record.positive_months_pct,
            Self::CurrentDrawdownPct => record.current_drawdown_pct,
            Self::Alpha => record.alpha,
            Self::InformationRatio => record.information_ratio,
        }
    }
}

/// One category's weight and range tables.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    /// Metric weights; conceptually sum to 100.
    pub weights: &'static [(ScoredMetric, f64)],
    /// Normalization ranges for the weighted metrics.
    pub ranges: &'static [(ScoredMetric, MetricRange)],
}

impl CategoryConfig {
    /// The configuration for a category.
    ///
    /// Income funds behave like debt funds; solution-oriented and
    /// uncategorized funds use the balanced hybrid tables.
    pub fn for_category(category: Category) -> &'static Self {
        match category {
            Category::Equity => &EQUITY,
            Category::Debt | Category::Income => &DEBT,
            Category::Hybrid | Category::SolutionOriented | Category::Other => &HYBRID,
        }
    }

    /// Range for a metric, if configured.
    pub fn range_for(&self, metric: ScoredMetric) -> Option<MetricRange> {
        self.ranges
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, r)| *r)
    }

    /// Sum of configured weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

use Direction::{HigherBetter, LowerBetter};
use ScoredMetric::*;

/// Equity funds: growth and risk-adjusted returns dominate.
static EQUITY: CategoryConfig = CategoryConfig {
    weights: &[
        // Returns (40%)
        (Cagr, 20.0),
        (Rolling3y, 10.0),
        (Rolling5y, 10.0),
        // Risk management (25%)
        (Volatility, 10.0),
        (MaxDrawdown, 10.0),
        (DownsideDeviation, 5.0),
        // Risk-adjusted returns (20%)
        (Sharpe, 12.0),
        (Sortino, 8.0),
        // Consistency (10%)
        (ConsistencyScore, 7.0),
        (PositiveMonthsPct, 3.0),
        // Benchmark (5%)
        (Alpha, 3.0),
        (InformationRatio, 2.0),
    ],
    ranges: &[
        (Cagr, range(-0.10, 0.30, HigherBetter)),
        (Rolling3y, range(-0.05, 0.25, HigherBetter)),
        (Rolling5y, range(0.00, 0.20, HigherBetter)),
        (Volatility, range(0.10, 0.40, LowerBetter)),
        (MaxDrawdown, range(-0.50, -0.10, HigherBetter)),
        (DownsideDeviation, range(0.08, 0.30, LowerBetter)),
        (Sharpe, range(-0.5, 3.0, HigherBetter)),
        (Sortino, range(-0.5, 3.0, HigherBetter)),
        (ConsistencyScore, range(40.0, 85.0, HigherBetter)),
        (PositiveMonthsPct, range(50.0, 75.0, HigherBetter)),
        (Alpha, range(-0.05, 0.10, HigherBetter)),
        (InformationRatio, range(-1.0, 2.0, HigherBetter)),
    ],
};

/// Debt funds: stability and consistency over raw returns; return ranges
/// sit on a far narrower band than equity.
static DEBT: CategoryConfig = CategoryConfig {
    weights: &[
        // Returns (25%)
        (Cagr, 15.0),
        (Rolling3y, 7.0),
        (Rolling5y, 3.0),
        // Risk management (15%)
        (Volatility, 5.0),
        (MaxDrawdown, 7.0),
        (DownsideDeviation, 3.0),
        // Risk-adjusted returns (30%)
        (Sharpe, 20.0),
        (Sortino, 10.0),
        // Consistency (20%)
        (ConsistencyScore, 12.0),
        (PositiveMonthsPct, 5.0),
        (CurrentDrawdownPct, 3.0),
        // Benchmark (10%)
        (Alpha, 5.0),
        (InformationRatio, 5.0),
    ],
    ranges: &[
        (Cagr, range(0.03, 0.12, HigherBetter)),
        (Rolling3y, range(0.03, 0.10, HigherBetter)),
        (Rolling5y, range(0.04, 0.09, HigherBetter)),
        (Volatility, range(0.01, 0.10, LowerBetter)),
        (MaxDrawdown, range(-0.15, -0.01, HigherBetter)),
        (DownsideDeviation, range(0.01, 0.08, LowerBetter)),
        (Sharpe, range(0.0, 4.0, HigherBetter)),
        (Sortino, range(0.0, 5.0, HigherBetter)),
        (ConsistencyScore, range(60.0, 95.0, HigherBetter)),
        (PositiveMonthsPct, range(65.0, 90.0, HigherBetter)),
        (CurrentDrawdownPct, range(-0.10, 0.00, HigherBetter)),
        (Alpha, range(-0.02, 0.05, HigherBetter)),
        (InformationRatio, range(-0.5, 3.0, HigherBetter)),
    ],
};

/// Hybrid funds: balanced weighting, also the fallback configuration.
static HYBRID: CategoryConfig = CategoryConfig {
    weights: &[
        // Returns (35%)
        (Cagr, 18.0),
        (Rolling3y, 10.0),
        (Rolling5y, 7.0),
        // Risk management (20%)
        (Volatility, 8.0),
        (MaxDrawdown, 8.0),
        (DownsideDeviation, 4.0),
        // Risk-adjusted returns (25%)
        (Sharpe, 15.0),
        (Sortino, 10.0),
        // Consistency (15%)
        (ConsistencyScore, 10.0),
        (PositiveMonthsPct, 3.0),
        (CurrentDrawdownPct, 2.0),
        // Benchmark (5%)
        (Alpha, 3.0),
        (InformationRatio, 2.0),
    ],
    ranges: &[
        (Cagr, range(0.00, 0.20, HigherBetter)),
        (Rolling3y, range(0.00, 0.18, HigherBetter)),
        (Rolling5y, range(0.02, 0.15, HigherBetter)),
        (Volatility, range(0.05, 0.25, LowerBetter)),
        (MaxDrawdown, range(-0.35, -0.05, HigherBetter)),
        (DownsideDeviation, range(0.04, 0.20, LowerBetter)),
        (Sharpe, range(0.0, 3.5, HigherBetter)),
        (Sortino, range(0.0, 4.0, HigherBetter)),
        (ConsistencyScore, range(50.0, 90.0, HigherBetter)),
        (PositiveMonthsPct, range(55.0, 80.0, HigherBetter)),
        (CurrentDrawdownPct, range(-0.20, 0.00, HigherBetter)),
        (Alpha, range(-0.03, 0.08, HigherBetter)),
        (InformationRatio, range(-0.8, 2.5, HigherBetter)),
    ],
};
