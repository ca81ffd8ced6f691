#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Category-aware fund scoring engine.
//!
//! Consumes a [`MetricsRecord`](navlens_metrics::MetricsRecord) and a fund
//! [`Category`](navlens_core::Category), normalizes each configured metric
//! into 0-100 against category-specific ranges, applies the category's
//! weights, and produces a [`ScoreRecord`] with a total, a [`Tier`], and a
//! full contribution breakdown.
//!
//! Funds without a reliable history, or where too few of the configured
//! metrics could be computed, receive the dedicated `insufficient_data`
//! tier instead of a misleading number.
//!
//! # Example
//!
//! ```
//! use navlens_core::Category;
//! use navlens_metrics::MetricsRecord;
//! use navlens_score::compute_score;
//!
//! let metrics = MetricsRecord::empty("insufficient_nav_data");
//! let score = compute_score(&metrics, Category::Equity);
//! assert_eq!(score.total, 0.0);
//! assert!(!score.has_sufficient_data);
//! ```

pub mod config;
pub mod engine;
pub mod tier;

pub use config::{CategoryConfig, Direction, MetricRange, ScoredMetric};
pub use engine::{
    compute_score, compute_score_for_label, normalize_metric, NormalizedMetric, Reliability,
    ScoreRecord, MIN_WEIGHT_APPLIED,
};
pub use tier::Tier;
