#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # navlens
//!
//! NAV-derived performance metrics and category-aware scoring for Indian
//! mutual funds.
//!
//! navlens is an umbrella crate that re-exports the navlens sub-crates
//! for convenience. The pipeline is two pure functions in sequence:
//!
//! 1. [`compute_metrics`] turns a fund's NAV history into a fixed-shape
//!    [`MetricsRecord`] of return, risk, consistency, recovery, and
//!    distribution statistics, with data-quality metadata.
//! 2. [`compute_score`] normalizes and weights those metrics against a
//!    per-category configuration, producing a 0-100 [`ScoreRecord`] with
//!    a discrete [`Tier`] and a contribution breakdown.
//!
//! Both stages are side-effect free and total: malformed input rows are
//! dropped, uncomputable metrics are `None`, and funds without enough
//! history come back tiered as `insufficient_data` rather than as errors.
//! Funds are independent of one another, so callers may fan the pipeline
//! out across a collection however they like.
//!
//! ## Quick start
//!
//! ```
//! use navlens::prelude::*;
//!
//! let rows = vec![
//!     NavRow::new("01-01-2020", 10.00),
//!     NavRow::new("02-01-2020", "10.04"),
//!     // ... one row per day, any supported date format
//! ];
//!
//! let metrics = compute_metrics(&rows);
//! let score = compute_score(&metrics, Category::from_label("Equity"));
//! assert_eq!(score.tier, Tier::InsufficientData); // two days of history
//! ```
//!
//! ## Crate organization
//!
//! - [`core`] - shared types ([`NavSeries`], [`Category`]), errors, stats
//! - [`metrics`] - the metrics engine
//! - [`score`] - the scoring engine and its category configuration tables

/// Version information for the navlens crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared types, error handling, and statistical helpers.
pub mod core {
    pub use navlens_core::*;
}

/// The NAV metrics engine.
pub mod metrics {
    pub use navlens_metrics::*;
}

/// The category-aware scoring engine.
pub mod score {
    pub use navlens_score::*;
}

// Re-export the primary API at the top level
pub use navlens_core::{Category, Date, NavPoint, NavRow, NavSeries, NavValue};
pub use navlens_core::{NavlensError, Result};
pub use navlens_metrics::{compute_metrics, compute_metrics_for_series};
pub use navlens_metrics::{DataQuality, MetricsRecord};
pub use navlens_score::{compute_score, compute_score_for_label};
pub use navlens_score::{Reliability, ScoreRecord, Tier};

/// Prelude module for convenient imports.
///
/// ```
/// use navlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{compute_metrics, compute_metrics_for_series};
    pub use crate::{compute_score, compute_score_for_label};
    pub use crate::{Category, DataQuality, MetricsRecord, NavRow, NavSeries, ScoreRecord, Tier};
    pub use crate::{NavlensError, Result};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_pipeline_through_reexports() {
        let rows = vec![NavRow::new("01-01-2020", 10.0), NavRow::new("02-01-2020", 10.1)];
        let metrics = compute_metrics(&rows);
        let score = compute_score(&metrics, Category::Other);
        assert_eq!(score.tier, Tier::InsufficientData);
    }
}
