#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and statistical helpers for the navlens analytics engine.
//!
//! This crate provides the foundational pieces shared by the metrics and
//! scoring engines: the validated [`NavSeries`] input type, the fund
//! [`Category`] enumeration, the [`NavlensError`] error type, and the
//! NaN-tolerant statistical helpers in [`stats`].

/// The version of the navlens-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{NavlensError, Result};
pub use types::{Category, Date, NavPoint, NavRow, NavSeries, NavValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
