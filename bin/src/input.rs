//! Input file loading for the CLI.

use anyhow::{Context, Result};
use navlens_core::NavRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One fund's entry in a combined batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FundInput {
    /// Category label, matched against the fixed set with a silent
    /// fallback to Other.
    #[serde(default = "default_category")]
    pub category: String,
    /// Raw NAV rows in any supported format.
    pub nav: Vec<NavRow>,
}

fn default_category() -> String {
    "Other".to_string()
}

/// Load a single fund's NAV rows from a JSON array file.
pub(crate) fn load_nav_rows(path: &str) -> Result<Vec<NavRow>> {
    let raw = fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading NAV file {path}"))?;
    let rows: Vec<NavRow> =
        serde_json::from_str(&raw).with_context(|| format!("parsing NAV rows from {path}"))?;
    Ok(rows)
}

/// Load a combined batch file: fund name -> {category, nav}.
pub(crate) fn load_batch(path: &str) -> Result<BTreeMap<String, FundInput>> {
    let raw = fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading batch file {path}"))?;
    let funds: BTreeMap<String, FundInput> =
        serde_json::from_str(&raw).with_context(|| format!("parsing batch file {path}"))?;
    Ok(funds)
}
