//! Batch command implementation: score every fund in a combined file.

use crate::input;
use anyhow::{Context, Result};
use navlens_metrics::{compute_metrics, MetricsRecord};
use navlens_score::{compute_score_for_label, ScoreRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;

/// One fund's scored output.
#[derive(Debug, Serialize)]
struct ScoredFund {
    category: String,
    metrics: MetricsRecord,
    score: ScoreRecord,
}

/// Score every fund in the batch file and write the combined output.
///
/// Funds are independent; each is processed on its own and a degenerate
/// fund degrades to an insufficient-data record rather than aborting the
/// run.
pub(crate) fn run(file: &str, out: &str) -> Result<()> {
    let funds = input::load_batch(file)?;
    println!("Scoring {} funds from {file}...", funds.len());

    let mut scored: BTreeMap<String, ScoredFund> = BTreeMap::new();
    let mut by_tier: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();

    for (name, fund) in funds {
        let metrics = compute_metrics(&fund.nav);
        let score = compute_score_for_label(&metrics, &fund.category);

        *by_tier.entry(score.tier.to_string()).or_default() += 1;
        *by_category.entry(fund.category.clone()).or_default() += 1;

        scored.insert(
            name,
            ScoredFund {
                category: fund.category,
                metrics,
                score,
            },
        );
    }

    let json = serde_json::to_string_pretty(&scored)?;
    fs::write(out, json).with_context(|| format!("writing scored output to {out}"))?;

    println!();
    println!("By category:");
    for (category, count) in &by_category {
        println!("  {category}: {count}");
    }
    println!("By tier:");
    for (tier, count) in &by_tier {
        println!("  {tier}: {count}");
    }
    println!();
    println!("Wrote {} scored funds to {out}", scored.len());
    Ok(())
}
