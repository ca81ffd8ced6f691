//! Score command implementation.

use crate::input;
use anyhow::Result;
use navlens_metrics::compute_metrics;
use navlens_score::{compute_score_for_label, ScoreRecord};

/// Compute metrics and the weighted score for one fund.
pub(crate) fn run(file: &str, category: &str, format: &str) -> Result<()> {
    let rows = input::load_nav_rows(file)?;
    let metrics = compute_metrics(&rows);
    let score = compute_score_for_label(&metrics, category);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&score)?),
        _ => print_text(&score),
    }
    Ok(())
}

pub(crate) fn print_text(score: &ScoreRecord) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("SCORE ({})", score.category);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Total:       {:.2}", score.total);
    println!("Tier:        {}", score.tier);
    println!(
        "Reliability: {:?} ({})",
        score.reliability, score.reliability_reason
    );
    println!(
        "Metrics:     {}/{} used, weight applied {:.1}{}",
        score.total_metrics_used,
        score.total_metrics_available,
        score.weight_applied,
        if score.adjusted { " (rescaled)" } else { "" }
    );

    if !score.normalized_metrics.is_empty() {
        println!();
        println!(
            "{:<22} {:>10} {:>10} {:>8}",
            "Metric", "Raw", "Normalized", "Weight"
        );
        println!("{}", "─".repeat(54));
        for (name, m) in &score.normalized_metrics {
            println!(
                "{name:<22} {:>10.4} {:>10.2} {:>8.1}",
                m.raw, m.normalized, m.weight
            );
        }
    }

    if !score.missing_metrics.is_empty() {
        println!();
        println!("Missing: {}", score.missing_metrics.join(", "));
    }
}
