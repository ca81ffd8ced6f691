//! Metrics command implementation.

use crate::input;
use anyhow::Result;
use navlens_metrics::{compute_metrics, MetricsRecord};

/// Compute and print the metrics record for one fund.
pub(crate) fn run(file: &str, format: &str) -> Result<()> {
    let rows = input::load_nav_rows(file)?;
    let record = compute_metrics(&rows);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&record)?),
        _ => print_text(&record),
    }
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

pub(crate) fn print_text(record: &MetricsRecord) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("METRICS");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Data quality: {} ({})",
        record.data_quality, record.data_quality_reason
    );
    println!(
        "Reliable:     {}",
        if record.is_statistically_reliable { "yes" } else { "no" }
    );
    println!();
    println!("{:<28} {:>12}", "Metric", "Value");
    println!("{}", "─".repeat(41));
    for (name, value) in record.numeric_fields() {
        println!("{name:<28} {:>12}", fmt_opt(value));
    }
}
