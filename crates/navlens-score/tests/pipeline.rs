//! Metrics-to-score pipeline tests.

use chrono::Duration;
use navlens_core::{types::parse_date, NavRow};
use navlens_metrics::compute_metrics;
use navlens_score::{compute_score_for_label, Tier};

/// 400 rows spanning exactly 3.5 years, rising smoothly from 10 to 20.
fn monotone_fund_rows() -> Vec<NavRow> {
    let start = parse_date("2015-01-01").unwrap();
    let span_days = (3.5 * 365.25) as i64;
    (0..400)
        .map(|i| {
            let offset = i * span_days / 399;
            let frac = offset as f64 / span_days as f64;
            let date = start + Duration::days(offset);
            NavRow::new(
                date.format("%Y-%m-%d").to_string(),
                10.0 * 2.0f64.powf(frac),
            )
        })
        .collect()
}

#[test]
fn monotone_fund_scores_as_equity() {
    let metrics = compute_metrics(&monotone_fund_rows());
    assert!(metrics.is_statistically_reliable);

    let score = compute_score_for_label(&metrics, "Equity");
    assert!(score.total > 0.0, "total {}", score.total);
    assert_ne!(score.tier, Tier::InsufficientData);
    assert!(score.has_sufficient_data);
}

#[test]
fn unknown_category_label_falls_back() {
    let metrics = compute_metrics(&monotone_fund_rows());
    let scored = compute_score_for_label(&metrics, "Foo");
    let hybrid = compute_score_for_label(&metrics, "Hybrid");
    assert_eq!(scored.total, hybrid.total);
    assert_eq!(scored.tier, hybrid.tier);
}

#[test]
fn short_history_flows_through_to_insufficient_tier() {
    let start = parse_date("2024-01-01").unwrap();
    let rows: Vec<NavRow> = (0..120)
        .map(|i| {
            let date = start + Duration::days(i);
            NavRow::new(date.format("%Y-%m-%d").to_string(), 10.0 + i as f64 * 0.01)
        })
        .collect();
    let metrics = compute_metrics(&rows);
    assert!(!metrics.is_statistically_reliable);

    for label in ["Equity", "Debt", "Hybrid", "Income", "Foo"] {
        let score = compute_score_for_label(&metrics, label);
        assert_eq!(score.total, 0.0);
        assert_eq!(score.tier, Tier::InsufficientData);
    }
}
