//! Safe-calculation wrapper applied uniformly to every metric.

/// Run a metric computation, collapsing any non-finite result to `None`.
///
/// Every metric in the engine is evaluated through this wrapper so a
/// degenerate value in one metric (NaN from a zero denominator, an
/// overflowed power) degrades that single field to `None` instead of
/// leaking into the serialized record.
pub(crate) fn guarded<F>(f: F) -> Option<f64>
where
    F: FnOnce() -> Option<f64>,
{
    f().filter(|v| v.is_finite())
}
