//! Evidence completeness discount.
//!
//! A score backed by no measurements is halved; five or more distinct metrics
//! count as fully substantiated.

pub const COMPLETENESS_NO_METRICS: f64 = 0.5;
pub const COMPLETENESS_ONE_METRIC: f64 = 0.65;
pub const COMPLETENESS_TWO_METRICS: f64 = 0.8;
pub const COMPLETENESS_THREE_METRICS: f64 = 0.9;
pub const COMPLETENESS_FOUR_METRICS: f64 = 0.95;
pub const COMPLETENESS_FULL: f64 = 1.0;

/// Metric count at which evidence is considered complete.
pub const FULL_EVIDENCE_METRICS: usize = 5;

/// Step function of metric count; monotone non-decreasing, saturates at 1.0.
pub fn completeness_factor(metrics_count: usize) -> f64 {
    match metrics_count {
        n if n >= FULL_EVIDENCE_METRICS => COMPLETENESS_FULL,
        0 => COMPLETENESS_NO_METRICS,
        1 => COMPLETENESS_ONE_METRIC,
        2 => COMPLETENESS_TWO_METRICS,
        3 => COMPLETENESS_THREE_METRICS,
        _ => COMPLETENESS_FOUR_METRICS,
    }
}
