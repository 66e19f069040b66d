//! Weighted trimmed mean.
//!
//! Trimming is done by cumulative weight, whole items only: an item leaves a
//! tail when that tail's trimmed weight plus the item's own weight stays
//! within `total * trim_fraction`. The walk stops at the first item that
//! would overshoot, so skewed weights can trim less than the nominal share.

use std::ops::Range;

use crate::clamp01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedValue {
    pub value: f64,
    pub weight: f64,
}

/// Survivor index range over `sorted` after trimming `trim_weight` from each tail.
///
/// `None` when the two tails together consume every item.
pub fn trim_window(sorted: &[WeightedValue], trim_weight: f64) -> Option<Range<usize>> {
    let n = sorted.len();

    let mut lo = 0;
    let mut acc_lo = 0.0;
    while lo < n && acc_lo + sorted[lo].weight <= trim_weight {
        acc_lo += sorted[lo].weight;
        lo += 1;
    }

    let mut trimmed_hi = 0;
    let mut acc_hi = 0.0;
    while trimmed_hi < n && acc_hi + sorted[n - 1 - trimmed_hi].weight <= trim_weight {
        acc_hi += sorted[n - 1 - trimmed_hi].weight;
        trimmed_hi += 1;
    }

    if lo + trimmed_hi >= n {
        return None;
    }
    Some(lo..n - trimmed_hi)
}

/// Weighted mean of `items` after trimming `trim_fraction` of total weight from
/// both tails. Returns 0 for empty input, non-positive total weight, or when
/// trimming leaves nothing.
pub fn weighted_trimmed_mean(items: &[WeightedValue], trim_fraction: f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<WeightedValue> = items
        .iter()
        .filter(|i| i.weight > 0.0)
        .map(|i| WeightedValue { value: clamp01(i.value), weight: i.weight })
        .collect();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));

    let total: f64 = sorted.iter().map(|i| i.weight).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let trim_weight = total * clamp01(trim_fraction);
    let Some(window) = trim_window(&sorted, trim_weight) else {
        return 0.0;
    };

    let (sum, wsum) = sorted[window]
        .iter()
        .fold((0.0, 0.0), |(s, w), i| (s + i.value * i.weight, w + i.weight));

    if wsum > 0.0 {
        sum / wsum
    } else {
        0.0
    }
}
