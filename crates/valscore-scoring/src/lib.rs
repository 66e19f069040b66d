pub mod aggregate;
pub mod completeness;
pub mod normalize;
pub mod numeric;
pub mod report;
pub mod weights;

pub use aggregate::*;
pub use completeness::*;
pub use normalize::*;
pub use numeric::*;
pub use report::*;
pub use weights::*;

use valscore_core::ValidationResult;

/// Trim fraction applied when the caller does not supply one.
pub const DEFAULT_TRIM_FRACTION: f64 = 0.1;

/// Score one contribution from its validator results.
///
/// - every result becomes one `ScoreDetail`, in input order
/// - fail/error results contribute `final = 0` and are never aggregated
/// - the aggregate is a weighted trimmed mean over pass results with weight > 0
///
/// Total over any input: out-of-range numbers are clamped, empty input yields 0.
pub fn score_contribution(
    results: &[ValidationResult],
    weights: Option<&dyn WeightLookup>,
    trim_fraction: Option<f64>,
) -> ScoreReport {
    let trim_fraction = clamp01(trim_fraction.unwrap_or(DEFAULT_TRIM_FRACTION));

    let details: Vec<ScoreDetail> = results.iter().map(|r| normalize(r, weights)).collect();

    let items: Vec<WeightedValue> = details
        .iter()
        .filter(|d| d.is_aggregated())
        .map(|d| WeightedValue { value: d.final_score, weight: d.weight })
        .collect();

    let aggregate = weighted_trimmed_mean(&items, trim_fraction);
    let total_weight: f64 = items.iter().map(|i| i.weight).sum();

    ScoreReport {
        method: ScoringMethod::TrimmedMeanWeightedV1,
        aggregate,
        diagnostics: Diagnostics {
            included: items.len(),
            excluded: results.len() - items.len(),
            trim_fraction,
            total_weight,
        },
        details,
    }
}
