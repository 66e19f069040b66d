use valscore_core::ValidationResult;

use crate::{clamp01, completeness_factor, raw_weight, ScoreDetail, WeightLookup};

/// Score assumed for a passing result that reports none: the neutral midpoint.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Turn one validation result into its bounded contribution.
///
/// Weight is always resolved, even for fail/error, so details stay comparable.
/// Non-pass results get `base = completeness = final = 0` whatever score they report.
pub fn normalize(result: &ValidationResult, weights: Option<&dyn WeightLookup>) -> ScoreDetail {
    let validator_id = result.validator_id().to_string();
    let validator_version = result.provenance.validator_version.clone();
    let weight = clamp01(raw_weight(weights, &validator_id));

    if !result.status.is_pass() {
        return ScoreDetail {
            validator_id,
            validator_version,
            status: result.status,
            base: 0.0,
            completeness: 0.0,
            weight,
            final_score: 0.0,
        };
    }

    let base = clamp01(result.score.unwrap_or(NEUTRAL_SCORE));
    let completeness = completeness_factor(result.evidence.metrics_count());
    let final_score = clamp01(base * completeness);

    ScoreDetail {
        validator_id,
        validator_version,
        status: result.status,
        base,
        completeness,
        weight,
        final_score,
    }
}
