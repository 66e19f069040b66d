use std::collections::{BTreeMap, HashMap};

/// Per-validator influence lookup.
///
/// `None` means the validator is unknown to the lookup; the normalizer then
/// weighs it 1. Returned values are clamped by the caller, not here.
pub trait WeightLookup: Send + Sync {
    fn weight_of(&self, validator_id: &str) -> Option<f64>;
}

/// Default weight for validators absent from a lookup, or when no lookup is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Same weight for every validator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformWeight(pub f64);

impl Default for UniformWeight {
    fn default() -> Self {
        Self(DEFAULT_WEIGHT)
    }
}

impl WeightLookup for UniformWeight {
    fn weight_of(&self, _validator_id: &str) -> Option<f64> {
        Some(self.0)
    }
}

impl WeightLookup for HashMap<String, f64> {
    fn weight_of(&self, validator_id: &str) -> Option<f64> {
        self.get(validator_id).copied()
    }
}

impl WeightLookup for BTreeMap<String, f64> {
    fn weight_of(&self, validator_id: &str) -> Option<f64> {
        self.get(validator_id).copied()
    }
}

/// Resolve a raw (unclamped) weight, falling back to `DEFAULT_WEIGHT`.
pub fn raw_weight(weights: Option<&dyn WeightLookup>, validator_id: &str) -> f64 {
    weights
        .and_then(|w| w.weight_of(validator_id))
        .unwrap_or(DEFAULT_WEIGHT)
}
