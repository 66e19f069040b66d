use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use valscore_scoring::WeightLookup;

use crate::error::{HarnessError, Result};

/// Validator id -> weight, as read from a JSON object.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ValidatorWeights(pub BTreeMap<String, f64>);

impl WeightLookup for ValidatorWeights {
    fn weight_of(&self, validator_id: &str) -> Option<f64> {
        self.0.get(validator_id).copied()
    }
}

pub fn load_weights(path: &Path) -> Result<ValidatorWeights> {
    let s = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    let weights: ValidatorWeights = serde_json::from_str(&s).map_err(|source| HarnessError::Weights {
        path: path.to_path_buf(),
        source,
    })?;
    for (id, w) in &weights.0 {
        if !(0.0..=1.0).contains(w) {
            warn!(validator = %id, weight = *w, "weight outside [0,1]; it will be clamped");
        }
    }
    Ok(weights)
}
