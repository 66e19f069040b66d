use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ids::*, model::*};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Evidence {
    /// Metric name -> value. Only the number of keys feeds scoring.
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Evidence {
    pub fn metrics_count(&self) -> usize {
        self.metrics.len()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub validator_id: ValidatorId,
    pub validator_version: String,
    /// ISO-8601 timestamp as reported; recorded, never interpreted.
    pub executed_at: String,
}

/// One report emitted by one validator execution against a contribution run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub run_id: RunId,
    pub status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub evidence: Evidence,
    pub provenance: Provenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn validator_id(&self) -> &str {
        self.provenance.validator_id.as_str()
    }
}
