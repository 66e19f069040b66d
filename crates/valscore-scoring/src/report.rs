use serde::{Deserialize, Serialize};
use valscore_core::ValidationStatus;

/// Algorithm tag carried by every report so later versions can coexist.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoringMethod {
    #[serde(rename = "trimmed_mean_weighted_v1")]
    TrimmedMeanWeightedV1,
}

impl ScoringMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoringMethod::TrimmedMeanWeightedV1 => "trimmed_mean_weighted_v1",
        }
    }
}

/// Normalized view of one validation result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetail {
    pub validator_id: String,
    pub validator_version: String,
    pub status: ValidationStatus,
    pub base: f64,
    pub completeness: f64,
    pub weight: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
}

impl ScoreDetail {
    /// Whether this detail feeds the aggregate: pass status and positive weight.
    pub fn is_aggregated(&self) -> bool {
        self.status.is_pass() && self.weight > 0.0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub included: usize,
    pub excluded: usize,
    /// Effective trim fraction after clamping.
    pub trim_fraction: f64,
    /// Sum of included weights before trimming.
    pub total_weight: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreReport {
    pub method: ScoringMethod,
    pub aggregate: f64,
    pub details: Vec<ScoreDetail>,
    pub diagnostics: Diagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_wire_names() {
        let report = ScoreReport {
            method: ScoringMethod::TrimmedMeanWeightedV1,
            aggregate: 0.5,
            details: vec![ScoreDetail {
                validator_id: "v1".into(),
                validator_version: "1.0.0".into(),
                status: ValidationStatus::Pass,
                base: 1.0,
                completeness: 0.5,
                weight: 1.0,
                final_score: 0.5,
            }],
            diagnostics: Diagnostics { included: 1, excluded: 0, trim_fraction: 0.1, total_weight: 1.0 },
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["method"], "trimmed_mean_weighted_v1");
        assert_eq!(v["details"][0]["validatorId"], "v1");
        assert_eq!(v["details"][0]["final"], 0.5);
        assert_eq!(v["details"][0]["status"], "pass");
        assert_eq!(v["diagnostics"]["trimFraction"], 0.1);
        assert_eq!(v["diagnostics"]["totalWeight"], 1.0);
        assert_eq!(ScoringMethod::TrimmedMeanWeightedV1.as_str(), v["method"]);
    }

    #[test]
    fn zero_weight_detail_is_not_aggregated() {
        let d = ScoreDetail {
            validator_id: "v".into(),
            validator_version: "1".into(),
            status: ValidationStatus::Pass,
            base: 0.9,
            completeness: 1.0,
            weight: 0.0,
            final_score: 0.9,
        };
        assert!(!d.is_aggregated());
        let failed = ScoreDetail { status: ValidationStatus::Fail, weight: 1.0, ..d };
        assert!(!failed.is_aggregated());
    }
}
