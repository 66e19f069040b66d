use std::path::PathBuf;

use tracing::{info, warn};
use valscore_scoring::{score_contribution, ScoreReport, WeightLookup};

use crate::config::{Config, DEFAULT_EXTENSION};
use crate::error::Result;
use crate::fixtures::{discover_result_files, load_results};
use crate::weights::load_weights;

/// What to score and how. `None` fields fall back to the core defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreOptions {
    pub fixtures_dir: PathBuf,
    pub trim_fraction: Option<f64>,
    pub weights_path: Option<PathBuf>,
    pub extension: String,
}

impl ScoreOptions {
    pub fn new(fixtures_dir: impl Into<PathBuf>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.into(),
            trim_fraction: None,
            weights_path: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Explicit arguments win over the config file.
    pub fn resolve(
        fixtures_dir: impl Into<PathBuf>,
        trim_fraction: Option<f64>,
        weights_path: Option<PathBuf>,
        cfg: &Config,
    ) -> Self {
        Self {
            fixtures_dir: fixtures_dir.into(),
            trim_fraction: trim_fraction.or(cfg.scoring.trim_fraction),
            weights_path: weights_path.or_else(|| cfg.weights_path()),
            extension: cfg.fixtures.extension.clone(),
        }
    }
}

/// Discover, decode and score every result file under `opts.fixtures_dir`.
pub fn score_fixtures(opts: &ScoreOptions) -> Result<ScoreReport> {
    let files = discover_result_files(&opts.fixtures_dir, &opts.extension)?;
    if files.is_empty() {
        warn!(dir = %opts.fixtures_dir.display(), extension = %opts.extension, "no result files found");
    }
    let results = load_results(&files)?;

    let weights = opts.weights_path.as_deref().map(load_weights).transpose()?;
    let lookup = weights.as_ref().map(|w| w as &dyn WeightLookup);

    let report = score_contribution(&results, lookup, opts.trim_fraction);

    info!(
        dir = %opts.fixtures_dir.display(),
        results = results.len(),
        included = report.diagnostics.included,
        excluded = report.diagnostics.excluded,
        trim_fraction = report.diagnostics.trim_fraction,
        aggregate = report.aggregate,
        "scored contribution"
    );
    Ok(report)
}
