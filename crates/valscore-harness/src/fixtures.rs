use std::path::{Path, PathBuf};

use tracing::debug;
use valscore_core::ValidationResult;
use walkdir::WalkDir;

use crate::error::{HarnessError, Result};

/// Recursively collect regular files under `dir` whose extension is `extension`,
/// sorted by path so detail order is reproducible. Symlinks are not followed.
pub fn discover_result_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(HarnessError::MissingFixtures(dir.to_path_buf()));
    }
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|source| HarnessError::Walk {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            out.push(entry.into_path());
        }
    }
    out.sort();
    debug!(dir = %dir.display(), count = out.len(), "discovered result files");
    Ok(out)
}

pub fn load_result(path: &Path) -> Result<ValidationResult> {
    let s = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    let result: ValidationResult = serde_json::from_str(&s).map_err(|source| HarnessError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        validator = %result.provenance.validator_id,
        status = %result.status,
        "loaded validation result"
    );
    Ok(result)
}

pub fn load_results(paths: &[PathBuf]) -> Result<Vec<ValidationResult>> {
    paths.iter().map(|p| load_result(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT: &str = r#"{
        "runId": "sim-1",
        "status": "pass",
        "score": 0.9,
        "evidence": { "metrics": { "a": 1 } },
        "provenance": { "validatorId": "v1", "validatorVersion": "1.0.0", "executedAt": "2025-01-02T00:00:00Z" }
    }"#;

    #[test]
    fn discovery_is_recursive_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("b.json"), RESULT).unwrap();
        std::fs::write(dir.path().join("a.json"), RESULT).unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();
        std::fs::write(nested.join("c.json"), RESULT).unwrap();

        let files = discover_result_files(dir.path(), "json").unwrap();
        let rel: Vec<PathBuf> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("nested/deeper/c.json"),
            ]
        );
    }

    #[test]
    fn custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), RESULT).unwrap();
        std::fs::write(dir.path().join("a.result"), RESULT).unwrap();
        let files = discover_result_files(dir.path(), "result").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.result"));
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_result_files(&dir.path().join("absent"), "json").unwrap_err();
        assert!(matches!(err, HarnessError::MissingFixtures(_)));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_does_not_break_discovery() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), RESULT).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let files = discover_result_files(dir.path(), "json").unwrap();
        assert_eq!(files, vec![dir.path().join("a.json")]);

        let report = crate::score_fixtures(&crate::ScoreOptions::new(dir.path())).unwrap();
        assert_eq!(report.details.len(), 1);
        assert!((report.aggregate - 0.65 * 0.9).abs() < 1e-12);
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        match load_result(&bad).unwrap_err() {
            HarnessError::Json { path, .. } => assert_eq!(path, bad),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn loads_results_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        std::fs::write(&a, RESULT).unwrap();
        std::fs::write(&b, RESULT.replace("\"v1\"", "\"v2\"")).unwrap();
        let results = load_results(&[b, a]).unwrap();
        assert_eq!(results[0].validator_id(), "v2");
        assert_eq!(results[1].validator_id(), "v1");
    }
}
