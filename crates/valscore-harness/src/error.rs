use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("fixtures directory not found: {}", .0.display())]
    MissingFixtures(PathBuf),
    #[error("read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("walk {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("parse validation result {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse weights {}: expected an object of validatorId -> number", .path.display())]
    Weights {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse config {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("serialize config")]
    ConfigEncode(#[from] toml::ser::Error),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
