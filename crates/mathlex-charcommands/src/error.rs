use std::path::PathBuf;

use mathlex_unicode::InvalidCodePoint;
use thiserror::Error;

/// A table line that does not have the record layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Failure to load a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while turning records into rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("line {line}: {source}")]
    InvalidCodePoint {
        line: usize,
        #[source]
        source: InvalidCodePoint,
    },
}
