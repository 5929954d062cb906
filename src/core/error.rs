//! Error type shared by every stage of the enrollment pipeline.

use std::path::PathBuf;

/// Errors raised while loading, consolidating, or querying enrollment data.
#[derive(Debug, thiserror::Error)]
pub enum EnrollError {
    /// A row of a period source could not be turned into a course record.
    #[error("{source_name}:{line}: {reason}")]
    Parse {
        /// Name of the period source (file name or label)
        source_name: String,
        /// 1-based line number within the source
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// The pipeline cannot run with the given setup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An aggregate or search request could not be answered.
    #[error("Query error: {0}")]
    Query(String),

    /// Any other failure reported by SQLite.
    #[error(transparent)]
    Store(#[from] rusqlite::Error),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl EnrollError {
    pub(crate) fn parse(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnrollError>;
