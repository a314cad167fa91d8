use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the data layer.
///
/// Row-level coercion failures are not errors; those rows are dropped
/// during cleaning.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A required column is absent, or its type cannot be read as text.
    #[error("required column '{column}' is missing or unreadable")]
    SchemaMismatch { column: String },

    /// No entry in the subset carries the requested name.
    #[error("no entry named '{0}'")]
    NameNotFound(String),
}

impl DataError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        DataError::SourceUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }
}
