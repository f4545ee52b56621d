use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid string table {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("String table {0:?} must be a flat object of strings")]
    NotAnObject(PathBuf),
}
