use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing the generated service class
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot derive a service name from '{0}'")]
    InvalidBaseName(String),
}
