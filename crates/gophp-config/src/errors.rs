use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or writing `.gophp.yaml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur while locating the Go toolchain
#[derive(Error, Debug)]
pub enum ToolchainError {
    #[error("Go toolchain not found on PATH (install Go or set {env})")]
    GoNotFound { env: &'static str },

    #[error("Go toolchain override does not exist: {0}")]
    OverrideMissing(PathBuf),
}
