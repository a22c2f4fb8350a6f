//! Error types for the gophpffi commands
//!
//! Library crates report their own failures; this enum adds the conditions
//! that only exist at the command level and wraps the rest.

use gophp_ast::ExtractError;
use gophp_codegen::EmitError;
use gophp_config::{ConfigError, ToolchainError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No source file given and no usable .gophp.yaml found: {0}")]
    NoSource(#[source] ConfigError),

    #[error("Cannot derive a service name from {0}")]
    InvalidSource(PathBuf),

    #[error("go build exited with {}", describe_exit(.exit_code))]
    BuildFailed { exit_code: Option<i32> },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
