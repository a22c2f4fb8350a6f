//! Configuration for gophpffi projects
//!
//! - `project`: the `.gophp.yaml` file written by `init` and read by
//!   `generate`/`build`
//! - `toolchain`: locating the Go toolchain and naming the shared library it
//!   produces for the host platform

pub mod errors;
pub mod project;
pub mod toolchain;

pub use errors::{ConfigError, ToolchainError};
pub use project::{OutputConfig, ProjectConfig, CONFIG_FILE_NAME};
pub use toolchain::GoTarget;
