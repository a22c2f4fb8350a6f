//! gophpffi library - expose modules for testing
//!
//! The binary in `main.rs` is a thin clap front-end over these modules.

pub mod commands;
pub mod common;
pub mod errors;

pub use common::GlobalOpts;
pub use gophp_logger as logger;
