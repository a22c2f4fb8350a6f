//! PHP binding generation for exported Go functions
//!
//! Turns the descriptors produced by `gophp-ast` into a PHP service class that
//! wraps the Go shared library through PHP's FFI extension.
pub mod errors;
pub mod php;
pub mod type_map;
pub mod writer;

pub use errors::EmitError;
pub use php::{render_service, ServiceNames};
pub use type_map::{doc_type, hint_type, PhpType};
pub use writer::write_service;
