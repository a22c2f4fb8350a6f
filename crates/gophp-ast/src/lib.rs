//! Exported-function discovery for Go sources
//!
//! This crate recovers the signatures of cgo-exported Go functions without a Go
//! toolchain by:
//! 1. Classifying each source line (export marker, comment, declaration, other)
//! 2. Matching marked declaration lines against a single-line `func` shape
//! 3. Resolving elided parameter types (`a, b int`) and normalizing return types
//!
//! It is deliberately not a Go parser: multi-line signatures, generics and
//! methods are outside what it recognises.
pub mod errors;
pub mod extractor;
pub mod model;
pub mod naming;

pub use errors::ExtractError;
pub use extractor::ExportExtractor;
pub use model::{Extraction, FunctionDescriptor, Param, SkipReason, SkippedLine};

use std::path::Path;
use tracing::info;

/// Extract every `//export`-marked function from a Go source file
pub fn extract_exports(source_path: &Path) -> Result<Extraction, ExtractError> {
    let start_time = std::time::Instant::now();

    let extraction = ExportExtractor::new(source_path)?.extract()?;

    info!(
        "Extracted {} exported functions ({} skipped lines) from {} in {:.2}ms",
        extraction.functions.len(),
        extraction.skipped.len(),
        source_path.display(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(extraction)
}
