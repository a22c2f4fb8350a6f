//! Go toolchain resolution
//!
//! Locates the `go` executable and derives the platform-specific names the
//! c-shared build produces:
//!
//! - **Linux**: `<service>-linux-amd64.so`
//! - **macOS**: `<service>-darwin-arm64.dylib`
//! - **Windows**: `<service>-windows-amd64.dll`
//!
//! `go build -buildmode=c-shared` also writes a C header next to the library,
//! with the extension replaced by `h`.

use crate::errors::ToolchainError;
use std::path::{Path, PathBuf};
use tracing::debug;
use which::which;

/// Environment variable pointing at an explicit `go` executable
pub const GO_EXE_ENV: &str = "GOPHP_GO";

#[cfg(windows)]
const GO_EXE_NAME: &str = "go.exe";
#[cfg(not(windows))]
const GO_EXE_NAME: &str = "go";

/// Target platform in Go's `GOOS`/`GOARCH` spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTarget {
    pub goos: String,
    pub goarch: String,
}

impl GoTarget {
    /// Target matching the platform this binary runs on
    pub fn host() -> Self {
        Self::from_rust_consts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Translate Rust's `std::env::consts` names into Go's naming
    pub fn from_rust_consts(os: &str, arch: &str) -> Self {
        let goos = match os {
            "macos" => "darwin",
            other => other,
        };
        let goarch = match arch {
            "x86_64" => "amd64",
            "aarch64" => "arm64",
            "x86" => "386",
            "powerpc64" => "ppc64",
            "loongarch64" => "loong64",
            other => other,
        };
        Self {
            goos: goos.to_string(),
            goarch: goarch.to_string(),
        }
    }

    /// Shared library extension for this target's OS
    pub fn shared_lib_extension(&self) -> &'static str {
        match self.goos.as_str() {
            "windows" => "dll",
            "darwin" => "dylib",
            _ => "so",
        }
    }

    /// File name of the shared library built for `service`
    pub fn library_file_name(&self, service: &str) -> String {
        format!(
            "{}-{}-{}.{}",
            service,
            self.goos,
            self.goarch,
            self.shared_lib_extension()
        )
    }
}

/// Path of the C header `go build` writes next to a c-shared library
pub fn header_path(library: &Path) -> PathBuf {
    library.with_extension("h")
}

/// Arguments for `go build -buildmode=c-shared -o <output> <source>`
pub fn c_shared_build_args(output: &Path, source: &Path) -> Vec<String> {
    vec![
        "build".to_string(),
        "-buildmode=c-shared".to_string(),
        "-o".to_string(),
        output.to_string_lossy().to_string(),
        source.to_string_lossy().to_string(),
    ]
}

/// Locate the `go` executable
///
/// `$GOPHP_GO` takes precedence over a PATH lookup.
pub fn resolve_go_exe() -> Result<PathBuf, ToolchainError> {
    if let Some(explicit) = std::env::var_os(GO_EXE_ENV) {
        let path = PathBuf::from(explicit);
        debug!("Using Go toolchain from {}: {}", GO_EXE_ENV, path.display());
        if path.is_file() {
            return Ok(path);
        }
        return Err(ToolchainError::OverrideMissing(path));
    }

    match which(GO_EXE_NAME) {
        Ok(path) => {
            debug!("Found Go toolchain at {}", path.display());
            Ok(path)
        }
        Err(_) => Err(ToolchainError::GoNotFound { env: GO_EXE_ENV }),
    }
}
