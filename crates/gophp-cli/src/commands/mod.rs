pub mod build;
pub mod generate;
pub mod init;
pub mod make;

use crate::errors::CliError;
use clap::Args;
use gophp_ast::naming::base_name;
use gophp_config::{OutputConfig, ProjectConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional Go source argument shared by `generate`, `build` and `make`
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Go source file (defaults to `source` from .gophp.yaml)
    pub source: Option<PathBuf>,
}

/// Source file and output locations for one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub source: PathBuf,
    /// Service name used for the shared library file
    pub service: String,
    pub output_dir: PathBuf,
    pub lib_dir: PathBuf,
}

impl Project {
    /// Resolve the project from an explicit source or from `.gophp.yaml`.
    ///
    /// With an explicit source the service name is the file stem and the
    /// config only contributes output directories (when it loads at all).
    /// Relative paths are taken from `project_dir`.
    pub fn resolve(source: Option<&Path>, project_dir: &Path) -> Result<Self, CliError> {
        let config = ProjectConfig::load_from_dir(project_dir);

        let (source, service, output) = match (source, config) {
            (Some(source), config) => {
                let output = match config {
                    Ok(cfg) => cfg.output,
                    Err(e) => {
                        debug!("Using default output directories: {}", e);
                        OutputConfig::default()
                    }
                };
                let service = base_name(source)
                    .ok_or_else(|| CliError::InvalidSource(source.to_path_buf()))?;
                (source.to_path_buf(), service, output)
            }
            (None, Ok(cfg)) => (cfg.source, cfg.service, cfg.output),
            (None, Err(e)) => return Err(CliError::NoSource(e)),
        };

        Ok(Self {
            source: project_dir.join(source),
            service,
            output_dir: project_dir.join(output.dir),
            lib_dir: project_dir.join(output.lib_dir),
        })
    }

    /// Base name of the source file, which names the PHP class and namespace
    pub fn source_base_name(&self) -> Result<String, CliError> {
        base_name(&self.source).ok_or_else(|| CliError::InvalidSource(self.source.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_argument_without_config() {
        let dir = TempDir::new().unwrap();
        let project = Project::resolve(Some(Path::new("calc.go")), dir.path()).unwrap();

        assert_eq!(project.source, dir.path().join("calc.go"));
        assert_eq!(project.service, "calc");
        assert_eq!(project.output_dir, dir.path().join("dist"));
        assert_eq!(project.lib_dir, dir.path().join("dist/lib"));
    }

    #[test]
    fn test_resolve_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gophp.yaml"),
            "service: MyGo\nsource: src/MyGo.go\noutput:\n  dir: out\n  lib_dir: out/native\n",
        )
        .unwrap();

        let project = Project::resolve(None, dir.path()).unwrap();
        assert_eq!(project.source, dir.path().join("src/MyGo.go"));
        assert_eq!(project.service, "MyGo");
        assert_eq!(project.output_dir, dir.path().join("out"));
        assert_eq!(project.lib_dir, dir.path().join("out/native"));
        assert_eq!(project.source_base_name().unwrap(), "MyGo");
    }

    #[test]
    fn test_argument_overrides_config_source() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".gophp.yaml"),
            "service: MyGo\nsource: MyGo.go\noutput:\n  dir: out\n",
        )
        .unwrap();

        let project = Project::resolve(Some(Path::new("other.go")), dir.path()).unwrap();
        assert_eq!(project.service, "other");
        assert_eq!(project.output_dir, dir.path().join("out"));
    }

    #[test]
    fn test_missing_source_and_config() {
        let dir = TempDir::new().unwrap();
        let err = Project::resolve(None, dir.path()).unwrap_err();
        assert!(matches!(err, CliError::NoSource(_)));
    }
}
