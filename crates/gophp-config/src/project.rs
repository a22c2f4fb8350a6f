use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project configuration file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".gophp.yaml";

const DEFAULT_OUTPUT_DIR: &str = "dist";
const DEFAULT_LIB_DIR: &str = "dist/lib";

const CONFIG_HEADER: &str = "# Go-PHP FFI Service Configuration\n";

/// Project configuration from `.gophp.yaml`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Service name, used for the shared library file name
    pub service: String,

    /// Go source file holding the exported functions
    pub source: PathBuf,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where generated bindings and built libraries are placed
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory for the generated PHP service class
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Directory for the built shared library and its C header
    #[serde(default = "default_lib_dir")]
    pub lib_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_lib_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LIB_DIR)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            lib_dir: default_lib_dir(),
        }
    }
}

impl ProjectConfig {
    /// Create a configuration with default output directories
    pub fn new(service: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            source: source.into(),
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading project config from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `.gophp.yaml` from the given directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        Self::load(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from YAML text, filling in output defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Render the configuration as the YAML document written by `init`
    pub fn render(&self) -> Result<String, ConfigError> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("{}{}", CONFIG_HEADER, body))
    }

    /// Write the configuration to `.gophp.yaml` inside `dir`
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        fs::write(&path, self.render()?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
service: MyGo
source: MyGo.go
output:
  dir: build
  lib_dir: build/native
"#;
        let config = ProjectConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.service, "MyGo");
        assert_eq!(config.source, PathBuf::from("MyGo.go"));
        assert_eq!(config.output.dir, PathBuf::from("build"));
        assert_eq!(config.output.lib_dir, PathBuf::from("build/native"));
    }

    #[test]
    fn test_output_defaults() {
        let config = ProjectConfig::from_yaml_str("service: Demo\nsource: Demo.go\n").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.lib_dir, PathBuf::from("dist/lib"));

        let partial =
            ProjectConfig::from_yaml_str("service: Demo\nsource: Demo.go\noutput:\n  dir: out\n")
                .unwrap();
        assert_eq!(partial.output.dir, PathBuf::from("out"));
        assert_eq!(partial.output.lib_dir, PathBuf::from("dist/lib"));
    }

    #[test]
    fn test_missing_service_is_parse_error() {
        assert!(ProjectConfig::from_yaml_str("source: Demo.go\n").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::new("Demo", "Demo.go");

        let path = config.save_to_dir(dir.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Go-PHP FFI Service Configuration"));
        assert!(written.contains("lib_dir: dist/lib"));

        let loaded = ProjectConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ProjectConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
