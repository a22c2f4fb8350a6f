use crate::errors::EmitError;
use crate::php::{render_service, ServiceNames};
use gophp_ast::FunctionDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render the service class for `base_name` and write it into `output_dir`.
///
/// The directory is created when missing and an existing file with the same
/// name is overwritten. Returns the path of the written file.
pub fn write_service(
    functions: &[FunctionDescriptor],
    base_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, EmitError> {
    if base_name.trim().is_empty() {
        return Err(EmitError::InvalidBaseName(base_name.to_string()));
    }

    let names = ServiceNames::from_base_name(base_name);

    fs::create_dir_all(output_dir).map_err(|source| EmitError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let output_path = output_dir.join(names.file_name());
    let content = render_service(functions, &names);

    debug!(
        "Writing {} ({} bytes) to {}",
        names.class_name(),
        content.len(),
        output_path.display()
    );

    fs::write(&output_path, content).map_err(|source| EmitError::Write {
        path: output_path.clone(),
        source,
    })?;

    info!(
        "Generated {} with {} methods",
        output_path.display(),
        functions.len()
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gophp_ast::Param;
    use tempfile::TempDir;

    fn add() -> FunctionDescriptor {
        FunctionDescriptor {
            name: "Add".to_string(),
            comment: "adds two numbers".to_string(),
            params: vec![Param::new("a", "int"), Param::new("b", "int")],
            return_type: "int".to_string(),
            line: 7,
        }
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("dist").join("src");

        let path = write_service(&[add()], "mygo", &output_dir).unwrap();
        assert_eq!(path, output_dir.join("MygoService.php"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("namespace app\\mygo\\service;"));
        assert!(content.contains("public function Add(int $a, int $b): int {"));
    }

    #[test]
    fn test_write_is_idempotent() {
        let dir = TempDir::new().unwrap();

        let first = write_service(&[add()], "mygo", dir.path()).unwrap();
        let first_content = fs::read(&first).unwrap();
        let second = write_service(&[add()], "mygo", dir.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_content, fs::read(&second).unwrap());
    }

    #[test]
    fn test_write_rejects_empty_base_name() {
        let dir = TempDir::new().unwrap();
        let err = write_service(&[], "", dir.path()).unwrap_err();
        assert!(matches!(err, EmitError::InvalidBaseName(_)));
    }

    #[test]
    fn test_unwritable_output_dir() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_service(&[add()], "mygo", &blocker.join("out")).unwrap_err();
        assert!(matches!(err, EmitError::CreateDir { .. }));
    }
}
