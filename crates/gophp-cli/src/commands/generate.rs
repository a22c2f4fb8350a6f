use super::{Project, SourceArgs};
use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;
use colored::*;
use gophp_ast::{extract_exports, Extraction};
use gophp_codegen::write_service;
use std::fs;
use std::path::PathBuf;

/// Result of one `generate` run
#[derive(Debug)]
pub struct GenerateOutcome {
    pub extraction: Extraction,
    pub output_path: PathBuf,
}

/// Extract the exported functions and write the PHP service class.
///
/// Nothing is written unless extraction succeeds for the whole file.
pub fn generate(project: &Project) -> Result<GenerateOutcome, CliError> {
    let base_name = project.source_base_name()?;

    logger::step(&format!("Extracting exports from {}", project.source.display()));
    let extraction = extract_exports(&project.source)?;

    for skipped in &extraction.skipped {
        logger::debug(&format!(
            "Skipped line {} ({}): {}",
            skipped.line, skipped.reason, skipped.text
        ));
    }

    fs::create_dir_all(&project.lib_dir).map_err(|source| CliError::CreateDir {
        path: project.lib_dir.clone(),
        source,
    })?;

    logger::step(&format!("Writing bindings to {}", project.output_dir.display()));
    let output_path = write_service(&extraction.functions, &base_name, &project.output_dir)?;

    Ok(GenerateOutcome {
        extraction,
        output_path,
    })
}

/// Print what `generate` found and wrote
pub fn report(outcome: &GenerateOutcome) {
    let functions = &outcome.extraction.functions;
    println!("Found {} exported functions", functions.len());
    for func in functions {
        println!("  - {}", func.name.cyan());
    }

    let skipped = outcome.extraction.skipped.len();
    if skipped > 0 {
        logger::warn(&format!(
            "{} marked line(s) could not be bound (run with -v for details)",
            skipped
        ));
    }

    logger::success(&format!("Generated {}", outcome.output_path.display()));
}

/// Generate PHP FFI bindings from a Go source file
pub fn handle_generate(args: SourceArgs, _opts: &GlobalOpts) -> anyhow::Result<()> {
    logger::debug("Handling generate command");

    let project_dir = std::env::current_dir()?;
    let project = Project::resolve(args.source.as_deref(), &project_dir)?;

    println!(
        "{} {}",
        "Generating PHP bindings for".bold(),
        project.source.display()
    );

    let outcome = generate(&project)?;
    report(&outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const SOURCE: &str = r#"package main

import "C"

// adds two numbers
//export Add
func Add(a, b int) int { return a + b }

//export Broken
func Broken(a int {
}

func main() {}
"#;

    #[test]
    fn test_generate_writes_service_and_lib_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("calc.go"), SOURCE).unwrap();

        let project = Project::resolve(Some(Path::new("calc.go")), dir.path()).unwrap();
        let outcome = generate(&project).unwrap();

        assert_eq!(outcome.output_path, dir.path().join("dist/CalcService.php"));
        assert!(dir.path().join("dist/lib").is_dir());
        assert_eq!(outcome.extraction.functions.len(), 1);
        assert_eq!(outcome.extraction.skipped.len(), 1);

        let content = fs::read_to_string(&outcome.output_path).unwrap();
        assert!(content.contains("     * adds two numbers\n"));
        assert!(content.contains("return $this->ffi->Add($a, $b);"));
        assert!(!content.contains("Broken"));
    }

    #[test]
    fn test_duplicate_export_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("dup.go"),
            "//export Add\nfunc Add() {\n}\n//export Add\nfunc Add() {\n}\n",
        )
        .unwrap();

        let project = Project::resolve(Some(Path::new("dup.go")), dir.path()).unwrap();
        let err = generate(&project).unwrap_err();

        assert!(matches!(err, CliError::Extract(_)));
        assert!(!dir.path().join("dist").exists());
    }
}
