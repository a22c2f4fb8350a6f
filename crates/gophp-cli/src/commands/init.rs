use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;
use clap::Args;
use colored::*;
use gophp_config::{ProjectConfig, CONFIG_FILE_NAME};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Skips the overwrite prompt when set
pub const INIT_YES_ENV: &str = "GOPHP_INIT_YES";

#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Name of the new service; the Go source becomes `<name>.go`
    pub name: String,

    /// Overwrite an existing source file without asking
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Go source template with two exported demo functions
fn go_template(source_file: &str) -> String {
    format!(
        r#"package main

/*
#include <stdlib.h>
*/
import "C"

//go:generate gophpffi generate {source_file}

// Add is a simple addition function for demonstration
//
//export Add
func Add(a, b int) int {{
	return a + b
}}

// Echo returns the input string
//
//export Echo
func Echo(s string) string {{
	return s
}}

// main is required for building shared library but never called
func main() {{}}
"#
    )
}

/// Files written by a successful `init`
#[derive(Debug)]
pub struct InitOutcome {
    pub source: PathBuf,
    pub config: PathBuf,
}

/// Write `<name>.go` and `.gophp.yaml` into `project_dir`
pub fn scaffold(name: &str, project_dir: &Path) -> Result<InitOutcome, CliError> {
    let source_file = format!("{}.go", name);
    let source = project_dir.join(&source_file);

    fs::write(&source, go_template(&source_file))?;
    logger::debug(&format!("Wrote {}", source.display()));

    let config = ProjectConfig::new(name, &source_file).save_to_dir(project_dir)?;
    logger::debug(&format!("Wrote {}", config.display()));

    Ok(InitOutcome { source, config })
}

fn confirm_overwrite(path: &Path) -> bool {
    print!(
        "{} File '{}' already exists. Overwrite? {} ",
        "?".bold().cyan(),
        path.display(),
        "[y/N] ›".dimmed()
    );
    let _ = io::stdout().flush();

    let mut response = String::new();
    if io::stdin().read_line(&mut response).is_err() {
        logger::error("Failed to read input");
        return false;
    }
    let response = response.trim().to_lowercase();
    response == "y" || response == "yes"
}

/// Initialize a new Go service
pub fn handle_init(cmd: InitCommand, _opts: &GlobalOpts) -> anyhow::Result<()> {
    logger::debug("Handling init command");

    if cmd.name.trim().is_empty() || cmd.name.contains(['/', '\\']) {
        anyhow::bail!("Invalid service name '{}'", cmd.name);
    }

    let project_dir = std::env::current_dir()?;
    let source = project_dir.join(format!("{}.go", cmd.name));

    if source.exists() {
        let should_skip = cmd.yes || std::env::var_os(INIT_YES_ENV).is_some();
        if should_skip {
            logger::debug("Skipping confirmation");
        } else if !confirm_overwrite(&source) {
            logger::info("Operation cancelled by user");
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let outcome = scaffold(&cmd.name, &project_dir)?;

    logger::success(&format!("Created {}", outcome.source.display()));
    logger::success(&format!("Created {}", outcome.config.display()));

    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Edit {}.go and add your exported functions", cmd.name);
    println!(
        "  2. Run {} to generate PHP bindings and build the library",
        "gophpffi make".cyan()
    );
    println!();
    println!("Exported functions look like:");
    println!("  //export YourFunction");
    println!("  func YourFunction(param Type) ReturnType {{ ... }}");

    Ok(())
}
