use super::{build, generate, Project, SourceArgs};
use crate::logger;
use crate::GlobalOpts;
use anyhow::Context;
use colored::*;

/// Generate bindings, then build the shared library
pub fn handle_make(args: SourceArgs, _opts: &GlobalOpts) -> anyhow::Result<()> {
    logger::debug("Handling make command");

    let project_dir = std::env::current_dir()?;
    let project = Project::resolve(args.source.as_deref(), &project_dir)?;

    println!("{} Generating PHP bindings...", "[1/2]".bold());
    let outcome = generate::generate(&project).context("Generate step failed")?;
    generate::report(&outcome);

    println!();
    println!("{} Building shared library...", "[2/2]".bold());
    let plan = build::build(&project, &project_dir).context("Build step failed")?;

    println!();
    logger::success(&format!(
        "Bindings in {}, library in {}",
        project.output_dir.display(),
        plan.library.display()
    ));
    Ok(())
}
