use super::{Project, SourceArgs};
use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;
use colored::*;
use gophp_config::toolchain::{c_shared_build_args, header_path, resolve_go_exe};
use gophp_config::GoTarget;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Paths and arguments for one `go build -buildmode=c-shared` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub library: PathBuf,
    pub header: PathBuf,
    pub args: Vec<String>,
}

impl BuildPlan {
    pub fn new(project: &Project, target: &GoTarget) -> Self {
        let library = project
            .lib_dir
            .join(target.library_file_name(&project.service));
        let args = c_shared_build_args(&library, &project.source);
        Self {
            header: header_path(&library),
            library,
            args,
        }
    }
}

/// Compile the Go source into a shared library for the host platform
pub fn build(project: &Project, project_dir: &Path) -> Result<BuildPlan, CliError> {
    let go = resolve_go_exe()?;
    let target = GoTarget::host();
    let plan = BuildPlan::new(project, &target);

    fs::create_dir_all(&project.lib_dir).map_err(|source| CliError::CreateDir {
        path: project.lib_dir.clone(),
        source,
    })?;

    logger::debug(&format!("Running {} {}", go.display(), plan.args.join(" ")));
    logger::spinner_start(&format!(
        "Building {} for {}-{}",
        project.service, target.goos, target.goarch
    ));

    let output = match Command::new(&go)
        .args(&plan.args)
        .current_dir(project_dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            logger::spinner_error(&format!("Failed to run {}", go.display()));
            return Err(CliError::Io(e));
        }
    };

    logger::capture_output("go build", &output);

    if !output.status.success() {
        logger::spinner_error("go build failed");
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            eprintln!("{}", stderr.trim_end());
        }
        return Err(CliError::BuildFailed {
            exit_code: output.status.code(),
        });
    }

    logger::spinner_success(&format!("Built {}", plan.library.display()));
    Ok(plan)
}

/// Build the Go shared library
pub fn handle_build(args: SourceArgs, _opts: &GlobalOpts) -> anyhow::Result<()> {
    logger::debug("Handling build command");

    let project_dir = std::env::current_dir()?;
    let project = Project::resolve(args.source.as_deref(), &project_dir)?;

    println!("{} {}", "Source:".bold(), project.source.display());
    println!("{} {}", "Service:".bold(), project.service);

    let plan = build(&project, &project_dir)?;

    println!("{} {}", "Library:".bold(), plan.library.display());
    println!("{} {}", "Header:".bold(), plan.header.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_plan_for_linux() {
        let project = Project {
            source: PathBuf::from("/work/MyGo.go"),
            service: "MyGo".to_string(),
            output_dir: PathBuf::from("/work/dist"),
            lib_dir: PathBuf::from("/work/dist/lib"),
        };
        let plan = BuildPlan::new(&project, &GoTarget::from_rust_consts("linux", "x86_64"));

        assert_eq!(plan.library, PathBuf::from("/work/dist/lib/MyGo-linux-amd64.so"));
        assert_eq!(plan.header, PathBuf::from("/work/dist/lib/MyGo-linux-amd64.h"));
        assert_eq!(
            plan.args,
            vec![
                "build",
                "-buildmode=c-shared",
                "-o",
                "/work/dist/lib/MyGo-linux-amd64.so",
                "/work/MyGo.go"
            ]
        );
    }
}
