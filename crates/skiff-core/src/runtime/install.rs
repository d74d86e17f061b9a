//! Dependency installation via the detected package manager

use super::manager::PackageManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// What gets spawned for an install: program, arguments, and working
/// directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallInvocation {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub cwd: PathBuf,
}

impl InstallInvocation {
    fn command_line(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// Describe the install subprocess for a manager and target directory
pub fn install_invocation(manager: PackageManager, project_dir: &Path) -> InstallInvocation {
    InstallInvocation {
        program: manager.command(),
        args: manager.install_args(),
        cwd: project_dir.to_path_buf(),
    }
}

/// Run `<manager> install` inside the project directory with the
/// operator's terminal attached, blocking until the subprocess exits.
///
/// Returns whether the install exited successfully. A failing install
/// never rolls back already-written artifacts; the caller decides how to
/// report it.
pub async fn run_install(manager: PackageManager, project_dir: &Path) -> Result<bool> {
    let invocation = install_invocation(manager, project_dir);
    let command_line = invocation.command_line();
    println!();
    println!("{} {}", "Running:".dimmed(), command_line.yellow());
    println!();

    let status = Command::new(invocation.program)
        .args(invocation.args)
        .current_dir(&invocation.cwd)
        .status()
        .await
        .with_context(|| format!("Failed to launch `{}`", command_line))?;

    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_runs_in_project_directory() {
        let invocation = install_invocation(PackageManager::Pnpm, Path::new("my-app"));
        assert_eq!(invocation.program, "pnpm");
        assert_eq!(invocation.args, ["install"]);
        assert_eq!(invocation.cwd, Path::new("my-app"));
    }

    #[test]
    fn test_fallback_install_uses_npm() {
        let invocation = install_invocation(PackageManager::FALLBACK, Path::new("my-app"));
        assert_eq!(invocation.program, "npm");
        assert_eq!(invocation.args, ["install"]);
        assert_eq!(invocation.command_line(), "npm install");
    }
}
