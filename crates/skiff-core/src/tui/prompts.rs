//! Charm-style CLI prompts using cliclack
//!
//! The prompt flow is an explicit state machine: one state per collected
//! field, advancing on a valid answer, leaving through `Cancelled` when
//! the operator aborts a prompt. Cancellation is only recognized here;
//! once emission starts the pipeline runs to completion or fatal failure.

use crate::project::{self, ProjectConfig};
use crate::registry::RegistryClient;
use crate::runtime::{self, PackageManager};
use crate::scaffold::{self, DEFAULT_FASTIFY_VERSION, FASTIFY_PACKAGE};
use anyhow::Result;
use std::io;

/// CLI arguments for the create flow; every field is optional and
/// pre-fills the matching prompt
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name
    pub name: Option<String>,

    /// Fastify version to pin
    pub fastify_version: Option<String>,

    /// Whether to include ESLint config and scripts
    pub eslint: Option<bool>,
}

/// How the pipeline ended, for the binary's exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// Collection states, one per field
enum Stage {
    Name,
    Version,
    Eslint,
}

/// A prompt either produced a value or the operator backed out
enum Answer<T> {
    Value(T),
    Cancelled,
}

/// cliclack surfaces Esc/Ctrl+C inside a prompt as an Interrupted error;
/// everything else is a real terminal failure
fn classify<T>(result: io::Result<T>) -> Result<Answer<T>> {
    match result {
        Ok(value) => Ok(Answer::Value(value)),
        Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(Answer::Cancelled),
        Err(err) => Err(err.into()),
    }
}

/// Run the fixed prompt sequence, returning `None` on operator
/// cancellation. Validation failures re-prompt the same field and never
/// escalate.
pub async fn collect_config(
    registry: &RegistryClient,
    args: &CreateArgs,
) -> Result<Option<ProjectConfig>> {
    let mut prefilled_name = args.name.clone();
    let mut prefilled_version = args.fastify_version.clone();

    let mut stage = Stage::Name;
    let mut name: Option<String> = None;
    let mut fastify_version: Option<String> = None;

    loop {
        match stage {
            Stage::Name => {
                let answer = match prefilled_name.take() {
                    Some(value) => match project::validate_name(&value) {
                        Ok(()) => {
                            cliclack::log::info(format!("Project name: {}", value.trim()))?;
                            Answer::Value(value)
                        }
                        Err(err) => {
                            cliclack::log::warning(format!("Ignoring --name: {}", err))?;
                            prompt_name()?
                        }
                    },
                    None => prompt_name()?,
                };

                match answer {
                    Answer::Value(value) => {
                        name = Some(value.trim().to_string());
                        stage = Stage::Version;
                    }
                    Answer::Cancelled => return Ok(None),
                }
            }
            Stage::Version => {
                match prompt_version(registry, prefilled_version.take()).await? {
                    Answer::Value(value) => {
                        fastify_version = Some(value);
                        stage = Stage::Eslint;
                    }
                    Answer::Cancelled => return Ok(None),
                }
            }
            Stage::Eslint => {
                let answer = match args.eslint {
                    Some(value) => {
                        cliclack::log::info(format!(
                            "ESLint: {}",
                            if value { "enabled" } else { "disabled" }
                        ))?;
                        Answer::Value(value)
                    }
                    None => classify(
                        cliclack::confirm("Include ESLint?")
                            .initial_value(true)
                            .interact(),
                    )?,
                };

                match answer {
                    Answer::Value(eslint) => {
                        // Both earlier stages have run by construction.
                        let (Some(name), Some(fastify_version)) = (name, fastify_version) else {
                            anyhow::bail!("Prompt flow finished with missing answers");
                        };
                        return Ok(Some(ProjectConfig {
                            name,
                            fastify_version,
                            eslint,
                        }));
                    }
                    Answer::Cancelled => return Ok(None),
                }
            }
        }
    }
}

fn prompt_name() -> Result<Answer<String>> {
    classify(
        cliclack::input("Project name")
            .placeholder("my-app")
            .validate(|input: &String| project::validate_name(input).map_err(|e| e.to_string()))
            .interact(),
    )
}

/// Version prompt with registry-backed validation. A version that fails
/// the existence check re-issues the same prompt; each attempt costs one
/// registry query.
async fn prompt_version(
    registry: &RegistryClient,
    mut prefilled: Option<String>,
) -> Result<Answer<String>> {
    loop {
        let candidate = match prefilled.take() {
            Some(value) => value,
            None => {
                let answered: Answer<String> = classify(
                    cliclack::input(format!("{} version", FASTIFY_PACKAGE))
                        .default_input(DEFAULT_FASTIFY_VERSION)
                        .interact(),
                )?;
                match answered {
                    Answer::Value(value) => value,
                    Answer::Cancelled => return Ok(Answer::Cancelled),
                }
            }
        };
        let candidate = candidate.trim().to_string();

        if semver::Version::parse(&candidate).is_err() {
            cliclack::log::error(format!("'{}' is not a valid semver version", candidate))?;
            continue;
        }

        let spinner = cliclack::spinner();
        spinner.start(format!(
            "Checking {}@{} on the registry...",
            FASTIFY_PACKAGE, candidate
        ));

        if registry.version_exists(FASTIFY_PACKAGE, &candidate).await {
            spinner.stop(format!("{}@{} found", FASTIFY_PACKAGE, candidate));
            return Ok(Answer::Value(candidate));
        }

        spinner.stop(format!("{}@{} not found", FASTIFY_PACKAGE, candidate));
        cliclack::log::warning(
            "Version not found in the registry (or the registry was unreachable). \
             Try another version.",
        )?;
    }
}

/// Run the full scaffolding pipeline: collect answers, assemble and write
/// artifacts, then install dependencies with the detected package manager.
pub async fn run(args: CreateArgs) -> Result<Outcome> {
    cliclack::intro("Skiff - Fastify project scaffolding")?;

    // No data dependency on the prompts, so probing runs while the
    // operator answers.
    let detection = tokio::task::spawn_blocking(runtime::detect);

    let registry = RegistryClient::from_env()?;

    let config = match collect_config(&registry, &args).await? {
        Some(config) => config,
        None => {
            cliclack::outro_cancel("Setup cancelled.")?;
            return Ok(Outcome::Cancelled);
        }
    };

    let artifacts = scaffold::build_artifacts(&config)?;
    let project_dir = std::env::current_dir()?.join(&config.name);

    let spinner = cliclack::spinner();
    spinner.start("Writing project files...");
    let written = match scaffold::write_artifacts(&project_dir, &artifacts).await {
        Ok(written) => written,
        Err(err) => {
            spinner.stop("Failed to write project files");
            return Err(err);
        }
    };
    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project_dir.display()
    ));

    let manager = detection.await.unwrap_or(PackageManager::FALLBACK);
    cliclack::log::info(format!("Installing dependencies with {}", manager))?;

    match runtime::run_install(manager, &project_dir).await {
        Ok(true) => cliclack::log::success("Dependencies installed")?,
        Ok(false) => cliclack::log::warning(format!(
            "{} install exited with a non-zero status; run it again inside {}",
            manager.command(),
            config.name
        ))?,
        Err(err) => cliclack::log::warning(format!(
            "Could not run {} install: {}",
            manager.command(),
            err
        ))?,
    }

    print_next_steps(&config, manager)?;

    Ok(Outcome::Completed)
}

fn print_next_steps(config: &ProjectConfig, manager: PackageManager) -> Result<()> {
    let mut steps = vec![
        format!("cd {}", config.name),
        format!("{} run dev", manager.command()),
    ];
    if config.eslint {
        steps.push(format!("{} run lint", manager.command()));
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
