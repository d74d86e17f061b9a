//! Skiff Core - Shared library behind the `skiff` scaffolding CLI
//!
//! This library contains the whole generation pipeline for a Fastify
//! project: answer collection, npm registry version checks, package
//! manager detection, artifact assembly, artifact emission, and the
//! final dependency install.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure/leaf functions: artifact assembly,
//!   registry lookups, package manager probing, file emission
//! - **Layer 2: Workflow Orchestration** - The pipeline wiring in `tui::run`
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod project;
pub mod registry;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use project::ProjectConfig;
pub use registry::RegistryClient;
pub use runtime::{detect, run_install, PackageManager};
pub use scaffold::{build_artifacts, write_artifacts, Artifact};

#[cfg(feature = "tui")]
pub use tui::run;
