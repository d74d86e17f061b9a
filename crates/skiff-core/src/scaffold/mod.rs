//! Artifact assembly and emission
//!
//! This module provides:
//! - Pure artifact assembly from a `ProjectConfig` (manifest, compiler
//!   config, optional lint config, source stubs)
//! - Materialization of the artifact sequence under a target directory

pub mod emitter;
pub mod manifest;

pub use emitter::write_artifacts;
pub use manifest::{build_artifacts, Artifact, DEFAULT_FASTIFY_VERSION, FASTIFY_PACKAGE};
