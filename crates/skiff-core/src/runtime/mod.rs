//! Host environment probing and install execution
//!
//! This module provides:
//! - Package manager detection (pnpm, yarn, bun, with npm as fallback)
//! - The blocking dependency install subprocess

pub mod install;
pub mod manager;

pub use install::{install_invocation, run_install, InstallInvocation};
pub use manager::{detect, detect_with, PackageManager};
