//! Charm-style interactive flow (cliclack)

pub mod prompts;

pub use prompts::{collect_config, run, CreateArgs, Outcome};
