//! Skiff CLI - Interactive scaffolding for Fastify projects

use anyhow::Result;
use clap::Parser;
use skiff_core::tui::{CreateArgs, Outcome};

#[derive(Parser, Debug)]
#[command(name = "skiff")]
#[command(about = "Scaffold a Fastify application with an interactive setup flow")]
#[command(version)]
pub struct Args {
    /// Project name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Fastify version to pin (prompted for when omitted)
    #[arg(short = 'f', long = "fastify-version")]
    pub fastify_version: Option<String>,

    /// Include ESLint configuration and scripts without asking
    #[arg(long, conflicts_with = "no_eslint")]
    pub eslint: bool,

    /// Skip ESLint configuration and scripts without asking
    #[arg(long = "no-eslint")]
    pub no_eslint: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        let eslint = match (args.eslint, args.no_eslint) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        CreateArgs {
            name: args.name,
            fastify_version: args.fastify_version,
            eslint,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt counts as operator cancellation
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(1);
    })
    .ok();

    let args = Args::parse();
    let result = skiff_core::tui::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result? {
        Outcome::Completed => Ok(()),
        Outcome::Cancelled => std::process::exit(1),
    }
}
