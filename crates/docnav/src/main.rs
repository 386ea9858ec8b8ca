//! docnav CLI - documentation navigation builder.
//!
//! Provides commands for:
//! - `build`: Emit the site manifest (configuration plus sidebars) as JSON
//! - `sidebar`: Emit the sidebar of a single locale as JSON

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, SidebarArgs};
use output::Output;

/// docnav - Documentation navigation builder.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site manifest for the theme renderer.
    Build(BuildArgs),
    /// Build the sidebar of one locale.
    Sidebar(SidebarArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.site.verbose,
            Self::Sidebar(args) => args.site.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to ERROR
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
