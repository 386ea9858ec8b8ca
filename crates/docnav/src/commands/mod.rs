//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use sidebar::SidebarArgs;

/// Arguments shared by commands that read the site configuration.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output (show sidebar build logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load the configuration with CLI overrides applied.
    fn load_config(self, base: Option<String>, output: &Output) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            base,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: built-in defaults"),
        }
        output.info(&format!(
            "Source directory: {}",
            config.docs_resolved.source_dir.display()
        ));

        Ok(config)
    }
}
