//! `docnav build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_site::SiteManifest;

use super::{SiteArgs, sidebar::page_count};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Public base path of the site (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Write the manifest to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the manifest cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(self.base, &output)?;

        let manifest = SiteManifest::build(&config);
        for (path, locale) in &manifest.theme_config.locales {
            output.info(&format!(
                "Locale {path} ({}): {} sections, {} pages",
                locale.label,
                locale.sidebar.len(),
                page_count(&locale.sidebar)
            ));
        }

        let json = manifest.to_json(!self.compact)?;
        match self.output {
            Some(path) => {
                std::fs::write(&path, format!("{json}\n"))?;
                output.success(&format!("Wrote manifest to {}", path.display()));
            }
            None => output.data(&json)?,
        }

        Ok(())
    }
}
