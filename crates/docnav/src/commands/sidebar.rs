//! `docnav sidebar` command implementation.

use clap::Args;
use docnav_sidebar::NavigationGroup;
use docnav_site::locale_sidebar;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Locale path prefix to build the sidebar for.
    #[arg(short, long, default_value = "/")]
    locale: String,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the locale is not routed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(None, &output)?;

        let Some(groups) = locale_sidebar(&config, &self.locale) else {
            let known: Vec<_> = config.locales.iter().map(|l| l.path.as_str()).collect();
            return Err(CliError::Validation(format!(
                "Unknown locale \"{}\" (configured: {})",
                self.locale,
                known.join(", ")
            )));
        };

        output.info(&format!(
            "Locale {}: {} sections, {} pages",
            self.locale,
            groups.len(),
            page_count(&groups)
        ));
        output.data(&serde_json::to_string_pretty(&groups)?)?;
        Ok(())
    }
}

/// Total number of documents across `groups`.
pub(super) fn page_count(groups: &[NavigationGroup]) -> usize {
    groups.iter().map(|group| group.children.len()).sum()
}
