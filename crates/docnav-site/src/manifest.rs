//! Manifest assembly.

use std::time::Instant;

use docnav_config::{Config, LocaleConfig};
use docnav_sidebar::{NavigationGroup, SidebarBuilder};
use indexmap::IndexMap;
use serde::Serialize;

/// Entries keyed by locale path prefix, in declaration order.
pub type LocaleMap<T> = IndexMap<String, T>;

/// Name of the search plugin the options are handed to.
const SEARCH_PLUGIN: &str = "@vuepress/search";

/// Everything the theme renderer needs to lay out the site.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    pub title: String,
    pub base: String,
    pub plugins: Vec<SearchPlugin>,
    pub markdown: MarkdownOptions,
    /// Language tag per locale path.
    pub locales: LocaleMap<LocaleRoute>,
    pub theme_config: ThemeManifest,
}

/// Search plugin entry, serialized as `[name, options]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchPlugin(pub String, pub SearchOptions);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub search_max_suggestions: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkdownOptions {
    pub anchor: AnchorOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorOptions {
    pub permalink_symbol: String,
}

/// Routing entry of the locale table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleRoute {
    pub lang: String,
}

/// Theme options with per-locale navigation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    pub repo: String,
    pub docs_dir: String,
    pub edit_links: bool,
    pub locales: LocaleMap<ThemeLocale>,
}

/// Theme entry of one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeLocale {
    pub label: String,
    pub sidebar: Vec<NavigationGroup>,
}

impl SiteManifest {
    /// Build the manifest, scanning the source tree for every locale's sidebar.
    ///
    /// Never fails: unreadable documents are left out of their sidebar.
    pub fn build(config: &Config) -> Self {
        let start = Instant::now();
        let builder = SidebarBuilder::new(&config.docs_resolved.source_dir);

        let locales = config
            .locales
            .iter()
            .map(|locale| {
                let route = LocaleRoute {
                    lang: locale.lang.clone(),
                };
                (locale.path.clone(), route)
            })
            .collect();

        let theme_locales: LocaleMap<ThemeLocale> = config
            .locales
            .iter()
            .map(|locale| {
                let entry = ThemeLocale {
                    label: locale.label.clone(),
                    sidebar: build_locale(&builder, locale),
                };
                (locale.path.clone(), entry)
            })
            .collect();

        tracing::info!(
            source_dir = %builder.source_dir().display(),
            locales = theme_locales.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Built site manifest"
        );

        Self {
            title: config.site.title.clone(),
            base: config.site.base.clone(),
            plugins: vec![SearchPlugin(
                SEARCH_PLUGIN.to_owned(),
                SearchOptions {
                    search_max_suggestions: config.search.max_suggestions,
                },
            )],
            markdown: MarkdownOptions {
                anchor: AnchorOptions {
                    permalink_symbol: config.markdown.permalink_symbol.clone(),
                },
            },
            locales,
            theme_config: ThemeManifest {
                repo: config.theme.repo.clone(),
                docs_dir: config.theme.docs_dir.clone(),
                edit_links: config.theme.edit_links,
                locales: theme_locales,
            },
        }
    }

    /// Sidebar of the locale at `path`.
    pub fn sidebar(&self, path: &str) -> Option<&[NavigationGroup]> {
        self.theme_config
            .locales
            .get(path)
            .map(|locale| locale.sidebar.as_slice())
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Build the sidebar of a single locale without assembling the whole manifest.
///
/// Returns `None` if no locale is routed at `path`.
pub fn locale_sidebar(config: &Config, path: &str) -> Option<Vec<NavigationGroup>> {
    let locale = config.locale(path)?;
    let builder = SidebarBuilder::new(&config.docs_resolved.source_dir);
    Some(build_locale(&builder, locale))
}

fn build_locale(builder: &SidebarBuilder, locale: &LocaleConfig) -> Vec<NavigationGroup> {
    builder.build(&locale.directory, &locale.sections)
}
