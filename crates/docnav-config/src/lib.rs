//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Sections left out of
//! the file fall back to the built-in site definition, including its locale
//! routing table.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.base` (built-in default: `${VUEPRESS_BASE:-/}`)
//! - `theme.repo`

mod defaults;
mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use docnav_sidebar::Section;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site base path.
    pub base: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Documentation source configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Search plugin options.
    pub search: SearchConfig,
    /// Markdown renderer options.
    pub markdown: MarkdownConfig,
    /// Theme options.
    pub theme: ThemeConfig,
    /// Locale routing table, in declaration order.
    pub locales: Vec<LocaleConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Public base path the site is served under (`/` or `/path/`).
    pub base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_owned(),
            base: defaults::BASE.to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root directory of the markdown tree.
    pub source_dir: PathBuf,
}

/// Search plugin configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of suggestions shown while typing.
    pub max_suggestions: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: defaults::SEARCH_MAX_SUGGESTIONS,
        }
    }
}

/// Markdown renderer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Symbol rendered as the heading permalink (empty hides it).
    pub permalink_symbol: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            permalink_symbol: defaults::PERMALINK_SYMBOL.to_owned(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Source repository (`owner/name`).
    pub repo: String,
    /// Documentation directory inside the repository.
    pub docs_dir: String,
    /// Whether pages link to their source for editing.
    pub edit_links: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            repo: defaults::REPO.to_owned(),
            docs_dir: defaults::DOCS_DIR.to_owned(),
            edit_links: defaults::EDIT_LINKS,
        }
    }
}

/// One entry of the locale routing table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleConfig {
    /// URL path prefix (`/`, `/ru/`).
    pub path: String,
    /// Language tag.
    pub lang: String,
    /// Label shown in the language picker.
    pub label: String,
    /// Directory holding this locale's content, relative to the source
    /// directory (empty for the source directory itself).
    #[serde(default)]
    pub directory: String,
    /// Sidebar sections, in display order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base`").
        field: String,
        /// Error message (e.g., "${`VUEPRESS_BASE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL path to start and end with `/`.
fn require_slashed(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start and end with '/' (got \"{value}\")"
        )));
    }
    Ok(())
}

/// Require a section directory to be a single path component.
fn require_dir_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single directory name (got \"{value}\")"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents,
    /// falling back to the built-in site definition.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// environment expansion fails, or the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            let mut config = Self::default_with_cwd();
            config.expand_env_vars()?;
            config
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// Relative paths are resolved against `config_dir`. The result is
    /// expanded but not yet validated.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or environment expansion fails.
    pub fn from_toml(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(config_dir);
        Ok(config)
    }

    /// Look up a locale by its URL path prefix.
    pub fn locale(&self, path: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.path == path)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            search: SearchConfig::default(),
            markdown: MarkdownConfig::default(),
            theme: ThemeConfig::default(),
            locales: defaults::locales(),
            docs_resolved: DocsConfig {
                source_dir: base.join(defaults::DOCS_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_locales()?;
        Ok(())
    }

    /// Validate site metadata and plugin options.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_slashed(&self.site.base, "site.base")?;
        if self.search.max_suggestions == 0 {
            return Err(ConfigError::Validation(
                "search.max_suggestions must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate the locale routing table.
    fn validate_locales(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, locale) in self.locales.iter().enumerate() {
            let field = format!("locales[{i}]");
            require_slashed(&locale.path, &format!("{field}.path"))?;
            if !seen.insert(locale.path.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate locale path \"{}\"",
                    locale.path
                )));
            }
            require_non_empty(&locale.lang, &format!("{field}.lang"))?;
            for (j, section) in locale.sections.iter().enumerate() {
                require_non_empty(&section.title, &format!("{field}.sections[{j}].title"))?;
                require_dir_name(&section.dir, &format!("{field}.sections[{j}].dir"))?;
            }
        }

        if !self.locales.is_empty() && !seen.contains("/") {
            return Err(ConfigError::Validation(
                "locales must include the root path \"/\"".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;
        self.theme.repo = expand::expand_env(&self.theme.repo, "theme.repo")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self.docs.source_dir.as_deref().unwrap_or(defaults::DOCS_DIR);
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(source_dir),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(toml: &str) -> Config {
        Config::from_toml(toml, Path::new("/project")).unwrap()
    }

    fn validation_error(config: &Config) -> String {
        match config.validate() {
            Err(ConfigError::Validation(message)) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Cosmos SDK");
        assert_eq!(config.site.base, "${VUEPRESS_BASE:-/}");
        assert_eq!(config.search.max_suggestions, 10);
        assert_eq!(config.markdown.permalink_symbol, "");
        assert_eq!(config.theme.repo, "cosmos/cosmos-sdk");
        assert_eq!(config.theme.docs_dir, "docs");
        assert!(config.theme.edit_links);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_default_locale_table() {
        let config = Config::default();

        let routes: Vec<_> = config
            .locales
            .iter()
            .map(|l| (l.path.as_str(), l.lang.as_str(), l.label.as_str(), l.directory.as_str()))
            .collect();
        assert_eq!(
            routes,
            vec![
                ("/", "en-US", "English", ""),
                ("/ru/", "ru", "Русский", "ru"),
                ("/kr/", "kr", "한국어", "kr"),
                ("/cn/", "cn", "中文", "cn"),
            ]
        );

        let english = config.locale("/").unwrap();
        assert_eq!(
            english.sections,
            vec![
                Section::new("Intro", "intro"),
                Section::new("Basics", "basics"),
                Section::new("SDK Core", "core"),
                Section::new("About Modules", "modules"),
                Section::new("Interfaces", "interfaces"),
            ]
        );

        let dirs: Vec<_> = config.locale("/cn/").unwrap().sections.iter().map(|s| s.dir.as_str()).collect();
        assert_eq!(dirs, vec!["intro", "basics", "core", "modules", "interfaces"]);
        assert_eq!(config.locale("/kr/").unwrap().sections[3].title, "모듈들");
    }

    #[test]
    fn test_default_config_is_valid_after_expansion() {
        let mut config = Config::default();
        config.site.base = "/".to_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_base_reads_vuepress_base() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("VUEPRESS_BASE", "/sdk/");
        }
        let mut config = Config::default();
        config.expand_env_vars().unwrap();
        assert_eq!(config.site.base, "/sdk/");
        unsafe {
            std::env::remove_var("VUEPRESS_BASE");
        }
    }

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let config = parse("[site]\ntitle = \"My Docs\"\nbase = \"/\"\n");
        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.theme.repo, "cosmos/cosmos-sdk");
        assert_eq!(config.locales.len(), 4);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/docs"));
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r##"
[site]
title = "Gaia"
base = "/gaia/"

[docs]
source_dir = "content"

[search]
max_suggestions = 5

[markdown]
permalink_symbol = "#"

[theme]
repo = "cosmos/gaia"
docs_dir = "content"
edit_links = false

[[locales]]
path = "/"
lang = "en-US"
label = "English"
sections = [
  { title = "Getting Started", dir = "start" },
  { title = "Reference", dir = "reference" },
]

[[locales]]
path = "/es/"
lang = "es"
label = "Español"
directory = "es"
"##,
        );

        assert_eq!(config.site.base, "/gaia/");
        assert_eq!(config.search.max_suggestions, 5);
        assert_eq!(config.markdown.permalink_symbol, "#");
        assert_eq!(config.theme.repo, "cosmos/gaia");
        assert!(!config.theme.edit_links);
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
        assert_eq!(config.locales.len(), 2);
        assert_eq!(
            config.locales[0],
            LocaleConfig {
                path: "/".to_owned(),
                lang: "en-US".to_owned(),
                label: "English".to_owned(),
                directory: String::new(),
                sections: vec![
                    Section::new("Getting Started", "start"),
                    Section::new("Reference", "reference"),
                ],
            }
        );
        assert_eq!(config.locales[1].directory, "es");
        assert!(config.locales[1].sections.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let result = Config::from_toml("[site\ntitle = ", Path::new("/project"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_expand_env_vars_site_base() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_BASE", "/preview/");
        }
        let config = parse("[site]\nbase = \"${DOCNAV_TEST_BASE:-/}\"\n");
        assert_eq!(config.site.base, "/preview/");
        unsafe {
            std::env::remove_var("DOCNAV_TEST_BASE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_REPO");
        }
        let result = Config::from_toml(
            "[theme]\nrepo = \"${DOCNAV_TEST_REPO}\"\n",
            Path::new("/project"),
        );
        match result {
            Err(ConfigError::EnvVar { field, message }) => {
                assert_eq!(field, "theme.repo");
                assert!(message.contains("DOCNAV_TEST_REPO"));
            }
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            base: Some("/v1/".to_owned()),
        });

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/custom/docs"));
        assert_eq!(config.site.base, "/v1/");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.site.base, "${VUEPRESS_BASE:-/}");
    }

    #[test]
    fn test_validate_empty_title() {
        let config = parse("[site]\ntitle = \"\"\nbase = \"/\"\n");
        assert_eq!(validation_error(&config), "site.title cannot be empty");
    }

    #[test]
    fn test_validate_base_without_slashes() {
        let config = parse("[site]\nbase = \"docs\"\n");
        assert!(validation_error(&config).starts_with("site.base must start and end with '/'"));
    }

    #[test]
    fn test_validate_zero_suggestions() {
        let config = parse("[site]\nbase = \"/\"\n[search]\nmax_suggestions = 0\n");
        assert_eq!(
            validation_error(&config),
            "search.max_suggestions must be greater than 0"
        );
    }

    #[test]
    fn test_validate_locale_path_format() {
        let config = parse(
            "[site]\nbase = \"/\"\n[[locales]]\npath = \"/\"\nlang = \"en\"\nlabel = \"EN\"\n\
             [[locales]]\npath = \"/ru\"\nlang = \"ru\"\nlabel = \"RU\"\n",
        );
        assert!(validation_error(&config).starts_with("locales[1].path must start and end"));
    }

    #[test]
    fn test_validate_duplicate_locale() {
        let config = parse(
            "[site]\nbase = \"/\"\n[[locales]]\npath = \"/\"\nlang = \"en\"\nlabel = \"EN\"\n\
             [[locales]]\npath = \"/\"\nlang = \"ru\"\nlabel = \"RU\"\n",
        );
        assert_eq!(validation_error(&config), "duplicate locale path \"/\"");
    }

    #[test]
    fn test_validate_requires_root_locale() {
        let config = parse(
            "[site]\nbase = \"/\"\n[[locales]]\npath = \"/ru/\"\nlang = \"ru\"\nlabel = \"RU\"\n",
        );
        assert_eq!(
            validation_error(&config),
            "locales must include the root path \"/\""
        );
    }

    #[test]
    fn test_validate_empty_lang() {
        let config = parse(
            "[site]\nbase = \"/\"\n[[locales]]\npath = \"/\"\nlang = \"\"\nlabel = \"EN\"\n",
        );
        assert_eq!(validation_error(&config), "locales[0].lang cannot be empty");
    }

    #[test]
    fn test_validate_section_dir_must_be_single_component() {
        for dir in ["../outside", "nested/dir", "..", "."] {
            let config = parse(&format!(
                "[site]\nbase = \"/\"\n[[locales]]\npath = \"/\"\nlang = \"en\"\nlabel = \"EN\"\n\
                 sections = [{{ title = \"T\", dir = \"{dir}\" }}]\n"
            ));
            assert!(
                validation_error(&config).starts_with("locales[0].sections[0].dir must be"),
                "dir {dir} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_empty_section_title() {
        let config = parse(
            "[site]\nbase = \"/\"\n[[locales]]\npath = \"/\"\nlang = \"en\"\nlabel = \"EN\"\n\
             sections = [{ title = \"\", dir = \"intro\" }]\n",
        );
        assert_eq!(
            validation_error(&config),
            "locales[0].sections[0].title cannot be empty"
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(&path, "[site]\ntitle = \"Loaded\"\nbase = \"/\"\n[docs]\nsource_dir = \"md\"\n")
            .unwrap();

        let config = Config::load(
            Some(&path),
            Some(&CliSettings {
                base: Some("/override/".to_owned()),
                ..Default::default()
            }),
        )
        .unwrap();

        assert_eq!(config.site.title, "Loaded");
        assert_eq!(config.site.base, "/override/");
        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("md"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(&path, "[site]\nbase = \"/\"\n").unwrap();

        let result = Config::load(
            Some(&path),
            Some(&CliSettings {
                base: Some("no-slashes".to_owned()),
                ..Default::default()
            }),
        );

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/docnav.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
