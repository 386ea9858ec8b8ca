//! Site manifest for the theme renderer.
//!
//! [`SiteManifest`] combines the static site configuration with the sidebars
//! built for each locale. Its JSON form is what the external site generator
//! reads:
//!
//! ```json
//! {
//!   "title": "Cosmos SDK",
//!   "base": "/",
//!   "plugins": [["@vuepress/search", { "searchMaxSuggestions": 10 }]],
//!   "markdown": { "anchor": { "permalinkSymbol": "" } },
//!   "locales": { "/": { "lang": "en-US" } },
//!   "themeConfig": {
//!     "repo": "cosmos/cosmos-sdk",
//!     "docsDir": "docs",
//!     "editLinks": true,
//!     "locales": {
//!       "/": { "label": "English", "sidebar": [{ "title": "Intro", "children": [] }] }
//!     }
//!   }
//! }
//! ```

mod manifest;

pub use manifest::{
    AnchorOptions, LocaleMap, LocaleRoute, MarkdownOptions, SearchOptions, SearchPlugin, SiteManifest,
    ThemeLocale, ThemeManifest, locale_sidebar,
};
