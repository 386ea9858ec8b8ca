//! Sidebar declaration and output types.

use serde::{Deserialize, Serialize};

/// A sidebar section declaration: a display title and the directory whose
/// markdown files make up the section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display title of the group.
    pub title: String,
    /// Directory name, relative to the sidebar's base directory.
    pub dir: String,
}

impl Section {
    /// Create a section declaration.
    pub fn new(title: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            dir: dir.into(),
        }
    }
}

/// Titled, ordered group of document paths handed to the theme renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    /// Display title.
    pub title: String,
    /// Document paths relative to the source root, `/`-separated.
    pub children: Vec<String>,
}
