//! Sidebar assembly.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::navigation::{NavigationGroup, Section};
use crate::order::{Order, OrderKey, read_order};
use crate::scanner::{SectionFile, discover};

/// A document that takes part in navigation.
#[derive(Debug)]
struct FileEntry {
    path: String,
    order: OrderKey,
}

/// Builds [`NavigationGroup`]s from section declarations.
///
/// The builder is rooted at the documentation source directory. Every call
/// re-scans the filesystem; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct SidebarBuilder {
    source_dir: PathBuf,
}

impl SidebarBuilder {
    /// Create a builder rooted at `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Root directory that section paths are resolved against.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Build one group per section, in declaration order.
    ///
    /// `base` is the directory (relative to the source root) that holds the
    /// section directories; an empty string means the source root itself.
    pub fn build(&self, base: &str, sections: &[Section]) -> Vec<NavigationGroup> {
        let start = Instant::now();
        let groups: Vec<_> = sections
            .iter()
            .map(|section| self.build_group(base, section))
            .collect();
        tracing::info!(
            base,
            sections = groups.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Built sidebar"
        );
        groups
    }

    /// Build the group for a single section.
    ///
    /// Files are included when their front-matter carries a usable `order`
    /// and are sorted by that key, then by path.
    pub fn build_group(&self, base: &str, section: &Section) -> NavigationGroup {
        let files = discover(&self.source_dir, base, &section.dir);
        let found = files.len();

        let mut entries: Vec<FileEntry> = files.par_iter().filter_map(read_entry).collect();
        entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.path.cmp(&b.path)));

        tracing::debug!(
            section = %section.title,
            dir = %section.dir,
            found,
            included = entries.len(),
            "Built sidebar group"
        );

        NavigationGroup {
            title: section.title.clone(),
            children: entries.into_iter().map(|entry| entry.path).collect(),
        }
    }
}

/// Read a file's order, returning `None` when it stays out of navigation.
fn read_entry(file: &SectionFile) -> Option<FileEntry> {
    let order = read_order(&file.path);
    if order == Order::Unsupported {
        tracing::debug!(path = %file.path.display(), "Unsupported order value, skipping");
    }

    order.into_key().map(|order| FileEntry {
        path: file.rel_path.clone(),
        order,
    })
}

/// Build a sidebar for `sections` under `source_dir/base`.
///
/// Shorthand for [`SidebarBuilder::new`] followed by [`SidebarBuilder::build`].
pub fn build_sidebar(source_dir: &Path, base: &str, sections: &[Section]) -> Vec<NavigationGroup> {
    SidebarBuilder::new(source_dir).build(base, sections)
}
