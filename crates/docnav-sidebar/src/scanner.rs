//! Markdown discovery for a single sidebar section.
//!
//! Discovery only locates files; no content is read at this stage.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

/// A markdown file found directly inside a section directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionFile {
    /// Location on disk.
    pub path: PathBuf,
    /// Path relative to the source root, `/`-separated (e.g. `ru/basics/a.md`).
    pub rel_path: String,
}

/// Find the markdown files directly under `source_dir/base/dir`.
///
/// Hidden files and directories named `*.md` are skipped, and nested
/// directories are not descended into. A missing directory yields no files.
pub(crate) fn discover(source_dir: &Path, base: &str, dir: &str) -> Vec<SectionFile> {
    let prefix = rel_prefix(base, dir);
    let section_dir = if prefix.is_empty() {
        source_dir.to_path_buf()
    } else {
        source_dir.join(&prefix)
    };

    let pattern = format!(
        "{}/*.md",
        Pattern::escape(&section_dir.to_string_lossy())
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let paths = match glob::glob_with(&pattern, options) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(pattern = %pattern, error = %e, "Invalid section pattern, skipping");
            return Vec::new();
        }
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e, "Failed to read directory entry, skipping");
                None
            }
        })
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let rel_path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            Some(SectionFile { path, rel_path })
        })
        .collect()
}

/// Join the non-empty segments of `base` and `dir` with `/`.
fn rel_prefix(base: &str, dir: &str) -> String {
    base.split(['/', '\\'])
        .chain(dir.split(['/', '\\']))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}
