//! Front-matter extraction for markdown documents.
//!
//! A front-matter block is a YAML mapping delimited by `---` lines at the very
//! top of a document:
//!
//! ```text
//! ---
//! order: 2
//! title: Accounts
//! ---
//!
//! # Accounts
//! ```
//!
//! Only a block opening on the first line counts, so a `---` thematic break
//! further down the page is never mistaken for metadata. The block is parsed
//! into a [`FrontMatter`] map.
//!
//! # Example
//!
//! ```
//! use docnav_meta::FrontMatter;
//!
//! let fm = FrontMatter::from_markdown("---\norder: 2\n---\n\n# Accounts\n").unwrap();
//! assert_eq!(fm.get("order").and_then(serde_yaml::Value::as_i64), Some(2));
//! ```

mod block;
mod front_matter;

pub use block::extract_front_matter;
pub use front_matter::{FrontMatter, MetaError};
