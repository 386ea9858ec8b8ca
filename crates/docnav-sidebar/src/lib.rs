//! Sidebar navigation for documentation sites.
//!
//! A sidebar is declared as an ordered list of [`Section`]s, each naming a
//! display title and a directory. [`SidebarBuilder`] turns those declarations
//! into [`NavigationGroup`]s by scanning each directory for markdown files and
//! ordering them by the `order` field of their front-matter:
//!
//! - only files directly inside the section directory are considered
//! - files with `order: false` or without an `order` field are left out
//! - the rest are sorted by `order`, then by path
//!
//! Building never fails. A missing directory produces an empty group and an
//! unreadable or malformed file is skipped with a warning.
//!
//! # Example
//!
//! ```no_run
//! use docnav_sidebar::{Section, SidebarBuilder};
//!
//! let builder = SidebarBuilder::new("docs");
//! let sidebar = builder.build(
//!     "",
//!     &[Section::new("Intro", "intro"), Section::new("Basics", "basics")],
//! );
//! for group in &sidebar {
//!     tracing::info!(title = %group.title, pages = group.children.len());
//! }
//! ```

mod builder;
mod navigation;
mod order;
mod scanner;

pub use builder::{SidebarBuilder, build_sidebar};
pub use navigation::{NavigationGroup, Section};
pub use order::{Order, OrderKey, read_order};
