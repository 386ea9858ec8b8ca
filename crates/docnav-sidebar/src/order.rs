//! Ordering keys read from front-matter.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use docnav_meta::{FrontMatter, MetaError};
use serde_yaml::Value;

/// Front-matter field holding a document's sidebar position.
pub(crate) const ORDER_FIELD: &str = "order";

/// Sort key of a document within its section.
///
/// Numbers compare numerically and strings lexicographically. Every number
/// sorts before every string.
#[derive(Clone, Debug)]
pub enum OrderKey {
    /// Numeric position (`order: 2`, `order: 1.5`).
    Number(f64),
    /// Textual position (`order: "b"`).
    Text(String),
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

/// Classification of a document's `order` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// No front-matter, or front-matter without `order`.
    Missing,
    /// Explicit `order: false` opt-out.
    Disabled,
    /// Usable sort key.
    Key(OrderKey),
    /// Present but neither a number, a string nor `false`.
    Unsupported,
    /// The document could not be read or its front-matter is malformed.
    Invalid,
}

impl Order {
    /// Classify a raw `order` value.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Bool(false)) => Self::Disabled,
            Some(Value::Number(n)) => n
                .as_f64()
                .map_or(Self::Unsupported, |n| Self::Key(OrderKey::Number(n))),
            Some(Value::String(s)) => Self::Key(OrderKey::Text(s.clone())),
            Some(_) => Self::Unsupported,
        }
    }

    /// Classify the `order` field of parsed front-matter.
    pub fn from_front_matter(front_matter: &FrontMatter) -> Self {
        Self::from_value(front_matter.get(ORDER_FIELD))
    }

    /// Classify the `order` field of a markdown document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document's front-matter is malformed.
    pub fn from_markdown(markdown: &str) -> Result<Self, MetaError> {
        FrontMatter::from_markdown(markdown).map(|fm| Self::from_front_matter(&fm))
    }

    /// The sort key, if this document takes part in navigation.
    pub fn into_key(self) -> Option<OrderKey> {
        match self {
            Self::Key(key) => Some(key),
            Self::Missing | Self::Disabled | Self::Unsupported | Self::Invalid => None,
        }
    }
}

/// Read a document from disk and classify its `order` field.
///
/// Read failures and malformed front-matter are logged and yield
/// [`Order::Invalid`].
pub fn read_order(path: &Path) -> Order {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read document, skipping");
            return Order::Invalid;
        }
    };

    match Order::from_markdown(&content) {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse front-matter, skipping");
            Order::Invalid
        }
    }
}
