//! Parsed front-matter fields.

use serde_yaml::{Mapping, Value};

use crate::block::extract_front_matter;

/// Front-matter parsing error.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// The block is not valid YAML.
    #[error("Invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The block is valid YAML but not a key/value mapping.
    #[error("Front-matter must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Key/value fields of a document's front-matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from the YAML text of a metadata block.
    ///
    /// Empty text yields empty front-matter.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or is not a mapping.
    pub fn parse(yaml: &str) -> Result<Self, MetaError> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(trimmed)? {
            Value::Mapping(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::default()),
            other => Err(MetaError::NotAMapping(value_kind(&other))),
        }
    }

    /// Extract and parse the front-matter of a markdown document.
    ///
    /// A document without a metadata block yields empty front-matter.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata block is present but malformed.
    pub fn from_markdown(markdown: &str) -> Result<Self, MetaError> {
        match extract_front_matter(markdown) {
            Some(yaml) => Self::parse(&yaml),
            None => Ok(Self::default()),
        }
    }

    /// Look up a field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
