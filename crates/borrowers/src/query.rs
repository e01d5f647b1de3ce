//! Query engine
//!
//! Decides which records of a collection match a query. Matching is a
//! case-insensitive substring test over stringified field values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::record::{is_falsy, stringify, Collection, Record};

/// Which part of a record a query looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSelector {
    /// Every field value of the record
    #[default]
    All,
    /// A single named field
    Field(String),
}

impl FieldSelector {
    /// Field names advertised to clients; other names are accepted but rarely match
    pub const KNOWN: [&'static str; 4] = ["name", "email", "phone", "all"];

    /// Build a selector from an optional field name
    ///
    /// `None`, `""` and `"all"` all select every field.
    pub fn from_option(field: Option<&str>) -> Self {
        match field {
            None | Some("") => FieldSelector::All,
            Some(name) => name.parse().unwrap_or_default(),
        }
    }
}

impl FromStr for FieldSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => FieldSelector::All,
            other => FieldSelector::Field(other.to_string()),
        })
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSelector::All => f.write_str("all"),
            FieldSelector::Field(name) => f.write_str(name),
        }
    }
}

/// Search text plus the field it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    needle: String,
    field: FieldSelector,
}

impl Query {
    /// Query every field for `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_field(text, FieldSelector::All)
    }

    /// Query a specific field (or all of them) for `text`
    pub fn with_field(text: impl Into<String>, field: FieldSelector) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self {
            text,
            needle,
            field,
        }
    }

    /// The query text as given
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The field selector
    pub fn field(&self) -> &FieldSelector {
        &self.field
    }

    /// Whether a single record matches
    ///
    /// On the single-field path a falsy value (`0`, `""`, `false`, `null`)
    /// counts as absent and never matches, whatever its text.
    pub fn matches(&self, record: &Record) -> bool {
        match &self.field {
            FieldSelector::All => record.values().any(|v| self.contains(&stringify(v))),
            FieldSelector::Field(name) => match record.get(name) {
                Some(v) if !is_falsy(v) => self.contains(&stringify(v)),
                _ => false,
            },
        }
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Keep the records that match `query`, in their original order
pub fn filter(collection: Collection, query: &Query) -> Collection {
    collection.into_iter().filter(|r| query.matches(r)).collect()
}
