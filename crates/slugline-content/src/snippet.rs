//! Snippet records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Front-matter of a snippet.
///
/// Only `slug` matters for lookup. Known presentation fields are typed;
/// anything else in the front-matter is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnippetMetadata {
    /// Lookup key, unique within a well-formed collection.
    #[serde(default)]
    pub slug: String,

    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date, verbatim from the front-matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Remaining front-matter keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SnippetMetadata {
    /// Metadata carrying only a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One snippet: metadata plus raw Markdown body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Front-matter.
    pub metadata: SnippetMetadata,
    /// Body text after the front-matter, unrendered.
    #[serde(default)]
    pub body: String,
}

impl Snippet {
    /// Create a snippet.
    pub fn new(metadata: SnippetMetadata, body: impl Into<String>) -> Self {
        Self {
            metadata,
            body: body.into(),
        }
    }

    /// The snippet's slug.
    pub fn slug(&self) -> &str {
        &self.metadata.slug
    }
}
