//! The snippet page loader.
//!
//! Each call reads the whole collection from the source and returns the
//! first snippet whose slug equals the requested one. A miss is reported
//! as `PageData { snippet: None }`; source failures propagate as errors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slugline_content::{Snippet, SnippetSource};
use slugline_core::Result;

/// Route parameters for a snippet page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Requested slug, compared verbatim.
    pub slug: String,
}

impl RouteParams {
    /// Params for `slug`.
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Data handed to the page renderer.
///
/// Serialises as `{"snippet": {...}}`, or `{}` when nothing matched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    /// The matching snippet, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<Snippet>,
}

impl PageData {
    /// Whether a snippet matched.
    pub fn is_found(&self) -> bool {
        self.snippet.is_some()
    }

    /// Take the matched snippet.
    pub fn into_snippet(self) -> Option<Snippet> {
        self.snippet
    }
}

/// First snippet whose slug equals `slug` exactly.
pub fn find_by_slug(snippets: Vec<Snippet>, slug: &str) -> Option<Snippet> {
    snippets.into_iter().find(|s| s.metadata.slug == slug)
}

/// Load the page data for `params` from `source`.
///
/// # Errors
///
/// Only errors from `source` itself; an unknown slug is not an error.
pub async fn load<S>(source: &S, params: &RouteParams) -> Result<PageData>
where
    S: SnippetSource + ?Sized,
{
    let snippets = source.read_snippets().await?;
    let total = snippets.len();
    let snippet = find_by_slug(snippets, &params.slug);

    match &snippet {
        Some(_) => log::debug!("slug '{}' matched ({} candidates)", params.slug, total),
        None => log::debug!("slug '{}' not found ({} candidates)", params.slug, total),
    }

    Ok(PageData { snippet })
}

/// A cloneable page loader bound to one shared source.
///
/// Clones share the source, so one instance can serve any number of
/// concurrent requests.
pub struct SnippetPage<S: ?Sized> {
    source: Arc<S>,
}

impl<S: SnippetSource> SnippetPage<S> {
    /// Create a loader owning `source`.
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

impl<S: SnippetSource + ?Sized> SnippetPage<S> {
    /// Create a loader over an already shared source.
    pub fn with_shared(source: Arc<S>) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the page data for `params`.
    pub async fn load(&self, params: &RouteParams) -> Result<PageData> {
        load(self.source.as_ref(), params).await
    }

    /// Shorthand for `load(&RouteParams::new(slug))`.
    pub async fn load_slug(&self, slug: &str) -> Result<PageData> {
        self.load(&RouteParams::new(slug)).await
    }
}

impl<S: ?Sized> Clone for SnippetPage<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
