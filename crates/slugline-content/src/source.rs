//! Snippet sources.
//!
//! A [`SnippetSource`] produces the full, ordered snippet collection on
//! demand. Page loading only depends on this trait, so how snippets are
//! stored (and whether they're cached) stays behind it.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use slugline_core::util::files::{FindOptions, find_all_files, read_file};
use slugline_core::{Error, Result, slug_from_path};

use crate::frontmatter::{extract_frontmatter, parse_frontmatter};
use crate::snippet::{Snippet, SnippetMetadata};

/// Supplies the complete snippet collection.
///
/// # Example
///
/// ```rust,ignore
/// struct HttpSource { /* ... */ }
///
/// #[async_trait]
/// impl SnippetSource for HttpSource {
///     async fn read_snippets(&self) -> Result<Vec<Snippet>> {
///         // Fetch and decode the collection
///     }
/// }
/// ```
#[async_trait]
pub trait SnippetSource: Send + Sync {
    /// Read every snippet, in the source's collection order.
    async fn read_snippets(&self) -> Result<Vec<Snippet>>;
}

#[async_trait]
impl<S: SnippetSource + ?Sized> SnippetSource for std::sync::Arc<S> {
    async fn read_snippets(&self) -> Result<Vec<Snippet>> {
        (**self).read_snippets().await
    }
}

// ============================================================================
// StaticSource
// ============================================================================

/// A fixed collection held in memory, returned in insertion order.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    snippets: Vec<Snippet>,
}

impl StaticSource {
    /// Wrap an existing collection.
    pub fn new(snippets: Vec<Snippet>) -> Self {
        Self { snippets }
    }

    /// Number of snippets held.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl FromIterator<Snippet> for StaticSource {
    fn from_iter<I: IntoIterator<Item = Snippet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl SnippetSource for StaticSource {
    async fn read_snippets(&self) -> Result<Vec<Snippet>> {
        Ok(self.snippets.clone())
    }
}

// ============================================================================
// MarkdownDirSource
// ============================================================================

/// Reads snippets from Markdown files under a directory.
///
/// Files are visited in relative-path order. Each file's front-matter
/// becomes its [`SnippetMetadata`]; a missing or blank `slug` falls back
/// to the normalised file stem.
#[derive(Clone, Debug)]
pub struct MarkdownDirSource {
    root: PathBuf,
    options: FindOptions,
}

impl MarkdownDirSource {
    /// Read `*.md` files under `root`, at any depth.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: FindOptions::markdown(),
        }
    }

    /// Match a different file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.options = self.options.with_extension(extension);
        self
    }

    /// Limit how deep below `root` files are picked up.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// The content directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parse a single Markdown document.
    ///
    /// `path` is used for the slug fallback and for error messages only.
    pub fn parse_document(path: &Path, text: &str) -> Result<Snippet> {
        let parts = extract_frontmatter(text);

        let mut metadata: SnippetMetadata = match parts.frontmatter {
            Some(yaml) => parse_frontmatter(yaml).map_err(|e| match e {
                Error::Serialization(msg) => Error::frontmatter(path, msg),
                other => other,
            })?,
            None => SnippetMetadata::default(),
        };

        if metadata.slug.trim().is_empty() {
            metadata.slug = slug_from_path(path).ok_or_else(|| {
                Error::invalid_data(format!(
                    "{} has no slug and no usable file name",
                    path.display()
                ))
            })?;
            log::debug!("{}: slug derived from file name", path.display());
        }

        Ok(Snippet::new(metadata, parts.body))
    }
}

#[async_trait]
impl SnippetSource for MarkdownDirSource {
    async fn read_snippets(&self) -> Result<Vec<Snippet>> {
        let files = find_all_files(&self.root, self.options.clone()).await?;

        let mut snippets = Vec::with_capacity(files.len());
        for file in files {
            let text = read_file(&file.path).await?;
            snippets.push(Self::parse_document(&file.relative_path, &text)?);
        }

        log::debug!(
            "read {} snippet(s) from {}",
            snippets.len(),
            self.root.display()
        );
        Ok(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::fs;

    fn slugs(snippets: &[Snippet]) -> Vec<&str> {
        snippets.iter().map(Snippet::slug).collect()
    }

    #[tokio::test]
    async fn test_static_source_preserves_order() {
        let source: StaticSource = ["foo", "bar", "foo"]
            .into_iter()
            .map(|s| Snippet::new(SnippetMetadata::new(s), ""))
            .collect();

        assert_eq!(source.len(), 3);
        let snippets = source.read_snippets().await.unwrap();
        assert_eq!(slugs(&snippets), vec!["foo", "bar", "foo"]);
    }

    #[tokio::test]
    async fn test_static_source_empty() {
        let source = StaticSource::default();
        assert!(source.is_empty());
        assert!(source.read_snippets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_arc_source_delegates() {
        let source: Arc<dyn SnippetSource> = Arc::new(StaticSource::new(vec![Snippet::new(
            SnippetMetadata::new("x"),
            "",
        )]));
        let snippets = source.read_snippets().await.unwrap();
        assert_eq!(slugs(&snippets), vec!["x"]);
    }

    #[test]
    fn test_parse_document_with_frontmatter() {
        let snippet = MarkdownDirSource::parse_document(
            Path::new("ignored.md"),
            "---\nslug: playwright-fixtures\ntitle: Fixtures\n---\nUse `test.extend`.\n",
        )
        .unwrap();

        assert_eq!(snippet.slug(), "playwright-fixtures");
        assert_eq!(snippet.metadata.title.as_deref(), Some("Fixtures"));
        assert_eq!(snippet.body, "Use `test.extend`.\n");
    }

    #[test]
    fn test_parse_document_slug_fallback() {
        let snippet = MarkdownDirSource::parse_document(
            Path::new("dotnet/Minimal_APIs.md"),
            "---\ntitle: Minimal APIs\n---\nbody",
        )
        .unwrap();
        assert_eq!(snippet.slug(), "minimal-apis");
    }

    #[test]
    fn test_parse_document_without_frontmatter() {
        let snippet =
            MarkdownDirSource::parse_document(Path::new("plain-note.md"), "just text").unwrap();
        assert_eq!(snippet.slug(), "plain-note");
        assert_eq!(snippet.body, "just text");
    }

    #[test]
    fn test_parse_document_invalid_yaml_names_file() {
        let err = MarkdownDirSource::parse_document(
            Path::new("broken.md"),
            "---\nslug: [oops\n---\nbody",
        )
        .unwrap_err();

        assert!(matches!(err, Error::Frontmatter { .. }));
        assert!(err.to_string().contains("broken.md"));
    }

    #[tokio::test]
    async fn test_markdown_dir_source_reads_in_path_order() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("angular");
        fs::create_dir(&nested).await.unwrap();
        fs::write(temp.path().join("b.md"), "---\nslug: second\n---\nB")
            .await
            .unwrap();
        fs::write(temp.path().join("a.md"), "---\nslug: first\n---\nA")
            .await
            .unwrap();
        fs::write(nested.join("signals.md"), "no front-matter")
            .await
            .unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored")
            .await
            .unwrap();

        let source = MarkdownDirSource::new(temp.path());
        let snippets = source.read_snippets().await.unwrap();

        assert_eq!(slugs(&snippets), vec!["first", "signals", "second"]);
        assert_eq!(snippets[0].body, "A");
    }

    #[tokio::test]
    async fn test_markdown_dir_source_max_depth() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("deep");
        fs::create_dir(&nested).await.unwrap();
        fs::write(temp.path().join("top.md"), "top").await.unwrap();
        fs::write(nested.join("inner.md"), "inner").await.unwrap();

        let source = MarkdownDirSource::new(temp.path()).with_max_depth(1);
        let snippets = source.read_snippets().await.unwrap();
        assert_eq!(slugs(&snippets), vec!["top"]);
    }

    #[tokio::test]
    async fn test_markdown_dir_source_custom_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.markdown"), "---\nslug: a\n---\n")
            .await
            .unwrap();
        fs::write(temp.path().join("b.md"), "---\nslug: b\n---\n")
            .await
            .unwrap();

        let source = MarkdownDirSource::new(temp.path()).with_extension("markdown");
        let snippets = source.read_snippets().await.unwrap();
        assert_eq!(slugs(&snippets), vec!["a"]);
    }

    #[tokio::test]
    async fn test_markdown_dir_source_missing_dir() {
        let temp = TempDir::new().unwrap();
        let source = MarkdownDirSource::new(temp.path().join("missing"));

        let err = source.read_snippets().await.unwrap_err();
        assert!(err.is_io());
    }

    #[tokio::test]
    async fn test_markdown_dir_source_bad_file_fails_whole_read() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("good.md"), "---\nslug: good\n---\n")
            .await
            .unwrap();
        fs::write(temp.path().join("zbad.md"), "---\nslug: {\n---\n")
            .await
            .unwrap();

        let err = MarkdownDirSource::new(temp.path())
            .read_snippets()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("zbad.md"));
    }
}
