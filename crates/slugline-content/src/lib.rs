//! Snippet model, front-matter extraction, and snippet sources.
//!
//! # Modules
//!
//! - [`snippet`]: `Snippet` and `SnippetMetadata`
//! - [`frontmatter`]: Splitting YAML front-matter from a Markdown body
//! - [`source`]: The `SnippetSource` trait and its in-memory and
//!   Markdown-directory implementations
//! - [`cache`]: Snapshot-caching decorator for any source

#![doc = include_str!("../README.md")]

pub mod cache;
pub mod frontmatter;
pub mod snippet;
pub mod source;

pub use cache::CachedSource;
pub use frontmatter::{FrontmatterResult, extract_frontmatter, parse_frontmatter};
pub use snippet::{Snippet, SnippetMetadata};
pub use source::{MarkdownDirSource, SnippetSource, StaticSource};
