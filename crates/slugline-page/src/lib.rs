//! Page loading for slug-addressed snippets.
//!
//! # Key Abstractions
//!
//! - [`RouteParams`]: the slug taken from the request path
//! - [`PageData`]: what the rendering layer receives
//! - [`load`] / [`SnippetPage`]: resolve a slug against a
//!   [`SnippetSource`](slugline_content::SnippetSource)

#![doc = include_str!("../README.md")]

pub mod loader;

pub use loader::{PageData, RouteParams, SnippetPage, find_by_slug, load};
