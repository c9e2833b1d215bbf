//! Slugline Core — shared errors, traits, and utilities.
//!
//! This crate has no internal Slugline dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: Configuration abstraction
//! - [`util`]: File discovery, path expansion, and slug helpers

#![doc = include_str!("../README.md")]

pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigProvider;

pub use util::ids::{slug_from_path, slug_from_stem};
