//! Command-line front end for Slugline.
//!
//! # Key Abstractions
//!
//! - [`SluglineCli`]: loads configuration, sets up logging, runs commands
//! - [`SluglineConfig`]: file + environment configuration

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::SluglineCli;
pub use cli::{CliArgs, Command};
pub use config::SluglineConfig;
