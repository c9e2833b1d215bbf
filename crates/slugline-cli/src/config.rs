//! Configuration for the Slugline CLI.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `SLUGLINE_CONFIG` environment variable
//! 3. XDG default: `~/.config/slugline/config.toml`
//! 4. Built-in defaults
//!
//! `SLUGLINE_*` environment variables are layered on top of the file.

use std::path::PathBuf;
use std::sync::Arc;

use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};
use slugline_content::{CachedSource, MarkdownDirSource, SnippetSource};
use slugline_core::traits::{ConfigProvider, SNIPPETS};
use slugline_core::util::paths::expand_path;
use slugline_core::{Error, Result};

const ENV_PREFIX: &str = "SLUGLINE";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SluglineConfig {
    /// Project name.
    pub project_name: String,

    /// Base path for site data; defaults to the working directory.
    pub base_path: Option<String>,

    /// Snippet content configuration.
    pub content: ContentConfig,
}

/// Where and how snippets are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Snippet directory; defaults to `<base_path>/snippets`.
    pub path: Option<String>,

    /// File extension of snippet files.
    pub extension: String,

    /// Maximum directory depth below the content path.
    #[serde(deserialize_with = "env_value::optional_usize")]
    pub max_depth: Option<usize>,

    /// Keep the collection in memory after the first read.
    #[serde(deserialize_with = "env_value::boolean")]
    pub cache: bool,
}

/// Deserializers for fields that may arrive as strings from the
/// `SLUGLINE_*` environment overlay.
mod env_value {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UsizeOrString {
        Number(usize),
        String(String),
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match BoolOrString::deserialize(deserializer)? {
            BoolOrString::Bool(b) => Ok(b),
            BoolOrString::String(s) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("expected true or false, got '{s}'"))),
        }
    }

    pub fn optional_usize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<usize>, D::Error> {
        match Option::<UsizeOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(UsizeOrString::Number(n)) => Ok(Some(n)),
            Some(UsizeOrString::String(s)) if s.trim().is_empty() => Ok(None),
            Some(UsizeOrString::String(s)) => s.trim().parse().map(Some).map_err(|_| {
                D::Error::custom(format!("expected a non-negative integer, got '{s}'"))
            }),
        }
    }
}

impl Default for SluglineConfig {
    fn default() -> Self {
        Self {
            project_name: "slugline".to_string(),
            base_path: None,
            content: ContentConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            extension: "md".to_string(),
            max_depth: None,
            cache: false,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl SluglineConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("content");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("SLUGLINE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("slugline").join("config.toml"))
    }

    /// Point the content path somewhere else.
    pub fn with_content_dir(mut self, dir: impl Into<String>) -> Self {
        self.content.path = Some(dir.into());
        self
    }

    /// Build the snippet source described by this configuration.
    pub fn snippet_source(&self) -> Result<Arc<dyn SnippetSource>> {
        let mut source = MarkdownDirSource::new(self.snippets_path()?)
            .with_extension(self.content.extension.clone());
        if let Some(depth) = self.content.max_depth {
            source = source.with_max_depth(depth);
        }

        let source: Arc<dyn SnippetSource> = if self.content.cache {
            Arc::new(CachedSource::new(source))
        } else {
            Arc::new(source)
        };
        Ok(source)
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `SLUGLINE_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for SluglineConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => expand_path(p),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self, content_type: &str) -> Result<PathBuf> {
        match (&self.content.path, content_type) {
            (Some(p), SNIPPETS) => expand_path(p),
            _ => Ok(self.base_path()?.join(content_type)),
        }
    }
}

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                flatten_toml_value(val, &format!("{}_{}", prefix, key.to_uppercase()), out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
