//! The `slugline` application.

use std::sync::Arc;

use slugline_content::{Snippet, SnippetSource};
use slugline_core::traits::ConfigProvider;
use slugline_core::{Error, Result};
use slugline_page::{PageData, RouteParams, SnippetPage};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::SluglineConfig;
use crate::config_handlers;

// ============================================================================
// SluglineCli
// ============================================================================

/// CLI application bound to one loaded configuration.
pub struct SluglineCli {
    name: String,
    config: Arc<SluglineConfig>,
    version: String,
}

impl SluglineCli {
    /// Create from CLI args, loading config from file/env.
    ///
    /// `--content-dir` takes precedence over the configured content path.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let mut config = SluglineConfig::load(args.config.as_deref())?;
        if let Some(dir) = &args.content_dir {
            config = config.with_content_dir(dir.clone());
        }
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: SluglineConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The loaded configuration.
    pub fn config(&self) -> &SluglineConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        tracing::debug!(project = self.config.project_name(), "configuration loaded");

        match args.command {
            Some(Command::Show { slug, body }) => {
                let output = self.show(&slug, body).await?;
                println!("{output}");
                Ok(())
            }
            Some(Command::List) => {
                for line in self.list().await? {
                    println!("{line}");
                }
                Ok(())
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    fn page(&self) -> Result<SnippetPage<dyn SnippetSource>> {
        Ok(SnippetPage::with_shared(self.config.snippet_source()?))
    }

    /// Load the page for `slug` and render it.
    ///
    /// A slug with no snippet becomes [`Error::NotFound`] here: the loader
    /// reports absence as data, and this is the layer that decides to fail.
    pub async fn show(&self, slug: &str, body_only: bool) -> Result<String> {
        let data = self.page()?.load(&RouteParams::new(slug)).await?;
        if !data.is_found() {
            tracing::info!(slug, "no snippet matched");
            return Err(Error::not_found(format!("no snippet with slug '{slug}'")));
        }
        render_page(&data, body_only)
    }

    /// One line per snippet: slug, plus the title when there is one.
    pub async fn list(&self) -> Result<Vec<String>> {
        let snippets = self.config.snippet_source()?.read_snippets().await?;
        Ok(snippets.iter().map(list_line).collect())
    }
}

/// Render page data as pretty JSON, or the raw body.
pub fn render_page(data: &PageData, body_only: bool) -> Result<String> {
    match (&data.snippet, body_only) {
        (Some(snippet), true) => Ok(snippet.body.clone()),
        _ => serde_json::to_string_pretty(data).map_err(|e| Error::serialization(e.to_string())),
    }
}

fn list_line(snippet: &Snippet) -> String {
    match &snippet.metadata.title {
        Some(title) => format!("{}\t{}", snippet.slug(), title),
        None => snippet.slug().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
