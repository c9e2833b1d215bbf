//! Async file utilities.
//!
//! Discovery results are sorted by relative path so that every caller
//! sees the same collection order for the same directory tree.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Options for file discovery.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md"
    pub extension: Option<String>,
    /// Maximum directory depth to search (None = unlimited).
    ///
    /// Depth counts path components below the base, so a file directly
    /// in the base directory has depth 1.
    pub max_depth: Option<usize>,
}

impl FindOptions {
    /// Create options for finding markdown files.
    pub fn markdown() -> Self {
        Self::default().with_extension("md")
    }

    /// Match a different extension (leading dot is ignored).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let ext = extension.into();
        self.extension = Some(ext.trim_start_matches('.').to_string());
        self
    }

    /// Set maximum search depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    fn accepts(&self, base_path: &Path, path: &Path) -> bool {
        if let Some(max_depth) = self.max_depth {
            let depth = path
                .strip_prefix(base_path)
                .map(|p| p.components().count())
                .unwrap_or(0);
            if depth > max_depth {
                return false;
            }
        }

        match &self.extension {
            Some(ext) => path.extension().and_then(|e| e.to_str()) == Some(ext.as_str()),
            None => true,
        }
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// Find all files matching criteria in a directory, ordered by relative path.
///
/// # Errors
///
/// Fails with [`Error::IoWithPath`] when `base_path` is missing or
/// unreadable, and with [`Error::Io`] if the walk hits an unreadable entry.
///
/// # Example
///
/// ```no_run
/// # use slugline_core::util::files::{find_all_files, FindOptions};
/// # use std::path::Path;
/// # async fn example() -> slugline_core::Result<()> {
/// let files = find_all_files(
///     Path::new("content/snippets"),
///     FindOptions::markdown().with_max_depth(2),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let meta = fs::metadata(base_path)
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?;
    if !meta.is_dir() {
        return Err(Error::invalid_data(format!(
            "{} is not a directory",
            base_path.display()
        )));
    }

    let mut files = Vec::new();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        let entry = entry_result.map_err(|e| Error::io(std::io::Error::other(e.to_string())))?;
        let path = entry.path();

        if path.is_dir() || !options.accepts(base_path, &path) {
            continue;
        }

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        log::trace!("discovered {}", relative_path.display());
        files.push(FileInfo {
            path: path.to_path_buf(),
            relative_path,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    log::debug!("found {} file(s) under {}", files.len(), base_path.display());
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
