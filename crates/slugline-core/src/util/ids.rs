//! Slug derivation for files that don't declare one.

use std::path::Path;

/// Normalise a file stem into a slug.
///
/// Lowercases, turns runs of whitespace, `_` and `-` into a single `-`,
/// and trims leading/trailing dashes. Other characters are kept as-is.
pub fn slug_from_stem(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    let mut pending_dash = false;

    for ch in stem.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_dash = true;
            continue;
        }
        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;
        slug.extend(ch.to_lowercase());
    }

    slug
}

/// Slug for a file path, taken from its stem.
///
/// Returns `None` when the path has no UTF-8 stem.
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(slug_from_stem)
        .filter(|s| !s.is_empty())
}
