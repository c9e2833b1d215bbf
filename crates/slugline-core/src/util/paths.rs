//! Path expansion helpers.

use std::path::PathBuf;

use crate::{Error, Result};

/// Expands `~` and `$VAR`/`${VAR}` references in a configured path.
///
/// # Errors
///
/// Returns a configuration error naming the variable when an environment
/// reference cannot be resolved.
///
/// # Example
///
/// ```
/// use slugline_core::util::paths::expand_path;
///
/// let expanded = expand_path("/srv/blog/snippets").unwrap();
/// assert_eq!(expanded, std::path::PathBuf::from("/srv/blog/snippets"));
/// ```
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| Error::config(format!("Cannot expand path '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(
            expand_path("relative/path").unwrap(),
            PathBuf::from("relative/path")
        );
    }

    #[test]
    fn test_expand_path_tilde() {
        let path = expand_path("~/snippets").unwrap();
        if std::env::var_os("HOME").is_some() {
            assert!(!path.starts_with("~"));
        }
        assert!(path.ends_with("snippets"));
    }

    #[test]
    fn test_expand_path_unknown_var() {
        let err = expand_path("$SLUGLINE_TEST_SURELY_UNSET_VAR/x").unwrap_err();
        assert!(err.to_string().contains("SLUGLINE_TEST_SURELY_UNSET_VAR"));
    }
}
