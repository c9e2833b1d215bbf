//! Configuration abstraction.
//!
//! [`ConfigProvider`] is what the CLI's concrete config implements, and
//! what anything that needs to locate snippet content depends on.

use std::path::PathBuf;

use crate::Result;

/// Content type key for the snippet collection.
pub const SNIPPETS: &str = "snippets";

/// Trait for site configuration.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use slugline_core::traits::ConfigProvider;
/// use slugline_core::Result;
///
/// #[derive(Clone)]
/// struct BlogConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for BlogConfig {
///     fn project_name(&self) -> &str {
///         "blog"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.root.join("content").join(content_type))
///     }
/// }
///
/// let config = BlogConfig { root: PathBuf::from("/srv/blog") };
/// assert_eq!(
///     config.snippets_path().unwrap(),
///     PathBuf::from("/srv/blog/content/snippets")
/// );
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used in log output and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type, e.g. `"snippets"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is unknown or the path
    /// cannot be resolved.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;

    /// Directory holding the snippet Markdown files.
    fn snippets_path(&self) -> Result<PathBuf> {
        self.content_path(SNIPPETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig {
        name: String,
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, content_type: &str) -> Result<PathBuf> {
            match content_type {
                SNIPPETS => Ok(self.base.join("src/content/snippets")),
                other => Err(crate::Error::config(format!(
                    "Unknown content type: {other}"
                ))),
            }
        }
    }

    fn test_config() -> TestConfig {
        TestConfig {
            name: "blog".into(),
            base: PathBuf::from("/data"),
        }
    }

    #[test]
    fn test_config_provider_project_name() {
        assert_eq!(test_config().project_name(), "blog");
    }

    #[test]
    fn test_config_provider_snippets_path() {
        let path = test_config().snippets_path().unwrap();
        assert_eq!(path, PathBuf::from("/data/src/content/snippets"));
    }

    #[test]
    fn test_config_provider_unknown_content_type() {
        let err = test_config().content_path("videos").unwrap_err();
        assert!(err.to_string().contains("videos"));
    }

    #[test]
    fn test_config_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
