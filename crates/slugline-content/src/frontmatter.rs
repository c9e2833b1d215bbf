//! YAML front-matter extraction.
//!
//! A document has front-matter only if its first line (after an optional
//! BOM) is exactly `---`. The block ends at the next line that is exactly
//! `---` or `...`. Without a closing line the whole text is treated as body.

use serde::de::DeserializeOwned;
use slugline_core::{Error, Result};

const BOM: char = '\u{feff}';

/// A document split into front-matter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterResult<'a> {
    /// Raw YAML between the fences, if present.
    pub frontmatter: Option<&'a str>,
    /// Everything after the closing fence (or the whole text).
    pub body: &'a str,
}

impl FrontmatterResult<'_> {
    /// Whether a front-matter block was found.
    pub fn has_frontmatter(&self) -> bool {
        self.frontmatter.is_some()
    }
}

fn is_fence(line: &str, closing: bool) -> bool {
    let line = line.trim_end_matches(['\r', '\n']);
    line == "---" || (closing && line == "...")
}

/// Split `text` into front-matter and body.
///
/// # Example
///
/// ```
/// use slugline_content::extract_frontmatter;
///
/// let doc = "---\nslug: hello\n---\n# Hello\n";
/// let parts = extract_frontmatter(doc);
/// assert_eq!(parts.frontmatter, Some("slug: hello\n"));
/// assert_eq!(parts.body, "# Hello\n");
/// ```
pub fn extract_frontmatter(text: &str) -> FrontmatterResult<'_> {
    let no_frontmatter = FrontmatterResult {
        frontmatter: None,
        body: text,
    };
    let content = text.strip_prefix(BOM).unwrap_or(text);

    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return no_frontmatter;
    };
    if !is_fence(first, false) || !first.ends_with('\n') {
        return no_frontmatter;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_fence(line, true) {
            return FrontmatterResult {
                frontmatter: Some(&content[yaml_start..offset]),
                body: &content[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    no_frontmatter
}

/// Deserialize a front-matter block.
///
/// Blank YAML is read as an empty mapping so that types whose fields all
/// have defaults still deserialize.
pub fn parse_frontmatter<T: DeserializeOwned>(yaml: &str) -> Result<T> {
    let source = if yaml.trim().is_empty() { "{}" } else { yaml };
    yaml_serde::from_str(source).map_err(|e| Error::serialization(e.to_string()))
}
