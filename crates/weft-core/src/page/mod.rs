//! Page data structures for weft
//!
//! Pages are units of content stored as markdown files with YAML
//! frontmatter, grouped into spaces (one directory per space key).

pub mod frontmatter;
pub mod parse;

use std::path::PathBuf;

use crate::error::Result;
use crate::label::Label;

pub use frontmatter::PageFrontmatter;

/// A complete page (frontmatter + body)
#[derive(Debug, Clone)]
pub struct Page {
    /// Page frontmatter
    pub frontmatter: PageFrontmatter,
    /// Page body (markdown content after frontmatter)
    pub body: String,
    /// Path to the page file (if loaded from disk)
    pub path: Option<PathBuf>,
    /// Space key, attached by the store when loading (the page's directory)
    pub space: Option<String>,
}

impl Page {
    /// Create a new page
    pub fn new(frontmatter: PageFrontmatter, body: impl Into<String>) -> Self {
        Page {
            frontmatter,
            body: body.into(),
            path: None,
            space: None,
        }
    }

    /// Get the page ID
    pub fn id(&self) -> &str {
        &self.frontmatter.id
    }

    /// Get the page title
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    /// Get the page labels
    pub fn labels(&self) -> &[Label] {
        &self.frontmatter.labels
    }

    /// Whether the page carries the given label
    pub fn has_label(&self, label: &Label) -> bool {
        self.frontmatter.labels.contains(label)
    }

    /// Get the path as a display string (if available)
    pub fn path_display(&self) -> Option<String> {
        self.path.as_ref().map(|p| p.display().to_string())
    }

    /// Parse a page from markdown content
    pub fn parse(content: &str, path: Option<PathBuf>) -> Result<Self> {
        let (frontmatter, body) = parse::parse_frontmatter(content, path.as_ref())?;
        Ok(Page {
            frontmatter,
            body,
            path,
            space: None,
        })
    }

    /// Serialize the page to markdown
    pub fn to_markdown(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.frontmatter)?;
        Ok(format!("---\n{}---\n\n{}", yaml, self.body))
    }
}
