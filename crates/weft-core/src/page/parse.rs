use std::path::PathBuf;

use super::frontmatter::{dedup_labels, PageFrontmatter};
use crate::error::{Result, WeftError};

/// Parse YAML frontmatter from markdown content
#[tracing::instrument(skip(content), fields(path = ?path))]
pub(crate) fn parse_frontmatter(
    content: &str,
    path: Option<&PathBuf>,
) -> Result<(PageFrontmatter, String)> {
    let content = content.trim_start();

    if !content.starts_with("---") {
        return Err(WeftError::InvalidFrontmatter {
            path: path.cloned().unwrap_or_default(),
            reason: "missing frontmatter delimiter (---)".to_string(),
        });
    }

    let after_first = &content[3..];
    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| WeftError::InvalidFrontmatter {
            path: path.cloned().unwrap_or_default(),
            reason: "missing closing frontmatter delimiter (---)".to_string(),
        })?;

    let yaml_content = &after_first[..end_pos];
    let body_start = 3 + end_pos + 4; // Skip first ---, yaml, \n---
    let body = if body_start < content.len() {
        content[body_start..].trim_start_matches('\n').to_string()
    } else {
        String::new()
    };

    let mut frontmatter: PageFrontmatter =
        serde_yaml::from_str(yaml_content).map_err(|e| WeftError::InvalidFrontmatter {
            path: path.cloned().unwrap_or_default(),
            reason: e.to_string(),
        })?;

    // Validate required fields
    if frontmatter.id.is_empty() {
        return Err(WeftError::InvalidFrontmatter {
            path: path.cloned().unwrap_or_default(),
            reason: "missing required field: id".to_string(),
        });
    }
    if frontmatter.title.is_empty() {
        return Err(WeftError::InvalidFrontmatter {
            path: path.cloned().unwrap_or_default(),
            reason: "missing required field: title".to_string(),
        });
    }

    // Labels are a set: repeated entries collapse to the first occurrence
    frontmatter.labels = dedup_labels(frontmatter.labels);

    Ok((frontmatter, body))
}
