//! Label index types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::label::Label;
use crate::page::Page;

/// Metadata for a single page (the read-only view lookups and renderers consume)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page ID
    pub id: String,
    /// Page title
    pub title: String,
    /// Space key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    /// URL path (`/<space>/<file-stem>`)
    pub url_path: String,
    /// Labels
    pub labels: Vec<Label>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl PageMeta {
    /// Build metadata from a loaded page
    pub fn from_page(page: &Page) -> Self {
        let stem = page
            .path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| page.id().to_string());
        let url_path = match &page.space {
            Some(space) => format!("/{}/{}", space, stem),
            None => format!("/{}", stem),
        };

        PageMeta {
            id: page.id().to_string(),
            title: page.title().to_string(),
            space: page.space.clone(),
            url_path,
            labels: page.labels().to_vec(),
            created: page.frontmatter.created,
            updated: page.frontmatter.updated,
        }
    }

    /// Whether the page carries the given label
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }
}

/// In-memory label index over a store
///
/// Built fresh for each invocation; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    /// Metadata index: id -> page metadata
    pub(crate) metadata: HashMap<String, PageMeta>,
    /// Label index: label -> page ids (sorted, deduplicated after finalize)
    pub(crate) labels: HashMap<Label, Vec<String>>,
}

impl LabelIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        LabelIndex::default()
    }

    /// Get metadata for a page by ID
    pub fn get_metadata(&self, id: &str) -> Option<&PageMeta> {
        self.metadata.get(id)
    }

    /// Check if a page ID exists in the index
    pub fn contains(&self, id: &str) -> bool {
        self.metadata.contains_key(id)
    }

    /// Number of indexed pages
    pub fn page_count(&self) -> usize {
        self.metadata.len()
    }

    /// Number of distinct labels
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Label occurrence statistics, most frequent first, ties by name
    pub fn label_counts(&self) -> Vec<(Label, usize)> {
        let mut counts: Vec<(Label, usize)> = self
            .labels
            .iter()
            .map(|(label, ids)| (label.clone(), ids.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}
