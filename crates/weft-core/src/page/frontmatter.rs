use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Page frontmatter (YAML header)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFrontmatter {
    /// Unique page identifier (required)
    pub id: String,
    /// Page title (required)
    pub title: String,
    /// Labels for categorization and related-page discovery (optional).
    /// Unique by label identity; duplicates collapse on parse.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    /// Creation timestamp (auto-populated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update timestamp (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl PageFrontmatter {
    /// Create new frontmatter with required fields
    pub fn new(id: String, title: String) -> Self {
        PageFrontmatter {
            id,
            title,
            labels: Vec::new(),
            created: Some(Utc::now()),
            updated: None,
        }
    }

    /// Add labels, keeping first occurrence of duplicates
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self.labels = dedup_labels(self.labels);
        self
    }

    /// Format labels as comma-separated values, using "-" when there are none
    pub fn format_labels(&self) -> String {
        if self.labels.is_empty() {
            "-".to_string()
        } else {
            self.labels
                .iter()
                .map(Label::name)
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}

/// Collapse duplicate labels, preserving first-occurrence order
pub(crate) fn dedup_labels(labels: Vec<Label>) -> Vec<Label> {
    let mut seen = std::collections::HashSet::new();
    labels
        .into_iter()
        .filter(|label| seen.insert(label.clone()))
        .collect()
}
