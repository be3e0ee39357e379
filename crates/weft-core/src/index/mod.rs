//! Label index for weft
//!
//! The index maps labels to the pages carrying them. It is rebuilt from the
//! store on every invocation; no derived state is written to disk.

pub mod builder;
pub mod types;

use crate::error::Result;
use crate::label::Label;

pub use builder::LabelIndexBuilder;
pub use types::{LabelIndex, PageMeta};

/// Read access to label membership and popularity.
///
/// `pages_for_label` is a fetch-all contract: implementations return every
/// page carrying the label, in a deterministic order.
pub trait LabelLookup {
    /// Every page carrying the label
    fn pages_for_label(&self, label: &Label) -> Result<Vec<PageMeta>>;

    /// Total number of pages carrying the label across the whole store
    fn occurrence_count(&self, label: &Label) -> Result<usize>;
}

impl LabelLookup for LabelIndex {
    fn pages_for_label(&self, label: &Label) -> Result<Vec<PageMeta>> {
        let Some(ids) = self.labels.get(label) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.metadata.get(id).cloned())
            .collect())
    }

    fn occurrence_count(&self, label: &Label) -> Result<usize> {
        Ok(self.labels.get(label).map_or(0, Vec::len))
    }
}
