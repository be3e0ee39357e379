use super::types::{LabelIndex, PageMeta};
use crate::error::Result;
use crate::page::Page;
use crate::store::Store;

/// Label index builder - scans a store into an in-memory index
pub struct LabelIndexBuilder<'a> {
    store: &'a Store,
    index: LabelIndex,
}

impl<'a> LabelIndexBuilder<'a> {
    /// Create a new index builder
    pub fn new(store: &'a Store) -> Self {
        LabelIndexBuilder {
            store,
            index: LabelIndex::new(),
        }
    }

    /// Build the index
    #[tracing::instrument(skip(self), fields(store_root = %self.store.root().display()))]
    pub fn build(mut self) -> Result<LabelIndex> {
        let pages = self.store.list_pages()?;
        for page in &pages {
            self.add_page(page);
        }
        self.finalize();

        tracing::debug!(
            pages = self.index.page_count(),
            labels = self.index.label_count(),
            "label index built"
        );
        Ok(self.index)
    }

    fn add_page(&mut self, page: &Page) {
        let meta = PageMeta::from_page(page);
        for label in &meta.labels {
            self.index
                .labels
                .entry(label.clone())
                .or_default()
                .push(meta.id.clone());
        }
        self.index.metadata.insert(meta.id.clone(), meta);
    }

    /// Per-label id lists must be sorted and unique so fetch order is stable
    fn finalize(&mut self) {
        for ids in self.index.labels.values_mut() {
            ids.sort();
            ids.dedup();
        }
    }
}
