//! Candidate scoring and ordering

use crate::index::PageMeta;
use crate::label::Label;

/// A related-page candidate with its computed ranking keys
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// The candidate page
    pub page: PageMeta,
    /// Labels shared with the base page, in base-page label order
    pub shared_labels: Vec<Label>,
    /// Sum of store-wide occurrence counts over the shared labels
    pub weight: usize,
}

impl RankedCandidate {
    /// How many of the base page's labels the candidate carries
    pub fn matching(&self) -> usize {
        self.shared_labels.len()
    }
}

/// Order candidates: most shared labels first, then heaviest shared-label
/// popularity, then title ascending.
///
/// The sort is stable, so candidates that tie on all three keys keep their
/// discovery order.
pub fn sort_candidates(candidates: &mut [RankedCandidate]) {
    candidates.sort_by(|a, b| {
        b.matching()
            .cmp(&a.matching())
            .then_with(|| b.weight.cmp(&a.weight))
            .then_with(|| a.page.title.cmp(&b.page.title))
    });
}
