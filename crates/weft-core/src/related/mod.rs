//! Related-page discovery by shared labels
//!
//! Given a base page, the engine collects every page carrying any of the
//! base page's labels, drops the base page itself, scores each candidate,
//! and returns the top `limit` in a deterministic order.

pub mod rank;

use std::collections::{HashMap, HashSet};

use crate::error::{Result, WeftError};
use crate::index::{LabelLookup, PageMeta};
use crate::label::Label;

pub use rank::RankedCandidate;

/// Related-page engine
///
/// Holds a borrowed lookup so tests can drive it with hand-built fixtures.
pub struct RelatedEngine<'a> {
    lookup: &'a dyn LabelLookup,
}

impl<'a> RelatedEngine<'a> {
    /// Create a new engine over a label lookup
    pub fn new(lookup: &'a dyn LabelLookup) -> Self {
        RelatedEngine { lookup }
    }

    /// Rank pages related to `base` by shared labels.
    ///
    /// Candidates with more shared labels come first; ties go to the higher
    /// sum of shared-label occurrence counts, then to title order. Returns
    /// at most `limit` pages. A `limit` of zero is rejected, not clamped.
    #[tracing::instrument(skip(self, base), fields(page_id = %base.id))]
    pub fn related(&self, base: &PageMeta, limit: usize) -> Result<Vec<RankedCandidate>> {
        if limit == 0 {
            return Err(WeftError::InvalidLimit { limit });
        }

        if base.labels.is_empty() {
            return Ok(Vec::new());
        }

        let pool = self.collect_candidates(base)?;
        let mut ranked = self.score_candidates(base, pool)?;
        rank::sort_candidates(&mut ranked);
        ranked.truncate(limit);

        tracing::debug!(results = ranked.len(), "related pages ranked");
        Ok(ranked)
    }

    /// Union of every page carrying any base label, deduplicated by id in
    /// order of first appearance, with the base page itself removed.
    fn collect_candidates(&self, base: &PageMeta) -> Result<Vec<PageMeta>> {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();

        for label in &base.labels {
            let pages = self
                .lookup
                .pages_for_label(label)
                .map_err(lookup_failure)?;
            for page in pages {
                if page.id == base.id {
                    continue;
                }
                if seen.insert(page.id.clone()) {
                    pool.push(page);
                }
            }
        }

        tracing::debug!(
            candidates = pool.len(),
            base_labels = base.labels.len(),
            "candidate pool collected"
        );
        Ok(pool)
    }

    fn score_candidates(
        &self,
        base: &PageMeta,
        pool: Vec<PageMeta>,
    ) -> Result<Vec<RankedCandidate>> {
        // One occurrence fetch per base label, not per candidate
        let mut occurrences: HashMap<Label, usize> = HashMap::new();
        for label in &base.labels {
            let count = self
                .lookup
                .occurrence_count(label)
                .map_err(lookup_failure)?;
            occurrences.insert(label.clone(), count);
        }

        let mut ranked = Vec::with_capacity(pool.len());
        for page in pool {
            let shared_labels: Vec<Label> = base
                .labels
                .iter()
                .filter(|label| page.has_label(label))
                .cloned()
                .collect();
            let weight = shared_labels
                .iter()
                .map(|label| occurrences.get(label).copied().unwrap_or(0))
                .sum();
            ranked.push(RankedCandidate {
                page,
                shared_labels,
                weight,
            });
        }
        Ok(ranked)
    }
}

/// Any lookup failure surfaces as the single unavailable kind; a ranking
/// call has no usable partial result.
fn lookup_failure(err: WeftError) -> WeftError {
    match err {
        unavailable @ WeftError::LabelIndexUnavailable { .. } => unavailable,
        other => WeftError::ranking_unavailable(other),
    }
}
