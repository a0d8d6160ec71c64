//! Result type of an analysis run.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::aggregate::Snapshot;
use crate::options::Options;
use crate::path::SelectorPath;
use crate::rank::RankedEntry;
use crate::summary::DocumentSummary;

/// Frozen outcome of one analysis: the ranking plus the per-path maps it
/// was computed from.
///
/// Produced by [`crate::analyze`] and friends; read-only.
///
/// Serializes as `options`, `node_count`, `ranking`, `summary` and the
/// per-path `counts`, `avg_scores` and `avg_preferences` maps.
#[derive(Debug, Clone)]
pub struct Analysis {
    options: Options,
    node_count: usize,
    ranking: Vec<RankedEntry>,
    summary: DocumentSummary,
    snapshot: Snapshot,
}

impl Analysis {
    pub(crate) fn new(options: Options, snapshot: Snapshot, summary: DocumentSummary) -> Self {
        let ranking = snapshot.rank(options.tier_top_n);
        Self {
            options,
            node_count: snapshot.node_count(),
            ranking,
            summary,
            snapshot,
        }
    }

    /// Options the run used.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Every path, sorted best first, with tiers on the top entries.
    #[must_use]
    pub fn ranking(&self) -> &[RankedEntry] {
        &self.ranking
    }

    /// Elements visited by the walk.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distinct selector paths.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.ranking.len()
    }

    /// True when the document had no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    /// Tag, class and id frequencies.
    #[must_use]
    pub fn summary(&self) -> &DocumentSummary {
        &self.summary
    }

    /// Raw per-path statistics.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Occurrence count per path.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<SelectorPath, usize> {
        self.snapshot.counts()
    }

    /// Average occurrence score per path.
    #[must_use]
    pub fn avg_scores(&self) -> BTreeMap<SelectorPath, f64> {
        self.snapshot.avg_scores()
    }

    /// Average preference score per path.
    #[must_use]
    pub fn avg_preferences(&self) -> BTreeMap<SelectorPath, f64> {
        self.snapshot.avg_preferences()
    }

    /// Ranked entry of one path.
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&RankedEntry> {
        self.ranking.iter().find(|e| e.path.as_str() == path)
    }
}

impl Serialize for Analysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Analysis", 7)?;
        state.serialize_field("options", &self.options)?;
        state.serialize_field("node_count", &self.node_count)?;
        state.serialize_field("ranking", &self.ranking)?;
        state.serialize_field("summary", &self.summary)?;
        state.serialize_field("counts", &self.counts())?;
        state.serialize_field("avg_scores", &self.avg_scores())?;
        state.serialize_field("avg_preferences", &self.avg_preferences())?;
        state.end()
    }
}
