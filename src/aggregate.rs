//! Per-path accumulation.
//!
//! An [`Aggregator`] is the walking state of one analysis run: every element
//! is recorded once, adding to the [`PathStats`] of its selector path.
//! [`Aggregator::finish`] consumes it and hands back a frozen [`Snapshot`],
//! the only place averages can be read. Each run owns its aggregator, so
//! runs over different documents never share mutable state.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::node::MarkupNode;
use crate::options::validate_depth;
use crate::path::SelectorPath;
use crate::rank::{self, RankedEntry};
use crate::scoring;

/// Accumulated statistics of one selector path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathStats {
    /// Number of elements that mapped to the path.
    pub count: usize,
    /// Sum of occurrence scores.
    pub score_sum: u64,
    /// Sum of preference scores.
    pub preference_sum: u64,
}

impl PathStats {
    fn add(&mut self, score: u32, preference: u32) {
        self.count += 1;
        self.score_sum += u64::from(score);
        self.preference_sum += u64::from(preference);
    }

    /// Mean occurrence score.
    #[must_use]
    pub fn avg_score(&self) -> f64 {
        mean(self.score_sum, self.count)
    }

    /// Mean preference score.
    #[must_use]
    pub fn avg_preference(&self) -> f64 {
        mean(self.preference_sum, self.count)
    }
}

fn mean(sum: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Walking state: records elements until [`finish`](Self::finish) is called.
#[derive(Debug, Clone)]
pub struct Aggregator {
    max_depth: usize,
    stats: HashMap<SelectorPath, PathStats>,
    nodes: usize,
}

impl Aggregator {
    /// Creates an empty aggregator for paths of at most `max_depth` descriptors.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` when `max_depth` is zero.
    pub fn new(max_depth: usize) -> Result<Self> {
        validate_depth(max_depth)?;
        Ok(Self {
            max_depth,
            stats: HashMap::new(),
            nodes: 0,
        })
    }

    /// Scores one element and adds it to its path.
    pub fn record<N: MarkupNode>(&mut self, node: &N) {
        let path = SelectorPath::build(node, self.max_depth);
        let rule = scoring::classify(node);
        let preference = scoring::preference_score(node, &path);

        trace!(path = %path, rule = ?rule, preference, "recorded element");

        self.stats
            .entry(path)
            .or_default()
            .add(rule.score(), preference);
        self.nodes += 1;
    }

    /// Records every element of a walk.
    pub fn record_all<N, I>(&mut self, nodes: I)
    where
        N: MarkupNode,
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.record(&node);
        }
    }

    /// Ends the walk and freezes the statistics.
    #[must_use]
    pub fn finish(self) -> Snapshot {
        debug!(
            nodes = self.nodes,
            paths = self.stats.len(),
            max_depth = self.max_depth,
            "aggregation finished"
        );
        Snapshot {
            max_depth: self.max_depth,
            stats: self.stats.into_iter().collect(),
            nodes: self.nodes,
        }
    }
}

/// Frozen statistics of a completed walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    max_depth: usize,
    stats: BTreeMap<SelectorPath, PathStats>,
    nodes: usize,
}

impl Snapshot {
    /// Depth the paths were built with.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of elements visited.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Number of distinct selector paths.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.stats.len()
    }

    /// True when no element was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Statistics of one path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PathStats> {
        self.stats.get(&SelectorPath::from(path))
    }

    /// All paths with their statistics, ordered by path.
    pub fn iter(&self) -> impl Iterator<Item = (&SelectorPath, &PathStats)> {
        self.stats.iter()
    }

    /// Occurrence count per path.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<SelectorPath, usize> {
        self.project(|s| s.count)
    }

    /// Average occurrence score per path.
    #[must_use]
    pub fn avg_scores(&self) -> BTreeMap<SelectorPath, f64> {
        self.project(PathStats::avg_score)
    }

    /// Average preference score per path.
    #[must_use]
    pub fn avg_preferences(&self) -> BTreeMap<SelectorPath, f64> {
        self.project(PathStats::avg_preference)
    }

    /// Ranks every path and tiers the first `tier_top_n` entries.
    #[must_use]
    pub fn rank(&self, tier_top_n: usize) -> Vec<RankedEntry> {
        rank::rank(self, tier_top_n)
    }

    fn project<T>(&self, f: impl Fn(&PathStats) -> T) -> BTreeMap<SelectorPath, T> {
        self.stats.iter().map(|(p, s)| (p.clone(), f(s))).collect()
    }
}
