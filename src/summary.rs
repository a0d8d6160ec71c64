//! Tag, class and id frequency tables.
//!
//! A quick overview of a page printed before the selector ranking: which
//! tags, class tokens and ids occur most often.

use std::collections::HashMap;

use serde::Serialize;

use crate::node::MarkupNode;

/// Frequencies of tags, classes and ids, each sorted by count descending
/// then name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub tags: Vec<(String, usize)>,
    pub classes: Vec<(String, usize)>,
    pub ids: Vec<(String, usize)>,
}

impl DocumentSummary {
    /// Builds the tables from a walk over the document.
    pub fn collect<N, I>(nodes: I) -> Self
    where
        N: MarkupNode,
        I: IntoIterator<Item = N>,
    {
        let mut tags: HashMap<String, usize> = HashMap::new();
        let mut classes: HashMap<String, usize> = HashMap::new();
        let mut ids: HashMap<String, usize> = HashMap::new();

        for node in nodes {
            *tags.entry(node.tag_name()).or_default() += 1;
            for class in node.class_tokens() {
                *classes.entry(class).or_default() += 1;
            }
            if let Some(id) = node.id() {
                *ids.entry(id).or_default() += 1;
            }
        }

        Self {
            tags: sorted(tags),
            classes: sorted(classes),
            ids: sorted(ids),
        }
    }

    /// Count of one tag, 0 if absent.
    #[must_use]
    pub fn tag_count(&self, tag: &str) -> usize {
        lookup(&self.tags, tag)
    }

    /// Count of one class token, 0 if absent.
    #[must_use]
    pub fn class_count(&self, class: &str) -> usize {
        lookup(&self.classes, class)
    }

    /// Count of one id, 0 if absent.
    #[must_use]
    pub fn id_count(&self, id: &str) -> usize {
        lookup(&self.ids, id)
    }
}

fn sorted(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

fn lookup(table: &[(String, usize)], key: &str) -> usize {
    table
        .iter()
        .find(|(name, _)| name == key)
        .map_or(0, |(_, count)| *count)
}
