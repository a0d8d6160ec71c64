//! Tag catalogs used by the scorers.
//!
//! Arrays for iteration and `HashSet`s for O(1) lookup, in the same shape
//! for every category.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Anchor tag: a
pub static ANCHOR_TAG: &str = "a";

/// Generic container tags scored by whether they hold a link: li, div, span, td, tr
pub static CONTAINER_TAGS: [&str; 5] = ["li", "div", "span", "td", "tr"];

/// List container tags: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List structure tags rewarded by the preference scorer: li, ul, ol
pub static LIST_STRUCTURE_TAGS: [&str; 3] = ["li", "ul", "ol"];

/// `CONTAINER_TAGS` as a `HashSet`
pub static CONTAINER_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CONTAINER_TAGS.into_iter().collect());

/// `LIST_TAGS` as a `HashSet`
pub static LIST_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LIST_TAGS.into_iter().collect());

/// `HEADING_TAGS` as a `HashSet`
pub static HEADING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HEADING_TAGS.into_iter().collect());

/// `LIST_STRUCTURE_TAGS` as a `HashSet`
pub static LIST_STRUCTURE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LIST_STRUCTURE_TAGS.into_iter().collect());

#[inline]
#[must_use]
pub fn is_anchor(tag: &str) -> bool {
    tag == ANCHOR_TAG
}

#[inline]
#[must_use]
pub fn is_container(tag: &str) -> bool {
    CONTAINER_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_list(tag: &str) -> bool {
    LIST_TAG_SET.contains(tag)
}

#[inline]
#[must_use]
pub fn is_heading(tag: &str) -> bool {
    HEADING_TAG_SET.contains(tag)
}

/// True for `li`, `ul` and `ol`.
#[inline]
#[must_use]
pub fn is_list_structure(tag: &str) -> bool {
    LIST_STRUCTURE_TAG_SET.contains(tag)
}
