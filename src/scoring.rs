//! Per-node heuristics.
//!
//! Two independent scores are computed for every element:
//!
//! - the **occurrence score** (10-100): how likely the element is the right
//!   target for scraping links. Anchors are the ground truth; containers,
//!   lists and headings score by whether they transitively hold one.
//! - the **preference score** (0-6): a structural bonus for anchors and
//!   list markup, with an extra point for an anchor nested in a list.
//!
//! The occurrence rules are an ordered list, first match wins. Reordering
//! them changes scores for elements matching several conditions.

use serde::Serialize;

use crate::node::MarkupNode;
use crate::path::SelectorPath;
use crate::tags;

/// The occurrence rule that fired for an element, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceRule {
    /// `<a>` with a non-empty `href`.
    LinkAnchor,
    /// Generic container (`li`, `div`, `span`, `td`, `tr`) holding a link.
    ContainerWithLink,
    /// Generic container without a link below it.
    Container,
    /// `ul`/`ol` holding a link.
    ListWithLink,
    /// `ul`/`ol` without a link below it.
    List,
    /// `h1`-`h6` holding a link.
    HeadingWithLink,
    /// `h1`-`h6` without a link below it.
    Heading,
    /// Any other element with its own non-empty `href` (`link`, `area`, ...).
    AlternateLink,
    /// Everything else.
    Other,
}

impl OccurrenceRule {
    /// Fixed score of the rule.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::LinkAnchor => 100,
            Self::ContainerWithLink => 80,
            Self::HeadingWithLink => 70,
            Self::ListWithLink | Self::AlternateLink => 60,
            Self::Container => 30,
            Self::List => 25,
            Self::Heading => 20,
            Self::Other => 10,
        }
    }
}

/// Points for an anchor element.
const ANCHOR_PREFERENCE: u32 = 3;
/// Points for `li`, `ul` or `ol`.
const LIST_PREFERENCE: u32 = 2;
/// Extra point for an anchor whose path contains a list ancestor.
const NESTED_ANCHOR_BONUS: u32 = 1;

/// Highest preference score the rules can produce.
pub const MAX_PREFERENCE: u32 = ANCHOR_PREFERENCE + LIST_PREFERENCE + NESTED_ANCHOR_BONUS;

/// True for an `<a>` element carrying an `href` attribute (any value).
fn is_link_anchor<N: MarkupNode>(node: &N) -> bool {
    tags::is_anchor(&node.tag_name()) && node.attribute("href").is_some()
}

/// Finds the first occurrence rule matching `node`.
#[must_use]
pub fn classify<N: MarkupNode>(node: &N) -> OccurrenceRule {
    let tag = node.tag_name();

    if tags::is_anchor(&tag) && node.has_non_empty_attribute("href") {
        OccurrenceRule::LinkAnchor
    } else if tags::is_container(&tag) {
        if node.has_descendant_matching(is_link_anchor) {
            OccurrenceRule::ContainerWithLink
        } else {
            OccurrenceRule::Container
        }
    } else if tags::is_list(&tag) {
        if node.has_descendant_matching(is_link_anchor) {
            OccurrenceRule::ListWithLink
        } else {
            OccurrenceRule::List
        }
    } else if tags::is_heading(&tag) {
        if node.has_descendant_matching(is_link_anchor) {
            OccurrenceRule::HeadingWithLink
        } else {
            OccurrenceRule::Heading
        }
    } else if node.has_non_empty_attribute("href") {
        OccurrenceRule::AlternateLink
    } else {
        OccurrenceRule::Other
    }
}

/// Usefulness score of one element.
#[inline]
#[must_use]
pub fn occurrence_score<N: MarkupNode>(node: &N) -> u32 {
    classify(node).score()
}

/// Structural preference score of one element given its selector path.
///
/// The list-ancestor bonus only sees ancestors included in `path`, so at
/// `max_depth = 1` it never applies.
#[must_use]
pub fn preference_score<N: MarkupNode>(node: &N, path: &SelectorPath) -> u32 {
    let tag = node.tag_name();
    let mut score = 0;

    if tags::is_anchor(&tag) {
        score += ANCHOR_PREFERENCE;
        if path.has_list_ancestor() {
            score += NESTED_ANCHOR_BONUS;
        }
    }
    if tags::is_list_structure(&tag) {
        score += LIST_PREFERENCE;
    }
    score
}
