//! DOM adapter
//!
//! Implements [`MarkupNode`] on top of the `dom_query` crate and offers the
//! few document-level helpers the rest of the crate needs (parsing, top-level
//! elements, CSS lookup, text content).

use std::fmt;

pub use dom_query::{Document, NodeRef, Selection};

use crate::node::MarkupNode;

/// An element of a `dom_query` document.
///
/// A `Copy` handle: cloning never touches the tree.
#[derive(Clone, Copy)]
pub struct DomNode<'a>(NodeRef<'a>);

impl<'a> DomNode<'a> {
    /// Wraps a node handle, returning `None` for non-element nodes.
    #[must_use]
    pub fn new(node: NodeRef<'a>) -> Option<Self> {
        node.is_element().then_some(Self(node))
    }

    /// The underlying `dom_query` node.
    #[inline]
    #[must_use]
    pub fn node_ref(&self) -> NodeRef<'a> {
        self.0
    }

    /// Text content of the element and its descendants.
    #[must_use]
    pub fn text(&self) -> String {
        Selection::from(self.0).text().to_string()
    }
}

impl MarkupNode for DomNode<'_> {
    fn tag_name(&self) -> String {
        self.0
            .node_name()
            .map(|t| t.to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn class_tokens(&self) -> Vec<String> {
        self.0
            .attr("class")
            .map(|class| class.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attr(name).map(|v| v.to_string())
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(Self::new)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().into_iter().filter_map(Self::new).collect()
    }
}

impl fmt::Debug for DomNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DomNode").field(&self.tag_name()).finish()
    }
}

// === Document helpers ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Top-level elements of a document (normally just `<html>`).
#[must_use]
pub fn root_elements(doc: &Document) -> Vec<DomNode<'_>> {
    doc.root()
        .children()
        .into_iter()
        .filter_map(DomNode::new)
        .collect()
}

/// First element matching a CSS selector, if any.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<DomNode<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .copied()
        .and_then(DomNode::new)
}
