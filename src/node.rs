//! The element abstraction the engine is written against.
//!
//! Any parser adapter implements [`MarkupNode`]; the walker, path builder,
//! scorers and aggregator only ever see this trait. [`crate::dom::DomNode`]
//! is the `dom_query` implementation.

use crate::walker;

/// A read-only element node of a parsed markup document.
///
/// Implementations are cheap handles into a tree owned elsewhere (hence the
/// `Clone` bound). Only element nodes are exposed: `parent()` returns `None`
/// at the document root and `children()` skips text, comment and other
/// non-element nodes.
pub trait MarkupNode: Clone {
    /// Lowercase tag name, e.g. `"div"`.
    fn tag_name(&self) -> String;

    /// Whitespace-separated tokens of the `class` attribute, in source order.
    fn class_tokens(&self) -> Vec<String>;

    /// Raw value of an attribute, if present (empty values included).
    fn attribute(&self, name: &str) -> Option<String>;

    /// Parent element, or `None` once the document root is reached.
    fn parent(&self) -> Option<Self>;

    /// Element children in document order.
    fn children(&self) -> Vec<Self>;

    /// The `id` attribute, treating an empty value as absent.
    fn id(&self) -> Option<String> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    /// True when the element has the attribute with a non-empty value.
    fn has_non_empty_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(|v| !v.is_empty())
    }

    /// True when any strict descendant satisfies `predicate`.
    fn has_descendant_matching<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Self) -> bool,
    {
        self.children()
            .into_iter()
            .any(|child| walker::walk(child).any(|n| predicate(&n)))
    }
}
