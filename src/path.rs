//! Selector path construction.
//!
//! A [`SelectorPath`] names a structural position class of elements: the
//! descriptors (`tag[.class...][#id]`) of a node and its nearest ancestors,
//! outermost first, joined by `" > "`. Nodes whose last `max_depth` levels
//! share tag, classes and id map to the same path.

use std::fmt;

use serde::Serialize;

use crate::node::MarkupNode;
use crate::tags;

/// Separator between descriptors.
pub const PATH_SEPARATOR: &str = " > ";

/// Canonical ancestor-chain selector string, e.g. `ul.nav > li.item`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SelectorPath(String);

impl SelectorPath {
    /// Builds the path of `node` with at most `max_depth` descriptors.
    ///
    /// Walks up from the node until `max_depth` descriptors are collected or
    /// the document root is passed. A `max_depth` of 0 is treated as 1;
    /// callers validate depth through [`crate::Options`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use selector_scout::{dom, SelectorPath};
    ///
    /// let doc = dom::parse(r#"<ul class="nav"><li class="item"><a href="/">Home</a></li></ul>"#);
    /// let a = dom::first_match(&doc, "a").unwrap();
    ///
    /// assert_eq!(SelectorPath::build(&a, 2).as_str(), "li.item > a");
    /// assert_eq!(SelectorPath::build(&a, 3).as_str(), "ul.nav > li.item > a");
    /// ```
    #[must_use]
    pub fn build<N: MarkupNode>(node: &N, max_depth: usize) -> Self {
        let mut parts = Vec::with_capacity(max_depth.max(1));
        let mut current = Some(node.clone());

        while let Some(n) = current {
            parts.push(descriptor(&n));
            if parts.len() >= max_depth {
                break;
            }
            current = n.parent();
        }

        parts.reverse();
        Self(parts.join(PATH_SEPARATOR))
    }

    /// The path string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bare tag of every descriptor, outermost first.
    ///
    /// `ul.nav > li.item.active > a.link#cta` gives `["ul", "li", "a"]`.
    #[must_use]
    pub fn tag_tokens(&self) -> Vec<&str> {
        self.0
            .split('>')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let part = part.split('#').next().unwrap_or(part);
                part.split('.').next().unwrap_or(part)
            })
            .collect()
    }

    /// True when any descriptor except the last one is `li`, `ul` or `ol`.
    #[must_use]
    pub fn has_list_ancestor(&self) -> bool {
        let tokens = self.tag_tokens();
        let ancestors = tokens.len().saturating_sub(1);
        tokens[..ancestors].iter().any(|t| tags::is_list_structure(t))
    }

    /// Number of descriptors in the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tag_tokens().len()
    }
}

impl fmt::Display for SelectorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SelectorPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SelectorPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Descriptor of a single element: `tag[.class1.class2...][#id]`.
#[must_use]
pub fn descriptor<N: MarkupNode>(node: &N) -> String {
    let mut part = node.tag_name();
    let classes = node.class_tokens();
    if !classes.is_empty() {
        part.push('.');
        part.push_str(&classes.join("."));
    }
    if let Some(id) = node.id() {
        part.push('#');
        part.push_str(&id);
    }
    part
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    const NAV: &str = r#"
        <html><body>
            <ul class="nav main" id="top">
                <li class="item"><a href="/a" class="link" id="cta">A</a></li>
                <li><a href="/b">B</a></li>
            </ul>
        </body></html>
    "#;

    fn path_of(html: &str, css: &str, depth: usize) -> Option<String> {
        let doc = dom::parse(html);
        dom::first_match(&doc, css).map(|n| SelectorPath::build(&n, depth).to_string())
    }

    #[test]
    fn test_descriptor_shapes() {
        let doc = dom::parse(NAV);

        assert_eq!(dom::first_match(&doc, "ul").map(|n| descriptor(&n)).as_deref(), Some("ul.nav.main#top"));
        assert_eq!(dom::first_match(&doc, "#cta").map(|n| descriptor(&n)).as_deref(), Some("a.link#cta"));
        assert_eq!(dom::first_match(&doc, "body").map(|n| descriptor(&n)).as_deref(), Some("body"));
    }

    #[test]
    fn test_depth_one_is_own_descriptor() {
        assert_eq!(path_of(NAV, "#cta", 1).as_deref(), Some("a.link#cta"));
    }

    #[test]
    fn test_default_depth() {
        assert_eq!(path_of(NAV, "#cta", 2).as_deref(), Some("li.item > a.link#cta"));
        assert_eq!(path_of(NAV, "a[href='/b']", 2).as_deref(), Some("li > a"));
    }

    #[test]
    fn test_stops_at_document_root() {
        assert_eq!(path_of(NAV, "body", 10).as_deref(), Some("html > body"));
        assert_eq!(path_of(NAV, "html", 3).as_deref(), Some("html"));
    }

    #[test]
    fn test_zero_depth_behaves_as_one() {
        assert_eq!(path_of(NAV, "#cta", 0).as_deref(), Some("a.link#cta"));
    }

    #[test]
    fn test_tag_tokens() {
        let path = SelectorPath::from("ul.nav > li.item.active > a.link#cta");
        assert_eq!(path.tag_tokens(), vec!["ul", "li", "a"]);
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn test_has_list_ancestor() {
        assert!(SelectorPath::from("ul.nav > li.item > a.link").has_list_ancestor());
        assert!(!SelectorPath::from("div.gallery > span.caption").has_list_ancestor());
        // The node's own descriptor does not count
        assert!(!SelectorPath::from("div > li").has_list_ancestor());
        assert!(!SelectorPath::from("li").has_list_ancestor());
        assert!(!SelectorPath::from("").has_list_ancestor());
    }

    #[test]
    fn test_class_named_like_list_is_not_a_list() {
        assert!(!SelectorPath::from("div.li > a").has_list_ancestor());
    }
}
