//! Depth-first element traversal.
//!
//! [`Walker`] yields every element exactly once, parents before children,
//! siblings left to right (document order). It keeps an explicit stack so
//! deeply nested pages cannot overflow the call stack.

use crate::node::MarkupNode;

/// Lazy pre-order iterator over element nodes.
///
/// The iterator is finite and cannot be restarted; build a new one with
/// [`walk`] or [`walk_all`] to traverse again.
#[derive(Debug, Clone)]
pub struct Walker<N> {
    stack: Vec<N>,
}

/// Walks `root` and all of its descendants.
#[must_use]
pub fn walk<N: MarkupNode>(root: N) -> Walker<N> {
    Walker { stack: vec![root] }
}

/// Walks several sibling roots in order, e.g. the top-level elements of a
/// document. An empty iterator yields an empty walk.
#[must_use]
pub fn walk_all<N, I>(roots: I) -> Walker<N>
where
    N: MarkupNode,
    I: IntoIterator<Item = N>,
{
    let mut stack: Vec<N> = roots.into_iter().collect();
    stack.reverse();
    Walker { stack }
}

impl<N: MarkupNode> Iterator for Walker<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        // Reverse so the first child is popped next
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}
