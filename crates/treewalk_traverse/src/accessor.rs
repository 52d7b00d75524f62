//! Children access for arbitrary node types.

/// Reads the children of a node.
///
/// Returns `None` or an empty list if and only if the node is a leaf.
/// Walkers may call this more than once for the same node, the depth-first
/// walker re-reads children right before descending so that mutations made
/// by a `pre_visit` callback are observed.
///
/// Any `Fn(&N) -> Option<Vec<N>>` closure is an accessor.
pub trait ChildrenAccessor<N> {
    /// Returns the children of `node`, or `None` for a leaf.
    fn children(&self, node: &N) -> Option<Vec<N>>;

    /// Returns the children of `node` if there is at least one.
    #[inline]
    fn non_empty_children(&self, node: &N) -> Option<Vec<N>> {
        self.children(node).filter(|children| !children.is_empty())
    }

    /// Returns true if `node` currently has at least one child.
    #[inline]
    fn has_children(&self, node: &N) -> bool {
        self.non_empty_children(node).is_some()
    }
}

impl<N, F> ChildrenAccessor<N> for F
where
    F: Fn(&N) -> Option<Vec<N>>,
{
    #[inline]
    fn children(&self, node: &N) -> Option<Vec<N>> {
        self(node)
    }
}

/// A node type with a conventional children field.
///
/// Implementing this trait makes [`NodeChildren`] usable as the default
/// accessor, and lets containers attach rebuilt children to new nodes.
pub trait TreeNode: Sized {
    /// Returns the children of this node, or `None` for a leaf.
    fn children(&self) -> Option<Vec<Self>>;

    /// Replaces the children of this node.
    fn set_children(&mut self, children: Vec<Self>);
}

/// Accessor reading children through [`TreeNode::children`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeChildren;

impl<N: TreeNode> ChildrenAccessor<N> for NodeChildren {
    #[inline]
    fn children(&self, node: &N) -> Option<Vec<N>> {
        node.children()
    }
}
