//! The tree container.
//!
//! A [`Tree`] pairs a root node with the [`Accessors`] used to read and
//! rebuild it. Every operation is a walk over the root:
//!
//! - `walk` / `walk_with_kind` drive a [`Visitor`]
//! - `leaves` (and `&Tree` iteration) yields leaves in depth-first order
//! - `reduce` / `map` / `filter` fold the tree bottom-up
//! - `get_node` finds the first node a selector matches

mod fold;
mod query;

use tracing::trace;
use treewalk_traverse::{
    DepthFirstWalker, Steps, TreeNode, TreeWalker, VisitResult, Visitor, WalkOptions, WalkerKind,
    walk,
};

use crate::Accessors;

/// A root node and its children accessors.
#[derive(Debug, Clone)]
pub struct Tree<N> {
    node: N,
    accessors: Accessors<N>,
}

impl<N: TreeNode + 'static> Tree<N> {
    /// Creates a tree reading children through [`TreeNode`].
    pub fn new(root: N) -> Self {
        Self::with_accessors(root, Accessors::node_children())
    }
}

impl<N> Tree<N> {
    /// Creates a tree with custom accessors.
    pub fn with_accessors(root: N, accessors: Accessors<N>) -> Self {
        Self {
            node: root,
            accessors,
        }
    }

    /// Returns the root node.
    #[inline]
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Consumes the tree, returning the root node.
    #[inline]
    pub fn into_node(self) -> N {
        self.node
    }

    /// Returns the accessors of this tree.
    #[inline]
    pub fn accessors(&self) -> &Accessors<N> {
        &self.accessors
    }
}

impl<N: Clone> Tree<N> {
    /// Walk options reading children with this tree's accessors.
    pub fn walk_options(&self) -> WalkOptions<Accessors<N>> {
        WalkOptions::new(self.accessors.clone())
    }

    /// Walks the tree depth-first.
    pub fn walk<V, B>(&self, visitor: &mut V) -> VisitResult<B>
    where
        V: Visitor<N, B> + ?Sized,
    {
        self.walk_with_kind(WalkerKind::DepthFirst, visitor)
    }

    /// Walks the tree with the given walker kind.
    pub fn walk_with_kind<V, B>(&self, kind: WalkerKind, visitor: &mut V) -> VisitResult<B>
    where
        V: Visitor<N, B> + ?Sized,
    {
        trace!(?kind, "walking tree");
        walk(self.node.clone(), self.walk_options().walker(kind), visitor)
    }

    /// Creates a fresh walker over the root.
    pub fn walker(&self, kind: WalkerKind) -> Box<dyn TreeWalker<Node = N> + '_> {
        kind.walker(self.node.clone(), self.accessors.clone())
    }

    /// Iterates over the leaves in depth-first order.
    ///
    /// Every call starts a new traversal.
    pub fn leaves(&self) -> Leaves<N> {
        Leaves {
            steps: DepthFirstWalker::new(self.node.clone(), self.accessors.clone()).into_steps(),
        }
    }
}

/// Iterator over the leaves of a [`Tree`].
///
/// Created by [`Tree::leaves`].
#[derive(Debug)]
pub struct Leaves<N> {
    steps: Steps<DepthFirstWalker<N, Accessors<N>>>,
}

impl<N: Clone> Iterator for Leaves<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.steps.find(|step| step.is_leaf()).map(|step| step.node)
    }
}

impl<N: Clone> IntoIterator for &Tree<N> {
    type Item = N;
    type IntoIter = Leaves<N>;

    fn into_iter(self) -> Leaves<N> {
        self.leaves()
    }
}
