//! Tree walkers.
//!
//! # Overview
//!
//! - [`TreeWalker`] - The cursor contract shared by every traversal order
//! - [`DepthFirstWalker`] - Pre-order and post-order combined
//! - [`BreadthFirstWalker`] - Siblings before descendants
//! - [`WalkerKind`] - Selects a walker by configuration
//! - [`Steps`] - Adapts a walker into an [`Iterator`]
//!
//! Walkers are single-use: they are bound to one root and one accessor and
//! advance monotonically until [`TraversalState::End`], which is idempotent.

mod breadth_first;
mod depth_first;

use serde::{Deserialize, Serialize};

use crate::{ChildrenAccessor, Step, TraversalState};

pub use breadth_first::BreadthFirstWalker;
pub use depth_first::DepthFirstWalker;

/// A resumable traversal cursor.
///
/// Before the first call to [`next`](TreeWalker::next) the cursor points at
/// nothing: `current()` is `None` and `state()` is a placeholder `Leaf`.
/// After every call, `state()` classifies the node that call returned.
pub trait TreeWalker {
    /// The node type produced by this walker.
    type Node;

    /// Returns the node returned by the last call to `next`.
    ///
    /// `None` before the traversal starts and after it ends.
    fn current(&self) -> Option<&Self::Node>;

    /// Returns the classification of the current node.
    fn state(&self) -> TraversalState;

    /// Moves to the next node and returns it.
    ///
    /// Returns `None` once the traversal has been completed, and keeps
    /// returning `None` on every later call.
    fn next(&mut self) -> Option<Self::Node>;

    /// Returns the ancestors of the current node.
    ///
    /// The first element is the root and the last element is the parent of
    /// the current node. Empty for the root.
    fn parents(&self) -> Vec<Self::Node>;

    /// Returns the depth of the current node (0 for the root).
    #[inline]
    fn depth(&self) -> usize {
        self.parents().len()
    }

    /// Converts this walker into an iterator over its steps.
    #[inline]
    fn into_steps(self) -> Steps<Self>
    where
        Self: Sized,
    {
        Steps { walker: self }
    }
}

impl<W: TreeWalker + ?Sized> TreeWalker for &mut W {
    type Node = W::Node;

    #[inline]
    fn current(&self) -> Option<&Self::Node> {
        (**self).current()
    }

    #[inline]
    fn state(&self) -> TraversalState {
        (**self).state()
    }

    #[inline]
    fn next(&mut self) -> Option<Self::Node> {
        (**self).next()
    }

    #[inline]
    fn parents(&self) -> Vec<Self::Node> {
        (**self).parents()
    }
}

impl<W: TreeWalker + ?Sized> TreeWalker for Box<W> {
    type Node = W::Node;

    #[inline]
    fn current(&self) -> Option<&Self::Node> {
        (**self).current()
    }

    #[inline]
    fn state(&self) -> TraversalState {
        (**self).state()
    }

    #[inline]
    fn next(&mut self) -> Option<Self::Node> {
        (**self).next()
    }

    #[inline]
    fn parents(&self) -> Vec<Self::Node> {
        (**self).parents()
    }
}

/// Iterator over the steps of a walker, ending at [`TraversalState::End`].
#[derive(Debug)]
pub struct Steps<W> {
    walker: W,
}

impl<W: TreeWalker> Steps<W> {
    /// Returns the underlying walker, e.g. to read `parents()` mid-iteration.
    #[inline]
    pub fn walker(&self) -> &W {
        &self.walker
    }
}

impl<W: TreeWalker> Iterator for Steps<W> {
    type Item = Step<W::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.walker.next()?;
        Some(Step {
            state: self.walker.state(),
            node,
        })
    }
}

/// Selects the traversal order used by [`walk`](crate::walk).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkerKind {
    /// [`DepthFirstWalker`].
    #[default]
    DepthFirst,
    /// [`BreadthFirstWalker`].
    BreadthFirst,
}

impl WalkerKind {
    /// Creates a walker of this kind over `root`.
    pub fn walker<'a, N, A>(self, root: N, accessor: A) -> Box<dyn TreeWalker<Node = N> + 'a>
    where
        N: Clone + 'a,
        A: ChildrenAccessor<N> + 'a,
    {
        match self {
            Self::DepthFirst => Box::new(DepthFirstWalker::new(root, accessor)),
            Self::BreadthFirst => Box::new(BreadthFirstWalker::new(root, accessor)),
        }
    }
}
