//! Traversal state classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classification of the node a walker currently points at.
///
/// `Pre` and `Post` are only emitted for nodes whose accessor returned a
/// non-empty children list, `Leaf` for nodes without children. `End` is not
/// a node classification: it marks a finished traversal and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalState {
    /// The node has children, which have not been visited yet.
    Pre,
    /// The node has no children.
    Leaf,
    /// The node has children, all of which have been visited.
    Post,
    /// The traversal has been completed.
    End,
}

impl TraversalState {
    /// Returns true for the terminal `End` state.
    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    /// Returns the uppercase name used in logs and traces.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pre => "PRE",
            Self::Leaf => "LEAF",
            Self::Post => "POST",
            Self::End => "END",
        }
    }
}

impl fmt::Display for TraversalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single walker step: the node returned by `next()` and its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<N> {
    /// Classification of `node` at the time of the step.
    pub state: TraversalState,
    /// The node the walker moved to.
    pub node: N,
}

impl<N> Step<N> {
    /// Returns true if the step landed on a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.state == TraversalState::Leaf
    }
}
