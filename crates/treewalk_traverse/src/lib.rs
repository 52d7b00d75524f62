//! # treewalk_traverse
//!
//! Resumable traversal of application-defined trees.
//!
//! A walker is a cursor over a rooted tree whose children are read through a
//! [`ChildrenAccessor`]. Every call to [`TreeWalker::next`] moves the cursor
//! one step and classifies the node it lands on:
//!
//! - [`TraversalState::Pre`] - a node with children, before its descendants
//! - [`TraversalState::Leaf`] - a node without children
//! - [`TraversalState::Post`] - a node with children, after its descendants
//! - [`TraversalState::End`] - the traversal is finished
//!
//! ## Architecture
//!
//! - [`DepthFirstWalker`] and [`BreadthFirstWalker`] share the [`TreeWalker`] contract
//! - The depth-first walker keeps only the sibling chains along the current path
//! - The breadth-first walker drops queue frames as it emits them
//! - [`walk`] drives any walker and dispatches to a [`Visitor`]
//!
//! ## Example
//!
//! ```rust
//! use treewalk_traverse::{DepthFirstWalker, TraversalState, TreeWalker};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Dir {
//!     name: &'static str,
//!     entries: Vec<Dir>,
//! }
//!
//! let root = Dir {
//!     name: "root",
//!     entries: vec![Dir { name: "a", entries: vec![] }],
//! };
//!
//! let mut walker = DepthFirstWalker::new(root, |dir: &Dir| Some(dir.entries.clone()));
//!
//! assert_eq!(walker.next().map(|d| d.name), Some("root"));
//! assert_eq!(walker.state(), TraversalState::Pre);
//! assert_eq!(walker.next().map(|d| d.name), Some("a"));
//! assert_eq!(walker.state(), TraversalState::Leaf);
//! assert_eq!(walker.next().map(|d| d.name), Some("root"));
//! assert_eq!(walker.state(), TraversalState::Post);
//! assert_eq!(walker.next(), None);
//! assert_eq!(walker.state(), TraversalState::End);
//! ```

mod accessor;
#[cfg(feature = "json")]
mod json;
mod state;
pub mod visitor;
pub mod walker;

pub use accessor::{ChildrenAccessor, NodeChildren, TreeNode};
pub use state::{Step, TraversalState};
pub use visitor::{
    FnVisitor, LeafVisitor, VisitContext, VisitResult, Visitor, WalkOptions, leaf_visitor, walk,
    walk_with,
};
pub use walker::{BreadthFirstWalker, DepthFirstWalker, Steps, TreeWalker, WalkerKind};
