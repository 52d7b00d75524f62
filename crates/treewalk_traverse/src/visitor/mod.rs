//! Visitor pattern on top of the walkers.
//!
//! # Overview
//!
//! - [`Visitor`] - Callbacks for `Pre`, `Leaf` and `Post` steps
//! - [`walk`] - Creates a walker from [`WalkOptions`] and drives it
//! - [`walk_with`] - Drives an existing walker
//! - [`leaf_visitor`] / [`FnVisitor`] - Closure-based visitors
//!
//! # Examples
//!
//! ## Collecting Leaves
//!
//! ```rust
//! use treewalk_traverse::{WalkOptions, leaf_visitor, walk};
//!
//! let children = |n: &u32| (*n < 4).then(|| vec![n * 2, n * 2 + 1]);
//!
//! let mut leaves = Vec::new();
//! let _ = walk(1u32, WalkOptions::new(children), &mut leaf_visitor(|n: &u32, _| leaves.push(*n)));
//! assert_eq!(leaves, vec![4, 5, 6, 7]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use treewalk_traverse::{VisitContext, Visitor, WalkOptions, walk};
//!
//! struct FirstDeepLeaf;
//!
//! impl Visitor<u32, u32> for FirstDeepLeaf {
//!     fn visit(&mut self, node: &u32, ctx: &VisitContext<u32>) -> ControlFlow<u32> {
//!         if ctx.parents.len() >= 2 {
//!             return ControlFlow::Break(*node);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let children = |n: &u32| (*n < 4).then(|| vec![n * 2, n * 2 + 1]);
//! let found = walk(1u32, WalkOptions::new(children), &mut FirstDeepLeaf);
//! assert_eq!(found, ControlFlow::Break(4));
//! ```

mod visit;
mod walk;

pub use visit::{FnVisitor, LeafVisitor, VisitContext, VisitResult, Visitor, leaf_visitor};
pub use walk::{WalkOptions, walk, walk_with};
