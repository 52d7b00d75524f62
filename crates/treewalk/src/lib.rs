//! # treewalk
//!
//! Generic tree traversal with structure-preserving transforms.
//!
//! A [`Tree`] holds a root node and the [`Accessors`] that read and attach
//! its children. On top of the resumable walkers from
//! [`treewalk_traverse`] it offers:
//!
//! - [`Tree::walk`] - visitor-driven traversal, depth-first or breadth-first
//! - [`Tree::leaves`] - leaf iteration, repeatable
//! - [`Tree::reduce`] / [`Tree::map`] / [`Tree::filter`] - bottom-up folds
//! - [`Tree::get_node`] - lookup by selector, see [`treewalk_query`]
//!
//! With the default `json` feature, `serde_json::Value` documents are
//! trees out of the box (children in the `"children"` array).
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use treewalk::Tree;
//!
//! let tree = Tree::new(json!({
//!     "type": "dir",
//!     "name": "root",
//!     "children": [
//!         { "type": "file", "name": "a.txt" },
//!         { "type": "dir", "name": "src", "children": [{ "type": "file", "name": "lib.rs" }] }
//!     ]
//! }));
//!
//! let files: Vec<_> = tree.leaves().map(|n| n["name"].clone()).collect();
//! assert_eq!(files, vec![json!("a.txt"), json!("lib.rs")]);
//!
//! let lib = tree.get_node(r#"dir[name="src"] > file"#).unwrap();
//! assert_eq!(lib.map(|n| n["name"].clone()), Some(json!("lib.rs")));
//! ```

mod accessors;
mod error;
mod tree;

pub use accessors::{Accessors, GetChildren, MapOptions, SetChildren};
pub use error::TreeError;
pub use tree::{Leaves, Tree};

pub use treewalk_query::{Matcher, Selectable, Selector, SelectorError};
pub use treewalk_traverse::{
    BreadthFirstWalker, ChildrenAccessor, DepthFirstWalker, FnVisitor, LeafVisitor, NodeChildren,
    Step, Steps, TraversalState, TreeNode, TreeWalker, VisitContext, VisitResult, Visitor,
    WalkOptions, WalkerKind, leaf_visitor, walk, walk_with,
};
