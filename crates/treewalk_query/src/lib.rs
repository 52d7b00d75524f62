//! # treewalk_query
//!
//! Node lookup by selector for treewalk trees.
//!
//! A [`Matcher`] is a predicate over an ancestor path: the slice
//! `[root, ..., parent, node]` a walker is standing on. [`Selector`] is a
//! matcher compiled from a small CSS-like query language, evaluated against
//! nodes through the [`Selectable`] view.
//!
//! ## Syntax
//!
//! | Form | Matches |
//! |------|---------|
//! | `name` | nodes whose tag is `name` |
//! | `*` | any node |
//! | `[attr]` | nodes having attribute `attr` |
//! | `[attr=value]`, `[attr="a value"]` | nodes whose `attr` equals the value |
//! | `#id` | shorthand for `[id=id]` |
//! | `.class` | nodes carrying `class`, see [`Selectable::has_class`] |
//! | `a b` | `b` with an ancestor matching `a` |
//! | `a > b` | `b` whose parent matches `a` |
//! | `a, b` | either selector |
//!
//! Inside a quoted value a backslash takes the next character literally,
//! so `[title="say \"hi\""]` matches the title `say "hi"`.
//!
//! ## Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use treewalk_query::{Matcher, Selectable, Selector};
//!
//! struct Tag(&'static str);
//!
//! impl Selectable for Tag {
//!     fn tag(&self) -> Option<Cow<'_, str>> {
//!         Some(Cow::Borrowed(self.0))
//!     }
//!
//!     fn attribute(&self, _name: &str) -> Option<Cow<'_, str>> {
//!         None
//!     }
//! }
//!
//! let selector = Selector::parse("list > item").unwrap();
//! assert!(selector.matches(&[Tag("doc"), Tag("list"), Tag("item")]));
//! assert!(!selector.matches(&[Tag("list"), Tag("body"), Tag("item")]));
//! ```

mod error;
#[cfg(feature = "json")]
mod json;
mod matcher;
mod selector;

pub use error::SelectorError;
pub use matcher::{Matcher, Selectable};
pub use selector::{Selector, compile};
