//! Visitor trait and closure adapters.

use std::ops::ControlFlow;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(value)` - stop the walk and return `value` from it
pub type VisitResult<B = ()> = ControlFlow<B>;

/// What a visitor knows about the current step besides the node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitContext<N> {
    /// Ancestors of the node, root first. Empty for the root.
    pub parents: Vec<N>,
    /// True if and only if the walker is on a leaf node.
    pub is_on_leaf: bool,
}

impl<N> VisitContext<N> {
    /// Returns the depth of the node (0 for the root).
    #[inline]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Returns the parent of the node, if any.
    #[inline]
    pub fn parent(&self) -> Option<&N> {
        self.parents.last()
    }

    /// Returns true if the node is the root of the walk.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Callbacks invoked by [`walk`](crate::walk).
///
/// `pre_visit` and `post_visit` are called **only** for non-leaf nodes,
/// `visit` is called **only** for leaf nodes. Every method defaults to doing
/// nothing, so implement only the ones you need.
///
/// # Control Flow
///
/// Returning `ControlFlow::Break(b)` stops the walk immediately and makes
/// `walk` return `ControlFlow::Break(b)`. Side effects already applied are
/// not rolled back. Panics unwind through the walker untouched.
pub trait Visitor<N, B = ()> {
    /// Called for a non-leaf node before its descendants.
    #[inline]
    fn pre_visit(&mut self, _node: &N, _ctx: &VisitContext<N>) -> VisitResult<B> {
        ControlFlow::Continue(())
    }

    /// Called for a leaf node.
    #[inline]
    fn visit(&mut self, _node: &N, _ctx: &VisitContext<N>) -> VisitResult<B> {
        ControlFlow::Continue(())
    }

    /// Called for a non-leaf node after its descendants.
    #[inline]
    fn post_visit(&mut self, _node: &N, _ctx: &VisitContext<N>) -> VisitResult<B> {
        ControlFlow::Continue(())
    }
}

impl<N, B, V: Visitor<N, B> + ?Sized> Visitor<N, B> for &mut V {
    #[inline]
    fn pre_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<B> {
        (**self).pre_visit(node, ctx)
    }

    #[inline]
    fn visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<B> {
        (**self).visit(node, ctx)
    }

    #[inline]
    fn post_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<B> {
        (**self).post_visit(node, ctx)
    }
}

/// A visitor that calls a closure on leaf nodes only.
///
/// Created by [`leaf_visitor`].
#[derive(Debug, Clone)]
pub struct LeafVisitor<F> {
    f: F,
}

/// Wraps a closure into a visitor that is called on leaf nodes only.
///
/// This is the shorthand for a visitor that only implements `visit`.
#[inline]
pub fn leaf_visitor<N, F>(f: F) -> LeafVisitor<F>
where
    F: FnMut(&N, &VisitContext<N>),
{
    LeafVisitor { f }
}

impl<N, F> Visitor<N> for LeafVisitor<F>
where
    F: FnMut(&N, &VisitContext<N>),
{
    #[inline]
    fn visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult {
        (self.f)(node, ctx);
        ControlFlow::Continue(())
    }
}

type Callback<'f, N> = Box<dyn FnMut(&N, &VisitContext<N>) + 'f>;

/// A visitor assembled from independent closures.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use treewalk_traverse::{FnVisitor, WalkOptions, walk};
///
/// let children = |n: &u32| (*n == 0).then(|| vec![1, 2]);
/// let events = RefCell::new(Vec::new());
///
/// let mut visitor = FnVisitor::new()
///     .on_pre(|n: &u32, _| events.borrow_mut().push(format!("pre {n}")))
///     .on_leaf(|n: &u32, _| events.borrow_mut().push(format!("leaf {n}")))
///     .on_post(|n: &u32, _| events.borrow_mut().push(format!("post {n}")));
/// let _ = walk(0u32, WalkOptions::new(children), &mut visitor);
/// drop(visitor);
///
/// assert_eq!(events.into_inner(), vec!["pre 0", "leaf 1", "leaf 2", "post 0"]);
/// ```
pub struct FnVisitor<'f, N> {
    pre: Option<Callback<'f, N>>,
    leaf: Option<Callback<'f, N>>,
    post: Option<Callback<'f, N>>,
}

impl<'f, N> FnVisitor<'f, N> {
    /// Creates a visitor that does nothing.
    pub fn new() -> Self {
        Self {
            pre: None,
            leaf: None,
            post: None,
        }
    }

    /// Sets the callback for non-leaf nodes before their descendants.
    pub fn on_pre(mut self, f: impl FnMut(&N, &VisitContext<N>) + 'f) -> Self {
        self.pre = Some(Box::new(f));
        self
    }

    /// Sets the callback for leaf nodes.
    pub fn on_leaf(mut self, f: impl FnMut(&N, &VisitContext<N>) + 'f) -> Self {
        self.leaf = Some(Box::new(f));
        self
    }

    /// Sets the callback for non-leaf nodes after their descendants.
    pub fn on_post(mut self, f: impl FnMut(&N, &VisitContext<N>) + 'f) -> Self {
        self.post = Some(Box::new(f));
        self
    }
}

impl<N> Default for FnVisitor<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Visitor<N> for FnVisitor<'_, N> {
    fn pre_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult {
        if let Some(f) = self.pre.as_mut() {
            f(node, ctx);
        }
        ControlFlow::Continue(())
    }

    fn visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult {
        if let Some(f) = self.leaf.as_mut() {
            f(node, ctx);
        }
        ControlFlow::Continue(())
    }

    fn post_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult {
        if let Some(f) = self.post.as_mut() {
            f(node, ctx);
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_accessors() {
        let ctx = VisitContext {
            parents: vec!["root", "child"],
            is_on_leaf: true,
        };
        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.parent(), Some(&"child"));
        assert!(!ctx.is_root());

        let root = VisitContext::<&str> {
            parents: vec![],
            is_on_leaf: false,
        };
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn test_default_methods_continue() {
        struct Nothing;
        impl Visitor<u8> for Nothing {}

        let ctx = VisitContext {
            parents: vec![],
            is_on_leaf: true,
        };
        let mut nothing = Nothing;
        assert!(nothing.pre_visit(&0, &ctx).is_continue());
        assert!(nothing.visit(&0, &ctx).is_continue());
        assert!(nothing.post_visit(&0, &ctx).is_continue());
    }

    #[test]
    fn test_leaf_visitor_ignores_non_leaf_callbacks() {
        let mut seen = Vec::new();
        let ctx = VisitContext {
            parents: vec![],
            is_on_leaf: false,
        };
        {
            let mut visitor = leaf_visitor(|n: &u8, _: &VisitContext<u8>| seen.push(*n));
            let _ = visitor.pre_visit(&1, &ctx);
            let _ = visitor.visit(&2, &ctx);
            let _ = visitor.post_visit(&3, &ctx);
        }
        assert_eq!(seen, vec![2]);
    }
}
