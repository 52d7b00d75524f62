//! Node lookup.

use std::ops::ControlFlow;

use tracing::debug;
use treewalk_query::{Matcher, Selectable, Selector};
use treewalk_traverse::{VisitContext, VisitResult, Visitor};

use super::Tree;
use crate::TreeError;

/// Breaks with the first node whose ancestor path `matcher` accepts.
struct FindFirst<'m, M: ?Sized> {
    matcher: &'m M,
}

impl<M: ?Sized> FindFirst<'_, M> {
    fn check<N>(&self, node: &N, ctx: &VisitContext<N>) -> VisitResult<N>
    where
        N: Clone,
        M: Matcher<N>,
    {
        let mut path = ctx.parents.clone();
        path.push(node.clone());
        if self.matcher.matches(&path) {
            ControlFlow::Break(node.clone())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<N, M> Visitor<N, N> for FindFirst<'_, M>
where
    N: Clone,
    M: Matcher<N> + ?Sized,
{
    fn pre_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<N> {
        self.check(node, ctx)
    }

    fn visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<N> {
        self.check(node, ctx)
    }

    fn post_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<N> {
        self.check(node, ctx)
    }
}

impl<N: Clone> Tree<N> {
    /// Returns the first node, in depth-first order, that `matcher` accepts.
    ///
    /// The matcher sees `[root, ..., parent, node]` for every candidate.
    pub fn get_node_matching<M>(&self, matcher: &M) -> Option<N>
    where
        M: Matcher<N> + ?Sized,
    {
        match self.walk(&mut FindFirst { matcher }) {
            ControlFlow::Break(node) => Some(node),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Returns the first node matching the selector `query`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Selector`] if `query` is not a valid selector.
    pub fn get_node(&self, query: &str) -> Result<Option<N>, TreeError>
    where
        N: Selectable,
    {
        let selector = Selector::parse(query)?;
        let found = self.get_node_matching(&selector);
        debug!(query, found = found.is_some(), "node lookup");
        Ok(found)
    }

    /// Like [`get_node`](Self::get_node), wrapping the match in a tree
    /// with the same accessors.
    pub fn get_node_as_tree(&self, query: &str) -> Result<Option<Tree<N>>, TreeError>
    where
        N: Selectable,
    {
        Ok(self.get_node(query)?.map(|node| Tree {
            node,
            accessors: self.accessors.clone(),
        }))
    }
}
