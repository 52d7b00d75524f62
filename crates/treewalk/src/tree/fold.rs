//! Bottom-up folds: `reduce`, `map` and `filter`.

use std::convert::Infallible;
use std::ops::ControlFlow;

use tracing::debug;
use treewalk_traverse::{VisitContext, VisitResult, Visitor};

use super::Tree;
use crate::{MapOptions, TreeError};

/// Collects folded values one subtree at a time.
///
/// `stack` starts with the outermost list; PRE opens a list for the
/// node's children and POST closes it.
struct Fold<T, F> {
    stack: Vec<Vec<T>>,
    step: F,
}

impl<T, F> Fold<T, F> {
    fn new(step: F) -> Self {
        Self {
            stack: vec![Vec::new()],
            step,
        }
    }

    fn push(&mut self, value: T) {
        if let Some(top) = self.stack.last_mut() {
            top.push(value);
        }
    }
}

impl<N, T, E, F> Visitor<N, E> for Fold<T, F>
where
    F: FnMut(Option<Vec<T>>, &N, &VisitContext<N>) -> Result<T, E>,
{
    fn pre_visit(&mut self, _node: &N, _ctx: &VisitContext<N>) -> VisitResult<E> {
        self.stack.push(Vec::new());
        ControlFlow::Continue(())
    }

    fn visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<E> {
        match (self.step)(None, node, ctx) {
            Ok(value) => {
                self.push(value);
                ControlFlow::Continue(())
            }
            Err(err) => ControlFlow::Break(err),
        }
    }

    fn post_visit(&mut self, node: &N, ctx: &VisitContext<N>) -> VisitResult<E> {
        let children = self.stack.pop().unwrap_or_default();
        match (self.step)(Some(children), node, ctx) {
            Ok(value) => {
                self.push(value);
                ControlFlow::Continue(())
            }
            Err(err) => ControlFlow::Break(err),
        }
    }
}

impl<N: Clone> Tree<N> {
    /// Runs `step` once per node in post-order.
    ///
    /// `step` receives `None` for a leaf and the folded children of a
    /// non-leaf node otherwise.
    fn fold<T, E, F>(&self, step: F) -> Result<T, E>
    where
        F: FnMut(Option<Vec<T>>, &N, &VisitContext<N>) -> Result<T, E>,
    {
        let mut fold = Fold::new(step);
        if let ControlFlow::Break(err) = self.walk::<_, E>(&mut fold) {
            return Err(err);
        }

        let root = fold
            .stack
            .pop()
            .and_then(|mut outer| outer.pop())
            .expect("the root is emitted as LEAF or POST exactly once");
        Ok(root)
    }

    /// Folds the tree bottom-up.
    ///
    /// `reducer` is called once per non-leaf node with the reduced values of
    /// its children, left to right. Leaves are converted with `Into` unless
    /// `initial` is given, in which case `reducer` is also called for every
    /// leaf with a copy of `initial` as its children.
    ///
    /// ```
    /// use treewalk::Tree;
    /// use serde_json::json;
    ///
    /// let tree = Tree::new(json!({
    ///     "value": 100,
    ///     "children": [{ "value": 10 }, { "value": 1 }]
    /// }));
    ///
    /// let total = tree.reduce(
    ///     |children: Vec<serde_json::Value>, node, _| {
    ///         let sum: i64 = children.iter().map(|c| c["value"].as_i64().unwrap_or(0)).sum();
    ///         serde_json::json!({ "value": sum + node["value"].as_i64().unwrap_or(0) })
    ///     },
    ///     None,
    /// );
    /// assert_eq!(total["value"], 111);
    /// ```
    pub fn reduce<T, R>(&self, mut reducer: R, initial: Option<Vec<T>>) -> T
    where
        N: Into<T>,
        T: Clone,
        R: FnMut(Vec<T>, &N, &VisitContext<N>) -> T,
    {
        let Ok(result) = self.fold::<T, Infallible, _>(|children, node, ctx| {
            Ok(match (children, &initial) {
                (Some(children), _) => reducer(children, node, ctx),
                (None, Some(seed)) => reducer(seed.clone(), node, ctx),
                (None, None) => node.clone().into(),
            })
        });
        debug!(seeded = initial.is_some(), "reduced tree");
        result
    }

    /// Folds the tree bottom-up, calling `reducer` for every node.
    ///
    /// Leaves receive a copy of `initial` as their children.
    pub fn reduce_seeded<T, R>(&self, mut reducer: R, initial: Vec<T>) -> T
    where
        T: Clone,
        R: FnMut(Vec<T>, &N, &VisitContext<N>) -> T,
    {
        let Ok(result) = self.fold::<T, Infallible, _>(|children, node, ctx| {
            Ok(reducer(children.unwrap_or_else(|| initial.clone()), node, ctx))
        });
        debug!(seeded = true, "reduced tree");
        result
    }

    /// Like [`reduce`](Self::reduce), but stops at the first error.
    pub fn try_reduce<T, E, R>(&self, mut reducer: R, initial: Option<Vec<T>>) -> Result<T, E>
    where
        N: Into<T>,
        T: Clone,
        R: FnMut(Vec<T>, &N, &VisitContext<N>) -> Result<T, E>,
    {
        let result = self.fold(|children, node, ctx| match (children, &initial) {
            (Some(children), _) => reducer(children, node, ctx),
            (None, Some(seed)) => reducer(seed.clone(), node, ctx),
            (None, None) => Ok(node.clone().into()),
        });
        if result.is_err() {
            debug!("reducer failed, walk aborted");
        }
        result
    }

    /// Maps every node, keeping the shape of the tree.
    ///
    /// `f` is called exactly once per node, in post-order. The new tree uses
    /// the same accessors.
    pub fn map<F>(&self, f: F) -> Tree<N>
    where
        F: FnMut(&N) -> N,
    {
        let accessors = self.accessors.clone();
        let node = self.map_nodes(f, |mapped, children| accessors.set_children(mapped, children));
        Tree { node, accessors }
    }

    /// Maps every node into a tree of another node type.
    ///
    /// The children of each mapped node are attached with the setter
    /// resolved from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Configuration`] if `options` holds only one of
    /// the getter/setter pair, or neither pair nor fallback.
    pub fn map_with<M, F>(&self, f: F, options: MapOptions<M>) -> Result<Tree<M>, TreeError>
    where
        F: FnMut(&N) -> M,
    {
        let accessors = options.resolve()?;
        let node = self.map_nodes(f, |mapped, children| accessors.set_children(mapped, children));
        Ok(Tree { node, accessors })
    }

    fn map_nodes<M, F, S>(&self, mut f: F, mut attach: S) -> M
    where
        F: FnMut(&N) -> M,
        S: FnMut(&mut M, Vec<M>),
    {
        let mut mapped_count = 0usize;
        let Ok(root) = self.fold::<M, Infallible, _>(|children, node, _| {
            mapped_count += 1;
            let mut mapped = f(node);
            if let Some(children) = children {
                attach(&mut mapped, children);
            }
            Ok(mapped)
        });
        debug!(nodes = mapped_count, "mapped tree");
        root
    }

    /// Keeps the nodes `keep` accepts.
    ///
    /// A rejected node drops its whole subtree. Kept non-leaf nodes are
    /// cloned and receive their kept children through the setter, so a
    /// node whose children were all rejected becomes a leaf. Returns `None`
    /// if the root is rejected.
    pub fn filter<P>(&self, keep: P) -> Option<Tree<N>>
    where
        P: FnMut(&N, &VisitContext<N>) -> bool,
    {
        let accessors = self.accessors.clone();
        let node = self.filter_nodes(keep, |kept, children| accessors.set_children(kept, children));
        node.map(|node| Tree { node, accessors })
    }

    /// Like [`filter`](Self::filter), attaching kept children with the
    /// setter resolved from `options`.
    ///
    /// When `options` names neither accessor and has no fallback, the
    /// tree's own accessors are used.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Configuration`] if `options` holds only one of
    /// the getter/setter pair.
    pub fn filter_with<P>(
        &self,
        keep: P,
        options: MapOptions<N>,
    ) -> Result<Option<Tree<N>>, TreeError>
    where
        P: FnMut(&N, &VisitContext<N>) -> bool,
    {
        let accessors = options.or_inherit(&self.accessors).resolve()?;
        let node = self.filter_nodes(keep, |kept, children| accessors.set_children(kept, children));
        Ok(node.map(|node| Tree { node, accessors }))
    }

    fn filter_nodes<P, S>(&self, mut keep: P, mut attach: S) -> Option<N>
    where
        P: FnMut(&N, &VisitContext<N>) -> bool,
        S: FnMut(&mut N, Vec<N>),
    {
        let mut rejected = 0usize;
        let Ok(root) = self.fold::<Option<N>, Infallible, _>(|children, node, ctx| {
            if !keep(node, ctx) {
                rejected += 1;
                return Ok(None);
            }
            let mut kept = node.clone();
            if let Some(children) = children {
                attach(&mut kept, children.into_iter().flatten().collect());
            }
            Ok(Some(kept))
        });
        debug!(rejected, root_kept = root.is_some(), "filtered tree");
        root
    }
}
