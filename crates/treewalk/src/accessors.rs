//! Children getter/setter pairs.

use std::fmt;
use std::rc::Rc;

use tracing::warn;
use treewalk_traverse::{ChildrenAccessor, TreeNode};

use crate::TreeError;

/// Shared children getter.
pub type GetChildren<N> = Rc<dyn Fn(&N) -> Option<Vec<N>>>;

/// Shared children setter.
pub type SetChildren<N> = Rc<dyn Fn(&mut N, Vec<N>)>;

/// The getter/setter pair a [`Tree`](crate::Tree) reads and rebuilds nodes with.
///
/// Cloning is cheap, both functions are reference counted.
pub struct Accessors<N> {
    get: GetChildren<N>,
    set: SetChildren<N>,
}

impl<N> Accessors<N> {
    /// Creates a pair from a getter and a setter.
    pub fn new(
        get: impl Fn(&N) -> Option<Vec<N>> + 'static,
        set: impl Fn(&mut N, Vec<N>) + 'static,
    ) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Reads the children of `node`.
    #[inline]
    pub fn get_children(&self, node: &N) -> Option<Vec<N>> {
        (self.get)(node)
    }

    /// Attaches `children` to `node`.
    #[inline]
    pub fn set_children(&self, node: &mut N, children: Vec<N>) {
        (self.set)(node, children)
    }
}

impl<N: TreeNode + 'static> Accessors<N> {
    /// The pair backed by the node's own [`TreeNode`] children field.
    pub fn node_children() -> Self {
        Self::new(|node: &N| node.children(), |node: &mut N, children| node.set_children(children))
    }
}

impl<N: TreeNode + 'static> Default for Accessors<N> {
    fn default() -> Self {
        Self::node_children()
    }
}

impl<N> Clone for Accessors<N> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<N> fmt::Debug for Accessors<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors").finish_non_exhaustive()
    }
}

impl<N> ChildrenAccessor<N> for Accessors<N> {
    #[inline]
    fn children(&self, node: &N) -> Option<Vec<N>> {
        self.get_children(node)
    }
}

/// Accessor configuration for the tree produced by
/// [`Tree::map_with`](crate::Tree::map_with).
///
/// `get_children` and `set_children` must be given both or neither. With
/// neither, the fallback pair is used: the node type's own [`TreeNode`]
/// field for [`MapOptions::default`], or whatever [`MapOptions::inherit`]
/// supplied.
pub struct MapOptions<M> {
    get_children: Option<GetChildren<M>>,
    set_children: Option<SetChildren<M>>,
    fallback: Option<Accessors<M>>,
}

impl<M> MapOptions<M> {
    /// Creates options without a fallback pair.
    pub fn new() -> Self {
        Self {
            get_children: None,
            set_children: None,
            fallback: None,
        }
    }

    /// Creates options falling back to `accessors`.
    pub fn inherit(accessors: Accessors<M>) -> Self {
        Self {
            fallback: Some(accessors),
            ..Self::new()
        }
    }

    /// Sets the children getter of the new tree.
    pub fn get_children(mut self, get: impl Fn(&M) -> Option<Vec<M>> + 'static) -> Self {
        self.get_children = Some(Rc::new(get));
        self
    }

    /// Sets the children setter of the new tree.
    pub fn set_children(mut self, set: impl Fn(&mut M, Vec<M>) + 'static) -> Self {
        self.set_children = Some(Rc::new(set));
        self
    }

    /// Falls back to `accessors` unless a fallback is already set.
    pub(crate) fn or_inherit(mut self, accessors: &Accessors<M>) -> Self {
        if self.fallback.is_none() {
            self.fallback = Some(accessors.clone());
        }
        self
    }

    /// Resolves the pair the new tree will use.
    pub(crate) fn resolve(self) -> Result<Accessors<M>, TreeError> {
        match (self.get_children, self.set_children) {
            (Some(get), Some(set)) => Ok(Accessors { get, set }),
            (None, None) => self.fallback.ok_or_else(|| {
                warn!("map options have no accessor pair and no fallback");
                TreeError::configuration(
                    "getChildren and setChildren are required when the node type has no default",
                )
            }),
            _ => {
                warn!("map options specify only one of getChildren and setChildren");
                Err(TreeError::configuration(
                    "You should specify getChildren and setChildren both or neither.",
                ))
            }
        }
    }
}

impl<M: TreeNode + 'static> Default for MapOptions<M> {
    fn default() -> Self {
        Self::inherit(Accessors::node_children())
    }
}

impl<M> fmt::Debug for MapOptions<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOptions")
            .field("get_children", &self.get_children.is_some())
            .field("set_children", &self.set_children.is_some())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
