//! The matcher capability.

use std::borrow::Cow;

/// A predicate over an ancestor path.
///
/// `path` is `[root, ..., parent, node]`; the candidate node is its last
/// element. Any `Fn(&[N]) -> bool` closure is a matcher.
pub trait Matcher<N> {
    /// Returns true if the last node of `path` matches.
    fn matches(&self, path: &[N]) -> bool;
}

impl<N, F> Matcher<N> for F
where
    F: Fn(&[N]) -> bool,
{
    #[inline]
    fn matches(&self, path: &[N]) -> bool {
        self(path)
    }
}

/// The view of a node that selectors are evaluated against.
pub trait Selectable {
    /// Returns the type name of the node, matched by `name` selectors.
    fn tag(&self) -> Option<Cow<'_, str>>;

    /// Returns the value of an attribute, matched by `[attr]` selectors.
    fn attribute(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Returns true if the node carries `class`, matched by `.class`
    /// selectors.
    ///
    /// By default the `class` attribute is read as a whitespace-separated
    /// list.
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|word| word == class))
    }
}

impl<T: Selectable + ?Sized> Selectable for &T {
    #[inline]
    fn tag(&self) -> Option<Cow<'_, str>> {
        (**self).tag()
    }

    #[inline]
    fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).attribute(name)
    }

    #[inline]
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

impl<T: Selectable + ?Sized> Selectable for std::rc::Rc<T> {
    #[inline]
    fn tag(&self) -> Option<Cow<'_, str>> {
        (**self).tag()
    }

    #[inline]
    fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).attribute(name)
    }

    #[inline]
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}
