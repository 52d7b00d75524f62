//! Breadth-first walker.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::{ChildrenAccessor, TraversalState};

use super::TreeWalker;

/// An expanded node, shared by the frames of its children.
#[derive(Debug)]
struct Ancestor<N> {
    value: N,
    parent: Option<Rc<Ancestor<N>>>,
}

#[derive(Debug)]
struct QueueFrame<N> {
    value: N,
    parent: Option<Rc<Ancestor<N>>>,
    /// Children read when this frame was enqueued. Empty for leaves.
    children: Vec<N>,
    /// Synthetic re-visit that emits `Post` for an already expanded node.
    post: bool,
}

/// A tree walker for breadth-first traversal.
///
/// All nodes of a level are emitted before any node of the next level.
/// When a `Pre` node is expanded, its children are enqueued followed by a
/// synthetic `Post` frame for the node itself, so its `Post` is emitted once
/// the queue has passed over all of its children.
///
/// A node's children are read once, when the node is enqueued. Mutating a
/// node that is already queued, including from a `pre_visit` callback on
/// that very node, has no effect on the running traversal.
///
/// Frames are popped off the queue as they are emitted. Parents are reached
/// through reference-counted links, which are freed along with the last
/// queued frame below them.
#[derive(Debug)]
pub struct BreadthFirstWalker<N, A> {
    accessor: A,
    queue: VecDeque<QueueFrame<N>>,
    current: Option<QueueFrame<N>>,
    state: TraversalState,
}

impl<N, A> BreadthFirstWalker<N, A>
where
    N: Clone,
    A: ChildrenAccessor<N>,
{
    /// Creates a walker positioned before `root`.
    pub fn new(root: N, accessor: A) -> Self {
        let mut walker = Self {
            accessor,
            queue: VecDeque::new(),
            current: None,
            state: TraversalState::Leaf,
        };
        let frame = walker.frame(root, None);
        walker.queue.push_back(frame);
        walker
    }

    fn frame(&self, value: N, parent: Option<Rc<Ancestor<N>>>) -> QueueFrame<N> {
        let children = self.accessor.non_empty_children(&value).unwrap_or_default();
        QueueFrame {
            value,
            parent,
            children,
            post: false,
        }
    }

    /// Enqueues the children of the current frame, then its `Post` frame.
    fn expand(&mut self) {
        let Some(frame) = self.current.as_mut() else {
            return;
        };
        if frame.post || frame.children.is_empty() {
            return;
        }
        let children = std::mem::take(&mut frame.children);
        let ancestor = Rc::new(Ancestor {
            value: frame.value.clone(),
            parent: frame.parent.clone(),
        });
        let post = QueueFrame {
            value: frame.value.clone(),
            parent: frame.parent.clone(),
            children: Vec::new(),
            post: true,
        };
        for child in children {
            let frame = self.frame(child, Some(Rc::clone(&ancestor)));
            self.queue.push_back(frame);
        }
        self.queue.push_back(post);
    }
}

impl<N, A> TreeWalker for BreadthFirstWalker<N, A>
where
    N: Clone,
    A: ChildrenAccessor<N>,
{
    type Node = N;

    fn current(&self) -> Option<&N> {
        self.current.as_ref().map(|frame| &frame.value)
    }

    #[inline]
    fn state(&self) -> TraversalState {
        self.state
    }

    fn next(&mut self) -> Option<N> {
        if self.state.is_end() {
            return None;
        }
        self.expand();
        let Some(frame) = self.queue.pop_front() else {
            self.current = None;
            self.state = TraversalState::End;
            return None;
        };
        self.state = if frame.post {
            TraversalState::Post
        } else if frame.children.is_empty() {
            TraversalState::Leaf
        } else {
            TraversalState::Pre
        };
        let value = frame.value.clone();
        self.current = Some(frame);
        Some(value)
    }

    fn parents(&self) -> Vec<N> {
        let mut parents = Vec::new();
        let mut parent = self.current.as_ref().and_then(|frame| frame.parent.as_deref());
        while let Some(ancestor) = parent {
            parents.push(ancestor.value.clone());
            parent = ancestor.parent.as_deref();
        }
        parents.reverse();
        parents
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Node {
        name: &'static str,
        children: Vec<Rc<RefCell<Node>>>,
    }

    type Handle = Rc<RefCell<Node>>;

    fn node(name: &'static str, children: Vec<Handle>) -> Handle {
        Rc::new(RefCell::new(Node { name, children }))
    }

    fn children(handle: &Handle) -> Option<Vec<Handle>> {
        Some(handle.borrow().children.clone())
    }

    fn name(handle: &Handle) -> &'static str {
        handle.borrow().name
    }

    fn sample() -> Handle {
        node(
            "root",
            vec![
                node("A", vec![]),
                node("B", vec![node("gA", vec![]), node("gB", vec![]), node("gC", vec![])]),
                node("C", vec![]),
            ],
        )
    }

    #[test]
    fn test_single_node_is_a_leaf() {
        let mut walker = BreadthFirstWalker::new(node("hoge", vec![]), children);

        assert_eq!(walker.next().as_ref().map(name), Some("hoge"));
        assert_eq!(walker.state(), TraversalState::Leaf);
        assert_eq!(walker.current().map(name), Some("hoge"));

        assert!(walker.next().is_none());
        assert_eq!(walker.state(), TraversalState::End);
    }

    #[test]
    fn test_levels_before_descendants() {
        let walker = BreadthFirstWalker::new(sample(), children);
        let order: Vec<_> = walker
            .into_steps()
            .filter(|step| step.state != TraversalState::Post)
            .map(|step| name(&step.node))
            .collect();

        assert_eq!(order, vec!["root", "A", "B", "C", "gA", "gB", "gC"]);
    }

    #[test]
    fn test_parents_follow_back_references() {
        let mut walker = BreadthFirstWalker::new(sample(), children);

        let mut found = Vec::new();
        while let Some(current) = walker.next() {
            let parents: Vec<_> = walker.parents().iter().map(name).collect();
            found.push(format!("{} {} [{}]", walker.state(), name(&current), parents.join(",")));
        }

        assert_eq!(
            found,
            vec![
                "PRE root []",
                "LEAF A [root]",
                "PRE B [root]",
                "LEAF C [root]",
                "POST root []",
                "LEAF gA [root,B]",
                "LEAF gB [root,B]",
                "LEAF gC [root,B]",
                "POST B [root]",
            ]
        );
    }

    #[test]
    fn test_children_added_during_pre_are_not_observed() {
        let root = node("root", vec![node("a", vec![])]);
        let mut walker = BreadthFirstWalker::new(root.clone(), children);

        walker.next();
        assert_eq!(walker.state(), TraversalState::Pre);
        root.borrow_mut().children.push(node("added", vec![]));

        let rest: Vec<_> = (&mut walker)
            .into_steps()
            .map(|step| format!("{} {}", step.state, name(&step.node)))
            .collect();
        assert_eq!(rest, vec!["LEAF a", "POST root"]);
    }

    #[test]
    fn test_accessor_is_called_once_per_node() {
        let calls = RefCell::new(0usize);
        let counting = |handle: &Handle| {
            *calls.borrow_mut() += 1;
            children(handle)
        };

        let walker = BreadthFirstWalker::new(sample(), counting);
        assert_eq!(walker.into_steps().count(), 9);
        assert_eq!(*calls.borrow(), 7);
    }

    #[test]
    fn test_queue_stays_bounded_on_a_deep_chain() {
        let mut chain = node("leaf", vec![]);
        for _ in 0..5000 {
            chain = node("link", vec![chain]);
        }
        let mut walker = BreadthFirstWalker::new(chain, children);

        let mut steps = 0;
        let mut peak = 0;
        while walker.next().is_some() {
            steps += 1;
            peak = peak.max(walker.queue.len());
        }

        assert_eq!(steps, 1 + 2 * 5000);
        assert!(peak <= 2, "queue grew to {peak}");
        assert!(walker.queue.is_empty());
    }

    #[test]
    fn test_queue_holds_one_level_at_a_time() {
        let mut walker = BreadthFirstWalker::new(sample(), children);

        let mut peak = 0;
        while walker.next().is_some() {
            peak = peak.max(walker.queue.len());
        }

        // `POST root`, the grandchildren and `POST B`.
        assert_eq!(peak, 5);
    }
}
