//! Depth-first walker.

use crate::{ChildrenAccessor, TraversalState};

use super::TreeWalker;

/// A frame in the depth-first work list.
#[derive(Debug)]
struct Frame<N> {
    value: N,
    /// Index of the next sibling frame.
    next: Option<usize>,
}

/// A tree walker for depth-first traversal.
///
/// Non-leaf nodes are emitted twice: as `Pre` before their descendants and
/// as `Post` after them. Children are read again when the walker leaves a
/// `Pre` node, so children added (or removed) by a `pre_visit` callback are
/// honored on the same pass.
///
/// Frames are kept in an arena and linked by index. The ancestor stack holds
/// the frames of `Pre` nodes that are waiting for their `Post`. A node's
/// children are appended as one contiguous chain and dropped again when the
/// node is popped, so the arena only ever holds the sibling chains along the
/// current path.
#[derive(Debug)]
pub struct DepthFirstWalker<N, A> {
    accessor: A,
    frames: Vec<Frame<N>>,
    cursor: usize,
    started: bool,
    stack: Vec<Ancestor>,
    state: TraversalState,
}

/// A `Pre` node waiting for its `Post`.
#[derive(Debug, Clone, Copy)]
struct Ancestor {
    frame: usize,
    /// Head of the node's child chain. Everything from here on is its subtree.
    chain: usize,
}

impl<N, A> DepthFirstWalker<N, A>
where
    N: Clone,
    A: ChildrenAccessor<N>,
{
    /// Creates a walker positioned before `root`.
    pub fn new(root: N, accessor: A) -> Self {
        Self {
            accessor,
            frames: vec![Frame {
                value: root,
                next: None,
            }],
            cursor: 0,
            started: false,
            stack: Vec::new(),
            state: TraversalState::Leaf,
        }
    }

    /// Moves the cursor onto `index` and classifies its node.
    fn enter(&mut self, index: usize) -> Option<N> {
        let value = self.frames[index].value.clone();
        self.state = if self.accessor.has_children(&value) {
            TraversalState::Pre
        } else {
            TraversalState::Leaf
        };
        self.cursor = index;
        Some(value)
    }

    /// Appends `children` as a linked chain of frames and returns the head.
    fn push_chain(&mut self, children: Vec<N>) -> usize {
        let first = self.frames.len();
        let last = first + children.len() - 1;
        self.frames
            .extend(children.into_iter().enumerate().map(|(offset, value)| {
                let index = first + offset;
                Frame {
                    value,
                    next: (index < last).then_some(index + 1),
                }
            }));
        first
    }
}

impl<N, A> TreeWalker for DepthFirstWalker<N, A>
where
    N: Clone,
    A: ChildrenAccessor<N>,
{
    type Node = N;

    fn current(&self) -> Option<&N> {
        if !self.started || self.state.is_end() {
            return None;
        }
        Some(&self.frames[self.cursor].value)
    }

    #[inline]
    fn state(&self) -> TraversalState {
        self.state
    }

    fn next(&mut self) -> Option<N> {
        match self.state {
            TraversalState::End => None,
            TraversalState::Leaf | TraversalState::Post => {
                let successor = if self.started {
                    self.frames[self.cursor].next
                } else {
                    self.started = true;
                    Some(0)
                };
                if let Some(index) = successor {
                    return self.enter(index);
                }
                match self.stack.pop() {
                    Some(Ancestor { frame, chain }) => {
                        self.frames.truncate(chain);
                        self.cursor = frame;
                        self.state = TraversalState::Post;
                        Some(self.frames[frame].value.clone())
                    }
                    None => {
                        self.state = TraversalState::End;
                        None
                    }
                }
            }
            TraversalState::Pre => {
                // Children may have changed since the node was entered.
                let value = self.frames[self.cursor].value.clone();
                match self.accessor.non_empty_children(&value) {
                    None => {
                        self.state = TraversalState::Post;
                        Some(value)
                    }
                    Some(children) => {
                        let chain = self.push_chain(children);
                        self.stack.push(Ancestor {
                            frame: self.cursor,
                            chain,
                        });
                        self.enter(chain)
                    }
                }
            }
        }
    }

    fn parents(&self) -> Vec<N> {
        self.stack
            .iter()
            .map(|ancestor| self.frames[ancestor.frame].value.clone())
            .collect()
    }

    #[inline]
    fn depth(&self) -> usize {
        self.stack.len()
    }
}
