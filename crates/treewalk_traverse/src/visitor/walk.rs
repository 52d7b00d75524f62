//! The walk driver.
//!
//! [`walk_with`] is the single loop every higher-level operation goes
//! through: step the walker, read its state and parents, dispatch to the
//! visitor.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::walker::{BreadthFirstWalker, DepthFirstWalker, TreeWalker, WalkerKind};
use crate::{ChildrenAccessor, NodeChildren, TraversalState};

use super::visit::{VisitContext, VisitResult, Visitor};

/// Options for [`walk`].
#[derive(Debug, Clone, Default)]
pub struct WalkOptions<A> {
    /// How children are read from a node.
    pub accessor: A,
    /// Which walker drives the traversal.
    /// Default: [`WalkerKind::DepthFirst`]
    pub kind: WalkerKind,
}

impl<A> WalkOptions<A> {
    /// Creates depth-first options reading children with `accessor`.
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            kind: WalkerKind::default(),
        }
    }

    /// Sets the walker kind.
    pub fn walker(mut self, kind: WalkerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Switches to breadth-first traversal.
    pub fn breadth_first(self) -> Self {
        self.walker(WalkerKind::BreadthFirst)
    }

    /// Replaces the accessor, keeping the walker kind.
    pub fn accessor<B>(self, accessor: B) -> WalkOptions<B> {
        WalkOptions {
            accessor,
            kind: self.kind,
        }
    }
}

impl WalkOptions<NodeChildren> {
    /// Creates depth-first options for [`TreeNode`](crate::TreeNode) types.
    pub fn node_children() -> Self {
        Self::new(NodeChildren)
    }
}

/// Walks the tree under `root`, calling `visitor` at every step.
///
/// The walker is chosen by `options.kind`. Returns `ControlFlow::Break` as
/// soon as a visitor method breaks, `ControlFlow::Continue(())` once the
/// traversal has been completed.
pub fn walk<N, A, V, B>(root: N, options: WalkOptions<A>, visitor: &mut V) -> VisitResult<B>
where
    N: Clone,
    A: ChildrenAccessor<N>,
    V: Visitor<N, B> + ?Sized,
{
    match options.kind {
        WalkerKind::DepthFirst => {
            walk_with(&mut DepthFirstWalker::new(root, options.accessor), visitor)
        }
        WalkerKind::BreadthFirst => {
            walk_with(&mut BreadthFirstWalker::new(root, options.accessor), visitor)
        }
    }
}

/// Drives `walker` until it ends or `visitor` breaks.
///
/// The walker does not have to be fresh: a partially advanced walker is
/// resumed from its current position.
pub fn walk_with<W, V, B>(walker: &mut W, visitor: &mut V) -> VisitResult<B>
where
    W: TreeWalker + ?Sized,
    V: Visitor<W::Node, B> + ?Sized,
{
    let mut counts = StepCounts::default();

    while let Some(node) = walker.next() {
        let state = walker.state();
        let ctx = VisitContext {
            parents: walker.parents(),
            is_on_leaf: state == TraversalState::Leaf,
        };
        trace!(%state, depth = ctx.depth(), "walk step");

        let flow = match state {
            TraversalState::Pre => {
                counts.pre += 1;
                visitor.pre_visit(&node, &ctx)
            }
            TraversalState::Leaf => {
                counts.leaf += 1;
                visitor.visit(&node, &ctx)
            }
            TraversalState::Post => {
                counts.post += 1;
                visitor.post_visit(&node, &ctx)
            }
            TraversalState::End => break,
        };

        if let ControlFlow::Break(value) = flow {
            debug!(
                "walk stopped by visitor after {} pre, {} leaf, {} post steps",
                counts.pre, counts.leaf, counts.post
            );
            return ControlFlow::Break(value);
        }
    }

    debug!(
        "walk completed: {} pre, {} leaf, {} post steps",
        counts.pre, counts.leaf, counts.post
    );
    ControlFlow::Continue(())
}

#[derive(Debug, Default)]
struct StepCounts {
    pre: usize,
    leaf: usize,
    post: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnVisitor, TreeNode, leaf_visitor};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        name: &'static str,
        children: Vec<Node>,
    }

    impl TreeNode for Node {
        fn children(&self) -> Option<Vec<Self>> {
            Some(self.children.clone())
        }

        fn set_children(&mut self, children: Vec<Self>) {
            self.children = children;
        }
    }

    fn leaf(name: &'static str) -> Node {
        Node {
            name,
            children: vec![],
        }
    }

    fn parent(name: &'static str, children: Vec<Node>) -> Node {
        Node { name, children }
    }

    fn sample() -> Node {
        parent(
            "root",
            vec![
                leaf("child A"),
                parent(
                    "child B",
                    vec![leaf("grandson A"), leaf("grandson B"), leaf("grandson C")],
                ),
                leaf("child C"),
            ],
        )
    }

    /// Records every callback as `"<kind> <name>"`.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor<Node> for Recorder {
        fn pre_visit(&mut self, node: &Node, ctx: &VisitContext<Node>) -> VisitResult {
            assert!(!ctx.is_on_leaf);
            self.events.push(format!("pre {}", node.name));
            ControlFlow::Continue(())
        }

        fn visit(&mut self, node: &Node, ctx: &VisitContext<Node>) -> VisitResult {
            assert!(ctx.is_on_leaf);
            self.events.push(format!("leaf {}", node.name));
            ControlFlow::Continue(())
        }

        fn post_visit(&mut self, node: &Node, ctx: &VisitContext<Node>) -> VisitResult {
            assert!(!ctx.is_on_leaf);
            self.events.push(format!("post {}", node.name));
            ControlFlow::Continue(())
        }
    }

    fn leaf_names(options: WalkOptions<NodeChildren>, root: Node) -> Vec<&'static str> {
        let mut found = Vec::new();
        let _ = walk(root, options, &mut leaf_visitor(|n: &Node, _| found.push(n.name)));
        found
    }

    #[test]
    fn test_depth_first_leaf_order() {
        assert_eq!(
            leaf_names(WalkOptions::node_children(), sample()),
            vec!["child A", "grandson A", "grandson B", "grandson C", "child C"]
        );
    }

    #[test]
    fn test_pre_and_leaf_order() {
        let names = RefCell::new(Vec::new());
        let mut visitor = FnVisitor::new()
            .on_pre(|n: &Node, _| names.borrow_mut().push(n.name))
            .on_leaf(|n: &Node, _| names.borrow_mut().push(n.name));

        let _ = walk(sample(), WalkOptions::node_children(), &mut visitor);
        let _ = walk(
            sample(),
            WalkOptions::node_children().breadth_first(),
            &mut visitor,
        );
        drop(visitor);

        let names = names.into_inner();
        assert_eq!(
            names[..7].to_vec(),
            vec!["root", "child A", "child B", "grandson A", "grandson B", "grandson C", "child C"]
        );
        assert_eq!(
            names[7..].to_vec(),
            vec!["root", "child A", "child B", "child C", "grandson A", "grandson B", "grandson C"]
        );
    }

    #[rstest]
    #[case::depth_first(WalkerKind::DepthFirst)]
    #[case::breadth_first(WalkerKind::BreadthFirst)]
    fn test_single_node_is_visited(#[case] kind: WalkerKind) {
        let options = WalkOptions::node_children().walker(kind);
        assert_eq!(leaf_names(options, leaf("hoge")), vec!["hoge"]);
    }

    #[rstest]
    #[case::depth_first(WalkerKind::DepthFirst)]
    #[case::breadth_first(WalkerKind::BreadthFirst)]
    fn test_nested_leaves_are_visited(#[case] kind: WalkerKind) {
        let root = parent("hoge", vec![parent("fuga", vec![leaf("deepfuga"), leaf("deepfuga2")])]);
        let options = WalkOptions::node_children().walker(kind);
        assert_eq!(leaf_names(options, root), vec!["deepfuga", "deepfuga2"]);
    }

    #[rstest]
    #[case::depth_first(WalkerKind::DepthFirst)]
    #[case::breadth_first(WalkerKind::BreadthFirst)]
    fn test_root_parents_are_empty(#[case] kind: WalkerKind) {
        let mut found = None;
        let _ = walk(
            leaf("root"),
            WalkOptions::node_children().walker(kind),
            &mut leaf_visitor(|_: &Node, ctx: &VisitContext<Node>| found = Some(ctx.parents.clone())),
        );
        assert_eq!(found, Some(vec![]));
    }

    #[rstest]
    #[case::depth_first(WalkerKind::DepthFirst)]
    #[case::breadth_first(WalkerKind::BreadthFirst)]
    fn test_parents_on_nested_leaves(#[case] kind: WalkerKind) {
        let root = parent("root", vec![leaf("ch1"), parent("ch2", vec![leaf("grandch")])]);

        let mut found = Vec::new();
        let _ = walk(
            root,
            WalkOptions::node_children().walker(kind),
            &mut leaf_visitor(|_: &Node, ctx: &VisitContext<Node>| {
                found.push(ctx.parents.iter().map(|p| p.name).collect::<Vec<_>>());
            }),
        );

        assert_eq!(found, vec![vec!["root"], vec!["root", "ch2"]]);
    }

    #[rstest]
    #[case::depth_first(WalkerKind::DepthFirst)]
    #[case::breadth_first(WalkerKind::BreadthFirst)]
    fn test_pre_leaf_post_in_order(#[case] kind: WalkerKind) {
        let mut recorder = Recorder::default();
        let flow = walk(
            parent("root", vec![leaf("child")]),
            WalkOptions::node_children().walker(kind),
            &mut recorder,
        );

        assert!(flow.is_continue());
        assert_eq!(recorder.events, vec!["pre root", "leaf child", "post root"]);
    }

    #[test]
    fn test_break_stops_the_walk() {
        struct StopAt(&'static str, Vec<&'static str>);

        impl Visitor<Node, String> for StopAt {
            fn visit(&mut self, node: &Node, _ctx: &VisitContext<Node>) -> VisitResult<String> {
                self.1.push(node.name);
                if node.name == self.0 {
                    return ControlFlow::Break(format!("stopped at {}", node.name));
                }
                ControlFlow::Continue(())
            }
        }

        let mut visitor = StopAt("grandson B", Vec::new());
        let flow = walk(sample(), WalkOptions::node_children(), &mut visitor);

        assert_eq!(flow, ControlFlow::Break("stopped at grandson B".to_string()));
        assert_eq!(visitor.1, vec!["child A", "grandson A", "grandson B"]);
    }

    #[test]
    fn test_walk_with_resumes_a_started_walker() {
        let mut walker = DepthFirstWalker::new(sample(), NodeChildren);
        walker.next();
        walker.next();

        let mut recorder = Recorder::default();
        let _ = walk_with(&mut walker, &mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "pre child B",
                "leaf grandson A",
                "leaf grandson B",
                "leaf grandson C",
                "post child B",
                "leaf child C",
                "post root",
            ]
        );
    }

    #[test]
    fn test_walk_with_boxed_walker() {
        let mut walker = WalkerKind::BreadthFirst.walker(sample(), NodeChildren);
        let mut recorder = Recorder::default();
        let _ = walk_with(&mut walker, &mut recorder);

        assert_eq!(recorder.events.first().map(String::as_str), Some("pre root"));
        assert_eq!(recorder.events.len(), 9);
    }

    #[test]
    fn test_options_builder() {
        let options = WalkOptions::node_children();
        assert_eq!(options.kind, WalkerKind::DepthFirst);

        let options = options.breadth_first();
        assert_eq!(options.kind, WalkerKind::BreadthFirst);

        let options = options.accessor(|n: &Node| Some(n.children.clone()));
        assert_eq!(options.kind, WalkerKind::BreadthFirst);
    }
}
