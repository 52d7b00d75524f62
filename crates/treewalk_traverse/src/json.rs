//! [`serde_json::Value`] as a tree node.
//!
//! Children live in the `"children"` array field. A missing or `null`
//! field marks a leaf.

use serde_json::Value;

use crate::TreeNode;

const CHILDREN: &str = "children";

impl TreeNode for Value {
    /// # Panics
    ///
    /// Panics if `"children"` holds something other than an array or
    /// `null`, since such a node is neither a leaf nor a branch.
    fn children(&self) -> Option<Vec<Self>> {
        match self.get(CHILDREN)? {
            Value::Array(children) => Some(children.clone()),
            Value::Null => None,
            other => panic!("`children` must be an array or null, found {other}"),
        }
    }

    /// # Panics
    ///
    /// Panics if `self` is not an object, since there is no field to hold
    /// the children.
    fn set_children(&mut self, children: Vec<Self>) {
        match self {
            Value::Object(fields) => {
                fields.insert(CHILDREN.to_string(), Value::Array(children));
            }
            other => panic!("cannot attach children to a non-object value, found {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DepthFirstWalker, NodeChildren, TreeWalker};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_children_field() {
        let node = json!({ "children": [{ "id": 1 }] });
        assert_eq!(node.children(), Some(vec![json!({ "id": 1 })]));
        assert_eq!(json!({ "id": 1 }).children(), None);
        assert_eq!(json!({ "children": null }).children(), None);
    }

    #[test]
    #[should_panic(expected = "must be an array or null")]
    fn test_non_array_children_fail_loudly() {
        let _ = json!({ "children": 5 }).children();
    }

    #[test]
    fn test_set_children_on_object() {
        let mut node = json!({ "name": "root" });
        node.set_children(vec![json!({ "name": "leaf" })]);
        assert_eq!(node, json!({ "name": "root", "children": [{ "name": "leaf" }] }));
    }

    #[test]
    #[should_panic(expected = "cannot attach children to a non-object value, found 3")]
    fn test_set_children_on_scalar_fails_loudly() {
        let mut node = json!(3);
        node.set_children(vec![json!(4)]);
    }

    #[test]
    #[should_panic(expected = "cannot attach children")]
    fn test_set_children_on_array_fails_loudly() {
        let mut node = json!([1, 2]);
        node.set_children(vec![json!(4)]);
    }

    #[test]
    fn test_walk_json_document() {
        let root = json!({ "id": 0, "children": [{ "id": 1 }, { "id": 2, "children": [] }] });
        let ids: Vec<_> = DepthFirstWalker::new(root, NodeChildren)
            .into_steps()
            .map(|step| format!("{} {}", step.state, step.node["id"]))
            .collect();

        assert_eq!(ids, vec!["PRE 0", "LEAF 1", "LEAF 2", "POST 0"]);
    }
}
