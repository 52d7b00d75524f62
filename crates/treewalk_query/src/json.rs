//! [`serde_json::Value`] as a selectable node.
//!
//! # Overview
//!
//! - **Tag**: the `"type"` string field, or `"name"` when there is no type.
//! - **Attributes**: scalar fields, rendered as their JSON text (strings
//!   without quotes).
//! - **Classes**: the `"classList"` array, or the `"class"` field as either
//!   an array or a whitespace-separated string.

use std::borrow::Cow;

use serde_json::Value;

use crate::Selectable;

impl Selectable for Value {
    fn tag(&self) -> Option<Cow<'_, str>> {
        self.get("type")
            .or_else(|| self.get("name"))
            .and_then(Value::as_str)
            .map(Cow::Borrowed)
    }

    fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        match self.get("classList").or_else(|| self.get("class")) {
            Some(Value::Array(items)) => items.iter().any(|item| item.as_str() == Some(class)),
            Some(Value::String(list)) => list.split_whitespace().any(|word| word == class),
            _ => false,
        }
    }
}
