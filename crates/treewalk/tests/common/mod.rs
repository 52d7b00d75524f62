//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A three-level document: `root > [child A, child B > [grandson A..C], child C]`.
pub fn family() -> Value {
    serde_json::from_str(include_str!("../fixtures/family.json")).expect("valid fixture")
}

/// Names of the given nodes.
pub fn names<'a>(nodes: impl IntoIterator<Item = &'a Value>) -> Vec<String> {
    nodes
        .into_iter()
        .map(|node| node["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
