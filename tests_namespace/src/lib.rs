//! # Namespace Test Utilities
//!
//! Shared helpers for the namespace integration suites.
//!
//! ## Test Philosophy
//!
//! - **Invariants under concurrency**: a race on one directory must leave
//!   exactly one winner and a consistent tree
//! - **Lifecycle is terminal**: a destroyed node stays destroyed
//! - **Registry consistency**: bindings always track the live tree

use core_types::NodeRef;
use namespace::{DirectoryNode, FileNode, NodeHandle};
use registry::LocalRegistry;
use std::sync::Arc;

/// Bootstrap helper for tests
///
/// Creates a fresh registry with a registered root directory.
pub fn test_bootstrap() -> (Arc<LocalRegistry>, Arc<DirectoryNode>) {
    let registry = Arc::new(LocalRegistry::new());
    let root = DirectoryNode::root(registry.clone()).expect("register root");
    (registry, root)
}

/// Walks a reference back to its node, standing in for the remote transport
pub fn open_node(registry: &LocalRegistry, node_ref: NodeRef) -> NodeHandle {
    registry.lookup(node_ref.id()).expect("bound node")
}

/// Walks a reference back to a directory node
pub fn open_directory(registry: &LocalRegistry, node_ref: NodeRef) -> Arc<DirectoryNode> {
    open_node(registry, node_ref)
        .as_directory()
        .cloned()
        .expect("directory node")
}

/// Walks a reference back to a file node
pub fn open_file(registry: &LocalRegistry, node_ref: NodeRef) -> Arc<FileNode> {
    open_node(registry, node_ref)
        .as_file()
        .cloned()
        .expect("file node")
}

/// Collects the names in a directory listing, sorted for set comparison
pub fn listed_names(dir: &DirectoryNode) -> Vec<String> {
    let mut names: Vec<String> = dir
        .list()
        .expect("list")
        .into_iter()
        .map(|desc| desc.name)
        .collect();
    names.sort();
    names
}
