//! # Registry
//!
//! In-memory implementation of the namespace's registry capability.
//!
//! ## Philosophy
//!
//! Nodes are registered and resolved using opaque identities, never paths:
//! a binding is what makes a node reachable, and retracting the binding is
//! part of the node's own destroy sequence. The registry never reaches
//! into a node's state.

use core_types::{NodeId, NodeRef};
use namespace::{NodeHandle, Registry, RegistryError};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory node registry
///
/// Maintains the mapping from node identities to live node handles. The
/// handles double as the local dispatch table: callers standing in for the
/// remote transport use [`lookup`](LocalRegistry::lookup) to walk from a
/// reference back to the node behind it.
///
/// ## Example
///
/// ```
/// use namespace::DirectoryNode;
/// use registry::LocalRegistry;
/// use std::sync::Arc;
///
/// let registry = Arc::new(LocalRegistry::new());
/// let root = DirectoryNode::root(registry.clone()).unwrap();
///
/// let docs = root.create_directory("docs").unwrap();
/// let handle = registry.lookup(docs.id()).unwrap();
/// assert_eq!(handle.kind(), core_types::NodeKind::Directory);
/// ```
#[derive(Default)]
pub struct LocalRegistry {
    bindings: RwLock<HashMap<NodeId, NodeHandle>>,
}

impl LocalRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the node bound to an identity
    pub fn lookup(&self, id: NodeId) -> Result<NodeHandle, RegistryError> {
        self.bindings
            .read()
            .expect("lock bindings")
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotBound(id))
    }

    /// Checks whether an identity is currently bound
    pub fn is_bound(&self, id: NodeId) -> bool {
        self.bindings
            .read()
            .expect("lock bindings")
            .contains_key(&id)
    }

    /// Returns the number of current bindings
    pub fn count(&self) -> usize {
        self.bindings.read().expect("lock bindings").len()
    }
}

impl Registry for LocalRegistry {
    fn register(&self, node: NodeHandle, id: NodeId) -> Result<NodeRef, RegistryError> {
        let mut bindings = self.bindings.write().expect("lock bindings");
        if bindings.contains_key(&id) {
            return Err(RegistryError::AlreadyBound(id));
        }
        bindings.insert(id, node);
        debug!("bound {}", id);
        Ok(NodeRef::new(id))
    }

    fn retract(&self, id: NodeId) -> Result<(), RegistryError> {
        let mut bindings = self.bindings.write().expect("lock bindings");
        if bindings.remove(&id).is_none() {
            return Err(RegistryError::NotBound(id));
        }
        debug!("retracted {}", id);
        Ok(())
    }

    fn resolve(&self, id: NodeId) -> NodeRef {
        NodeRef::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::NodeKind;
    use namespace::{DirectoryNode, NamespaceError};
    use std::sync::Arc;

    fn bootstrap() -> (Arc<LocalRegistry>, Arc<DirectoryNode>) {
        let registry = Arc::new(LocalRegistry::new());
        let root = DirectoryNode::root(registry.clone()).unwrap();
        (registry, root)
    }

    #[test]
    fn test_root_binding_present() {
        let (registry, root) = bootstrap();
        assert_eq!(registry.count(), 1);
        assert!(registry.is_bound(root.id()));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let (registry, _root) = bootstrap();
        let err = DirectoryNode::root(registry).unwrap_err();
        assert_eq!(
            err,
            NamespaceError::Registry(RegistryError::AlreadyBound(NodeId::ROOT))
        );
    }

    #[test]
    fn test_create_binds_child() {
        let (registry, root) = bootstrap();
        let file_ref = root.create_file("a.txt").unwrap();

        let handle = registry.lookup(file_ref.id()).unwrap();
        assert_eq!(handle.kind(), NodeKind::File);
        assert!(handle.is_alive());
    }

    #[test]
    fn test_destroy_retracts_binding() {
        let (registry, root) = bootstrap();
        let file_ref = root.create_file("a.txt").unwrap();
        let file = registry
            .lookup(file_ref.id())
            .unwrap()
            .as_file()
            .cloned()
            .unwrap();

        file.destroy().unwrap();
        assert!(!registry.is_bound(file_ref.id()));
        assert_eq!(
            registry.lookup(file_ref.id()).unwrap_err(),
            RegistryError::NotBound(file_ref.id())
        );
    }

    #[test]
    fn test_retract_unbound_identity() {
        let registry = LocalRegistry::new();
        let id = NodeId::new();
        assert_eq!(registry.retract(id).unwrap_err(), RegistryError::NotBound(id));
    }

    #[test]
    fn test_resolve_is_pure_addressing() {
        let registry = LocalRegistry::new();
        let id = NodeId::new();
        assert_eq!(registry.resolve(id).id(), id);
        assert!(!registry.is_bound(id));
    }
}
