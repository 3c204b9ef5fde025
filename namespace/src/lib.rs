//! # Namespace
//!
//! The mutable core of the arbor distributed hierarchical namespace: a tree
//! of named directory and file nodes, each independently addressable by a
//! stable opaque identity and reachable concurrently by multiple callers.
//!
//! ## Philosophy
//!
//! - **Tree integrity first**: sibling names stay unique, teardown is safe,
//!   and readers always see a consistent snapshot of a directory.
//! - **One lock per node**: every node guards its own state with its own
//!   lock; no call frame ever holds two node locks at once.
//! - **Registry as capability**: binding identities to reachable references
//!   is an injected collaborator, never a global.
//!
//! ## Key Types
//!
//! - [`DirectoryNode`]: container node implementing list/find/create/destroy
//! - [`FileNode`]: leaf node with content and the same lifecycle discipline
//! - [`NodeHandle`]: tagged union over the two node variants
//! - [`Registry`]: capability contract for identity binding

pub mod directory;
pub mod error;
pub mod file;
pub mod node;
pub mod registry;

pub use directory::{DirectoryNode, ROOT_NAME};
pub use error::NamespaceError;
pub use file::FileNode;
pub use node::{NodeDesc, NodeHandle};
pub use registry::{Registry, RegistryError};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::node::NodeHandle;
    use crate::registry::{Registry, RegistryError};
    use core_types::{NodeId, NodeRef};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory registry fake for unit tests
    #[derive(Default)]
    pub struct FakeRegistry {
        bindings: Mutex<HashMap<NodeId, NodeHandle>>,
    }

    impl FakeRegistry {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn is_bound(&self, id: NodeId) -> bool {
            self.bindings.lock().expect("lock bindings").contains_key(&id)
        }

        pub fn count(&self) -> usize {
            self.bindings.lock().expect("lock bindings").len()
        }

        /// Returns the bound handle, mirroring `LocalRegistry::lookup`
        pub fn handle(&self, id: NodeId) -> Option<NodeHandle> {
            self.bindings.lock().expect("lock bindings").get(&id).cloned()
        }
    }

    impl Registry for FakeRegistry {
        fn register(&self, node: NodeHandle, id: NodeId) -> Result<NodeRef, RegistryError> {
            let mut bindings = self.bindings.lock().expect("lock bindings");
            if bindings.contains_key(&id) {
                return Err(RegistryError::AlreadyBound(id));
            }
            bindings.insert(id, node);
            Ok(NodeRef::new(id))
        }

        fn retract(&self, id: NodeId) -> Result<(), RegistryError> {
            let mut bindings = self.bindings.lock().expect("lock bindings");
            if bindings.remove(&id).is_none() {
                return Err(RegistryError::NotBound(id));
            }
            Ok(())
        }

        fn resolve(&self, id: NodeId) -> NodeRef {
            NodeRef::new(id)
        }
    }
}
