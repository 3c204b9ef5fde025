//! Directory nodes
//!
//! A directory owns the mapping from child name to child node and is the
//! only writer of that mapping. All reads and mutations of a directory's
//! state happen under that directory's own lock, and the lock is never
//! held across a call into another node: `destroy` retracts and flags
//! under its own lock, then notifies the parent only after releasing it.

use crate::error::NamespaceError;
use crate::file::FileNode;
use crate::node::{NodeDesc, NodeHandle};
use crate::registry::Registry;
use core_types::{NodeId, NodeRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

/// Conventional name of the root directory
pub const ROOT_NAME: &str = "/";

/// Mutable state of a directory, guarded by the node's lock
#[derive(Default)]
struct DirectoryState {
    destroyed: bool,
    children: HashMap<String, NodeHandle>,
}

/// A directory node
///
/// Directories come into existence either as the tree root
/// ([`DirectoryNode::root`]) or through their parent's
/// [`create_directory`](DirectoryNode::create_directory). The parent
/// back-reference is non-owning and is used only to deliver the
/// entry-removal notification during destroy; a parent's `children` map
/// holds the owning references to its children.
pub struct DirectoryNode {
    name: String,
    id: NodeId,
    parent: Option<Weak<DirectoryNode>>,
    self_ref: Weak<DirectoryNode>,
    registry: Arc<dyn Registry>,
    state: Mutex<DirectoryState>,
}

impl DirectoryNode {
    /// Creates and registers the root directory
    ///
    /// The root carries the reserved well-known identity and can never be
    /// destroyed.
    pub fn root(registry: Arc<dyn Registry>) -> Result<Arc<Self>, NamespaceError> {
        let dir = Self::build(ROOT_NAME, NodeId::ROOT, None, registry);
        dir.registry
            .register(NodeHandle::Directory(dir.clone()), dir.id)?;
        debug!("registered root directory ({})", dir.id);
        Ok(dir)
    }

    fn build(
        name: &str,
        id: NodeId,
        parent: Option<Weak<DirectoryNode>>,
        registry: Arc<dyn Registry>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            name: name.to_string(),
            id,
            parent,
            self_ref: self_ref.clone(),
            registry,
            state: Mutex::new(DirectoryState::default()),
        })
    }

    /// Returns the node's identity
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Checks whether this directory has not been destroyed
    pub fn is_alive(&self) -> bool {
        !self.state.lock().expect("lock state").destroyed
    }

    /// Returns the immutable name
    pub fn name(&self) -> Result<String, NamespaceError> {
        let state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        Ok(self.name.clone())
    }

    /// Lists the current children as one atomic snapshot
    ///
    /// One descriptor per child, with the reference resolved through the
    /// registry. No ordering is promised across calls.
    pub fn list(&self) -> Result<Vec<NodeDesc>, NamespaceError> {
        let state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        Ok(state
            .children
            .iter()
            .map(|(name, child)| NodeDesc {
                name: name.clone(),
                kind: child.kind(),
                node_ref: self.registry.resolve(child.id()),
            })
            .collect())
    }

    /// Looks up a single child by exact name
    pub fn find(&self, name: &str) -> Result<NodeDesc, NamespaceError> {
        let state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        let child = state
            .children
            .get(name)
            .ok_or_else(|| NamespaceError::NotFound(name.to_string()))?;
        Ok(NodeDesc {
            name: name.to_string(),
            kind: child.kind(),
            node_ref: self.registry.resolve(child.id()),
        })
    }

    /// Creates a file child and returns its reference
    ///
    /// The whole check-then-insert sequence runs under this directory's
    /// lock, so concurrent creations with the same name are serialized and
    /// exactly one of them succeeds.
    pub fn create_file(&self, name: &str) -> Result<NodeRef, NamespaceError> {
        let mut state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        if name.is_empty() || state.children.contains_key(name) {
            return Err(NamespaceError::NameConflict(name.to_string()));
        }
        let file = FileNode::new(name, self);
        let node_ref = self
            .registry
            .register(NodeHandle::File(file.clone()), file.id())?;
        state.children.insert(name.to_string(), NodeHandle::File(file));
        debug!("created file '{}' in '{}'", name, self.name);
        Ok(node_ref)
    }

    /// Creates a directory child and returns its reference
    ///
    /// Same contract and atomicity guarantee as
    /// [`create_file`](DirectoryNode::create_file).
    pub fn create_directory(&self, name: &str) -> Result<NodeRef, NamespaceError> {
        let mut state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        if name.is_empty() || state.children.contains_key(name) {
            return Err(NamespaceError::NameConflict(name.to_string()));
        }
        let dir = Self::build(
            name,
            NodeId::new(),
            Some(self.self_ref.clone()),
            self.registry.clone(),
        );
        let node_ref = self
            .registry
            .register(NodeHandle::Directory(dir.clone()), dir.id)?;
        state
            .children
            .insert(name.to_string(), NodeHandle::Directory(dir));
        debug!("created directory '{}' in '{}'", name, self.name);
        Ok(node_ref)
    }

    /// Destroys this directory
    ///
    /// The root is never destroyable, and a directory must be empty. Under
    /// this node's own lock the registry binding is retracted and the
    /// destroyed flag set; the parent is notified only after the lock is
    /// released, so no call frame ever holds two node locks.
    pub fn destroy(&self) -> Result<(), NamespaceError> {
        let parent = match &self.parent {
            Some(parent) => parent,
            None => {
                return Err(NamespaceError::PermissionDenied(
                    "cannot destroy root directory".to_string(),
                ))
            }
        };
        {
            let mut state = self.state.lock().expect("lock state");
            if state.destroyed {
                return Err(NamespaceError::Gone);
            }
            if !state.children.is_empty() {
                return Err(NamespaceError::PermissionDenied(
                    "cannot destroy non-empty directory".to_string(),
                ));
            }
            self.registry.retract(self.id)?;
            state.destroyed = true;
        }
        if let Some(parent) = parent.upgrade() {
            parent.remove_entry(&self.name);
        }
        debug!("destroyed directory '{}' ({})", self.name, self.id);
        Ok(())
    }

    /// Drops one child entry; no-op if the name is already absent
    ///
    /// Called by a destroying child on its former parent. The child holds
    /// no lock of its own at that point.
    pub(crate) fn remove_entry(&self, name: &str) {
        let mut state = self.state.lock().expect("lock state");
        state.children.remove(name);
    }

    pub(crate) fn registry(&self) -> Arc<dyn Registry> {
        self.registry.clone()
    }

    pub(crate) fn weak_ref(&self) -> Weak<DirectoryNode> {
        self.self_ref.clone()
    }
}

impl fmt::Debug for DirectoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryNode")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
