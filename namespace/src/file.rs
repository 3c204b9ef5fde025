//! File nodes
//!
//! Files are leaf nodes: no children, just content. They follow the same
//! lifecycle discipline as directories, including the two-phase destroy
//! that never holds the file's lock while calling into the parent.

use crate::directory::DirectoryNode;
use crate::error::NamespaceError;
use crate::registry::Registry;
use core_types::NodeId;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

/// Mutable state of a file, guarded by the node's lock
#[derive(Default)]
struct FileState {
    destroyed: bool,
    content: Vec<String>,
}

/// A file node
///
/// Content is a sequence of text lines, replaced wholesale by
/// [`write`](FileNode::write). Every operation checks liveness first:
/// once destroyed, a file rejects everything with `Gone`.
pub struct FileNode {
    name: String,
    id: NodeId,
    parent: Weak<DirectoryNode>,
    registry: Arc<dyn Registry>,
    state: Mutex<FileState>,
}

impl FileNode {
    pub(crate) fn new(name: &str, parent: &DirectoryNode) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            id: NodeId::new(),
            parent: parent.weak_ref(),
            registry: parent.registry(),
            state: Mutex::new(FileState::default()),
        })
    }

    /// Returns the node's identity
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Checks whether this file has not been destroyed
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

    /// Returns the current content lines
    pub fn read(&self) -> Result<Vec<String>, NamespaceError> {
        let state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        Ok(state.content.clone())
    }

    /// Replaces the content wholesale
    pub fn write(&self, text: Vec<String>) -> Result<(), NamespaceError> {
        let mut state = self.state.lock().expect("lock state");
        if state.destroyed {
            return Err(NamespaceError::Gone);
        }
        state.content = text;
        Ok(())
    }

    /// Destroys this file
    ///
    /// Same two-phase sequence as a directory, with no children to check:
    /// retract the registry binding and flag the node under its own lock,
    /// then notify the parent with the lock released.
    pub fn destroy(&self) -> Result<(), NamespaceError> {
        {
            let mut state = self.state.lock().expect("lock state");
            if state.destroyed {
                return Err(NamespaceError::Gone);
            }
            self.registry.retract(self.id)?;
            state.destroyed = true;
        }
        if let Some(parent) = self.parent.upgrade() {
            parent.remove_entry(&self.name);
        }
        debug!("destroyed file '{}' ({})", self.name, self.id);
        Ok(())
    }
}

impl fmt::Debug for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNode")
            .field("name", &self.name)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeRegistry;

    fn file_in_root(name: &str) -> (Arc<FakeRegistry>, Arc<DirectoryNode>, Arc<FileNode>) {
        let registry = FakeRegistry::new();
        let root = DirectoryNode::root(registry.clone()).unwrap();
        let file_ref = root.create_file(name).unwrap();
        let file = registry
            .handle(file_ref.id())
            .and_then(|handle| handle.as_file().cloned())
            .expect("file handle");
        (registry, root, file)
    }

    #[test]
    fn test_new_file_is_empty() {
        let (_registry, _root, file) = file_in_root("a.txt");
        assert_eq!(file.name().unwrap(), "a.txt");
        assert!(file.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_replaces_content() {
        let (_registry, _root, file) = file_in_root("a.txt");
        file.write(vec!["one".to_string(), "two".to_string()]).unwrap();
        assert_eq!(file.read().unwrap(), vec!["one", "two"]);

        file.write(vec!["three".to_string()]).unwrap();
        assert_eq!(file.read().unwrap(), vec!["three"]);
    }

    #[test]
    fn test_destroy_removes_from_parent_and_registry() {
        let (registry, root, file) = file_in_root("a.txt");
        let id = file.id();

        file.destroy().unwrap();
        assert!(!file.is_alive());
        assert!(!registry.is_bound(id));
        assert!(root.list().unwrap().is_empty());
    }

    #[test]
    fn test_destroyed_file_rejects_everything() {
        let (_registry, _root, file) = file_in_root("a.txt");
        file.destroy().unwrap();

        assert_eq!(file.name().unwrap_err(), NamespaceError::Gone);
        assert_eq!(file.read().unwrap_err(), NamespaceError::Gone);
        assert_eq!(
            file.write(vec!["x".to_string()]).unwrap_err(),
            NamespaceError::Gone
        );
        assert_eq!(file.destroy().unwrap_err(), NamespaceError::Gone);
    }
}
