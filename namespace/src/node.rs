//! Node handles and directory-entry descriptors

use crate::directory::DirectoryNode;
use crate::file::FileNode;
use core_types::{NodeId, NodeKind, NodeRef};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A handle to a live node of either kind
///
/// The two node variants share a small capability surface: identity and
/// liveness. Everything else is kind-specific and reached through the
/// checked accessors.
#[derive(Debug, Clone)]
pub enum NodeHandle {
    /// A directory node
    Directory(Arc<DirectoryNode>),
    /// A file node
    File(Arc<FileNode>),
}

impl NodeHandle {
    /// Returns the node's identity
    pub fn id(&self) -> NodeId {
        match self {
            NodeHandle::Directory(dir) => dir.id(),
            NodeHandle::File(file) => file.id(),
        }
    }

    /// Returns the node's kind
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeHandle::Directory(_) => NodeKind::Directory,
            NodeHandle::File(_) => NodeKind::File,
        }
    }

    /// Checks whether the node has not been destroyed
    pub fn is_alive(&self) -> bool {
        match self {
            NodeHandle::Directory(dir) => dir.is_alive(),
            NodeHandle::File(file) => file.is_alive(),
        }
    }

    /// Returns the directory node, if this handle holds one
    pub fn as_directory(&self) -> Option<&Arc<DirectoryNode>> {
        match self {
            NodeHandle::Directory(dir) => Some(dir),
            NodeHandle::File(_) => None,
        }
    }

    /// Returns the file node, if this handle holds one
    pub fn as_file(&self) -> Option<&Arc<FileNode>> {
        match self {
            NodeHandle::Directory(_) => None,
            NodeHandle::File(file) => Some(file),
        }
    }
}

/// Descriptor for a single directory entry
///
/// This is what `list` and `find` hand back to callers: the entry's name
/// within its directory, its kind, and a reachable reference resolved
/// through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDesc {
    /// Name of the entry within its directory
    pub name: String,
    /// Kind of the node behind the reference
    pub kind: NodeKind,
    /// Reachable reference for the node
    pub node_ref: NodeRef,
}
