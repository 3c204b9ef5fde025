//! Unique identifiers for namespace nodes

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a namespace node
///
/// Every node receives a `NodeId` exactly once, at construction. Identities
/// are immutable and are never reused, even after the node is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// The reserved, well-known identity of the root directory
    pub const ROOT: NodeId = NodeId(Uuid::nil());

    /// Creates a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a node ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Checks whether this is the reserved root identity
    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// An opaque, remotely-reachable reference to a node
///
/// References are minted by a registry when an identity is bound or
/// resolved, and are the only thing handed back to callers. A reference
/// carries no authority beyond addressing; whether the node behind it is
/// still alive is only observable by invoking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    id: NodeId,
}

impl NodeRef {
    /// Creates a reference addressing the given identity
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }

    /// Returns the identity this reference addresses
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({})", self.id.as_uuid())
    }
}
