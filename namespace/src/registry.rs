//! Registry capability contract
//!
//! The registry binds node identities to remotely reachable references.
//! It is an external collaborator: the namespace consumes it through this
//! trait so the core stays testable with an in-memory fake.

use crate::node::NodeHandle;
use core_types::{NodeId, NodeRef};
use thiserror::Error;

/// Errors for registry operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Identity already bound to a node
    #[error("identity {0} is already bound")]
    AlreadyBound(NodeId),

    /// Identity has no current binding
    #[error("identity {0} is not bound")]
    NotBound(NodeId),
}

/// Capability to bind node identities to reachable references
///
/// Every node consumes a registry: creation binds the new node before the
/// parent records it, destruction retracts the node's own binding, and
/// `list`/`find` resolve child identities back into references.
pub trait Registry: Send + Sync {
    /// Binds `id` to `node` and returns the reachable reference.
    ///
    /// Succeeds exactly once per node.
    fn register(&self, node: NodeHandle, id: NodeId) -> Result<NodeRef, RegistryError>;

    /// Unbinds a previously registered identity.
    ///
    /// Called exactly once per node, at destroy time.
    fn retract(&self, id: NodeId) -> Result<(), RegistryError>;

    /// Mints a reachable reference for an identity.
    ///
    /// Pure address construction; no liveness check is implied.
    fn resolve(&self, id: NodeId) -> NodeRef;
}
