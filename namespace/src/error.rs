//! Namespace error types

use crate::registry::RegistryError;
use thiserror::Error;

/// Errors surfaced by namespace operations
///
/// Every failure is detected synchronously under the node's own lock and
/// returned directly to the caller; nothing is retried or suppressed, and
/// no failure leaves partial state behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NamespaceError {
    /// Operation invoked on a node that has been destroyed
    #[error("node has been destroyed")]
    Gone,

    /// No child with the given name
    #[error("no entry named '{0}'")]
    NotFound(String),

    /// Name is empty or already taken by a sibling
    #[error("name '{0}' cannot be used")]
    NameConflict(String),

    /// Operation is never permitted on this node in its current shape
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Registry collaborator failure
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
