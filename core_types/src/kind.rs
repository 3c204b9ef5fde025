//! Node kind discriminator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a namespace node
///
/// Directories hold named children; files hold content. The kind travels
/// with every directory-entry descriptor so callers know what the
/// reference behind it can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Leaf node holding content
    File,
    /// Container node holding named children
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "File"),
            NodeKind::Directory => write!(f, "Directory"),
        }
    }
}
