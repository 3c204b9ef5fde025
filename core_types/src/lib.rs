//! # Core Types
//!
//! This crate defines the fundamental types shared by every member of the
//! arbor workspace.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: node identities are strongly typed and
//!   cannot be confused with other tokens.
//! - **No ambient authority**: a [`NodeRef`] is an address, not a permission.
//! - **Testability first**: everything here is plain data.
//!
//! ## Key Types
//!
//! - [`NodeId`]: Opaque, globally-unique identity assigned once per node
//! - [`NodeKind`]: Discriminates file nodes from directory nodes
//! - [`NodeRef`]: Opaque reachable reference minted by a registry

pub mod ids;
pub mod kind;

pub use ids::{NodeId, NodeRef};
pub use kind::NodeKind;
