#![forbid(unsafe_code)]
//! wcoj-tree: the binary join tree evaluated by the engine.
//!
//! Responsibilities:
//! - Build trees bottom-up (`JoinTree::leaf`, `JoinTree::internal`).
//! - Accept externally described trees (`TreeSpec`) and reject bad shapes.
//! - Bind a tree to a relation map: resolve leaves, compute node schemas and
//!   shared join attributes once, number nodes.
//! - Provide debug-time verification helpers.
//!
//! **No evaluation here.** The exec crate walks the bound tree.

pub mod bind;
pub mod node;
pub mod spec;
pub mod verify;

pub use bind::{bind, BoundKind, BoundNode};
pub use node::JoinTree;
pub use spec::TreeSpec;
