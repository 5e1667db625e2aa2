//! Convenient re-exports for downstream crates.

pub use crate::config::EngineConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::{fingerprint, Hash256};
pub use crate::id::NodeId;
pub use crate::relation::{Relation, RelationMap};
pub use crate::schema::{Attribute, Schema};
pub use crate::tuple::{Tuple, TupleSet};
pub use crate::types::Scalar;
