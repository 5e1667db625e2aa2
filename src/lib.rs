#![forbid(unsafe_code)]
//! wcoj: worst-case-optimal evaluation of multiway equi-joins.
//!
//! Facade over the workspace crates:
//! - `wcoj-core`: schemas, tuples, relations, config, hashing.
//! - `wcoj-tree`: join trees and their binding to relations.
//! - `wcoj-exec`: the AGM bound, the LW recursion, and the join engines.
//!
//! ```no_run
//! use wcoj::prelude::*;
//!
//! # fn main() -> wcoj::Result<()> {
//! let ab = Schema::from_names(["A", "B"])?;
//! let bc = Schema::from_names(["B", "C"])?;
//! let mut relations = RelationMap::new();
//! relations.insert("R".into(), Relation::from_rows("R", ab, [vec!["a1".into(), "b1".into()]])?);
//! relations.insert("S".into(), Relation::from_rows("S", bc, [vec!["b1".into(), "c1".into()]])?);
//!
//! let tree = JoinTree::internal(JoinTree::leaf("R"), JoinTree::leaf("S"));
//! let engine = WcojEngine::new(relations, tree)?;
//! assert_eq!(engine.execute().len(), 1);
//! # Ok(())
//! # }
//! ```

pub use wcoj_core;
pub use wcoj_exec;
pub use wcoj_tree;

pub use wcoj_core::error::{Error, Result};

pub mod prelude {
    pub use wcoj_core::prelude::*;
    pub use wcoj_exec::{Execution, JoinAlgorithm, NodeTrace, PairwiseJoin, WcojEngine};
    pub use wcoj_tree::{JoinTree, TreeSpec};
}
