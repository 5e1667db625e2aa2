//! Pairwise plan: join each node's children in full, bottom-up.
//!
//! This is the textbook plan the LW recursion improves on. Every
//! intermediate result is materialized completely, so on cyclic queries the
//! inner joins can grow far past the final answer. It shares the set algebra
//! in `ops` and is the reference answer in tests and the baseline in benches.

use wcoj_core::error::{Error, Result};
use wcoj_core::relation::RelationMap;
use wcoj_core::schema::Schema;
use wcoj_core::tuple::TupleSet;
use wcoj_tree::bind::{bind, BoundKind, BoundNode};
use wcoj_tree::node::JoinTree;

use crate::metrics;
use crate::ops::equi_join;

const NAME: &str = "pairwise-hash-join";

/// Intermediate sizes seen by one pairwise run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairwiseStats {
    /// Largest result of any non-root internal node.
    pub max_intermediate: usize,
    /// Sum of all non-root internal node results.
    pub total_intermediate: usize,
}

#[derive(Debug)]
pub struct PairwiseJoin {
    relations: RelationMap,
    root: BoundNode,
}

impl PairwiseJoin {
    pub fn new(relations: RelationMap, tree: JoinTree) -> Result<Self> {
        if relations.is_empty() {
            return Err(Error::InvalidCardinality(
                "a join needs at least one relation".into(),
            ));
        }
        let root = bind(&tree, &relations)?;
        Ok(Self { relations, root })
    }

    pub fn name(&self) -> &'static str {
        NAME
    }

    pub fn schema(&self) -> &Schema {
        &self.root.schema
    }

    pub fn execute(&self) -> TupleSet {
        self.execute_with_stats().0
    }

    pub fn execute_with_stats(&self) -> (TupleSet, PairwiseStats) {
        let mut stats = PairwiseStats::default();
        let out = self.eval(&self.root, &mut stats);
        metrics::record_run(NAME, None, out.len(), 0);
        (out, stats)
    }

    fn eval(&self, node: &BoundNode, stats: &mut PairwiseStats) -> TupleSet {
        match &node.kind {
            BoundKind::Leaf { relation } => self
                .relations
                .get(relation)
                .map(|r| r.tuples().clone())
                .unwrap_or_default(),
            BoundKind::Internal {
                left,
                right,
                shared,
            } => {
                let l = self.eval(left, stats);
                let r = self.eval(right, stats);
                let out = equi_join(&l, &r, shared);
                if !node.is_root {
                    stats.max_intermediate = stats.max_intermediate.max(out.len());
                    stats.total_intermediate += out.len();
                }
                out
            }
        }
    }
}
