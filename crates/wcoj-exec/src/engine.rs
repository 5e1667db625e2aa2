//! `WcojEngine`: validated inputs, the cached AGM bound, and `execute`.
//!
//! Construction does all the checking (at least one relation, every leaf
//! resolvable, schemas bound). After that `execute` is total: it runs the LW
//! recursion from the root and returns the root's complete set, passed
//! through the optional validation pass.

use std::collections::BTreeSet;

use wcoj_core::config::EngineConfig;
use wcoj_core::error::{Error, Result};
use wcoj_core::hash::fingerprint;
use wcoj_core::relation::{Relation, RelationMap};
use wcoj_core::schema::Schema;
use wcoj_core::tuple::{Tuple, TupleSet};
use wcoj_tree::bind::{bind, BoundNode};
use wcoj_tree::node::JoinTree;

use crate::bound::agm_bound;
use crate::lw::{evaluate, Context};
use crate::metrics;
use crate::trace::{Execution, NodeTrace};

const NAME: &str = "worst-case-optimal-join";

#[derive(Debug)]
pub struct WcojEngine {
    relations: RelationMap,
    tree: JoinTree,
    root: BoundNode,
    bound: f64,
    config: EngineConfig,
}

impl WcojEngine {
    pub fn new(relations: RelationMap, tree: JoinTree) -> Result<Self> {
        Self::with_config(relations, tree, EngineConfig::default())
    }

    pub fn with_config(relations: RelationMap, tree: JoinTree, config: EngineConfig) -> Result<Self> {
        if relations.is_empty() {
            return Err(Error::InvalidCardinality(
                "a join needs at least one relation".into(),
            ));
        }
        let root = bind(&tree, &relations)?;
        let bound = agm_bound(relations.values().map(Relation::size));
        Ok(Self {
            relations,
            tree,
            root,
            bound,
            config,
        })
    }

    /// The AGM bound `P`, fixed at construction.
    pub fn size_bound(&self) -> f64 {
        self.bound
    }

    pub fn name(&self) -> &'static str {
        NAME
    }

    /// Schema of the result: the union of every leaf relation's schema.
    pub fn schema(&self) -> &Schema {
        &self.root.schema
    }

    pub fn tree(&self) -> &JoinTree {
        &self.tree
    }

    pub fn bound_tree(&self) -> &BoundNode {
        &self.root
    }

    pub fn relations(&self) -> &RelationMap {
        &self.relations
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The natural join of every leaf relation.
    pub fn execute(&self) -> TupleSet {
        let (tuples, _, pruned) = self.run();
        metrics::record_run(NAME, Some(self.bound), tuples.len(), pruned);
        tuples
    }

    /// Like `execute`, with per-node traces and a content fingerprint.
    pub fn execute_traced(&self) -> Result<Execution> {
        let (tuples, nodes, pruned) = self.run();
        metrics::record_run(NAME, Some(self.bound), tuples.len(), pruned);
        let fingerprint = fingerprint(&tuples)?;
        Ok(Execution {
            tuples,
            size_bound: self.bound,
            nodes,
            pruned,
            fingerprint,
        })
    }

    fn run(&self) -> (TupleSet, Vec<NodeTrace>, usize) {
        if self.bound == 0.0 {
            metrics::record_short_circuit(NAME, "an input relation is empty");
            return (TupleSet::new(), Vec::new(), 0);
        }

        let ctx = Context {
            relations: &self.relations,
            bound: self.bound,
            parallel: self.config.parallel_subtrees,
        };
        let out = evaluate(&self.root, &ctx);
        let complete = out.pair.complete;

        if !self.config.prune_output {
            return (complete, out.trace, 0);
        }
        let before = complete.len();
        let kept = self.prune(complete);
        let pruned = before - kept.len();
        (kept, out.trace, pruned)
    }

    /// Keep a tuple iff it conforms to the result schema and its projection
    /// onto each leaf relation is a member of that relation. Members of the
    /// natural join always pass, and a second pass removes nothing.
    pub fn prune(&self, tuples: TupleSet) -> TupleSet {
        let leaves: BTreeSet<&str> = self.root.leaf_relations().into_iter().collect();
        let leaves: Vec<&Relation> = leaves
            .into_iter()
            .filter_map(|name| self.relations.get(name))
            .collect();

        tuples
            .into_iter()
            .filter(|t| self.is_member(t, &leaves))
            .collect()
    }

    fn is_member(&self, t: &Tuple, leaves: &[&Relation]) -> bool {
        t.conforms_to(&self.root.schema)
            && leaves
                .iter()
                .all(|rel| rel.contains(&t.sub_tuple(rel.schema())))
    }
}
