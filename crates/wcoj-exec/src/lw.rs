//! The LW recursion.
//!
//! `evaluate` returns, for every node, a `Delayed` pair:
//!
//! - `complete`: rows over the node's schema, materialized at or below it;
//! - `delayed`: work handed up unjoined. A leaf hands up its tuples; an
//!   internal node hands up the left candidates it held back, together with
//!   the right input they still have to meet.
//!
//! `complete ∪ delayed.resolve()` is always the natural join of the relations
//! under the node, which is what makes the answer independent of tree shape.
//!
//! At an internal node with children `(C_L, D_L)` and `(C_R, D_R)`, the
//! node first resolves `D_L` (its child's pending work) and takes
//! `right = C_R ∪ resolve(D_R)`. `F` is the set of join keys present in both
//! resolved `D_L` and `right`, and `G` the first `⌈P / |right|⌉` tuples of
//! `D_L` (ascending) whose key is in `F`. The root joins everything and
//! defers nothing. Below the root, `C_L` and `G` are joined with `right` into
//! `C`; the remaining candidates are deferred unjoined, at most `⌈P⌉` of
//! them. Candidates past that cap are joined eagerly into `C`.
//!
//! The gated materialization at a node is at most `⌈P / |right|⌉ · |right|`
//! rows, since a left tuple meets each right tuple at most once, and
//! `|D| ≤ ⌈P⌉` at every internal node.

use std::sync::Arc;

use rayon::join;

use wcoj_core::relation::RelationMap;
use wcoj_core::schema::Schema;
use wcoj_core::tuple::{Tuple, TupleSet};
use wcoj_tree::bind::{BoundKind, BoundNode};

use crate::bound::{deferral_cap, gate_threshold};
use crate::metrics;
use crate::ops::{candidate_keys, equi_join, gate, restrict};
use crate::trace::NodeTrace;

/// Rows a node hands to its parent without joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// A leaf's tuples, untouched.
    Rows(TupleSet),
    /// Left rows held back at an internal node. They still have to be joined
    /// with that node's right input on `shared`.
    Pending {
        rows: TupleSet,
        right: Arc<TupleSet>,
        shared: Schema,
    },
}

impl Default for Deferred {
    fn default() -> Self {
        Deferred::Rows(TupleSet::new())
    }
}

impl Deferred {
    /// Number of deferred candidate rows (not the size of their join).
    pub fn len(&self) -> usize {
        match self {
            Deferred::Rows(rows) | Deferred::Pending { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the deferred work over the owning node's schema.
    pub fn resolve(&self) -> TupleSet {
        match self {
            Deferred::Rows(rows) => rows.clone(),
            Deferred::Pending {
                rows,
                right,
                shared,
            } => equi_join(rows, right.iter(), shared),
        }
    }

    pub fn into_resolved(self) -> TupleSet {
        match self {
            Deferred::Rows(rows) => rows,
            Deferred::Pending {
                rows,
                right,
                shared,
            } => equi_join(&rows, right.iter(), &shared),
        }
    }
}

/// The `(complete, delayed)` pair returned by one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delayed {
    pub complete: TupleSet,
    pub delayed: Deferred,
}

impl Delayed {
    pub fn new(complete: TupleSet, delayed: Deferred) -> Self {
        Self { complete, delayed }
    }

    /// `complete ∪ resolve(delayed)`.
    pub fn into_union(self) -> TupleSet {
        let Delayed {
            mut complete,
            delayed,
        } = self;
        complete.extend(delayed.into_resolved());
        complete
    }
}

/// Read-only inputs shared by every recursive call.
pub(crate) struct Context<'a> {
    pub relations: &'a RelationMap,
    pub bound: f64,
    pub parallel: bool,
}

/// A node's pair plus the traces of every internal node beneath it
/// (post-order).
pub(crate) struct Evaluated {
    pub pair: Delayed,
    pub trace: Vec<NodeTrace>,
}

pub(crate) fn evaluate(node: &BoundNode, ctx: &Context<'_>) -> Evaluated {
    match &node.kind {
        BoundKind::Leaf { relation } => {
            let tuples = ctx
                .relations
                .get(relation)
                .map(|r| r.tuples().clone())
                .unwrap_or_default();
            let pair = if node.is_root {
                Delayed::new(tuples, Deferred::default())
            } else {
                Delayed::new(TupleSet::new(), Deferred::Rows(tuples))
            };
            Evaluated {
                pair,
                trace: Vec::new(),
            }
        }
        BoundKind::Internal {
            left,
            right,
            shared,
        } => {
            let (l, r) = if ctx.parallel {
                join(|| evaluate(left, ctx), || evaluate(right, ctx))
            } else {
                (evaluate(left, ctx), evaluate(right, ctx))
            };

            let mut trace = l.trace;
            trace.extend(r.trace);
            let Delayed {
                complete: c_l,
                delayed: d_l,
            } = l.pair;
            let left_delayed = d_l.len();
            let d_l = d_l.into_resolved();
            let right_rows = Arc::new(r.pair.into_union());

            let mut t = NodeTrace {
                node: node.id,
                is_root: node.is_root,
                left_complete: c_l.len(),
                left_delayed,
                left_resolved: d_l.len(),
                right_rows: right_rows.len(),
                keys: 0,
                threshold: None,
                gated: 0,
                gated_rows: 0,
                overflow: 0,
                overflow_rows: 0,
                complete: 0,
                delayed: 0,
            };

            let pair = if right_rows.is_empty() {
                // No right-hand data: no key survives, nothing joins.
                Delayed::default()
            } else {
                let f = candidate_keys(&d_l, &right_rows, shared);
                t.keys = f.len();

                if node.is_root {
                    let complete =
                        equi_join(c_l.iter().chain(d_l.iter()), right_rows.iter(), shared);
                    Delayed::new(complete, Deferred::default())
                } else {
                    let threshold = gate_threshold(ctx.bound, right_rows.len());
                    let g = gate(&d_l, &f, shared, threshold);
                    let gated = equi_join(&g, right_rows.iter(), shared);

                    let mut held_back: Vec<&Tuple> =
                        restrict(&d_l, &f, shared).filter(|x| !g.contains(*x)).collect();
                    held_back.sort();
                    let keep = held_back.len().min(deferral_cap(ctx.bound));
                    let overflow = held_back.split_off(keep);
                    let overflow_rows =
                        equi_join(overflow.iter().copied(), right_rows.iter(), shared);

                    t.threshold = Some(threshold);
                    t.gated = g.len();
                    t.gated_rows = gated.len();
                    t.overflow = overflow.len();
                    t.overflow_rows = overflow_rows.len();

                    let mut complete = equi_join(&c_l, right_rows.iter(), shared);
                    complete.extend(gated);
                    complete.extend(overflow_rows);
                    let deferred = Deferred::Pending {
                        rows: held_back.into_iter().cloned().collect(),
                        right: Arc::clone(&right_rows),
                        shared: shared.clone(),
                    };
                    Delayed::new(complete, deferred)
                }
            };

            t.complete = pair.complete.len();
            t.delayed = pair.delayed.len();
            metrics::record_node(&t);
            trace.push(t);

            Evaluated { pair, trace }
        }
    }
}
