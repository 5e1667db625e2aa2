//! Per-node instrumentation and execution reports.

use serde::Serialize;

use wcoj_core::hash::Hash256;
use wcoj_core::id::NodeId;
use wcoj_core::tuple::TupleSet;

/// What one internal node of the LW recursion saw and produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeTrace {
    pub node: NodeId,
    pub is_root: bool,
    /// `|C_L|`: complete rows handed up by the left child.
    pub left_complete: usize,
    /// `|D_L|`: deferred candidates handed up by the left child.
    pub left_delayed: usize,
    /// `D_L` after resolving the child's pending joins.
    pub left_resolved: usize,
    /// `|C_R ∪ D_R|`.
    pub right_rows: usize,
    /// `|F|`: join keys present on both sides.
    pub keys: usize,
    /// `⌈P / |C_R ∪ D_R|⌉`; `None` at the root, which is never gated.
    pub threshold: Option<usize>,
    /// `|G|`: delayed left rows admitted through the gate.
    pub gated: usize,
    /// Rows materialized by joining the gate with the right input.
    pub gated_rows: usize,
    /// Held-back candidates past the `⌈P⌉` deferral cap, joined eagerly.
    pub overflow: usize,
    /// Rows materialized from `overflow`.
    pub overflow_rows: usize,
    /// `|C|` returned by this node.
    pub complete: usize,
    /// `|D|` returned by this node: candidates deferred unjoined, never more
    /// than `⌈P⌉`.
    pub delayed: usize,
}

/// Result of one traced run.
#[derive(Debug, Clone)]
pub struct Execution {
    pub tuples: TupleSet,
    pub size_bound: f64,
    /// Internal nodes in post-order.
    pub nodes: Vec<NodeTrace>,
    /// Tuples dropped by the final validation pass.
    pub pruned: usize,
    pub fingerprint: Hash256,
}

impl Execution {
    pub fn rows(&self) -> usize {
        self.tuples.len()
    }

    /// Largest deferred set returned by any internal node.
    pub fn max_delayed(&self) -> usize {
        self.nodes.iter().map(|n| n.delayed).max().unwrap_or(0)
    }

    pub fn root(&self) -> Option<&NodeTrace> {
        self.nodes.iter().find(|n| n.is_root)
    }
}
