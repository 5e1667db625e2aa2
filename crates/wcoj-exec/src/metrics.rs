//! Diagnostics hooks.
//!
//! This module purposefully avoids pulling a telemetry stack. With the
//! `tracing` feature the hooks emit events; without it they compile away.

use crate::trace::NodeTrace;

#[cfg(feature = "tracing")]
pub fn record_node(t: &NodeTrace) {
    tracing::trace!(
        node = %t.node,
        is_root = t.is_root,
        left_complete = t.left_complete,
        left_delayed = t.left_delayed,
        left_resolved = t.left_resolved,
        right_rows = t.right_rows,
        keys = t.keys,
        threshold = ?t.threshold,
        gated = t.gated,
        gated_rows = t.gated_rows,
        overflow = t.overflow,
        overflow_rows = t.overflow_rows,
        complete = t.complete,
        delayed = t.delayed,
        "lw node"
    );
}

#[cfg(not(feature = "tracing"))]
pub fn record_node(_t: &NodeTrace) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn record_run(algorithm: &str, size_bound: Option<f64>, rows: usize, pruned: usize) {
    tracing::debug!(algorithm, ?size_bound, rows, pruned, "join finished");
}

#[cfg(not(feature = "tracing"))]
pub fn record_run(_algorithm: &str, _size_bound: Option<f64>, _rows: usize, _pruned: usize) {
    /* no-op */
}

#[cfg(feature = "tracing")]
pub fn record_short_circuit(algorithm: &str, reason: &str) {
    tracing::debug!(algorithm, reason, "join short-circuited to the empty set");
}

#[cfg(not(feature = "tracing"))]
pub fn record_short_circuit(_algorithm: &str, _reason: &str) { /* no-op */
}
