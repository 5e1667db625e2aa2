#![forbid(unsafe_code)]
//! wcoj-exec: worst-case-optimal evaluation of a bound join tree.
//!
//! `WcojEngine` computes the AGM bound `P` once at construction and evaluates
//! the tree with the LW recursion: every node returns a complete set and at
//! most `⌈P⌉` deferred candidates. Below the root only a `P`-limited gate of
//! left-hand candidates is joined eagerly; the rest wait for the parent. `PairwiseJoin` is the classic bottom-up plan over
//! the same tree; both implement `JoinAlgorithm`.

pub mod algorithm;
pub mod bound;
pub mod engine;
pub mod lw;
pub mod metrics;
pub mod ops;
pub mod pairwise;
pub mod trace;

pub use algorithm::JoinAlgorithm;
pub use bound::{agm_bound, deferral_cap, gate_threshold};
pub use engine::WcojEngine;
pub use lw::{Deferred, Delayed};
pub use pairwise::{PairwiseJoin, PairwiseStats};
pub use trace::{Execution, NodeTrace};
