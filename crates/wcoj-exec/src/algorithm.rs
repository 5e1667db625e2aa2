//! One capability interface for interchangeable join strategies.
//!
//! Callers that compare strategies (tests, benches, harnesses) hold
//! `Box<dyn JoinAlgorithm>` and never need to know which engine is inside.

use wcoj_core::tuple::TupleSet;

use crate::engine::WcojEngine;
use crate::pairwise::PairwiseJoin;

pub trait JoinAlgorithm: Send + Sync {
    /// Human-readable algorithm name (stable).
    fn name(&self) -> &'static str;

    /// The natural join of the inputs the algorithm was built with.
    fn execute(&self) -> TupleSet;

    /// The output size bound the algorithm works against, if it has one.
    fn size_bound(&self) -> Option<f64>;
}

impl JoinAlgorithm for WcojEngine {
    fn name(&self) -> &'static str {
        WcojEngine::name(self)
    }

    fn execute(&self) -> TupleSet {
        WcojEngine::execute(self)
    }

    fn size_bound(&self) -> Option<f64> {
        Some(WcojEngine::size_bound(self))
    }
}

impl JoinAlgorithm for PairwiseJoin {
    fn name(&self) -> &'static str {
        PairwiseJoin::name(self)
    }

    fn execute(&self) -> TupleSet {
        PairwiseJoin::execute(self)
    }

    fn size_bound(&self) -> Option<f64> {
        None
    }
}
