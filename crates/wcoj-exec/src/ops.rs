//! Set algebra used by the LW recursion and the pairwise plan.
//!
//! Join keys are sub-tuples over the shared attributes of a node. Every
//! function here assumes the tuples come from a bound tree, where those
//! attributes are always present.

use std::collections::HashMap;

use wcoj_core::schema::Schema;
use wcoj_core::tuple::{Tuple, TupleSet};

/// Set-valued projection: the distinct join keys of `tuples` over `shared`.
/// Binding guarantees every tuple carries `shared`, so this cannot fail.
pub fn keys<'a, I>(tuples: I, shared: &Schema) -> TupleSet
where
    I: IntoIterator<Item = &'a Tuple>,
{
    tuples.into_iter().map(|t| t.sub_tuple(shared)).collect()
}

/// `F`: keys present on both sides, i.e. the only keys that can produce a match.
pub fn candidate_keys(left: &TupleSet, right: &TupleSet, shared: &Schema) -> TupleSet {
    if right.is_empty() {
        return TupleSet::new();
    }
    let right_keys = keys(right, shared);
    keys(left, shared)
        .into_iter()
        .filter(|k| right_keys.contains(k))
        .collect()
}

/// Tuples of `tuples` whose join key is in `keys`.
pub fn restrict<'a>(
    tuples: &'a TupleSet,
    keys: &'a TupleSet,
    shared: &'a Schema,
) -> impl Iterator<Item = &'a Tuple> + 'a {
    tuples
        .iter()
        .filter(move |t| keys.contains(&t.sub_tuple(shared)))
}

/// `G`: the first `threshold` tuples of `left` (ascending order) whose key is
/// in `keys`. The order is fixed so repeated runs gate the same tuples.
pub fn gate(left: &TupleSet, keys: &TupleSet, shared: &Schema, threshold: usize) -> TupleSet {
    if threshold == 0 {
        return TupleSet::new();
    }
    let mut candidates: Vec<&Tuple> = restrict(left, keys, shared).collect();
    candidates.sort();
    candidates.into_iter().take(threshold).cloned().collect()
}

/// Equi-join two tuple collections on `shared`.
///
/// Semantically the full cross product filtered by `Tuple::equi_join`. The
/// right side is bucketed by join key first, so only same-key pairs are
/// compared; with no shared attributes there is one bucket and every pair is
/// produced.
pub fn equi_join<'a, L, R>(left: L, right: R, shared: &Schema) -> TupleSet
where
    L: IntoIterator<Item = &'a Tuple>,
    R: IntoIterator<Item = &'a Tuple>,
{
    let mut buckets: HashMap<Tuple, Vec<&Tuple>> = HashMap::new();
    for r in right {
        buckets.entry(r.sub_tuple(shared)).or_default().push(r);
    }

    let mut out = TupleSet::new();
    if buckets.is_empty() {
        return out;
    }
    for l in left {
        let Some(matches) = buckets.get(&l.sub_tuple(shared)) else {
            continue;
        };
        for r in matches {
            if let Some(joined) = l.equi_join(r, shared) {
                out.insert(joined);
            }
        }
    }
    out
}
