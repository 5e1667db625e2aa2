//! Result fingerprints.
//!
//! A fingerprint identifies the contents of a tuple set, so two runs (or two
//! tree shapes) can be compared without keeping both results around.

use std::fmt;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tuple::{sorted, TupleSet};

/// blake3 digest of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Fingerprint of `tuples`. Tuples are fed to the hasher in ascending order,
/// one JSON document each, so set-equal inputs hash equal regardless of
/// insertion order.
pub fn fingerprint(tuples: &TupleSet) -> Result<Hash256> {
    let mut h = Hasher::new();
    h.update(&(tuples.len() as u64).to_le_bytes());
    for t in sorted(tuples) {
        h.update(&serde_json::to_vec(t)?);
        h.update(b"\n");
    }
    Ok(Hash256(h.finalize().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::Tuple;

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let a = Tuple::new([("A", 1i64)]).unwrap();
        let b = Tuple::new([("A", 2i64)]).unwrap();

        let mut first = TupleSet::new();
        first.insert(a.clone());
        first.insert(b.clone());
        let mut second = TupleSet::new();
        second.insert(b);
        second.insert(a);

        assert_eq!(fingerprint(&first).unwrap(), fingerprint(&second).unwrap());
        assert_eq!(fingerprint(&first).unwrap().to_string().len(), 64);
    }

    #[test]
    fn different_sets_differ() {
        let a: TupleSet = [Tuple::new([("A", 1i64)]).unwrap()].into_iter().collect();
        let b: TupleSet = [Tuple::new([("A", 2i64)]).unwrap()].into_iter().collect();
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&TupleSet::new()).unwrap());
    }
}
