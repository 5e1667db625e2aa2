//! Attribute values.
//!
//! `Scalar` needs total equality, hashing, and ordering so tuples can live in
//! hash sets and be enumerated deterministically. Floats are compared with
//! `f64::total_cmp` and hashed by their bit pattern, which keeps `Eq`, `Hash`,
//! and `Ord` consistent with each other (`NaN == NaN`, `-0.0 != 0.0`).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Position of the variant in the cross-type order.
    fn type_order(&self) -> u8 {
        use Scalar::*;
        match self {
            Null => 0,
            Bool(_) => 1,
            I32(_) => 2,
            I64(_) => 3,
            F64(_) => 4,
            Str(_) => 5,
            Bin(_) => 6,
        }
    }
}

/// Compare two scalars. Nulls sort first; mixed types order by variant.
pub fn scalar_cmp(a: &Scalar, b: &Scalar) -> Ordering {
    use Scalar::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Bool(x), Bool(y)) => x.cmp(y),
        (I32(x), I32(y)) => x.cmp(y),
        (I64(x), I64(y)) => x.cmp(y),
        (F64(x), F64(y)) => x.total_cmp(y),
        (Str(x), Str(y)) => x.cmp(y),
        (Bin(x), Bin(y)) => x.cmp(y),
        _ => a.type_order().cmp(&b.type_order()),
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        scalar_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        scalar_cmp(self, other)
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Scalar::*;

        state.write_u8(self.type_order());
        match self {
            Null => {}
            Bool(b) => b.hash(state),
            I32(i) => i.hash(state),
            I64(i) => i.hash(state),
            F64(f) => f.to_bits().hash(state),
            Str(s) => s.hash(state),
            Bin(b) => b.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Scalar::*;
        match self {
            Null => f.write_str("NULL"),
            Bool(b) => write!(f, "{b}"),
            I32(i) => write!(f, "{i}"),
            I64(i) => write!(f, "{i}"),
            F64(x) => write!(f, "{x}"),
            Str(s) => f.write_str(s),
            Bin(b) => {
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Bin(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn float_equality_is_total() {
        assert_eq!(Scalar::F64(f64::NAN), Scalar::F64(f64::NAN));
        assert_ne!(Scalar::F64(0.0), Scalar::F64(-0.0));

        let mut set = HashSet::new();
        set.insert(Scalar::F64(f64::NAN));
        set.insert(Scalar::F64(f64::NAN));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn mixed_types_order_by_variant() {
        assert!(Scalar::Null < Scalar::Bool(false));
        assert!(Scalar::I64(-5) < Scalar::Str("a".into()));
        assert_ne!(Scalar::I32(1), Scalar::I64(1));
    }
}
