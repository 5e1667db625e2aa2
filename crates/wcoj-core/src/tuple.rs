//! Tuples: immutable attribute → value records.
//!
//! A tuple owns its mapping and exposes no mutating methods; every operation
//! returns a new tuple. Equality, hashing, and ordering are structural over the
//! (attribute, value) pairs, so a `HashSet<Tuple>` deduplicates by value.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{Attribute, Schema};
use crate::types::Scalar;

/// Hash-based, value-deduplicated set of tuples.
pub type TupleSet = HashSet<Tuple>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple {
    values: BTreeMap<Attribute, Scalar>,
}

impl Tuple {
    /// Build a tuple from (attribute, value) pairs. Repeating an attribute is a
    /// schema error.
    pub fn new<I, A, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, V)>,
        A: Into<Attribute>,
        V: Into<Scalar>,
    {
        let mut values = BTreeMap::new();
        for (a, v) in pairs {
            let a = a.into();
            if values.contains_key(&a) {
                return Err(Error::SchemaMismatch(format!(
                    "attribute '{a}' given twice in one tuple"
                )));
            }
            values.insert(a, v.into());
        }
        Ok(Self { values })
    }

    /// Build a tuple from positional values laid out in `schema` order.
    pub fn from_row(schema: &Schema, row: Vec<Scalar>) -> Result<Self> {
        if row.len() != schema.len() {
            return Err(Error::SchemaMismatch(format!(
                "row has {} values but schema {schema} has {} attributes",
                row.len(),
                schema.len()
            )));
        }
        Ok(Self {
            values: schema.iter().cloned().zip(row).collect(),
        })
    }

    pub fn get(&self, attribute: &str) -> Option<&Scalar> {
        self.values.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, &Scalar)> {
        self.values.iter()
    }

    /// True iff the tuple's attribute set is exactly the schema's.
    pub fn conforms_to(&self, schema: &Schema) -> bool {
        self.values.len() == schema.len() && schema.iter().all(|a| self.values.contains_key(a))
    }

    /// Restrict to `attributes`. Every requested attribute must be present.
    pub fn project(&self, attributes: &Schema) -> Result<Tuple> {
        let mut values = BTreeMap::new();
        for a in attributes.iter() {
            let v = self.values.get(a).ok_or_else(|| {
                Error::SchemaMismatch(format!("cannot project {self} onto absent attribute '{a}'"))
            })?;
            values.insert(a.clone(), v.clone());
        }
        Ok(Tuple { values })
    }

    /// Restrict to the requested attributes that are present, skipping the rest.
    ///
    /// Callers that have already checked the schema (join keys on a bound tree)
    /// use this instead of `project` to stay infallible.
    pub fn sub_tuple(&self, attributes: &Schema) -> Tuple {
        Tuple {
            values: attributes
                .iter()
                .filter_map(|a| self.values.get(a).map(|v| (a.clone(), v.clone())))
                .collect(),
        }
    }

    /// Equi-join two tuples on `shared`.
    ///
    /// Returns `None` unless both tuples carry every attribute in `shared` with
    /// equal values. The output holds the union of both attribute sets. An
    /// attribute present on both sides but left out of `shared` must agree as
    /// well, otherwise the merged mapping would be inconsistent.
    pub fn equi_join(&self, other: &Tuple, shared: &Schema) -> Option<Tuple> {
        for a in shared.iter() {
            match (self.values.get(a), other.values.get(a)) {
                (Some(l), Some(r)) if l == r => {}
                _ => return None,
            }
        }

        let mut values = self.values.clone();
        for (a, v) in &other.values {
            match values.get(a) {
                Some(existing) if existing != v => return None,
                Some(_) => {}
                None => {
                    values.insert(a.clone(), v.clone());
                }
            }
        }
        Some(Tuple { values })
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (a, v)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}={v}")?;
        }
        write!(f, ")")
    }
}

/// Tuples in ascending order. Used wherever enumeration order must not
/// depend on hash-set iteration.
pub fn sorted(tuples: &TupleSet) -> Vec<&Tuple> {
    let mut out: Vec<&Tuple> = tuples.iter().collect();
    out.sort();
    out
}
