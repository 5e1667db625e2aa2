//! Relations: a name, a schema, and a deduplicated set of conforming tuples.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::tuple::{Tuple, TupleSet};
use crate::types::Scalar;

/// Relations keyed by name. Ordered so that iteration (bound computation,
/// reports) is deterministic.
pub type RelationMap = BTreeMap<String, Relation>;

#[derive(Debug, Clone)]
pub struct Relation {
    name: String,
    schema: Schema,
    tuples: TupleSet,
}

impl Relation {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            tuples: TupleSet::new(),
        }
    }

    /// Build a relation from positional rows laid out in `schema` order.
    pub fn from_rows<I>(name: impl Into<String>, schema: Schema, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<Scalar>>,
    {
        let mut rel = Self::new(name, schema);
        for row in rows {
            let t = Tuple::from_row(&rel.schema, row)?;
            rel.tuples.insert(t);
        }
        Ok(rel)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Insert `tuple`. Returns `false` if an equal tuple was already present.
    pub fn add_tuple(&mut self, tuple: Tuple) -> Result<bool> {
        if !tuple.conforms_to(&self.schema) {
            return Err(Error::SchemaMismatch(format!(
                "tuple {tuple} does not conform to relation {}{}",
                self.name, self.schema
            )));
        }
        Ok(self.tuples.insert(tuple))
    }

    pub fn size(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn tuples(&self) -> &TupleSet {
        &self.tuples
    }

    pub fn contains(&self, tuple: &Tuple) -> bool {
        self.tuples.contains(tuple)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} [{} tuples]", self.name, self.schema, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tuple_is_idempotent() {
        let schema = Schema::from_names(["A", "B"]).unwrap();
        let mut rel = Relation::new("R", schema.clone());
        let t = Tuple::from_row(&schema, vec!["a1".into(), "b1".into()]).unwrap();

        assert!(rel.add_tuple(t.clone()).unwrap());
        assert!(!rel.add_tuple(t).unwrap());
        assert_eq!(rel.size(), 1);
    }

    #[test]
    fn add_tuple_rejects_foreign_schema() {
        let mut rel = Relation::new("R", Schema::from_names(["A", "B"]).unwrap());
        let t = Tuple::new([("A", "a1"), ("C", "c1")]).unwrap();
        assert!(matches!(rel.add_tuple(t), Err(Error::SchemaMismatch(_))));
        assert!(rel.is_empty());
    }

    #[test]
    fn from_rows_checks_arity() {
        let schema = Schema::from_names(["A", "B"]).unwrap();
        let err = Relation::from_rows("R", schema, [vec![Scalar::from("a1")]]).unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch(_)));
    }
}
