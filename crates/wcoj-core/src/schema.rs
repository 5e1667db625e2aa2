//! Attribute names and schemas.
//!
//! A schema is an ordered set of attribute names. Order only matters for
//! display and positional construction (`Tuple::from_row`); equality of the
//! attribute *sets* is what joins and conformance checks compare.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One column name. Attribute names are the join keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(String);

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Attribute {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for Attribute {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    /// Build a schema, rejecting duplicate attribute names.
    pub fn new(attributes: Vec<Attribute>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for a in &attributes {
            if !seen.insert(a.as_str()) {
                return Err(Error::SchemaMismatch(format!(
                    "duplicate attribute '{a}' in schema"
                )));
            }
        }
        Ok(Self { attributes })
    }

    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Attribute::new).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Attributes present in both schemas, in `self`'s order.
    pub fn shared(&self, other: &Schema) -> Schema {
        Schema {
            attributes: self
                .attributes
                .iter()
                .filter(|a| other.contains(a.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// `self` followed by the attributes of `other` not already present.
    pub fn union(&self, other: &Schema) -> Schema {
        let mut attributes = self.attributes.clone();
        for a in &other.attributes {
            if !self.contains(a.as_str()) {
                attributes.push(a.clone());
            }
        }
        Schema { attributes }
    }

    /// Set equality, ignoring attribute order.
    pub fn same_attributes(&self, other: &Schema) -> bool {
        self.len() == other.len() && self.attributes.iter().all(|a| other.contains(a.as_str()))
    }
}

impl TryFrom<Vec<Attribute>> for Schema {
    type Error = Error;

    fn try_from(attributes: Vec<Attribute>) -> Result<Self> {
        Schema::new(attributes)
    }
}

impl From<Schema> for Vec<Attribute> {
    fn from(s: Schema) -> Self {
        s.attributes
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_left_order_and_appends_new() {
        let ab = Schema::from_names(["A", "B"]).unwrap();
        let ca = Schema::from_names(["C", "A"]).unwrap();
        assert_eq!(ab.union(&ca).to_string(), "(A, B, C)");
        assert_eq!(ab.shared(&ca).to_string(), "(A)");
        assert!(ab.shared(&Schema::from_names(["D"]).unwrap()).is_empty());
    }

    #[test]
    fn same_attributes_ignores_order() {
        let ab = Schema::from_names(["A", "B"]).unwrap();
        let ba = Schema::from_names(["B", "A"]).unwrap();
        assert_ne!(ab, ba);
        assert!(ab.same_attributes(&ba));
        assert!(!ab.same_attributes(&Schema::from_names(["A"]).unwrap()));
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let ok: Schema = serde_json::from_str(r#"["A","B"]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(serde_json::from_str::<Schema>(r#"["A","A"]"#).is_err());
    }
}
