//! Externally described join trees.
//!
//! Collaborators that build trees outside Rust (generators, config files)
//! hand them over as a generic labelled node with a list of children. The
//! conversion into `JoinTree` is where the shape invariants are enforced:
//! leaves name a relation and have no children, internal nodes have exactly
//! two children and no relation.

use serde::{Deserialize, Serialize};

use wcoj_core::error::{Error, Result};

use crate::node::JoinTree;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSpec>,
}

impl TreeSpec {
    pub fn leaf(relation: impl Into<String>) -> Self {
        Self {
            relation: Some(relation.into()),
            children: vec![],
        }
    }

    pub fn join(children: Vec<TreeSpec>) -> Self {
        Self {
            relation: None,
            children,
        }
    }
}

impl TryFrom<TreeSpec> for JoinTree {
    type Error = Error;

    fn try_from(spec: TreeSpec) -> Result<JoinTree> {
        let TreeSpec { relation, children } = spec;
        match (relation, children.len()) {
            (Some(name), 0) => {
                if name.is_empty() {
                    return Err(Error::MalformedTree("leaf with an empty relation name".into()));
                }
                Ok(JoinTree::leaf(name))
            }
            (None, 2) => {
                let mut it = children.into_iter();
                let (Some(l), Some(r)) = (it.next(), it.next()) else {
                    return Err(Error::MalformedTree("internal node lost a child".into()));
                };
                Ok(JoinTree::internal(
                    JoinTree::try_from(l)?,
                    JoinTree::try_from(r)?,
                ))
            }
            (None, 0) => Err(Error::MalformedTree(
                "node has neither a relation nor children".into(),
            )),
            (None, 1) => Err(Error::MalformedTree("node has exactly one child".into())),
            (None, n) => Err(Error::MalformedTree(format!(
                "join tree is binary, node has {n} children"
            ))),
            (Some(name), _) => Err(Error::MalformedTree(format!(
                "leaf '{name}' must not have children"
            ))),
        }
    }
}

impl From<&JoinTree> for TreeSpec {
    fn from(tree: &JoinTree) -> Self {
        match tree {
            JoinTree::Leaf { relation } => TreeSpec::leaf(relation.clone()),
            JoinTree::Internal { left, right } => {
                TreeSpec::join(vec![TreeSpec::from(&**left), TreeSpec::from(&**right)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_binary_tree() {
        let spec: TreeSpec = serde_json::from_str(
            r#"{"children": [
                {"children": [{"relation": "R"}, {"relation": "S"}]},
                {"relation": "T"}
            ]}"#,
        )
        .unwrap();
        let tree = JoinTree::try_from(spec).unwrap();
        assert_eq!(tree.to_string(), "(R ⋈ S) ⋈ T");
    }

    #[test]
    fn rejects_single_child() {
        let spec = TreeSpec::join(vec![TreeSpec::leaf("R")]);
        let err = JoinTree::try_from(spec).unwrap_err();
        assert!(matches!(err, Error::MalformedTree(_)));
    }

    #[test]
    fn rejects_three_children_and_labelled_internal() {
        let three = TreeSpec::join(vec![
            TreeSpec::leaf("R"),
            TreeSpec::leaf("S"),
            TreeSpec::leaf("T"),
        ]);
        assert!(JoinTree::try_from(three).is_err());

        let labelled = TreeSpec {
            relation: Some("R".into()),
            children: vec![TreeSpec::leaf("S"), TreeSpec::leaf("T")],
        };
        assert!(JoinTree::try_from(labelled).is_err());
        assert!(JoinTree::try_from(TreeSpec::leaf("")).is_err());
    }

    #[test]
    fn spec_roundtrips_through_tree() {
        let tree = JoinTree::internal(JoinTree::leaf("R"), JoinTree::leaf("S"));
        let back = JoinTree::try_from(TreeSpec::from(&tree)).unwrap();
        assert_eq!(back, tree);
    }
}
