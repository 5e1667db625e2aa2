//! Join tree construction.
//!
//! A `JoinTree` is built once, bottom-up, and never mutated. Children are
//! moved into their parent by `internal`, so a subtree can be attached in
//! exactly one place and no node ever has a single child. There are no
//! parent links: whether a node is the root is decided by the caller that
//! walks the tree (the top-level call marks the root).

use std::fmt;

use serde::{Deserialize, Serialize};

use wcoj_core::error::{Error, Result};
use wcoj_core::relation::RelationMap;
use wcoj_core::schema::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinTree {
    /// A base relation, referenced by name.
    Leaf { relation: String },
    /// A join of two subtrees.
    Internal {
        left: Box<JoinTree>,
        right: Box<JoinTree>,
    },
}

impl JoinTree {
    pub fn leaf(relation: impl Into<String>) -> Self {
        JoinTree::Leaf {
            relation: relation.into(),
        }
    }

    pub fn internal(left: JoinTree, right: JoinTree) -> Self {
        JoinTree::Internal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Left-deep tree over `relations` in the given order:
    /// `((r0 ⋈ r1) ⋈ r2) ⋈ ...`.
    pub fn left_deep<I, S>(relations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = relations.into_iter();
        let first = names
            .next()
            .ok_or_else(|| Error::MalformedTree("left-deep tree needs at least one leaf".into()))?;
        Ok(names.fold(JoinTree::leaf(first), |acc, n| {
            JoinTree::internal(acc, JoinTree::leaf(n))
        }))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, JoinTree::Leaf { .. })
    }

    /// Relation names at the leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            JoinTree::Leaf { relation } => out.push(relation),
            JoinTree::Internal { left, right } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path (a leaf has height 1).
    pub fn height(&self) -> usize {
        match self {
            JoinTree::Leaf { .. } => 1,
            JoinTree::Internal { left, right } => 1 + left.height().max(right.height()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            JoinTree::Leaf { .. } => 1,
            JoinTree::Internal { left, right } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Union of the schemas of every relation under this node, left first.
    pub fn schema(&self, relations: &RelationMap) -> Result<Schema> {
        match self {
            JoinTree::Leaf { relation } => relations
                .get(relation)
                .map(|r| r.schema().clone())
                .ok_or_else(|| Error::UnknownRelation(relation.clone())),
            JoinTree::Internal { left, right } => {
                Ok(left.schema(relations)?.union(&right.schema(relations)?))
            }
        }
    }

    /// Fail with `UnknownRelation` on the first leaf missing from `relations`.
    pub fn check_leaves(&self, relations: &RelationMap) -> Result<()> {
        for name in self.leaves() {
            if name.is_empty() {
                return Err(Error::MalformedTree("leaf with an empty relation name".into()));
            }
            if !relations.contains_key(name) {
                return Err(Error::UnknownRelation(name.to_string()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for JoinTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinTree::Leaf { relation } => f.write_str(relation),
            JoinTree::Internal { left, right } => {
                if left.is_leaf() {
                    write!(f, "{left}")?;
                } else {
                    write!(f, "({left})")?;
                }
                write!(f, " ⋈ ")?;
                if right.is_leaf() {
                    write!(f, "{right}")
                } else {
                    write!(f, "({right})")
                }
            }
        }
    }
}
