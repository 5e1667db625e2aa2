//! Binding a join tree to its relations.
//!
//! `bind` checks every leaf up front, then walks the tree once to attach each
//! node's schema (union of the relation schemas beneath it) and, for internal
//! nodes, the attributes shared by the two children. Nodes are numbered in
//! post-order. The result is read-only; evaluation never recomputes schemas.

use wcoj_core::error::Result;
use wcoj_core::id::NodeId;
use wcoj_core::relation::RelationMap;
use wcoj_core::schema::Schema;

use crate::node::JoinTree;

#[derive(Debug, Clone)]
pub struct BoundNode {
    pub id: NodeId,
    pub schema: Schema,
    pub is_root: bool,
    pub kind: BoundKind,
}

#[derive(Debug, Clone)]
pub enum BoundKind {
    Leaf {
        relation: String,
    },
    Internal {
        left: Box<BoundNode>,
        right: Box<BoundNode>,
        /// Join attributes: `schema(left) ∩ schema(right)`.
        shared: Schema,
    },
}

impl BoundNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BoundKind::Leaf { .. })
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Visit every node in post-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a BoundNode)) {
        if let BoundKind::Internal { left, right, .. } = &self.kind {
            left.walk(f);
            right.walk(f);
        }
        f(self);
    }

    /// Relation names at the leaves, left to right.
    pub fn leaf_relations(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let BoundKind::Leaf { relation } = &n.kind {
                out.push(relation.as_str());
            }
        });
        out
    }
}

/// Resolve `tree` against `relations`.
///
/// Fails with `UnknownRelation` (or `MalformedTree` for an empty name) before
/// any schema work if a leaf cannot be resolved.
pub fn bind(tree: &JoinTree, relations: &RelationMap) -> Result<BoundNode> {
    tree.check_leaves(relations)?;
    let mut next = 0u32;
    bind_node(tree, relations, true, &mut next)
}

fn bind_node(
    tree: &JoinTree,
    relations: &RelationMap,
    is_root: bool,
    next: &mut u32,
) -> Result<BoundNode> {
    let (schema, kind) = match tree {
        JoinTree::Leaf { relation } => (
            tree.schema(relations)?,
            BoundKind::Leaf {
                relation: relation.clone(),
            },
        ),
        JoinTree::Internal { left, right } => {
            let left = bind_node(left, relations, false, next)?;
            let right = bind_node(right, relations, false, next)?;
            let shared = left.schema.shared(&right.schema);
            let schema = left.schema.union(&right.schema);
            (
                schema,
                BoundKind::Internal {
                    left: Box::new(left),
                    right: Box::new(right),
                    shared,
                },
            )
        }
    };

    let id = NodeId::new(*next);
    *next += 1;
    Ok(BoundNode {
        id,
        schema,
        is_root,
        kind,
    })
}
