//! Debug-time verification helpers for bound trees.
//!
//! These functions are intended for testing and debug builds to catch
//! binding mistakes early. They should be cheap.

use std::collections::HashSet;

use wcoj_core::id::NodeId;
use wcoj_core::relation::RelationMap;

use crate::bind::{BoundKind, BoundNode};

/// Verify that each internal node's schema is the union of its children's and
/// its shared attributes are their intersection.
pub fn assert_schema_union(root: &BoundNode) {
    root.walk(&mut |n| {
        if let BoundKind::Internal {
            left,
            right,
            shared,
        } = &n.kind
        {
            assert_eq!(
                n.schema,
                left.schema.union(&right.schema),
                "node {} schema is not the union of its children",
                n.id
            );
            assert_eq!(
                *shared,
                left.schema.shared(&right.schema),
                "node {} shared attributes are not the intersection",
                n.id
            );
        }
    });
}

/// Verify that leaf schemas match the relations they name.
pub fn assert_leaf_schemas(root: &BoundNode, relations: &RelationMap) {
    root.walk(&mut |n| {
        if let BoundKind::Leaf { relation } = &n.kind {
            let rel = relations
                .get(relation)
                .unwrap_or_else(|| panic!("leaf {} names unknown relation {relation}", n.id));
            assert_eq!(&n.schema, rel.schema(), "leaf {} schema drifted", n.id);
        }
    });
}

/// Verify that exactly one node is the root, it is the top node, and ids
/// are unique.
pub fn assert_single_root(root: &BoundNode) {
    assert!(root.is_root(), "top node {} is not marked root", root.id);
    let mut roots = 0usize;
    let mut ids = HashSet::<NodeId>::new();
    root.walk(&mut |n| {
        if n.is_root() {
            roots += 1;
        }
        assert!(ids.insert(n.id), "duplicate node id {}", n.id);
    });
    assert_eq!(roots, 1, "tree has {roots} root nodes");
}
