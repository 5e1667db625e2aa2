//! Randomized equivalence: the LW engine, the pairwise plan and a nested-loop
//! join must agree on arbitrary inputs and tree shapes.


use proptest::prelude::*;

use wcoj_core::config::EngineConfig;
use wcoj_core::relation::RelationMap;
use wcoj_exec::{PairwiseJoin, WcojEngine};
use test_data_gen::{brute_force, rel_int, relation_map, shapes};

fn edges(max_rows: usize, domain: i64) -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(0..domain, 2), 0..max_rows)
}

fn triangle_inputs() -> impl Strategy<Value = RelationMap> {
    (edges(24, 6), edges(24, 6), edges(24, 6)).prop_map(|(r, s, t)| {
        relation_map(vec![
            rel_int("R", &["A", "B"], &r),
            rel_int("S", &["B", "C"], &s),
            rel_int("T", &["C", "A"], &t),
        ])
    })
}

fn chain_inputs() -> impl Strategy<Value = RelationMap> {
    prop::collection::vec(edges(16, 4), 4).prop_map(|rels| {
        relation_map(
            rels.iter()
                .enumerate()
                .map(|(i, rows)| {
                    let a = format!("X{i}");
                    let b = format!("X{}", i + 1);
                    rel_int(&format!("R{}", i + 1), &[a.as_str(), b.as_str()], rows)
                })
                .collect(),
        )
    })
}

fn names(relations: &RelationMap) -> Vec<String> {
    relations.keys().cloned().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_triangle_matches_nested_loops(relations in triangle_inputs()) {
        let expected = brute_force(&relations);
        for tree in shapes(&names(&relations)) {
            let engine = WcojEngine::new(relations.clone(), tree.clone()).unwrap();
            let pairwise = PairwiseJoin::new(relations.clone(), tree).unwrap();
            prop_assert_eq!(engine.execute(), expected.clone());
            prop_assert_eq!(pairwise.execute(), expected.clone());
        }
    }

    #[test]
    fn prop_chain_unpruned_matches_nested_loops(relations in chain_inputs()) {
        let expected = brute_force(&relations);
        let config = EngineConfig::default().with_prune_output(false);
        for tree in shapes(&names(&relations)) {
            let run = WcojEngine::with_config(relations.clone(), tree, config.clone())
                .unwrap()
                .execute_traced()
                .unwrap();
            prop_assert_eq!(run.pruned, 0);
            prop_assert_eq!(run.tuples, expected.clone());
        }
    }

    #[test]
    fn prop_gate_and_deferral_are_bounded(relations in triangle_inputs()) {
        for tree in shapes(&names(&relations)) {
            let run = WcojEngine::new(relations.clone(), tree)
                .unwrap()
                .execute_traced()
                .unwrap();
            prop_assert!(run.max_delayed() as f64 <= run.size_bound.ceil());
            for node in run.nodes.iter().filter(|n| !n.is_root) {
                prop_assert!(node.delayed as f64 <= run.size_bound.ceil());
                if let Some(threshold) = node.threshold {
                    prop_assert!(node.gated <= threshold);
                    prop_assert!(node.gated_rows <= threshold * node.right_rows);
                }
            }
        }
    }

    #[test]
    fn prop_fingerprint_independent_of_shape(relations in triangle_inputs()) {
        let mut seen = None;
        for tree in shapes(&names(&relations)) {
            let fp = WcojEngine::new(relations.clone(), tree)
                .unwrap()
                .execute_traced()
                .unwrap()
                .fingerprint;
            match seen {
                None => seen = Some(fp),
                Some(prev) => prop_assert_eq!(prev, fp),
            }
        }
    }
}
