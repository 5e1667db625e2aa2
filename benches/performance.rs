use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wcoj::prelude::*;

/// Skewed triangle: every R row meets every S row on `B = 0`, so the pairwise
/// plan materializes `rows²` intermediate tuples while the answer has `rows`.
fn skewed_triangle(rows: i64) -> RelationMap {
    let build = |name: &str, attrs: [&str; 2], data: Vec<[i64; 2]>| {
        let schema = Schema::from_names(attrs).unwrap();
        let rel = Relation::from_rows(
            name,
            schema,
            data.into_iter()
                .map(|[a, b]| vec![Scalar::I64(a), Scalar::I64(b)]),
        )
        .unwrap();
        (name.to_string(), rel)
    };
    [
        build("R", ["A", "B"], (0..rows).map(|a| [a, 0]).collect()),
        build("S", ["B", "C"], (0..rows).map(|c| [0, c]).collect()),
        build("T", ["C", "A"], (0..rows).map(|i| [i, i]).collect()),
    ]
    .into_iter()
    .collect()
}

fn chain(relations: usize, rows: i64) -> RelationMap {
    (0..relations)
        .map(|i| {
            let schema = Schema::from_names([format!("X{i}"), format!("X{}", i + 1)]).unwrap();
            let rel = Relation::from_rows(
                format!("R{}", i + 1),
                schema,
                (0..rows).map(|v| vec![Scalar::I64(v), Scalar::I64((v * 7 + i as i64) % rows)]),
            )
            .unwrap();
            (rel.name().to_string(), rel)
        })
        .collect()
}

fn algorithms(relations: &RelationMap, tree: &JoinTree) -> Vec<Box<dyn JoinAlgorithm>> {
    vec![
        Box::new(WcojEngine::new(relations.clone(), tree.clone()).unwrap()),
        Box::new(PairwiseJoin::new(relations.clone(), tree.clone()).unwrap()),
    ]
}

fn bench_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    for rows in [64i64, 256] {
        let relations = skewed_triangle(rows);
        let tree = JoinTree::left_deep(["R", "S", "T"]).unwrap();
        for algo in algorithms(&relations, &tree) {
            group.bench_with_input(BenchmarkId::new(algo.name(), rows), &rows, |b, _| {
                b.iter(|| algo.execute())
            });
        }
    }
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    let relations = chain(4, 512);
    let tree = JoinTree::left_deep(["R1", "R2", "R3", "R4"]).unwrap();
    for algo in algorithms(&relations, &tree) {
        group.bench_function(algo.name(), |b| b.iter(|| algo.execute()));
    }
    group.finish();
}

criterion_group!(joins, bench_triangle, bench_chain);
criterion_main!(joins);
