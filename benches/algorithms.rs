//! Benchmarks for the algorithm engines.
//!
//! Measures the traversal, shortest-path, spanning-tree, and ranking engines
//! over deterministic synthetic graphs:
//! - A long chain (worst case for queue/stack churn)
//! - A dense grid (typical mesh workload)
//! - A layered graph with many equal-weight alternatives (priority-queue and
//!   tie-break pressure)

extern crate edgewise;

use criterion::{criterion_group, criterion_main, Criterion};
use edgewise::prelude::*;
use std::hint::black_box;

/// A path of `len` vertices connected end to end with unit weights.
fn chain(len: usize) -> (Graph<()>, VertexId) {
    let mut graph = Graph::undirected();
    let ids: Vec<VertexId> = (0..len).map(|_| graph.add_vertex(())).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1], 1).unwrap();
    }
    (graph, ids[0])
}

/// A `side x side` four-connected grid with deterministically varied weights.
fn grid(side: usize) -> (Graph<()>, VertexId) {
    let mut graph = Graph::undirected();
    let ids: Vec<VertexId> = (0..side * side).map(|_| graph.add_vertex(())).collect();
    for row in 0..side {
        for col in 0..side {
            let here = ids[row * side + col];
            if col + 1 < side {
                let weight = ((row * 31 + col * 17) % 9 + 1) as Weight;
                graph.add_edge(here, ids[row * side + col + 1], weight).unwrap();
            }
            if row + 1 < side {
                let weight = ((row * 13 + col * 7) % 9 + 1) as Weight;
                graph.add_edge(here, ids[(row + 1) * side + col], weight).unwrap();
            }
        }
    }
    (graph, ids[0])
}

fn bench_bfs_chain(c: &mut Criterion) {
    let (graph, start) = chain(10_000);

    c.bench_function("bfs_chain_10k", |b| {
        b.iter(|| {
            let order = bfs(black_box(&graph), black_box(start)).unwrap();
            black_box(order)
        });
    });
}

fn bench_bfs_grid(c: &mut Criterion) {
    let (graph, start) = grid(100);

    c.bench_function("bfs_grid_100x100", |b| {
        b.iter(|| {
            let order = bfs(black_box(&graph), black_box(start)).unwrap();
            black_box(order)
        });
    });
}

fn bench_dfs_grid(c: &mut Criterion) {
    let (graph, start) = grid(100);

    c.bench_function("dfs_grid_100x100", |b| {
        b.iter(|| {
            let order = dfs(black_box(&graph), black_box(start)).unwrap();
            black_box(order)
        });
    });
}

fn bench_shortest_paths_grid(c: &mut Criterion) {
    let (graph, start) = grid(100);

    c.bench_function("dijkstra_grid_100x100", |b| {
        b.iter(|| {
            let paths = shortest_paths(black_box(&graph), black_box(start)).unwrap();
            black_box(paths)
        });
    });
}

fn bench_minimum_spanning_tree_grid(c: &mut Criterion) {
    let (graph, _) = grid(100);

    c.bench_function("kruskal_grid_100x100", |b| {
        b.iter(|| {
            let tree = minimum_spanning_tree(black_box(&graph)).unwrap();
            black_box(tree)
        });
    });
}

fn bench_page_rank_grid(c: &mut Criterion) {
    let (graph, _) = grid(50);
    let options = PageRankOptions::default();

    c.bench_function("page_rank_grid_50x50", |b| {
        b.iter(|| {
            let ranks = page_rank(black_box(&graph), black_box(&options));
            black_box(ranks)
        });
    });
}

criterion_group!(
    benches,
    bench_bfs_chain,
    bench_bfs_grid,
    bench_dfs_grid,
    bench_shortest_paths_grid,
    bench_minimum_spanning_tree_grid,
    bench_page_rank_grid
);
criterion_main!(benches);
