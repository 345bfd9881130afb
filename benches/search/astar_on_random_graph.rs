use astar_core::{
    graph::{node_index, Edge, Graph},
    search::{astar::AStar, edge_distance},
    util::{
        math::{straight_line, DistanceUnit},
        test_graphs::romania_geo,
    },
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

const UNIT: DistanceUnit = DistanceUnit::Kilometers;

/// Random places in a 5x5 degree box. Edges cost at least the great-circle
/// distance between their endpoints, so the haversine estimate stays admissible.
fn gen_rand_graph(number_nodes: usize) -> Graph {
    let mut rng = rand::thread_rng();

    // 2.5 edges per node on average
    let number_edges: usize = (number_nodes as f32 * 2.5) as usize;

    let mut g = Graph::with_capacity(number_nodes);

    for i in 0..number_nodes {
        let lat = rng.gen_range(44.0..49.0);
        let lon = rng.gen_range(20.0..25.0);
        g.add_geo_node(i.to_string(), lat, lon)
            .expect("Keys are unique");
    }

    let mut edges = Vec::with_capacity(number_edges);
    for _ in 0..number_edges {
        let source = node_index(rng.gen_range(0..number_nodes));
        let target = node_index(rng.gen_range(0..number_nodes));
        let (Some(u), Some(v)) = (g.node(source), g.node(target)) else {
            continue;
        };
        let weight = straight_line(u, v, UNIT) * rng.gen_range(1.0..1.5);
        edges.push(Edge::new(source, target, weight));
    }
    g.add_edges(edges);

    g
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut graphs: Vec<Graph> = [1000, 50_000, 100_000]
        .iter()
        .map(|i| gen_rand_graph(*i))
        .collect();
    graphs.push(romania_geo(UNIT).expect("Failed to build map of Romania"));

    let mut group = c.benchmark_group("astar_on_random_graph");
    let mut rng = rand::thread_rng();
    for graph in graphs {
        let src = node_index(rng.gen_range(0..graph.count()));
        let dst = node_index(rng.gen_range(0..graph.count()));
        let Some(dst_node) = graph.node(dst) else {
            continue;
        };

        group.bench_with_input(
            BenchmarkId::new("UniformCost", graph.count()),
            &graph,
            |b, g| {
                let mut astar = AStar::new(g);
                b.iter(|| astar.search(src, dst, edge_distance, |_| 0.0));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("Haversine", graph.count()),
            &graph,
            |b, g| {
                let mut astar = AStar::new(g);
                b.iter(|| {
                    astar.search(src, dst, edge_distance, |node| {
                        straight_line(node, dst_node, UNIT)
                    })
                });
            },
        );
    }
    group.finish();
}
