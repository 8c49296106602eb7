use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use percolator::algorithm::{connected_components, greedy_vertex_cover};
use percolator::graph::{Edge, Graph, IncidenceIndex, Vertex, VertexId};
use percolator::heuristic::PercolationPlayer;
use percolator::types::{Color, Player};

/// 带颜色的网格图
fn grid_graph(side: u64) -> Graph {
    let id = |r: u64, c: u64| VertexId::new(r * side + c + 1);
    let vertices = (0..side).flat_map(|r| {
        (0..side).map(move |c| {
            let color = match (r + c) % 3 {
                0 => Color::Unmarked,
                1 => Color::Silver,
                _ => Color::Teal,
            };
            Vertex::with_color(id(r, c), color)
        })
    });
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                edges.push(Edge::new(id(r, c), id(r, c + 1)));
            }
            if r + 1 < side {
                edges.push(Edge::new(id(r, c), id(r + 1, c)));
            }
        }
    }
    Graph::new(vertices, edges).expect("grid graph is valid")
}

fn bench_heuristics(c: &mut Criterion) {
    let player = PercolationPlayer::default();
    let mut group = c.benchmark_group("heuristics");

    for side in [10u64, 30, 60] {
        let graph = grid_graph(side);

        group.bench_with_input(BenchmarkId::new("color", side), &graph, |b, g| {
            b.iter(|| player.choose_vertex_to_color(black_box(g), Player::Silver))
        });
        group.bench_with_input(BenchmarkId::new("remove", side), &graph, |b, g| {
            b.iter(|| player.choose_vertex_to_remove(black_box(g), Player::Teal))
        });
        group.bench_with_input(BenchmarkId::new("components", side), &graph, |b, g| {
            b.iter(|| connected_components(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("cover", side), &graph, |b, g| {
            let incidence = IncidenceIndex::build(g);
            b.iter(|| greedy_vertex_cover(black_box(g.edges()), &incidence))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heuristics);
criterion_main!(benches);
