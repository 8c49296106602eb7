//! 随机图上的性质测试

use percolator::algorithm::{connected_components, greedy_vertex_cover, is_vertex_cover};
use percolator::graph::{Edge, Graph, IncidenceIndex, Vertex, VertexId};
use percolator::heuristic::{PercolationPlayer, Strategy};
use percolator::types::{Color, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, VecDeque};

fn vid(id: u64) -> VertexId {
    VertexId::new(id)
}

fn random_graph(rng: &mut StdRng, n: u64, edge_prob: f64) -> Graph {
    let vertices: Vec<_> = (1..=n)
        .map(|i| {
            let color = match rng.gen_range(0..3) {
                0 => Color::Unmarked,
                1 => Color::Silver,
                _ => Color::Teal,
            };
            Vertex::with_color(vid(i), color)
        })
        .collect();

    let mut edges = Vec::new();
    for a in 1..=n {
        for b in (a + 1)..=n {
            if rng.gen_bool(edge_prob) {
                edges.push(Edge::new(vid(a), vid(b)));
            }
        }
    }

    Graph::new(vertices, edges).unwrap()
}

/// 最小顶点覆盖大小（穷举，只用于小图）
fn min_cover_size(graph: &Graph) -> usize {
    let ids: Vec<_> = graph.vertex_ids().collect();
    let edges = graph.edges();
    (0u32..(1 << ids.len()))
        .filter_map(|mask| {
            let subset: BTreeSet<_> = ids
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| *id)
                .collect();
            is_vertex_cover(edges, &subset).then_some(subset.len())
        })
        .min()
        .unwrap_or(0)
}

fn reachable_within(component: &Graph, start: VertexId) -> BTreeSet<VertexId> {
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        for e in component.edges().iter().filter(|e| e.touches(v)) {
            if let Some(n) = e.other(v) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
    }
    seen
}

#[test]
fn test_scenario_graph() {
    let graph = Graph::from_json_str(
        r#"{
            "vertices": [
                {"id": 1, "color": "unmarked"},
                {"id": 2, "color": "teal"},
                {"id": 3, "color": "unmarked"},
                {"id": 4, "color": "silver"},
                {"id": 5, "color": "silver"}
            ],
            "edges": [[1, 2], [2, 3], [4, 5]]
        }"#,
    )
    .unwrap();

    let components = connected_components(&graph);
    assert_eq!(components.len(), 2);
    assert_eq!(components[0].vertex_ids().collect::<Vec<_>>(), vec![vid(1), vid(2), vid(3)]);
    assert_eq!(components[1].vertex_ids().collect::<Vec<_>>(), vec![vid(4), vid(5)]);

    let cover = greedy_vertex_cover(graph.edges(), &IncidenceIndex::build(&graph));
    let expected: BTreeSet<_> = [1, 2, 4, 5].into_iter().map(vid).collect();
    assert_eq!(cover, expected);

    let player = PercolationPlayer::default();
    assert_eq!(
        player.choose_vertex_to_color(&graph, Player::Silver).map(|v| v.id()),
        Some(vid(1))
    );
    assert_eq!(
        player.choose_vertex_to_remove(&graph, Player::Teal).map(|v| v.id()),
        Some(vid(2))
    );
}

#[test]
fn test_component_partition_properties() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(0..30);
        let graph = random_graph(&mut rng, n, 0.08);
        let components = connected_components(&graph);

        let mut all_vertices = BTreeSet::new();
        let mut edge_total = 0;
        for component in &components {
            for id in component.vertex_ids() {
                // 分量两两不相交
                assert!(all_vertices.insert(id));
                assert_eq!(component.vertex(id), graph.vertex(id));
            }
            for e in component.edges() {
                assert!(component.contains_vertex(e.a()) && component.contains_vertex(e.b()));
            }
            edge_total += component.edge_count();

            // 分量内任意两点连通
            if let Some(first) = component.vertex_ids().next() {
                let reached = reachable_within(component, first);
                let members: BTreeSet<_> = component.vertex_ids().collect();
                assert_eq!(reached, members);
            }
        }

        let original: BTreeSet<_> = graph.vertex_ids().collect();
        assert_eq!(all_vertices, original);
        // 没有跨分量的边
        assert_eq!(edge_total, graph.edge_count());
    }
}

#[test]
fn test_vertex_cover_properties() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..60 {
        let n = rng.gen_range(0..11);
        let graph = random_graph(&mut rng, n, 0.3);
        let incidence = IncidenceIndex::build(&graph);
        let cover = greedy_vertex_cover(graph.edges(), &incidence);

        assert!(is_vertex_cover(graph.edges(), &cover));
        assert!(cover.len() <= 2 * min_cover_size(&graph));
        assert_eq!(cover, greedy_vertex_cover(graph.edges(), &incidence));
    }
}

#[test]
fn test_heuristic_postconditions() {
    let mut rng = StdRng::seed_from_u64(42);
    for strategy in [Strategy::Standard, Strategy::Legacy] {
        let player = PercolationPlayer::with_strategy(strategy);
        for _ in 0..100 {
            let n = rng.gen_range(0..20);
            let graph = random_graph(&mut rng, n, 0.2);

            for p in [Player::Silver, Player::Teal] {
                let has_unmarked = graph.vertices_with_color(Color::Unmarked).next().is_some();
                match player.choose_vertex_to_color(&graph, p) {
                    Some(v) => assert_eq!(v.color(), Color::Unmarked),
                    None => assert!(!has_unmarked),
                }
                assert_eq!(
                    player.choose_vertex_to_color(&graph, p).is_some(),
                    has_unmarked
                );

                let has_owned = graph.vertices_with_color(p.color()).next().is_some();
                match player.choose_vertex_to_remove(&graph, p) {
                    Some(v) => assert_eq!(v.color(), p.color()),
                    None => assert!(!has_owned),
                }
                assert_eq!(player.choose_vertex_to_remove(&graph, p).is_some(), has_owned);
            }
        }
    }
}

#[test]
fn test_choice_is_minimum_of_scores() {
    let mut rng = StdRng::seed_from_u64(3);
    let player = PercolationPlayer::default();
    for _ in 0..50 {
        let n = rng.gen_range(1..25);
        let graph = random_graph(&mut rng, n, 0.15);

        let scores = player.score_coloring(&graph, Player::Teal);
        if let Some(chosen) = player.choose_vertex_to_color(&graph, Player::Teal) {
            let min = scores.iter().map(|s| s.score).min().unwrap();
            let first_min = scores.iter().find(|s| s.score == min).unwrap();
            assert_eq!(chosen.id(), first_min.vertex);
        }

        let scores = player.score_removal(&graph, Player::Silver);
        if let Some(chosen) = player.choose_vertex_to_remove(&graph, Player::Silver) {
            let min = scores.iter().map(|s| s.score).min().unwrap();
            let first_min = scores.iter().find(|s| s.score == min).unwrap();
            assert_eq!(chosen.id(), first_min.vertex);
        }
    }
}

#[test]
fn test_snapshot_file_roundtrip() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = random_graph(&mut rng, 12, 0.25);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, graph.to_json_string().unwrap()).unwrap();

    let loaded = Graph::from_json_file(&path).unwrap();
    assert_eq!(loaded, graph);
    assert!(Graph::from_json_file(dir.path().join("missing.json")).is_err());
}
