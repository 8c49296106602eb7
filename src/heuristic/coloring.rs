//! 着色启发式

use super::config::ColoringWeights;
use super::selector::{CandidateScore, MinSelector};
use crate::graph::{Graph, GraphIndex, Vertex, VertexId};
use crate::types::{Color, Player};
use tracing::{debug, trace};

/// 计算单个候选的着色得分
fn coloring_score(
    graph: &Graph,
    index: &GraphIndex,
    candidate: VertexId,
    player: Player,
    weights: &ColoringWeights,
) -> i64 {
    let mut score: i64 = 0;
    for neighbor_id in index.adjacency.neighbors(candidate) {
        let Some(neighbor) = graph.vertex(neighbor_id) else {
            continue;
        };

        score = score.saturating_sub(weights.neighbor_penalty);
        if neighbor.color() == player.color() {
            score = score.saturating_sub(weights.own_color_penalty);
        }
        if index.incidence.is_leaf(neighbor_id) {
            let leaf_penalty = if neighbor.color().is_marked() {
                weights.marked_leaf_penalty
            } else {
                weights.leaf_penalty
            };
            score = score.saturating_sub(leaf_penalty);
        }
    }
    score
}

/// 为所有未标记顶点评分（按 ID 升序，序号即发现顺序）
pub fn score_coloring_candidates(
    graph: &Graph,
    player: Player,
    weights: &ColoringWeights,
) -> Vec<CandidateScore> {
    let index = GraphIndex::build(graph);
    graph
        .vertices_with_color(Color::Unmarked)
        .enumerate()
        .map(|(order, v)| {
            let score = coloring_score(graph, &index, v.id(), player, weights);
            CandidateScore::discovered(order, v.id(), score)
        })
        .collect()
}

/// 选择下一个要着色的顶点；没有未标记顶点时返回 None
pub fn choose_vertex_to_color_with(
    graph: &Graph,
    player: Player,
    weights: &ColoringWeights,
) -> Option<Vertex> {
    let scores = score_coloring_candidates(graph, player, weights);
    for candidate in &scores {
        trace!(vertex = %candidate.vertex, score = candidate.score, "着色候选");
    }

    let best = MinSelector::best_of(&scores)?;
    debug!(%player, vertex = %best.vertex, score = best.score, "选择着色顶点");
    graph.vertex(best.vertex).copied()
}
