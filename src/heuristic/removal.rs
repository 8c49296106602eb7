//! 移除启发式

use super::config::RemovalWeights;
use super::selector::{CandidateScore, MinSelector};
use crate::graph::{Edge, Graph, IncidenceIndex, Vertex};
use crate::types::Player;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// 两个端点都属于该玩家的边
fn same_color_edges(graph: &Graph, player: Player) -> BTreeSet<Edge> {
    let owned = |id| {
        graph
            .vertex(id)
            .map_or(false, |v: &Vertex| v.color() == player.color())
    };
    graph
        .edges()
        .iter()
        .filter(|e| owned(e.a()) && owned(e.b()))
        .copied()
        .collect()
}

/// 为该玩家的每个顶点评分：`factor × |同色关联边| − |关联边|`
pub fn score_removal_candidates(
    graph: &Graph,
    player: Player,
    weights: &RemovalWeights,
) -> Vec<CandidateScore> {
    let incidence = IncidenceIndex::build(graph);
    let same_color = same_color_edges(graph, player);

    graph
        .vertices_with_color(player.color())
        .enumerate()
        .map(|(order, v)| {
            let incident = incidence.degree(v.id()) as i64;
            let kept = incidence
                .incident_edges(v.id())
                .filter(|e| same_color.contains(e))
                .count() as i64;
            let score = weights
                .kept_edge_factor
                .saturating_mul(kept)
                .saturating_sub(incident);
            CandidateScore::discovered(order, v.id(), score)
        })
        .collect()
}

/// 选择下一个要移除的己方顶点；没有己方顶点时返回 None
pub fn choose_vertex_to_remove_with(
    graph: &Graph,
    player: Player,
    weights: &RemovalWeights,
) -> Option<Vertex> {
    let scores = score_removal_candidates(graph, player, weights);
    for candidate in &scores {
        trace!(vertex = %candidate.vertex, score = candidate.score, "移除候选");
    }

    let best = MinSelector::best_of(&scores)?;
    debug!(%player, vertex = %best.vertex, score = best.score, "选择移除顶点");
    graph.vertex(best.vertex).copied()
}
