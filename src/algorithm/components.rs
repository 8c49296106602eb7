//! 连通分量分解

use crate::graph::{AdjacencyIndex, Edge, Graph, IncidenceIndex, Vertex, VertexId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// 将图分解为连通子图
///
/// 按顶点 ID 升序选取尚未访问的顶点作为起点，用显式栈做迭代 DFS，
/// 因此输出按每个分量的最小顶点 ID 升序排列。每个分量的边集为其顶点
/// 关联边的并集，即诱导子图。
pub fn connected_components(graph: &Graph) -> Vec<Graph> {
    let adjacency = AdjacencyIndex::build(graph);
    let incidence = IncidenceIndex::build(graph);

    let mut visited: BTreeSet<VertexId> = BTreeSet::new();
    let mut components = Vec::new();

    for start in graph.vertex_ids() {
        if visited.contains(&start) {
            continue;
        }

        let members = collect_reachable(start, &adjacency, &mut visited);

        let vertices: BTreeMap<VertexId, Vertex> = members
            .iter()
            .filter_map(|id| graph.vertex(*id).map(|v| (*id, *v)))
            .collect();
        let edges: BTreeSet<Edge> = members
            .iter()
            .flat_map(|id| incidence.incident_edges(*id).copied())
            .collect();

        components.push(Graph::from_parts(vertices, edges));
    }

    debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "连通分量分解完成"
    );

    components
}

/// 从起点出发收集可达顶点，同时标记为已访问
fn collect_reachable(
    start: VertexId,
    adjacency: &AdjacencyIndex,
    visited: &mut BTreeSet<VertexId>,
) -> BTreeSet<VertexId> {
    let mut members = BTreeSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        members.insert(current);
        for neighbor in adjacency.neighbors(current) {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    members
}
