//! 贪心顶点覆盖（2-近似）

use crate::graph::{Edge, IncidenceIndex, VertexId};
use std::collections::BTreeSet;
use tracing::debug;

/// 贪心构建顶点覆盖
///
/// 每轮取剩余边集中最小的一条边 `(a, b)`，将两个端点加入覆盖，再删除所有
/// 与 `a` 或 `b` 关联的边。结果覆盖所有输入边，大小不超过最小覆盖的两倍，
/// 但不保证最小；具体结果取决于取边顺序（这里固定为边的升序）。
pub fn greedy_vertex_cover(
    edges: &BTreeSet<Edge>,
    incidence: &IncidenceIndex,
) -> BTreeSet<VertexId> {
    let mut remaining = edges.clone();
    let mut cover = BTreeSet::new();

    while let Some(edge) = remaining.pop_first() {
        let (a, b) = edge.endpoints();
        cover.insert(a);
        cover.insert(b);

        for endpoint in [a, b] {
            for incident in incidence.incident_edges(endpoint) {
                remaining.remove(incident);
            }
        }
    }

    debug!(edges = edges.len(), cover = cover.len(), "顶点覆盖构建完成");

    cover
}

/// 检查顶点集是否覆盖所有边
pub fn is_vertex_cover(edges: &BTreeSet<Edge>, cover: &BTreeSet<VertexId>) -> bool {
    edges
        .iter()
        .all(|e| cover.contains(&e.a()) || cover.contains(&e.b()))
}
