//! 图索引
//!
//! 每回合从快照派生的只读索引：顶点到关联边、顶点到邻居。
//! 图在回合之间会变化，因此索引不跨回合缓存。

use crate::graph::edge::Edge;
use crate::graph::graph::Graph;
use crate::graph::vertex::VertexId;
use std::collections::{BTreeMap, BTreeSet};

/// 顶点到关联边集合的映射
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceIndex {
    edges: BTreeMap<VertexId, BTreeSet<Edge>>,
}

impl IncidenceIndex {
    /// 从图构建，孤立顶点映射到空集合
    pub fn build(graph: &Graph) -> Self {
        let mut edges: BTreeMap<VertexId, BTreeSet<Edge>> =
            graph.vertex_ids().map(|id| (id, BTreeSet::new())).collect();

        for &edge in graph.edges() {
            edges.entry(edge.a()).or_default().insert(edge);
            edges.entry(edge.b()).or_default().insert(edge);
        }

        Self { edges }
    }

    /// 获取顶点的关联边；未知顶点返回 None
    pub fn get(&self, vertex_id: VertexId) -> Option<&BTreeSet<Edge>> {
        self.edges.get(&vertex_id)
    }

    /// 遍历顶点的关联边，未知顶点视为无边
    pub fn incident_edges(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.get(&vertex_id).into_iter().flatten()
    }

    /// 顶点的度
    pub fn degree(&self, vertex_id: VertexId) -> usize {
        self.edges.get(&vertex_id).map(|s| s.len()).unwrap_or(0)
    }

    /// 是否为叶子（恰好一条关联边）
    pub fn is_leaf(&self, vertex_id: VertexId) -> bool {
        self.degree(vertex_id) == 1
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// 顶点到邻居集合的映射
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    neighbors: BTreeMap<VertexId, BTreeSet<VertexId>>,
}

impl AdjacencyIndex {
    /// 从图构建，孤立顶点映射到空集合
    pub fn build(graph: &Graph) -> Self {
        let mut neighbors: BTreeMap<VertexId, BTreeSet<VertexId>> =
            graph.vertex_ids().map(|id| (id, BTreeSet::new())).collect();

        for edge in graph.edges() {
            neighbors.entry(edge.a()).or_default().insert(edge.b());
            neighbors.entry(edge.b()).or_default().insert(edge.a());
        }

        Self { neighbors }
    }

    pub fn get(&self, vertex_id: VertexId) -> Option<&BTreeSet<VertexId>> {
        self.neighbors.get(&vertex_id)
    }

    /// 邻居（ID 升序）
    pub fn neighbors(&self, vertex_id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.get(&vertex_id).into_iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// 一次性构建的两种索引
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    pub incidence: IncidenceIndex,
    pub adjacency: AdjacencyIndex,
}

impl GraphIndex {
    pub fn build(graph: &Graph) -> Self {
        Self {
            incidence: IncidenceIndex::build(graph),
            adjacency: AdjacencyIndex::build(graph),
        }
    }
}
