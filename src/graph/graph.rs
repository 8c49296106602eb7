//! 图数据结构
//!
//! 单回合的图快照：顶点按 ID 存放在有序映射中，边为有序集合，
//! 所有遍历都按顶点 ID 升序进行

use super::edge::Edge;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// 快照的序列化形式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// 图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphSnapshot", into = "GraphSnapshot")]
pub struct Graph {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// 由顶点和边构建图，校验每条边的端点都在顶点集中
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Graph::default();

        for vertex in vertices {
            if let Some(existing) = graph.vertices.get(&vertex.id()) {
                // 完全相同的重复顶点直接合并
                if *existing != vertex {
                    return Err(Error::DuplicateVertex(vertex.id()));
                }
                continue;
            }
            graph.vertices.insert(vertex.id(), vertex);
        }

        for edge in edges {
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }

    /// 由已校验过的部件直接组装（用于派生子图）
    pub(crate) fn from_parts(vertices: BTreeMap<VertexId, Vertex>, edges: BTreeSet<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// 从 JSON 字符串加载快照
    pub fn from_json_str(s: &str) -> Result<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(s)?;
        Graph::try_from(snapshot)
    }

    /// 从 JSON 文件加载快照
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// 序列化为 JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ==================== 顶点操作 ====================

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 按 ID 升序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 指定颜色的顶点（ID 升序）
    pub fn vertices_with_color(&self, color: Color) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values().filter(move |v| v.color() == color)
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 修改顶点颜色（供外部驱动在回合之间调用）
    pub fn set_color(&mut self, id: VertexId, color: Color) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(Error::VertexNotFound(id))?;
        vertex.set_color(color);
        Ok(())
    }

    /// 移除顶点及其关联边
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        let vertex = self.vertices.remove(&id).ok_or(Error::VertexNotFound(id))?;
        self.edges.retain(|e| !e.touches(id));
        Ok(vertex)
    }

    // ==================== 边操作 ====================

    /// 添加边，端点必须已存在
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        if edge.is_self_loop() {
            return Err(Error::SelfLoop(edge.a()));
        }
        for endpoint in [edge.a(), edge.b()] {
            if !self.vertices.contains_key(&endpoint) {
                return Err(Error::VertexNotFound(endpoint));
            }
        }
        Ok(self.edges.insert(edge))
    }

    /// 所有边（按端点升序）
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = Error;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self> {
        Graph::new(snapshot.vertices, snapshot.edges)
    }
}

impl From<Graph> for GraphSnapshot {
    fn from(graph: Graph) -> Self {
        GraphSnapshot {
            vertices: graph.vertices.into_values().collect(),
            edges: graph.edges.into_iter().collect(),
        }
    }
}
