//! 边定义
//!
//! 无向边，按端点 ID 规范化存储，保证相等性与排序只依赖端点值

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向边，始终满足 `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(VertexId, VertexId)", into = "(VertexId, VertexId)")]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// 创建边，端点顺序无关
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// 较小的端点
    pub fn a(&self) -> VertexId {
        self.a
    }

    /// 较大的端点
    pub fn b(&self) -> VertexId {
        self.b
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// 是否与顶点关联
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.a {
            Some(self.b)
        } else if v == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Edge::new(a, b)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
