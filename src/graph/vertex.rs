//! 顶点定义

use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（由外部驱动分配，同一 ID 即同一逻辑顶点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 当前颜色
    #[serde(default)]
    color: Color,
}

impl Vertex {
    /// 创建未标记顶点
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            color: Color::Unmarked,
        }
    }

    /// 创建指定颜色的顶点
    pub fn with_color(id: VertexId, color: Color) -> Self {
        Self { id, color }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取颜色
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_defaults_to_unmarked() {
        let v = Vertex::new(VertexId::new(7));
        assert_eq!(v.id().as_u64(), 7);
        assert_eq!(v.color(), Color::Unmarked);
    }

    #[test]
    fn test_vertex_serialization() {
        let v = Vertex::with_color(VertexId::new(3), Color::Silver);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"id":3,"color":"silver"}"#);

        let restored: Vertex = serde_json::from_str(r#"{"id":4}"#).unwrap();
        assert_eq!(restored, Vertex::new(VertexId::new(4)));
    }
}
