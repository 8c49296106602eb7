//! Percolator - 渗流图博弈的走子启发式
//!
//! 两名玩家（银色、青色）轮流给未标记顶点着色，或移除自己的顶点及其关联边。
//! 本库提供：
//! - 图快照与关联/邻接索引
//! - 连通分量分解与贪心顶点覆盖
//! - 着色与移除两种一步启发式

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod types;

// 重导出常用类型
pub use algorithm::{connected_components, greedy_vertex_cover};
pub use error::{Error, Result};
pub use graph::{AdjacencyIndex, Edge, Graph, GraphIndex, IncidenceIndex, Vertex, VertexId};
pub use heuristic::{
    choose_vertex_to_color, choose_vertex_to_remove, HeuristicConfig, PercolationPlayer, Strategy,
};
pub use types::{Color, Player};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
