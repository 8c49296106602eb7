//! 图算法模块
//!
//! 包含连通分量分解和贪心顶点覆盖

mod components;
mod vertex_cover;

pub use components::connected_components;
pub use vertex_cover::{greedy_vertex_cover, is_vertex_cover};
