//! 图核心模块
//!
//! 定义顶点、边、图快照以及派生索引

mod edge;
mod graph;
mod index;
mod vertex;

pub use edge::Edge;
pub use graph::{Graph, GraphSnapshot};
pub use index::{AdjacencyIndex, GraphIndex, IncidenceIndex};
pub use vertex::{Vertex, VertexId};
