//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("顶点 {0} 重复且颜色冲突")]
    DuplicateVertex(VertexId),

    #[error("边的两个端点相同: {0}")]
    SelfLoop(VertexId),

    #[error("无效的玩家颜色: {0}")]
    InvalidPlayer(String),

    #[error("无效的颜色编码: {0}")]
    InvalidColorCode(i64),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
