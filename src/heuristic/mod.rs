//! 走子启发式模块
//!
//! 每回合由外部驱动调用一次：着色阶段选择一个未标记顶点，
//! 移除阶段选择一个己方顶点。所有函数都是快照上的纯函数，
//! 候选按顶点 ID 升序枚举，同分取最先发现者。

mod coloring;
mod config;
mod removal;
mod selector;

pub use coloring::{choose_vertex_to_color_with, score_coloring_candidates};
pub use config::{ColoringWeights, HeuristicConfig, RemovalWeights, Strategy};
pub use removal::{choose_vertex_to_remove_with, score_removal_candidates};
pub use selector::CandidateScore;

use crate::graph::{Graph, Vertex};
use crate::types::Player;

/// 使用标准权重选择要着色的顶点
pub fn choose_vertex_to_color(graph: &Graph, player: Player) -> Option<Vertex> {
    choose_vertex_to_color_with(graph, player, &ColoringWeights::STANDARD)
}

/// 使用标准权重选择要移除的顶点
pub fn choose_vertex_to_remove(graph: &Graph, player: Player) -> Option<Vertex> {
    choose_vertex_to_remove_with(graph, player, &RemovalWeights::STANDARD)
}

/// 绑定一套权重配置的自动玩家
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercolationPlayer {
    config: HeuristicConfig,
}

impl PercolationPlayer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(HeuristicConfig::from_strategy(strategy))
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// 选择要着色的顶点，返回的顶点一定未标记
    pub fn choose_vertex_to_color(&self, graph: &Graph, player: Player) -> Option<Vertex> {
        choose_vertex_to_color_with(graph, player, &self.config.coloring)
    }

    /// 选择要移除的顶点，返回的顶点颜色一定是该玩家的颜色
    pub fn choose_vertex_to_remove(&self, graph: &Graph, player: Player) -> Option<Vertex> {
        choose_vertex_to_remove_with(graph, player, &self.config.removal)
    }

    pub fn score_coloring(&self, graph: &Graph, player: Player) -> Vec<CandidateScore> {
        score_coloring_candidates(graph, player, &self.config.coloring)
    }

    pub fn score_removal(&self, graph: &Graph, player: Player) -> Vec<CandidateScore> {
        score_removal_candidates(graph, player, &self.config.removal)
    }
}
