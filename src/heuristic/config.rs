//! 启发式权重配置

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 预置的权重策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// 当前权重：度惩罚、己方邻居惩罚、叶子惩罚
    #[default]
    Standard,
    /// 早期权重：只计叶子邻居
    Legacy,
}

/// 着色启发式的权重
///
/// 对候选顶点的每个邻居 `n`：减去 `neighbor_penalty`；若 `n` 是当前玩家的
/// 颜色再减去 `own_color_penalty`；若 `n` 是叶子，已标记时减去
/// `marked_leaf_penalty`，未标记时减去 `leaf_penalty`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringWeights {
    pub neighbor_penalty: i64,
    pub own_color_penalty: i64,
    pub leaf_penalty: i64,
    pub marked_leaf_penalty: i64,
}

impl ColoringWeights {
    pub const STANDARD: Self = Self {
        neighbor_penalty: 1,
        own_color_penalty: 25,
        leaf_penalty: 5,
        marked_leaf_penalty: 5,
    };

    pub const LEGACY: Self = Self {
        neighbor_penalty: 0,
        own_color_penalty: 0,
        leaf_penalty: 1,
        marked_leaf_penalty: 2,
    };
}

impl Default for ColoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// 移除启发式的权重：得分 = `kept_edge_factor × |同色关联边| − |关联边|`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalWeights {
    pub kept_edge_factor: i64,
}

impl RemovalWeights {
    pub const STANDARD: Self = Self { kept_edge_factor: 3 };
    pub const LEGACY: Self = Self { kept_edge_factor: 2 };
}

impl Default for RemovalWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// 启发式配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub coloring: ColoringWeights,
    pub removal: RemovalWeights,
}

impl HeuristicConfig {
    /// 单项权重的上限
    pub const MAX_WEIGHT: i64 = 1_000_000;

    pub fn from_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Standard => Self {
                coloring: ColoringWeights::STANDARD,
                removal: RemovalWeights::STANDARD,
            },
            Strategy::Legacy => Self {
                coloring: ColoringWeights::LEGACY,
                removal: RemovalWeights::LEGACY,
            },
        }
    }

    /// 从 JSON 文件加载，缺省字段取标准权重
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 所有权重必须落在 `0..=MAX_WEIGHT`
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("coloring.neighbor_penalty", self.coloring.neighbor_penalty),
            ("coloring.own_color_penalty", self.coloring.own_color_penalty),
            ("coloring.leaf_penalty", self.coloring.leaf_penalty),
            ("coloring.marked_leaf_penalty", self.coloring.marked_leaf_penalty),
            ("removal.kept_edge_factor", self.removal.kept_edge_factor),
        ];
        for (name, value) in weights {
            if !(0..=Self::MAX_WEIGHT).contains(&value) {
                return Err(Error::ConfigError(format!(
                    "权重 {} 超出范围 0..={}: {}",
                    name,
                    Self::MAX_WEIGHT,
                    value
                )));
            }
        }
        Ok(())
    }
}

impl From<Strategy> for HeuristicConfig {
    fn from(strategy: Strategy) -> Self {
        Self::from_strategy(strategy)
    }
}
