//! 最小得分选择
//!
//! 候选按发现顺序编号，优先级为 `(得分, 发现序号)` 的最小值，
//! 因此同分时最先发现的候选获胜。

use crate::graph::VertexId;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// 单个候选的评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub vertex: VertexId,
    pub score: i64,
    /// 发现序号（从 0 开始严格递增）
    pub order: u64,
}

impl CandidateScore {
    /// 按枚举位置记录发现序号
    pub(crate) fn discovered(order: usize, vertex: VertexId, score: i64) -> Self {
        Self {
            vertex,
            score,
            order: order as u64,
        }
    }
}

/// 最小堆选择器
pub(crate) struct MinSelector {
    heap: PriorityQueue<VertexId, Reverse<(i64, u64)>>,
}

impl MinSelector {
    /// 在已评分的候选中选出得分最小、发现最早者
    pub(crate) fn best_of(scores: &[CandidateScore]) -> Option<CandidateScore> {
        let mut selector = Self {
            heap: PriorityQueue::new(),
        };
        for candidate in scores {
            selector
                .heap
                .push(candidate.vertex, Reverse((candidate.score, candidate.order)));
        }
        selector
            .heap
            .pop()
            .map(|(vertex, Reverse((score, order)))| CandidateScore {
                vertex,
                score,
                order,
            })
    }
}
