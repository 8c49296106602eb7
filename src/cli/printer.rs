//! 结果打印器
//!
//! 提供候选评分表、分量表和覆盖结果的文本输出

use crate::graph::{Graph, Vertex, VertexId};
use crate::heuristic::CandidateScore;
use crate::types::Color;
use colored::Colorize;
use prettytable::{format, row, Table};
use std::collections::BTreeSet;

/// 结果打印器
pub struct Printer {
    use_color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Printer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// 带颜色的顶点名
    pub fn vertex_label(&self, vertex: &Vertex) -> String {
        let label = format!("{} ({})", vertex.id(), vertex.color());
        if !self.use_color {
            return label;
        }
        match vertex.color() {
            Color::Silver => label.bright_white().bold().to_string(),
            Color::Teal => label.cyan().bold().to_string(),
            Color::Unmarked => label.dimmed().to_string(),
        }
    }

    /// 打印选中的走子
    pub fn print_choice(&self, action: &str, choice: Option<&Vertex>) -> String {
        match choice {
            Some(vertex) => format!("{}: {}\n", action, self.vertex_label(vertex)),
            None => format!("{}: 无可选顶点\n", action),
        }
    }

    /// 候选评分表，标出获胜者
    pub fn print_scores(&self, scores: &[CandidateScore], chosen: Option<VertexId>) -> String {
        if scores.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Order", "Vertex", "Score", ""]);

        for s in scores {
            let mark = if Some(s.vertex) == chosen { "*" } else { "" };
            table.add_row(row![s.order, s.vertex, s.score, mark]);
        }

        format!("{}{} candidate(s)\n", table, scores.len())
    }

    /// 连通分量表
    pub fn print_components(&self, components: &[Graph]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "Vertices", "Edges"]);

        for (i, component) in components.iter().enumerate() {
            let vertices = component
                .vertices()
                .map(|v| self.vertex_label(v))
                .collect::<Vec<_>>()
                .join(", ");
            let edges = component
                .edges()
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(row![i + 1, vertices, edges]);
        }

        format!("{}{} component(s)\n", table, components.len())
    }

    /// 顶点覆盖结果
    pub fn print_cover(&self, cover: &BTreeSet<VertexId>, edge_count: usize) -> String {
        let ids = cover
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "顶点覆盖: {{{}}}\n  覆盖大小: {}\n  边数: {}\n",
            ids,
            cover.len(),
            edge_count
        )
    }

    /// 打印统计信息
    pub fn print_stats(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count()]);
        table.add_row(row!["Edge Count", graph.edge_count()]);
        for color in [Color::Unmarked, Color::Silver, Color::Teal] {
            table.add_row(row![
                format!("{} Vertices", color),
                graph.vertices_with_color(color).count()
            ]);
        }
        table.to_string()
    }
}
