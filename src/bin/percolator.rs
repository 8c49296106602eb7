//! Percolator 命令行工具
//!
//! 读取一个图快照（JSON），执行一次启发式或图分析并打印结果

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use percolator::algorithm::{connected_components, greedy_vertex_cover};
use percolator::cli::Printer;
use percolator::graph::{Graph, IncidenceIndex};
use percolator::heuristic::{HeuristicConfig, PercolationPlayer, Strategy};
use percolator::types::Player;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "percolator")]
#[command(about = "渗流图博弈启发式工具")]
struct Args {
    /// 图快照文件（JSON）
    snapshot: PathBuf,

    /// 权重策略
    #[arg(short, long, value_enum, default_value = "standard")]
    strategy: Strategy,

    /// 权重配置文件（JSON），优先于 --strategy
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 打印所有候选的得分
    #[arg(short, long)]
    explain: bool,

    /// 关闭彩色输出
    #[arg(long)]
    no_color: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 选择要着色的顶点
    Color {
        #[arg(short, long, value_parser = parse_player)]
        player: Player,
    },
    /// 选择要移除的顶点
    Remove {
        #[arg(short, long, value_parser = parse_player)]
        player: Player,
    },
    /// 连通分量分解
    Components,
    /// 贪心顶点覆盖
    Cover,
    /// 图统计
    Stats,
}

fn parse_player(s: &str) -> std::result::Result<Player, String> {
    match s.to_lowercase().as_str() {
        "silver" | "0" => Ok(Player::Silver),
        "teal" | "1" => Ok(Player::Teal),
        other => Err(format!("未知玩家: {} (可选 silver, teal)", other)),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "percolator=debug" } else { "percolator=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let graph = Graph::from_json_file(&args.snapshot)
        .with_context(|| format!("加载快照失败: {}", args.snapshot.display()))?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "快照已加载"
    );

    let config = match &args.config {
        Some(path) => HeuristicConfig::from_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => HeuristicConfig::from_strategy(args.strategy),
    };
    let player = PercolationPlayer::new(config);
    let printer = Printer::new(!args.no_color);

    let output = match args.command {
        Command::Color { player: p } => {
            let choice = player.choose_vertex_to_color(&graph, p);
            let mut out = String::new();
            if args.explain {
                out.push_str(&printer.print_scores(
                    &player.score_coloring(&graph, p),
                    choice.map(|v| v.id()),
                ));
            }
            out.push_str(&printer.print_choice("着色", choice.as_ref()));
            out
        }
        Command::Remove { player: p } => {
            let choice = player.choose_vertex_to_remove(&graph, p);
            let mut out = String::new();
            if args.explain {
                out.push_str(&printer.print_scores(
                    &player.score_removal(&graph, p),
                    choice.map(|v| v.id()),
                ));
            }
            out.push_str(&printer.print_choice("移除", choice.as_ref()));
            out
        }
        Command::Components => printer.print_components(&connected_components(&graph)),
        Command::Cover => {
            let incidence = IncidenceIndex::build(&graph);
            let cover = greedy_vertex_cover(graph.edges(), &incidence);
            printer.print_cover(&cover, graph.edge_count())
        }
        Command::Stats => printer.print_stats(&graph),
    };

    print!("{}", output);
    Ok(())
}
