//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `plot`: 绘制能量/磁化强度 vs. β 汇总图
//! - `animate`: 汇总图 + 自旋构型动画
//! - `simulate`: Metropolis 模拟，生成上述两种输入文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: plot, animate, simulate

pub mod animate;
pub mod plot;
pub mod simulate;

use clap::{Parser, Subcommand};

/// ising-viz - 2D Ising 模型结果可视化工具
#[derive(Parser)]
#[command(name = "ising-viz")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Plot and animate 2D Ising model simulation results", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot average energy and magnetization versus beta
    Plot(plot::PlotArgs),

    /// Plot the summary, then animate the recorded spin configurations
    Animate(animate::AnimateArgs),

    /// Run a Metropolis simulation producing the results and spin files
    Simulate(simulate::SimulateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plot_defaults() {
        let cli = Cli::try_parse_from(["ising-viz", "plot"]).unwrap();
        match cli.command {
            Commands::Plot(args) => {
                assert_eq!(args.summary.output.to_str(), Some("ising_summary.png"));
                assert_eq!((args.summary.width, args.summary.height), (1000, 500));
            }
            _ => panic!("expected plot command"),
        }
    }

    #[test]
    fn test_animate_flags() {
        let cli = Cli::try_parse_from([
            "ising-viz",
            "animate",
            "--spins",
            "run/spins.txt",
            "--interval-ms",
            "50",
            "--play",
            "--keep-partial",
        ])
        .unwrap();
        match cli.command {
            Commands::Animate(args) => {
                assert_eq!(args.spins.to_str(), Some("run/spins.txt"));
                assert_eq!(args.interval_ms, 50);
                assert!(args.play && args.keep_partial && !args.no_gif);
            }
            _ => panic!("expected animate command"),
        }
    }

    #[test]
    fn test_zero_figure_size_rejected() {
        assert!(Cli::try_parse_from(["ising-viz", "plot", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["ising-viz", "animate", "--height", "0"]).is_err());
        assert!(Cli::try_parse_from(["ising-viz", "plot", "--width", "1", "--height", "1"]).is_ok());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let result = Cli::try_parse_from(["ising-viz", "animate", "--cell-size", "0"]);
        assert!(result.is_err());
    }
}
