//! # plot 子命令 CLI 定义
//!
//! 绘制结果表的汇总图。汇总参数也被 `animate` 复用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/animate.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::Args;
use std::path::PathBuf;

/// 汇总图参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Results CSV with Beta, Average Energy and Average Magnetization columns
    #[arg(short, long, env = "ISING_RESULTS", default_value = "ising_results.csv")]
    pub results: PathBuf,

    /// Output figure (.png or .svg)
    #[arg(short, long, default_value = "ising_summary.png")]
    pub output: PathBuf,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Do not print the results table to the terminal
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub summary: SummaryArgs,
}
