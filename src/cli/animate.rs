//! # animate 子命令 CLI 定义
//!
//! 先绘制汇总图，再播放自旋构型序列
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/animate.rs`

use super::plot::SummaryArgs;
use crate::render::DEFAULT_INTERVAL;
use clap::Args;
use std::path::PathBuf;

/// animate 子命令参数
#[derive(Args, Debug)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub summary: SummaryArgs,

    /// Spin configuration file (integer rows, each grid terminated by an END line)
    #[arg(short, long, env = "ISING_SPINS", default_value = "ising_spins.txt")]
    pub spins: PathBuf,

    /// Animated GIF output
    #[arg(long, default_value = "ising_spins.gif")]
    pub gif: PathBuf,

    /// Skip writing the GIF
    #[arg(long, default_value_t = false)]
    pub no_gif: bool,

    /// Play the animation in the terminal
    #[arg(long, default_value_t = false)]
    pub play: bool,

    /// Interval between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Size of one lattice site in GIF pixels
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_size: u32,

    /// Keep a trailing configuration that is missing its END line
    #[arg(long, default_value_t = false)]
    pub keep_partial: bool,
}
