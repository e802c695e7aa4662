//! # simulate 子命令 CLI 定义
//!
//! Metropolis 模拟参数（β 扫描 + 快照）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/simulate.rs`

use clap::Args;
use std::path::PathBuf;

/// simulate 子命令参数
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Lattice edge length N (N x N spins)
    #[arg(short = 'n', long, default_value_t = 100)]
    pub size: usize,

    /// Monte Carlo sweeps per beta point (one sweep = N*N flip attempts)
    #[arg(long, default_value_t = 1000)]
    pub steps: usize,

    /// Record a spin configuration every this many sweeps (0 = never)
    #[arg(long, default_value_t = 10)]
    pub snapshot_every: usize,

    /// Smallest beta of the sweep
    #[arg(long, default_value_t = 0.1)]
    pub beta_min: f64,

    /// Largest beta of the sweep (inclusive)
    #[arg(long, default_value_t = 1.5)]
    pub beta_max: f64,

    /// Beta increment
    #[arg(long, default_value_t = 0.1)]
    pub beta_step: f64,

    /// Beta whose configurations are recorded (default: last beta of the sweep)
    #[arg(long)]
    pub snapshot_beta: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Results CSV output
    #[arg(long, env = "ISING_RESULTS", default_value = "ising_results.csv")]
    pub results: PathBuf,

    /// Spin configuration output
    #[arg(long, env = "ISING_SPINS", default_value = "ising_spins.txt")]
    pub spins: PathBuf,

    /// Do not print the results table to the terminal
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}
