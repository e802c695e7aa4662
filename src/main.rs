//! # ising-viz - 2D Ising 模型模拟结果可视化
//!
//! 将模拟后处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `plot` - 能量/磁化强度 vs. β 汇总图
//! - `animate` - 汇总图 + 自旋构型动画 (GIF / 终端)
//! - `simulate` - Metropolis 模拟，生成结果表与构型快照
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/    (结果表与构型文件读写)
//!   │     ├── render/     (汇总图、动画)
//!   │     ├── simulation/ (Metropolis 模拟)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod render;
mod simulation;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
