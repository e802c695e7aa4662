//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `render/`, `simulation/`, `utils/`
//! - 子模块: plot, animate, simulate

pub mod animate;
pub mod plot;
pub mod simulate;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plot(args) => plot::execute(args),
        Commands::Animate(args) => animate::execute(args),
        Commands::Simulate(args) => simulate::execute(args),
    }
}
