//! # 数据模型模块
//!
//! 定义结果表与自旋构型的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `render/`, `simulation/` 和 `commands/` 使用
//! - 子模块: results, spins

pub mod results;
pub mod spins;

pub use results::{ResultRecord, ResultsTable};
pub use spins::{SpinGrid, SpinTrajectory};
