//! # 解析器模块
//!
//! 提供模拟输出文件的解析器与写出函数。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: results, spins

pub mod results;
pub mod spins;

pub use results::{load_results_file, write_results_file};
pub use spins::{parse_spins_file, write_spin_block, TrailingBlock};
