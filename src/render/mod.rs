//! # 渲染模块
//!
//! 提供结果汇总图与自旋构型动画的绘制。
//!
//! ## 子模块
//! - `summary`: 能量/磁化强度 vs. β 汇总图
//! - `animation`: 动画驱动（帧索引状态 + 定时前进）
//! - `lattice`: 自旋格子帧输出 (GIF / 终端)
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/animate.rs` 使用
//! - 使用 `models/`
//! - 使用 `plotters`, `console`

pub mod animation;
pub mod lattice;
pub mod summary;

pub use animation::{play, Animation, Pacing, DEFAULT_INTERVAL};
pub use lattice::{GifSink, TerminalSink};
pub use summary::render_summary;

use crate::error::IsingVizError;
use std::path::Path;

/// 按扩展名判断是否输出 SVG
pub fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// plotters 错误统一转换
pub(crate) fn plot_err<E: std::fmt::Debug>(e: E) -> IsingVizError {
    IsingVizError::PlotError(format!("{:?}", e))
}
