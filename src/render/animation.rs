//! # 动画驱动
//!
//! 按固定时间间隔逐帧播放自旋构型序列。
//!
//! ## 状态
//! - 唯一状态为当前帧索引，初始为第 0 帧
//! - `advance()` 前进一帧，到达最后一帧后停止（不回绕）
//!
//! ## 依赖关系
//! - 被 `commands/animate.rs` 调用
//! - 帧输出由 `FrameSink` 实现（见 `render/lattice.rs`）

use crate::error::{IsingVizError, Result};
use crate::models::SpinGrid;

use std::thread;
use std::time::{Duration, Instant};

/// 默认帧间隔
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// 帧输出目标
pub trait FrameSink {
    /// 显示第 `index` 帧（替换上一帧）
    fn show(&mut self, index: usize, frame: &SpinGrid) -> Result<()>;

    /// 播放结束
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// 帧间节奏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// 每帧之间等待 interval（终端实时播放）
    RealTime,
    /// 不等待（编码器自己记录帧延迟）
    Immediate,
}

/// 动画状态
#[derive(Debug, Clone)]
pub struct Animation<'a> {
    frames: &'a [SpinGrid],
    current: usize,
    interval: Duration,
}

impl<'a> Animation<'a> {
    pub fn new(frames: &'a [SpinGrid], interval: Duration) -> Result<Self> {
        if frames.is_empty() {
            return Err(IsingVizError::NoFrames);
        }
        Ok(Animation {
            frames,
            current: 0,
            interval,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> &'a SpinGrid {
        &self.frames[self.current]
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_finished(&self) -> bool {
        self.current + 1 >= self.frames.len()
    }

    /// 前进一帧；已在最后一帧时返回 false
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.current += 1;
        true
    }
}

/// 播放一遍：立即显示第 0 帧，之后每个 tick 显示下一帧。返回显示的帧数
///
/// 第 k 帧的期限为 起点 + k * interval，绘制耗时不会累积到播放时长。
pub fn play<S: FrameSink + ?Sized>(
    animation: &mut Animation<'_>,
    sink: &mut S,
    pacing: Pacing,
) -> Result<usize> {
    let mut deadline = Instant::now();
    sink.show(animation.current(), animation.current_frame())?;
    let mut shown = 1;

    while animation.advance() {
        if pacing == Pacing::RealTime {
            deadline += animation.interval();
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
        }
        sink.show(animation.current(), animation.current_frame())?;
        shown += 1;
    }

    sink.finish()?;
    Ok(shown)
}
