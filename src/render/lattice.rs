//! # 自旋格子图像输出
//!
//! `FrameSink` 的两种实现：
//! - `GifSink`: 灰度 GIF 动画（plotters GIF 后端）
//! - `TerminalSink`: 终端内实时播放（`console`）
//!
//! 灰度标尺由第 0 帧确定：最小值为黑，最大值为白。
//!
//! ## 依赖关系
//! - 被 `commands/animate.rs` 使用
//! - 实现 `render/animation.rs` 的 FrameSink

use crate::error::{IsingVizError, Result};
use crate::models::SpinGrid;
use crate::render::animation::FrameSink;
use crate::render::plot_err;

use console::Term;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use std::time::Duration;

/// 终端灰度字符（暗 -> 亮）
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// 整数值到灰度的线性映射
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayScale {
    min: i32,
    max: i32,
}

impl GrayScale {
    /// 以帧的取值范围为标尺，单值帧扩展为 ±1
    pub fn from_frame(frame: &SpinGrid) -> Self {
        let (min, max) = frame.value_range().unwrap_or((-1, 1));
        if min == max {
            GrayScale {
                min: min.saturating_sub(1),
                max: max.saturating_add(1),
            }
        } else {
            GrayScale { min, max }
        }
    }

    /// 归一化亮度 [0, 1]，超出标尺的值被截断
    pub fn intensity(&self, value: i32) -> f64 {
        let t = (value as f64 - self.min as f64) / (self.max as f64 - self.min as f64);
        t.clamp(0.0, 1.0)
    }

    /// 8 位灰度
    pub fn level(&self, value: i32) -> u8 {
        (self.intensity(value) * 255.0).round() as u8
    }

    /// 终端字符
    pub fn shade(&self, value: i32) -> char {
        let idx = (self.intensity(value) * (SHADES.len() - 1) as f64).round() as usize;
        SHADES[idx.min(SHADES.len() - 1)]
    }
}

fn check_shape(index: usize, frame: &SpinGrid, shape: (usize, usize)) -> Result<()> {
    if (frame.rows(), frame.cols()) != shape {
        return Err(IsingVizError::InvalidArgument(format!(
            "spin configuration #{} is {}x{}, expected {}x{}",
            index,
            frame.rows(),
            frame.cols(),
            shape.0,
            shape.1
        )));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// GIF 输出
// ─────────────────────────────────────────────────────────────

/// 灰度 GIF 动画，每帧延迟等于动画间隔
pub struct GifSink {
    root: DrawingArea<BitMapBackend<'static>, Shift>,
    scale: GrayScale,
    shape: (usize, usize),
    cell_size: u32,
}

impl GifSink {
    /// 以第 0 帧确定图像尺寸与灰度标尺
    pub fn create(
        output_path: &Path,
        first: &SpinGrid,
        cell_size: u32,
        interval: Duration,
    ) -> Result<Self> {
        let (width, height) = gif_dimensions(first, cell_size)?;
        let delay_ms = interval.as_millis().min(u32::MAX as u128) as u32;

        let backend =
            BitMapBackend::gif(output_path, (width, height), delay_ms).map_err(plot_err)?;

        Ok(GifSink {
            root: backend.into_drawing_area(),
            scale: GrayScale::from_frame(first),
            shape: (first.rows(), first.cols()),
            cell_size,
        })
    }
}

/// GIF 图像尺寸，须非零且像素坐标不超出 i32
fn gif_dimensions(first: &SpinGrid, cell_size: u32) -> Result<(u32, u32)> {
    if cell_size == 0 || first.rows() == 0 || first.cols() == 0 {
        return Err(IsingVizError::InvalidArgument(
            "GIF frame would be empty".to_string(),
        ));
    }

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|n| n.checked_mul(cell_size))
            .filter(|&px| px <= i32::MAX as u32)
    };

    match (side(first.cols()), side(first.rows())) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(IsingVizError::InvalidArgument(format!(
            "GIF frame of {}x{} sites at {} px per site is too large",
            first.rows(),
            first.cols(),
            cell_size
        ))),
    }
}

impl FrameSink for GifSink {
    fn show(&mut self, index: usize, frame: &SpinGrid) -> Result<()> {
        check_shape(index, frame, self.shape)?;

        let cs = self.cell_size as i32;
        for (r, row) in frame.iter_rows().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let g = self.scale.level(value);
                let (x0, y0) = (c as i32 * cs, r as i32 * cs);
                self.root
                    .draw(&Rectangle::new(
                        [(x0, y0), (x0 + cs - 1, y0 + cs - 1)],
                        RGBColor(g, g, g).filled(),
                    ))
                    .map_err(plot_err)?;
            }
        }

        self.root.present().map_err(plot_err)
    }
}

// ─────────────────────────────────────────────────────────────
// 终端输出
// ─────────────────────────────────────────────────────────────

/// 将一帧渲染为终端文本行
pub fn render_frame_text(frame: &SpinGrid, scale: &GrayScale) -> Vec<String> {
    frame
        .iter_rows()
        .map(|row| row.iter().map(|&v| scale.shade(v)).collect())
        .collect()
}

/// 终端实时播放，每帧原地覆盖上一帧
pub struct TerminalSink {
    term: Term,
    scale: GrayScale,
    shape: (usize, usize),
    total: usize,
    drawn_lines: usize,
}

impl TerminalSink {
    pub fn new(first: &SpinGrid, total: usize) -> Self {
        TerminalSink {
            term: Term::stdout(),
            scale: GrayScale::from_frame(first),
            shape: (first.rows(), first.cols()),
            total,
            drawn_lines: 0,
        }
    }
}

impl FrameSink for TerminalSink {
    fn show(&mut self, index: usize, frame: &SpinGrid) -> Result<()> {
        check_shape(index, frame, self.shape)?;

        let mut lines = render_frame_text(frame, &self.scale);
        lines.push(format!(
            "frame {}/{}  <M> = {:+.4}",
            index + 1,
            self.total,
            frame.magnetization()
        ));

        if self.drawn_lines > 0 {
            self.term
                .clear_last_lines(self.drawn_lines)
                .map_err(terminal_err)?;
        }
        for line in &lines {
            self.term.write_line(line).map_err(terminal_err)?;
        }
        self.drawn_lines = lines.len();

        Ok(())
    }
}

fn terminal_err(e: std::io::Error) -> IsingVizError {
    IsingVizError::FileWriteError {
        path: "<stdout>".to_string(),
        source: e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_for_spins() {
        let frame = SpinGrid::new(1, 2, vec![-1, 1]).unwrap();
        let scale = GrayScale::from_frame(&frame);
        assert_eq!(scale.level(-1), 0);
        assert_eq!(scale.level(1), 255);
        assert_eq!(scale.shade(-1), ' ');
        assert_eq!(scale.shade(1), '█');
    }

    #[test]
    fn test_grayscale_flat_first_frame() {
        let frame = SpinGrid::new(1, 2, vec![1, 1]).unwrap();
        let scale = GrayScale::from_frame(&frame);
        assert_eq!(scale.level(1), 128);
        // 后续帧超出标尺的值被截断
        assert_eq!(scale.level(5), 255);
        assert_eq!(scale.level(-5), 0);
    }

    #[test]
    fn test_render_frame_text() {
        let frame = SpinGrid::new(2, 3, vec![1, -1, 1, -1, -1, 1]).unwrap();
        let scale = GrayScale::from_frame(&frame);
        assert_eq!(render_frame_text(&frame, &scale), vec!["█ █", "  █"]);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let frame = SpinGrid::new(2, 2, vec![1, 1, 1, 1]).unwrap();
        assert!(check_shape(3, &frame, (2, 2)).is_ok());
        assert!(check_shape(3, &frame, (3, 3)).is_err());
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ising-viz-{}-{}", std::process::id(), name))
    }

    fn spin_frames(n: usize) -> Vec<SpinGrid> {
        (0..n)
            .map(|k| SpinGrid::from_fn(3, 4, |r, c| if (r + c + k) % 2 == 0 { 1 } else { -1 }))
            .collect()
    }

    #[test]
    fn test_gif_sink_writes_every_frame() {
        use crate::render::animation::{play, Animation, Pacing, DEFAULT_INTERVAL};

        let path = temp_path("frames.gif");
        let frames = spin_frames(3);
        let shown = {
            let mut sink = GifSink::create(&path, &frames[0], 2, DEFAULT_INTERVAL).unwrap();
            let mut animation = Animation::new(&frames, DEFAULT_INTERVAL).unwrap();
            play(&mut animation, &mut sink, Pacing::Immediate).unwrap()
        };

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(shown, 3);
        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(bytes.last(), Some(&0x3b));
        // 逻辑屏幕尺寸 (小端): 4 列 * 2 px, 3 行 * 2 px
        assert_eq!(&bytes[6..10], &[8, 0, 6, 0]);
    }

    #[test]
    fn test_gif_sink_rejects_resized_frame() {
        let path = temp_path("resized.gif");
        let frames = spin_frames(1);
        let result = {
            let mut sink = GifSink::create(&path, &frames[0], 1, Duration::from_millis(100)).unwrap();
            sink.show(0, &frames[0]).unwrap();
            let bigger = SpinGrid::from_fn(4, 4, |_, _| 1);
            sink.show(1, &bigger)
        };
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(IsingVizError::InvalidArgument(_))));
    }

    #[test]
    fn test_gif_dimensions_overflow_rejected() {
        let frame = SpinGrid::from_fn(100, 100, |_, _| 1);
        assert_eq!(gif_dimensions(&frame, 4).unwrap(), (400, 400));
        assert!(matches!(
            gif_dimensions(&frame, u32::MAX / 50),
            Err(IsingVizError::InvalidArgument(_))
        ));
        assert!(matches!(
            gif_dimensions(&frame, 0),
            Err(IsingVizError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_terminal_sink_redraws_in_place() {
        let frames = spin_frames(2);
        let mut sink = TerminalSink::new(&frames[0], frames.len());

        sink.show(0, &frames[0]).unwrap();
        sink.show(1, &frames[1]).unwrap();
        assert_eq!(sink.drawn_lines, 3 + 1);

        let bigger = SpinGrid::from_fn(4, 4, |_, _| 1);
        assert!(sink.show(2, &bigger).is_err());
    }
}
