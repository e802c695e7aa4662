//! # 结果汇总图
//!
//! 使用 `plotters` 绘制左右并排的两幅折线图：
//! - 能量 vs. β（蓝色，圆形标记）
//! - 磁化强度 vs. β（红色，方形标记）
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/animate.rs` 调用
//! - 使用 `models/results.rs` 的 ResultsTable
//! - 使用 `plotters` 渲染图表

use crate::error::{IsingVizError, Result};
use crate::models::ResultsTable;
use crate::render::{is_svg_path, plot_err};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const BETA_LABEL: &str = "Beta (1/kT)";
const ENERGY_COLOR: RGBColor = RGBColor(31, 119, 180);
const MAGNETIZATION_COLOR: RGBColor = RED;

/// 数据点标记形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// 单幅子图的布局
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub title: &'static str,
    pub y_desc: &'static str,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub points: usize,
    pub marker: Marker,
}

/// 汇总图布局（纯函数计算，同一输入结果相同）
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLayout {
    pub energy: PanelLayout,
    pub magnetization: PanelLayout,
}

impl SummaryLayout {
    pub fn from_table(table: &ResultsTable) -> Result<Self> {
        if table.is_empty() {
            return Err(IsingVizError::EmptyTable);
        }

        let x_range = padded_range(table.records.iter().map(|r| r.beta));

        Ok(SummaryLayout {
            energy: PanelLayout {
                title: "Energy vs. Beta",
                y_desc: "Average Energy per Spin",
                x_range,
                y_range: padded_range(table.records.iter().map(|r| r.average_energy)),
                points: table.len(),
                marker: Marker::Circle,
            },
            magnetization: PanelLayout {
                title: "Magnetization vs. Beta",
                y_desc: "Average Magnetization per Spin",
                x_range,
                y_range: padded_range(table.records.iter().map(|r| r.average_magnetization)),
                points: table.len(),
                marker: Marker::Square,
            },
        })
    }
}

/// 数据范围两侧各留 5%，单值范围留 ±0.5
pub fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    if span == 0.0 {
        (min - 0.5, max + 0.5)
    } else {
        (min - span * 0.05, max + span * 0.05)
    }
}

/// 生成汇总图，按扩展名选择 SVG 或位图
pub fn render_summary(
    table: &ResultsTable,
    output_path: &Path,
    width: u32,
    height: u32,
) -> Result<SummaryLayout> {
    let layout = SummaryLayout::from_table(table)?;

    if is_svg_path(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_summary(&root, table, &layout)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_summary(&root, table, &layout)?;
        root.present().map_err(plot_err)?;
    }

    Ok(layout)
}

/// 绘制两幅子图
fn draw_summary<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &ResultsTable,
    layout: &SummaryLayout,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let panels = root.split_evenly((1, 2));
    draw_panel(
        &panels[0],
        &table.energy_series(),
        &layout.energy,
        ENERGY_COLOR,
    )?;
    draw_panel(
        &panels[1],
        &table.magnetization_series(),
        &layout.magnetization,
        MAGNETIZATION_COLOR,
    )?;

    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &[(f64, f64)],
    panel: &PanelLayout,
    color: RGBColor,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = panel.x_range;
    let (y_min, y_max) = panel.y_range;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 22).into_font())
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(BETA_LABEL)
        .y_desc(panel.y_desc)
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(data.iter().copied(), color.stroke_width(2)))
        .map_err(plot_err)?;

    match panel.marker {
        Marker::Circle => {
            chart
                .draw_series(
                    data.iter()
                        .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                )
                .map_err(plot_err)?;
        }
        Marker::Square => {
            chart
                .draw_series(data.iter().map(|&(x, y)| {
                    EmptyElement::at((x, y)) + Rectangle::new([(-4, -4), (4, 4)], color.filled())
                }))
                .map_err(plot_err)?;
        }
    }

    Ok(())
}
