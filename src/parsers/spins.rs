//! # 自旋构型文件解析器
//!
//! 解析模拟输出的 `ising_spins.txt`，每个构型以 `END` 行结束。
//!
//! ## 格式说明
//! ```text
//! 1 -1 1 ...
//! -1 -1 1 ...
//! ...
//! END
//! 1 1 -1 ...
//! ...
//! END
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/spins.rs`

use crate::error::{IsingVizError, Result};
use crate::models::{SpinGrid, SpinTrajectory};

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// 构型结束标记
pub const SENTINEL: &str = "END";

/// 末尾未以 END 结束的构型块的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBlock {
    /// 丢弃（与原始绘图脚本一致），行数记入 `dropped_rows`
    #[default]
    Drop,
    /// 作为最后一帧保留
    Keep,
}

/// 解析自旋构型文件
pub fn parse_spins_file(path: &Path, trailing: TrailingBlock) -> Result<SpinTrajectory> {
    if !path.exists() {
        return Err(IsingVizError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| IsingVizError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_spins_reader(BufReader::new(file), &path.display().to_string(), trailing)
}

/// 从字符串内容解析
#[cfg(test)]
pub fn parse_spins_content(content: &str, trailing: TrailingBlock) -> Result<SpinTrajectory> {
    parse_spins_reader(content.as_bytes(), "<string>", trailing)
}

/// 逐行解析
pub fn parse_spins_reader<R: BufRead>(
    reader: R,
    source: &str,
    trailing: TrailingBlock,
) -> Result<SpinTrajectory> {
    let mut frames = Vec::new();
    let mut block: Vec<Vec<i32>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| IsingVizError::FileReadError {
            path: source.to_string(),
            source: e,
        })?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // 含 END 标记的行结束当前构型，行内其余内容忽略
        if line.split_whitespace().any(|token| token == SENTINEL) {
            if block.is_empty() {
                return Err(parse_error(
                    source,
                    format!("line {}: empty block before {}", line_no, SENTINEL),
                ));
            }
            frames.push(finalize_block(frames.len(), std::mem::take(&mut block))?);
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i32>().map_err(|_| {
                    parse_error(
                        source,
                        format!("line {}: invalid spin value '{}'", line_no, token),
                    )
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        block.push(row);
    }

    let mut dropped_rows = 0;
    if !block.is_empty() {
        match trailing {
            TrailingBlock::Drop => dropped_rows = block.len(),
            TrailingBlock::Keep => frames.push(finalize_block(frames.len(), block)?),
        }
    }

    Ok(SpinTrajectory {
        frames,
        dropped_rows,
    })
}

/// 将累积的行转换为矩形网格
fn finalize_block(frame: usize, rows: Vec<Vec<i32>>) -> Result<SpinGrid> {
    let cols = rows.first().map(|r| r.len()).unwrap_or(0);

    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(IsingVizError::RaggedGrid {
            frame,
            row: row + 1,
            expected: cols,
            found: r.len(),
        });
    }

    let n_rows = rows.len();
    let data: Vec<i32> = rows.into_iter().flatten().collect();
    SpinGrid::new(n_rows, cols, data)
        .ok_or_else(|| IsingVizError::Other(format!("Invalid shape for frame #{}", frame)))
}

fn parse_error(source: &str, reason: String) -> IsingVizError {
    IsingVizError::ParseError {
        format: "spin configuration".to_string(),
        path: source.to_string(),
        reason,
    }
}

/// 写出一个构型块（行 + END）
pub fn write_spin_block<W: Write>(writer: &mut W, grid: &SpinGrid) -> std::io::Result<()> {
    for row in grid.iter_rows() {
        let line = row
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer, "{}", SENTINEL)
}
