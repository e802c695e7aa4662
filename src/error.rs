//! # 统一错误处理模块
//!
//! 定义 ising-viz 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// ising-viz 统一错误类型
#[derive(Error, Debug)]
pub enum IsingVizError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Missing column '{column}' in results file: {path}")]
    MissingColumn { path: String, column: String },

    #[error(
        "Ragged spin configuration #{frame}: row {row} has {found} values, expected {expected}"
    )]
    RaggedGrid {
        frame: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Results table is empty, nothing to plot")]
    EmptyTable,

    #[error("No spin configurations to animate")]
    NoFrames,

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, IsingVizError>;
