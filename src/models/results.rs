//! # 模拟结果数据模型
//!
//! 存储每个温度点的平均能量与平均磁化强度。
//!
//! ## 依赖关系
//! - 被 `parsers/results.rs` 读写
//! - 被 `render/summary.rs`, `simulation/` 使用

use serde::{Deserialize, Serialize};

/// 结果表中的一行
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// 逆温度 β = 1/kT
    #[serde(rename = "Beta")]
    pub beta: f64,

    /// 每自旋平均能量
    #[serde(rename = "Average Energy")]
    pub average_energy: f64,

    /// 每自旋平均磁化强度
    #[serde(rename = "Average Magnetization")]
    pub average_magnetization: f64,
}

impl ResultRecord {
    pub fn new(beta: f64, average_energy: f64, average_magnetization: f64) -> Self {
        ResultRecord {
            beta,
            average_energy,
            average_magnetization,
        }
    }
}

/// 完整结果表（保持文件顺序，只读）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    pub records: Vec<ResultRecord>,
}

impl ResultsTable {
    pub fn new(records: Vec<ResultRecord>) -> Self {
        ResultsTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (β, E) 序列
    pub fn energy_series(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.beta, r.average_energy))
            .collect()
    }

    /// (β, M) 序列
    pub fn magnetization_series(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.beta, r.average_magnetization))
            .collect()
    }
}
