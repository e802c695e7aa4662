//! # 二维 Ising 格子
//!
//! N×N 自旋格子，周期性边界条件，耦合常数 J = 1。
//!
//! ## 依赖关系
//! - 被 `simulation/metropolis.rs`, `simulation/mod.rs` 使用
//! - 使用 `models/spins.rs` 导出快照

use crate::models::SpinGrid;
use rand::Rng;

/// N×N 自旋格子（±1）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// 随机初始化
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let spins = (0..size * size)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect();
        Lattice { size, spins }
    }

    /// 全部自旋取同一值
    #[cfg(test)]
    pub fn uniform(size: usize, spin: i8) -> Self {
        Lattice {
            size,
            spins: vec![spin.signum(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn spin(&self, row: usize, col: usize) -> i8 {
        self.spins[row * self.size + col]
    }

    pub fn flip(&mut self, row: usize, col: usize) {
        let idx = row * self.size + col;
        self.spins[idx] = -self.spins[idx];
    }

    /// 上下左右四个近邻之和
    pub fn neighbour_sum(&self, row: usize, col: usize) -> i32 {
        let n = self.size;
        let up = self.spin((row + n - 1) % n, col);
        let down = self.spin((row + 1) % n, col);
        let left = self.spin(row, (col + n - 1) % n);
        let right = self.spin(row, (col + 1) % n);
        (up + down + left + right) as i32
    }

    /// 翻转 (row, col) 的能量变化 ΔE = 2 s Σ neighbours
    pub fn delta_energy(&self, row: usize, col: usize) -> i32 {
        2 * self.spin(row, col) as i32 * self.neighbour_sum(row, col)
    }

    /// 每自旋能量，每条键只计一次（右、下近邻）
    pub fn energy_per_spin(&self) -> f64 {
        let n = self.size;
        if n == 0 {
            return 0.0;
        }
        let mut energy = 0i64;
        for row in 0..n {
            for col in 0..n {
                let s = self.spin(row, col) as i64;
                let right = self.spin(row, (col + 1) % n) as i64;
                let down = self.spin((row + 1) % n, col) as i64;
                energy -= s * (right + down);
            }
        }
        energy as f64 / (n * n) as f64
    }

    /// 每自旋磁化强度
    pub fn magnetization_per_spin(&self) -> f64 {
        if self.spins.is_empty() {
            return 0.0;
        }
        let total: i64 = self.spins.iter().map(|&s| s as i64).sum();
        total as f64 / self.spins.len() as f64
    }

    /// 导出为快照网格
    pub fn to_grid(&self) -> SpinGrid {
        SpinGrid::from_fn(self.size, self.size, |row, col| self.spin(row, col) as i32)
    }
}
