//! # 自旋构型数据模型
//!
//! 二维自旋格子快照及其时间序列。
//!
//! ## 依赖关系
//! - 被 `parsers/spins.rs` 构造
//! - 被 `render/animation.rs`, `render/lattice.rs`, `simulation/` 使用

/// 单个自旋构型（行优先存储的矩形整数网格）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinGrid {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl SpinGrid {
    /// 由行优先数据构造，长度必须等于 rows * cols
    pub fn new(rows: usize, cols: usize, data: Vec<i32>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(SpinGrid { rows, cols, data })
    }

    /// 逐格点生成
    pub fn from_fn<F: FnMut(usize, usize) -> i32>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        SpinGrid { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[cfg(test)]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// 逐行迭代
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> {
        // cols == 0 时 chunks 会 panic
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// 转换为嵌套 Vec
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    /// (最小值, 最大值)
    pub fn value_range(&self) -> Option<(i32, i32)> {
        let min = self.data.iter().copied().min()?;
        let max = self.data.iter().copied().max()?;
        Some((min, max))
    }

    /// 每格点平均自旋
    pub fn magnetization(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().map(|&s| s as f64).sum::<f64>() / self.data.len() as f64
    }
}

/// 自旋构型序列（帧索引即列表位置）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinTrajectory {
    pub frames: Vec<SpinGrid>,

    /// 末尾缺少 END 而被丢弃的行数
    pub dropped_rows: usize,
}

impl SpinTrajectory {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_checked() {
        assert!(SpinGrid::new(2, 2, vec![1, -1, -1]).is_none());
        let grid = SpinGrid::new(2, 3, vec![1, -1, 1, -1, 1, 1]).unwrap();
        assert_eq!(grid.get(1, 2), Some(1));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.to_rows(), vec![vec![1, -1, 1], vec![-1, 1, 1]]);

        let generated = SpinGrid::from_fn(2, 3, |r, c| if (r + c) % 2 == 0 { 1 } else { -1 });
        assert_eq!(generated.to_rows(), vec![vec![1, -1, 1], vec![-1, 1, -1]]);
    }

    #[test]
    fn test_grid_statistics() {
        let grid = SpinGrid::new(2, 2, vec![1, 1, 1, -1]).unwrap();
        assert_eq!(grid.value_range(), Some((-1, 1)));
        assert!((grid.magnetization() - 0.5).abs() < 1e-12);
    }
}
