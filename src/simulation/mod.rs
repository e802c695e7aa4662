//! # Ising 模拟模块
//!
//! 生成绘图所需的两个输入文件：β 扫描的结果表与自旋构型快照。
//!
//! ## 子模块
//! - `lattice`: N×N 周期性自旋格子与观测量
//! - `metropolis`: Metropolis 扫描
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 使用
//! - 使用 `models/`，`rand`

pub mod lattice;
pub mod metropolis;

pub use lattice::Lattice;
pub use metropolis::metropolis_sweep;

use crate::error::{IsingVizError, Result};
use crate::models::ResultRecord;

use rand::Rng;

/// 单个温度点的模拟参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointConfig {
    /// 格子边长 N
    pub size: usize,
    /// 扫描次数
    pub steps: usize,
    /// 每隔多少次扫描记录一次快照（0 表示不记录）
    pub snapshot_every: usize,
}

impl PointConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(IsingVizError::InvalidArgument(format!(
                "lattice size must be at least 2, got {}",
                self.size
            )));
        }
        if self.steps == 0 {
            return Err(IsingVizError::InvalidArgument(
                "number of Monte Carlo steps must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// 含端点的 β 网格，按索引生成以避免浮点累加误差
pub fn beta_points(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || max < min {
        return Err(IsingVizError::InvalidArgument(format!(
            "invalid beta range {}..{} with step {}",
            min, max, step
        )));
    }

    let count = ((max - min) / step + 1e-9).floor() as usize + 1;
    Ok((0..count)
        .map(|i| round_10(min + i as f64 * step))
        .collect())
}

fn round_10(v: f64) -> f64 {
    (v * 1e10).round() / 1e10
}

/// 在单个 β 下从随机构型开始模拟
///
/// 每次扫描后若 `step % snapshot_every == 0` 则调用 `on_snapshot`。
/// 返回末态的每自旋能量与 |磁化强度|。
pub fn run_point<R, F>(
    config: &PointConfig,
    beta: f64,
    rng: &mut R,
    mut on_snapshot: F,
) -> Result<ResultRecord>
where
    R: Rng + ?Sized,
    F: FnMut(usize, &Lattice) -> Result<()>,
{
    config.validate()?;

    let mut lattice = Lattice::random(config.size, rng);
    for step in 0..config.steps {
        metropolis_sweep(&mut lattice, beta, rng);
        if config.snapshot_every > 0 && step % config.snapshot_every == 0 {
            on_snapshot(step, &lattice)?;
        }
    }

    Ok(ResultRecord::new(
        beta,
        lattice.energy_per_spin(),
        lattice.magnetization_per_spin().abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::spins::{parse_spins_content, write_spin_block, TrailingBlock};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_beta_points_inclusive() {
        let betas = beta_points(0.1, 1.5, 0.1).unwrap();
        assert_eq!(betas.len(), 15);
        assert_eq!(betas[0], 0.1);
        assert_eq!(betas[14], 1.5);
        assert_eq!(beta_points(0.4, 0.4, 0.1).unwrap(), vec![0.4]);
    }

    #[test]
    fn test_beta_points_invalid() {
        assert!(beta_points(1.0, 0.5, 0.1).is_err());
        assert!(beta_points(0.1, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_run_point_is_reproducible() {
        let config = PointConfig {
            size: 6,
            steps: 30,
            snapshot_every: 0,
        };
        let a = run_point(&config, 0.6, &mut StdRng::seed_from_u64(42), |_, _| Ok(())).unwrap();
        let b = run_point(&config, 0.6, &mut StdRng::seed_from_u64(42), |_, _| Ok(())).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.beta, 0.6);
        assert!(a.average_magnetization >= 0.0 && a.average_magnetization <= 1.0);
        assert!(a.average_energy >= -2.0 && a.average_energy <= 2.0);
    }

    #[test]
    fn test_snapshots_parse_back() {
        let config = PointConfig {
            size: 5,
            steps: 10,
            snapshot_every: 3,
        };
        let mut buf = Vec::new();
        let mut steps = Vec::new();
        run_point(&config, 0.4, &mut StdRng::seed_from_u64(9), |step, lattice| {
            steps.push(step);
            write_spin_block(&mut buf, &lattice.to_grid()).map_err(|e| IsingVizError::Other(e.to_string()))
        })
        .unwrap();

        assert_eq!(steps, vec![0, 3, 6, 9]);

        let text = String::from_utf8(buf).unwrap();
        let traj = parse_spins_content(&text, TrailingBlock::Drop).unwrap();
        assert_eq!(traj.len(), 4);
        assert!(traj.frames.iter().all(|f| f.rows() == 5 && f.cols() == 5));
    }

    #[test]
    fn test_invalid_point_config() {
        let config = PointConfig {
            size: 1,
            steps: 10,
            snapshot_every: 1,
        };
        let result = run_point(&config, 0.4, &mut StdRng::seed_from_u64(0), |_, _| Ok(()));
        assert!(matches!(result, Err(IsingVizError::InvalidArgument(_))));
    }
}
