//! # Metropolis 单自旋翻转
//!
//! 一次扫描 (sweep) 在随机格点上尝试 N² 次翻转，
//! 接受条件为 ΔE < 0 或 exp(-β ΔE) > u, u ~ U[0, 1)。
//!
//! ## 依赖关系
//! - 被 `simulation/mod.rs` 使用
//! - 使用 `simulation/lattice.rs`

use super::lattice::Lattice;
use rand::Rng;

/// 执行一次扫描，返回接受的翻转数
pub fn metropolis_sweep<R: Rng + ?Sized>(lattice: &mut Lattice, beta: f64, rng: &mut R) -> usize {
    let n = lattice.size();
    if n == 0 {
        return 0;
    }

    let mut accepted = 0;
    for _ in 0..n * n {
        let row = rng.gen_range(0..n);
        let col = rng.gen_range(0..n);
        let delta = lattice.delta_energy(row, col);

        if delta < 0 || (-beta * delta as f64).exp() > rng.gen::<f64>() {
            lattice.flip(row, col);
            accepted += 1;
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_beta_accepts_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut lattice = Lattice::uniform(4, 1);
        assert_eq!(metropolis_sweep(&mut lattice, 0.0, &mut rng), 16);
    }

    #[test]
    fn test_cold_ground_state_is_stable() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut lattice = Lattice::uniform(6, -1);
        for _ in 0..20 {
            assert_eq!(metropolis_sweep(&mut lattice, 100.0, &mut rng), 0);
        }
        assert_eq!(lattice, Lattice::uniform(6, -1));
    }

    #[test]
    fn test_low_temperature_orders() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut lattice = Lattice::random(8, &mut rng);
        let initial = lattice.energy_per_spin();
        for _ in 0..200 {
            metropolis_sweep(&mut lattice, 2.0, &mut rng);
        }
        assert!(lattice.energy_per_spin() < initial);
        assert!(lattice.energy_per_spin() < -0.5);
    }
}
