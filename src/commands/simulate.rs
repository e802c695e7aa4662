//! # simulate 命令实现
//!
//! 在 β 网格上运行 Metropolis 模拟，写出绘图所需的两个输入文件。
//!
//! ## 功能
//! - 每个 β 从随机构型开始，执行固定次数扫描
//! - 记录末态每自旋能量与 |磁化强度| 到结果 CSV
//! - 记录一个 β 的自旋构型快照（默认最后一个 β）
//!
//! ## 依赖关系
//! - 使用 `cli/simulate.rs` 定义的参数
//! - 使用 `simulation/`, `parsers/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::simulate::SimulateArgs;
use crate::commands::plot::print_results_table;
use crate::error::{IsingVizError, Result};
use crate::models::ResultsTable;
use crate::parsers;
use crate::simulation::{self, PointConfig};
use crate::utils::{output, progress};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};

/// 执行 simulate 命令
pub fn execute(args: SimulateArgs) -> Result<()> {
    output::print_header("Ising Model Metropolis Simulation");

    let config = PointConfig {
        size: args.size,
        steps: args.steps,
        snapshot_every: args.snapshot_every,
    };
    config.validate()?;

    let betas = simulation::beta_points(args.beta_min, args.beta_max, args.beta_step)?;
    let snapshot_idx = snapshot_index(&betas, args.snapshot_beta);

    output::print_info(&format!(
        "{}x{} lattice, {} sweeps per point, {} beta points ({} .. {})",
        args.size,
        args.size,
        args.steps,
        betas.len(),
        betas[0],
        betas[betas.len() - 1]
    ));
    output::print_info(&format!(
        "Recording configurations at beta = {}",
        betas[snapshot_idx]
    ));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let spins_path = args.spins.display().to_string();
    let spins_file = File::create(&args.spins).map_err(|e| IsingVizError::FileWriteError {
        path: spins_path.clone(),
        source: e,
    })?;
    let mut spins_out = BufWriter::new(spins_file);
    let mut snapshots = 0usize;

    let pb = progress::create_progress_bar(betas.len() as u64, "Simulating");
    let mut records = Vec::with_capacity(betas.len());

    for (i, &beta) in betas.iter().enumerate() {
        pb.set_message(format!("beta = {:.3}", beta));

        let record = simulation::run_point(&config, beta, &mut rng, |_, lattice| {
            if i != snapshot_idx {
                return Ok(());
            }
            snapshots += 1;
            parsers::write_spin_block(&mut spins_out, &lattice.to_grid()).map_err(|e| {
                IsingVizError::FileWriteError {
                    path: spins_path.clone(),
                    source: e,
                }
            })
        })?;

        pb.println(format!(
            "Beta: {} | Final Energy: {:.6} | Final Magnetization: {:.6}",
            record.beta, record.average_energy, record.average_magnetization
        ));
        records.push(record);
        pb.inc(1);
    }

    pb.finish_and_clear();

    spins_out.flush().map_err(|e| IsingVizError::FileWriteError {
        path: spins_path.clone(),
        source: e,
    })?;

    let table = ResultsTable::new(records);
    parsers::write_results_file(&args.results, &table)?;

    if !args.no_table {
        print_results_table(&table);
    }

    output::print_success(&format!(
        "Simulation results saved to '{}'",
        args.results.display()
    ));
    output::print_success(&format!(
        "{} spin configurations saved to '{}'",
        snapshots, spins_path
    ));

    Ok(())
}

/// 最接近请求 β 的网格索引，未指定时取最后一个
fn snapshot_index(betas: &[f64], requested: Option<f64>) -> usize {
    match requested {
        Some(target) => betas
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - target)
                    .abs()
                    .partial_cmp(&(*b - target).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0),
        None => betas.len().saturating_sub(1),
    }
}
