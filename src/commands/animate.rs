//! # animate 命令实现
//!
//! 先完成与 `plot` 相同的汇总图，再解析自旋构型并逐帧播放。
//!
//! ## 功能
//! - 灰度 GIF 动画输出（帧间隔即 GIF 帧延迟）
//! - 可选终端实时播放 (`--play`)
//! - 末尾缺少 END 的构型默认丢弃并警告
//!
//! ## 依赖关系
//! - 使用 `cli/animate.rs` 定义的参数
//! - 使用 `commands/plot.rs` 绘制汇总图
//! - 使用 `parsers/spins.rs`, `render/`

use crate::cli::animate::AnimateArgs;
use crate::commands::plot;
use crate::error::{IsingVizError, Result};
use crate::parsers::{self, TrailingBlock};
use crate::render::{self, Animation, GifSink, Pacing, TerminalSink};
use crate::utils::output;

use console::Term;
use std::time::Duration;

/// 执行 animate 命令
pub fn execute(args: AnimateArgs) -> Result<()> {
    output::print_header("Ising Model Summary & Spin Animation");

    if args.no_gif && !args.play {
        return Err(IsingVizError::InvalidArgument(
            "--no-gif without --play leaves nothing to animate".to_string(),
        ));
    }

    plot::plot_summary(&args.summary)?;

    // 解析自旋构型
    let trailing = if args.keep_partial {
        TrailingBlock::Keep
    } else {
        TrailingBlock::Drop
    };

    output::print_info(&format!(
        "Reading spin configurations from '{}'",
        args.spins.display()
    ));
    let trajectory = parsers::parse_spins_file(&args.spins, trailing)?;

    if trajectory.dropped_rows > 0 {
        output::print_warning(&format!(
            "Dropped {} trailing rows without a terminating END line (use --keep-partial to keep them)",
            trajectory.dropped_rows
        ));
    }

    if trajectory.is_empty() {
        return Err(IsingVizError::NoFrames);
    }

    let first = &trajectory.frames[0];
    output::print_info(&format!(
        "Found {} configurations of {}x{} spins",
        trajectory.len(),
        first.rows(),
        first.cols()
    ));

    let interval = Duration::from_millis(args.interval_ms);

    // GIF 输出
    if !args.no_gif {
        let mut sink = GifSink::create(&args.gif, first, args.cell_size, interval)?;
        let mut animation = Animation::new(&trajectory.frames, interval)?;
        let frames = render::play(&mut animation, &mut sink, Pacing::Immediate)?;
        output::print_success(&format!(
            "Animation ({} frames, {} ms/frame) saved to '{}'",
            frames,
            args.interval_ms,
            args.gif.display()
        ));
    }

    // 终端播放
    if args.play {
        let (_, term_cols) = Term::stdout().size();
        if first.cols() > term_cols as usize {
            output::print_warning(&format!(
                "Lattice is {} columns wide but the terminal has {}; rows will wrap",
                first.cols(),
                term_cols
            ));
        }

        let mut sink = TerminalSink::new(first, trajectory.len());
        let mut animation = Animation::new(&trajectory.frames, interval)?;
        let frames = render::play(&mut animation, &mut sink, Pacing::RealTime)?;
        output::print_done(&format!("Played {} frames", frames));
    }

    Ok(())
}
