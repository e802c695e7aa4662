//! # plot 命令实现
//!
//! 读取结果表，输出汇总图并在终端打印表格。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `parsers/results.rs`, `render/summary.rs`
//! - 使用 `utils/output.rs`

use crate::cli::plot::{PlotArgs, SummaryArgs};
use crate::error::Result;
use crate::models::ResultsTable;
use crate::parsers;
use crate::render;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 终端表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Beta")]
    beta: String,
    #[tabled(rename = "Avg Energy")]
    energy: String,
    #[tabled(rename = "Avg Magnetization")]
    magnetization: String,
}

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Ising Model Summary");
    plot_summary(&args.summary)?;
    Ok(())
}

/// 读取结果表并绘制汇总图（animate 复用）
pub fn plot_summary(args: &SummaryArgs) -> Result<ResultsTable> {
    output::print_info(&format!(
        "Loading results from '{}'",
        args.results.display()
    ));
    let table = parsers::load_results_file(&args.results)?;
    output::print_info(&format!("Loaded {} temperature points", table.len()));

    if !args.no_table {
        print_results_table(&table);
    }

    let layout = render::render_summary(&table, &args.output, args.width, args.height)?;
    output::print_success(&format!(
        "Summary plot ({} + {} points) saved to '{}'",
        layout.energy.points,
        layout.magnetization.points,
        args.output.display()
    ));

    Ok(table)
}

/// 在终端打印结果表
pub fn print_results_table(table: &ResultsTable) {
    let rows: Vec<ResultRow> = table
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| ResultRow {
            index: i + 1,
            beta: format!("{:.4}", r.beta),
            energy: format!("{:.6}", r.average_energy),
            magnetization: format!("{:.6}", r.average_magnetization),
        })
        .collect();

    println!("{}", Table::new(&rows));
}
