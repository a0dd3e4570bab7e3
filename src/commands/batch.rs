//! # batch 命令实现
//!
//! 批量运行 FastHenry / FasterCap 并汇总结果。
//!
//! ## 功能
//! - 读取列表文件（未给出时交互输入）
//! - 对每个几何目录运行两个求解器并检查输出
//! - 终端表格汇总，可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/`, `solver/process.rs`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use super::solver_config;
use crate::batch::{BatchRunner, BatchSummary, FolderReport};
use crate::cli::batch::BatchArgs;
use crate::error::{FastSolverError, Result};
use crate::solver::{AutomationEndpoint, ProcessEndpoint, SolverConfig, SolverKind};
use crate::utils::{output, prompt};

use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Geometry folder")]
    folder: String,
    #[tabled(rename = "FastHenry")]
    fasthenry: String,
    #[tabled(rename = "FasterCap")]
    fastercap: String,
    #[tabled(rename = "Warnings")]
    warnings: usize,
}

impl SummaryRow {
    fn from_report(index: usize, report: &FolderReport) -> Self {
        SummaryRow {
            index,
            folder: report.folder.clone(),
            fasthenry: report.fasthenry.to_string(),
            fastercap: report.fastercap.to_string(),
            warnings: report.warnings.len(),
        }
    }
}

/// 执行批量处理
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("FastHenry / FasterCap Batch");

    let list_path = match args.list {
        Some(path) => path,
        None => PathBuf::from(prompt::read_line("Enter path to Adress.txt: ")?),
    };

    let fasthenry = solver_config(&args.solver, SolverKind::FastHenry);
    let fastercap = solver_config(&args.solver, SolverKind::FasterCap);

    let runner = BatchRunner::new(
        fasthenry,
        fastercap,
        |config: &SolverConfig| -> Result<Box<dyn AutomationEndpoint>> {
            Ok(Box::new(ProcessEndpoint::from_config(config)))
        },
    );

    let summary = runner.run(&list_path)?;
    if summary.total() == 0 {
        return Ok(());
    }

    let rows = summary_rows(&summary);
    println!("{}", Table::new(&rows));

    output::print_info(&format!(
        "{} folders processed, {} outputs found, {} timeouts, {} warnings",
        summary.total(),
        summary.produced(),
        summary.timeouts(),
        summary.warnings()
    ));

    if let Some(report_path) = &args.report {
        save_report_csv(&rows, report_path)?;
        output::print_success(&format!("Report saved to '{}'", report_path.display()));
    }

    Ok(())
}

fn summary_rows(summary: &BatchSummary) -> Vec<SummaryRow> {
    summary
        .folders
        .iter()
        .enumerate()
        .map(|(i, r)| SummaryRow::from_report(i + 1, r))
        .collect()
}

/// 保存汇总到 CSV
fn save_report_csv(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(FastSolverError::CsvError)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| FastSolverError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
