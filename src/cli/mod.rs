//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `fastsolver [LIST]`: 批量处理（默认，等同于 `batch`）
//! - `batch`: 批量处理列表文件中的几何目录
//! - `fastercap` / `fasthenry`: 对单个输入文件运行求解器
//! - `show`: 显示已写出的电容矩阵
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: batch, solve, show

pub mod batch;
pub mod show;
pub mod solve;

use clap::{Parser, Subcommand};

/// fastsolver - FastHenry / FasterCap 批处理工具
#[derive(Parser)]
#[command(name = "fastsolver")]
#[command(version)]
#[command(
    about = "Batch driver for the FastHenry and FasterCap field solvers",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // 未给出子命令时按 `batch` 处理
    #[command(flatten)]
    pub batch: batch::BatchArgs,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run both solvers for every geometry folder in a list file
    Batch(batch::BatchArgs),

    /// Run FasterCap on a single geometry file and write CapacitanceMatrix.txt
    Fastercap(solve::SolveArgs),

    /// Run FastHenry on a single .inp file
    Fasthenry(solve::SolveArgs),

    /// Print a CapacitanceMatrix.txt file as a table
    Show(show::ShowArgs),
}
