//! # batch 子命令 CLI 定义
//!
//! 批量运行 FastHenry / FasterCap
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::solve::SolverArgs;
use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// List file with one geometry folder per line (prompted for if omitted)
    pub list: Option<PathBuf>,

    /// Write a per-folder CSV report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub solver: SolverArgs,
}
