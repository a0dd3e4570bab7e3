//! # fastercap / fasthenry 子命令 CLI 定义
//!
//! 对单个输入文件运行求解器，以及各子命令共用的求解器参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/batch.rs` 使用
//! - 参数传递给 `commands/solve.rs`, `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// 求解器共用参数
#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    // ─────────────────────────────────────────────────────────────
    // 执行控制
    // ─────────────────────────────────────────────────────────────
    /// Seconds to wait for a solver run before giving up on it
    #[arg(long, default_value_t = 600)]
    pub timeout: u64,

    /// Milliseconds between completion checks
    #[arg(long, default_value_t = 500)]
    pub poll_interval: u64,

    /// Do not show a spinner while waiting
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    // ─────────────────────────────────────────────────────────────
    // FastHenry
    // ─────────────────────────────────────────────────────────────
    /// FastHenry executable
    #[arg(long, env = "FASTHENRY_EXE", default_value = "fasthenry")]
    pub fasthenry_exe: String,

    /// Options used when none are given for a FastHenry run
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub fasthenry_options: String,

    // ─────────────────────────────────────────────────────────────
    // FasterCap
    // ─────────────────────────────────────────────────────────────
    /// FasterCap executable
    #[arg(long, env = "FASTERCAP_EXE", default_value = "FasterCap")]
    pub fastercap_exe: String,

    /// Options used when none are given for a FasterCap run
    #[arg(long, default_value = "-a0.01", allow_hyphen_values = true)]
    pub fastercap_options: String,
}

/// fastercap / fasthenry 子命令参数
#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    /// Solver input file
    pub input: PathBuf,

    /// Extra solver options, e.g. -a0.001 (defaults apply when omitted)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub options: Vec<String>,
}
