//! # 求解器调用模块
//!
//! 驱动外部场求解器（FastHenry 电感求解器、FasterCap 电容求解器）。
//!
//! ## 子模块
//! - `config`: 求解器配置（可执行文件、默认选项、超时、轮询间隔）
//! - `endpoint`: 自动化端点抽象（start / is_running / fetch_matrix）与时钟
//! - `invoker`: 提交命令行、轮询完成、返回输出路径
//! - `process`: 基于子进程的端点实现
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/solve.rs` 使用
//! - 使用 `matrix/` 写出电容矩阵

pub mod config;
pub mod endpoint;
pub mod invoker;
pub mod process;

pub use config::SolverConfig;
pub use endpoint::{AutomationEndpoint, Clock, SystemClock};
pub use invoker::{build_command_line, Invocation, SolverInvoker};
pub use process::ProcessEndpoint;

/// 求解器种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// 电感求解器
    FastHenry,
    /// 电容求解器
    FasterCap,
}

impl SolverKind {
    /// 固定输入文件名
    pub fn input_file(self) -> &'static str {
        match self {
            SolverKind::FastHenry => "Wire_Sections.inp",
            SolverKind::FasterCap => "Wire_Sections_FastCap.txt",
        }
    }

    /// 固定输出文件名（与输入文件同目录）
    pub fn output_file(self) -> &'static str {
        match self {
            SolverKind::FastHenry => "Zc.mat",
            SolverKind::FasterCap => crate::matrix::CAPACITANCE_MATRIX_FILE,
        }
    }

    /// 默认可执行文件名
    pub fn default_executable(self) -> &'static str {
        match self {
            SolverKind::FastHenry => "fasthenry",
            SolverKind::FasterCap => "FasterCap",
        }
    }

    /// 选项为空时使用的默认选项
    pub fn default_options(self) -> &'static str {
        match self {
            SolverKind::FastHenry => "",
            // 自动模式，最大相对误差 1%
            SolverKind::FasterCap => "-a0.01",
        }
    }

    /// 求解器控制台日志文件名
    pub fn log_file(self) -> String {
        format!("{}.log", self)
    }
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::FastHenry => write!(f, "FastHenry"),
            SolverKind::FasterCap => write!(f, "FasterCap"),
        }
    }
}
