//! # 批量处理模块
//!
//! 按列表文件依次处理几何目录，对每个目录运行 FastHenry / FasterCap 并检查输出。
//!
//! ## 功能
//! - 读取列表文件（每行一个目录，忽略空行）
//! - 顺序处理每个目录，两个求解器互不影响
//! - 单个目录内的任何故障只产生警告，不中断批处理
//! - 汇总每个目录的结果
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `solver/` 运行求解器

pub mod list;
pub mod runner;

pub use list::read_folder_list;
pub use runner::{BatchRunner, BatchSummary, EndpointFactory, FolderReport, StepOutcome};

/// 每个几何目录下的求解器子目录
pub const FASTSOLVER_DIR: &str = "FastSolver";
