//! # 批量执行器
//!
//! 顺序处理几何目录列表。
//!
//! ## 功能
//! - `FastSolver` 子目录缺失：一条警告，跳过该目录
//! - FastHenry / FasterCap 两步相互独立，输入缺失、运行失败都只产生警告
//! - 运行后检查输出文件（`Zc.mat`, `CapacitanceMatrix.txt`）
//! - 汇总每个目录的结果与警告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `solver/invoker.rs` 运行求解器
//! - 使用 `utils/output.rs` 输出状态

use super::{list, FASTSOLVER_DIR};
use crate::error::Result;
use crate::solver::{AutomationEndpoint, Clock, SolverConfig, SolverInvoker, SystemClock};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 单个求解步骤的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// 未执行（`FastSolver` 目录缺失）
    NotRun,
    /// 输入文件缺失，已跳过
    InputMissing,
    /// 运行后找到输出文件
    Produced { timed_out: bool },
    /// 运行后未找到输出文件
    ArtifactMissing { timed_out: bool },
    /// 运行失败（启动失败、取回结果失败等）
    Failed(String),
}

impl StepOutcome {
    pub fn is_produced(&self) -> bool {
        matches!(self, StepOutcome::Produced { .. })
    }

    pub fn timed_out(&self) -> bool {
        matches!(
            self,
            StepOutcome::Produced { timed_out: true }
                | StepOutcome::ArtifactMissing { timed_out: true }
        )
    }
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOutcome::NotRun => write!(f, "not run"),
            StepOutcome::InputMissing => write!(f, "input missing"),
            StepOutcome::Produced { timed_out: false } => write!(f, "ok"),
            StepOutcome::Produced { timed_out: true } => write!(f, "ok (timeout)"),
            StepOutcome::ArtifactMissing { timed_out: false } => write!(f, "output missing"),
            StepOutcome::ArtifactMissing { timed_out: true } => {
                write!(f, "output missing (timeout)")
            }
            StepOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// 单个几何目录的处理结果
#[derive(Debug, Clone)]
pub struct FolderReport {
    /// 列表文件中的原始路径
    pub folder: String,
    pub fasthenry: StepOutcome,
    pub fastercap: StepOutcome,
    /// 处理过程中产生的警告
    pub warnings: Vec<String>,
}

impl FolderReport {
    fn new(folder: &str) -> Self {
        FolderReport {
            folder: folder.to_string(),
            fasthenry: StepOutcome::NotRun,
            fastercap: StepOutcome::NotRun,
            warnings: Vec::new(),
        }
    }

    /// 打印并记录警告
    fn warn(&mut self, msg: String) {
        output::print_warning(&msg);
        self.warnings.push(msg);
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 按列表顺序排列的目录结果
    pub folders: Vec<FolderReport>,
}

impl BatchSummary {
    /// 合并单个目录结果
    pub fn merge(&mut self, report: FolderReport) {
        self.folders.push(report);
    }

    /// 处理的目录数
    pub fn total(&self) -> usize {
        self.folders.len()
    }

    /// 找到的输出文件数
    pub fn produced(&self) -> usize {
        self.folders
            .iter()
            .map(|r| r.fasthenry.is_produced() as usize + r.fastercap.is_produced() as usize)
            .sum()
    }

    /// 等待超时的求解步骤数
    pub fn timeouts(&self) -> usize {
        self.folders
            .iter()
            .map(|r| r.fasthenry.timed_out() as usize + r.fastercap.timed_out() as usize)
            .sum()
    }

    /// 警告总数
    pub fn warnings(&self) -> usize {
        self.folders.iter().map(|r| r.warnings.len()).sum()
    }
}

/// 自动化端点工厂：每次求解器运行创建一个新端点
pub type EndpointFactory<'a> =
    dyn Fn(&SolverConfig) -> Result<Box<dyn AutomationEndpoint>> + 'a;

/// 批量执行器
pub struct BatchRunner<'a> {
    fasthenry: SolverConfig,
    fastercap: SolverConfig,
    factory: Box<EndpointFactory<'a>>,
    clock: Box<dyn Clock + 'a>,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new<F>(fasthenry: SolverConfig, fastercap: SolverConfig, factory: F) -> Self
    where
        F: Fn(&SolverConfig) -> Result<Box<dyn AutomationEndpoint>> + 'a,
    {
        BatchRunner {
            fasthenry,
            fastercap,
            factory: Box::new(factory),
            clock: Box::new(SystemClock::new()),
        }
    }

    /// 替换等待循环使用的时钟
    pub fn with_clock(mut self, clock: impl Clock + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// 读取列表文件并处理所有目录
    pub fn run(&self, list_path: &Path) -> Result<BatchSummary> {
        let folders = list::read_folder_list(list_path)?;

        if folders.is_empty() {
            output::print_info(&format!(
                "No geometry folders listed in {}, nothing to do.",
                list_path.display()
            ));
            return Ok(BatchSummary::default());
        }

        output::print_info(&format!(
            "Loaded {} geometry folders from {}",
            folders.len(),
            list_path.display()
        ));

        let summary = self.run_folders(&folders);

        output::print_separator();
        output::print_done("Batch processing complete.");

        Ok(summary)
    }

    /// 依次处理目录
    pub fn run_folders(&self, folders: &[String]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for (i, folder) in folders.iter().enumerate() {
            output::print_header(&format!(
                "Processing geometry folder {}/{}: {}",
                i + 1,
                folders.len(),
                folder
            ));
            summary.merge(self.process_folder(folder));
        }

        summary
    }

    /// 处理单个几何目录
    pub fn process_folder(&self, folder: &str) -> FolderReport {
        let mut report = FolderReport::new(folder);

        let geometry_root =
            std::path::absolute(folder).unwrap_or_else(|_| PathBuf::from(folder));
        let fastsolver_dir = geometry_root.join(FASTSOLVER_DIR);

        if !fastsolver_dir.is_dir() {
            report.warn(format!(
                "{} folder missing for {}",
                FASTSOLVER_DIR,
                geometry_root.display()
            ));
            return report;
        }

        let fasthenry = self.run_step(&self.fasthenry, &fastsolver_dir, &mut report);
        report.fasthenry = fasthenry;

        let fastercap = self.run_step(&self.fastercap, &fastsolver_dir, &mut report);
        report.fastercap = fastercap;

        report
    }

    /// 运行单个求解器并检查输出
    fn run_step(
        &self,
        config: &SolverConfig,
        fastsolver_dir: &Path,
        report: &mut FolderReport,
    ) -> StepOutcome {
        let kind = config.kind;
        let input = fastsolver_dir.join(kind.input_file());

        if !input.is_file() {
            report.warn(format!(
                "{} missing in {}",
                kind.input_file(),
                fastsolver_dir.display()
            ));
            return StepOutcome::InputMissing;
        }

        output::print_info(&format!("Running {} for {}", kind, input.display()));

        let invoker = SolverInvoker::new(config, self.clock.as_ref());
        let result = (self.factory)(config)
            .and_then(|mut endpoint| invoker.invoke(endpoint.as_mut(), &input, None));

        let invocation = match result {
            Ok(invocation) => invocation,
            Err(e) => {
                report.warn(format!("{} failed for {}: {}", kind, input.display(), e));
                return StepOutcome::Failed(e.to_string());
            }
        };

        // 超时警告已由调用器打印
        if invocation.timed_out {
            report
                .warnings
                .push(format!("{} timed out: {}", kind, invocation.command_line));
        }

        if invocation.output_path.is_file() {
            output::print_success(&format!(
                "{} output found: {}",
                kind,
                invocation.output_path.display()
            ));
            StepOutcome::Produced {
                timed_out: invocation.timed_out,
            }
        } else {
            report.warn(format!(
                "{} not found after running {} for {}",
                kind.output_file(),
                kind,
                input.display()
            ));
            StepOutcome::ArtifactMissing {
                timed_out: invocation.timed_out,
            }
        }
    }
}
