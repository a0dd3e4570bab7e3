//! # 求解器调用器
//!
//! 一次求解器运行的完整流程：
//! 1. 校验输入文件存在
//! 2. 构造命令行 `"<绝对输入路径>" <选项>`
//! 3. 提交到自动化端点
//! 4. 按固定间隔轮询，直到完成或超时（超时只警告，不报错）
//! 5. FasterCap：取回电容矩阵并写入 `CapacitanceMatrix.txt`
//!    （超时后取回或写入失败只警告，仍返回输出路径供后续检查）
//! 6. 返回与输入文件同目录的固定输出路径
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/solve.rs` 调用
//! - 使用 `matrix/format.rs`, `utils/output.rs`, `utils/progress.rs`

use super::{AutomationEndpoint, Clock, SolverConfig, SolverKind};
use crate::error::{FastSolverError, Result};
use crate::matrix;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 一次调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: SolverKind,
    /// 提交给端点的命令行
    pub command_line: String,
    /// 期望的输出文件（不保证存在）
    pub output_path: PathBuf,
    /// 等待是否超时
    pub timed_out: bool,
}

/// 构造命令行
pub fn build_command_line(input: &Path, options: &str) -> String {
    format!("\"{}\" {}", input.display(), options.trim())
        .trim()
        .to_string()
}

/// 求解器调用器
pub struct SolverInvoker<'a> {
    config: &'a SolverConfig,
    clock: &'a dyn Clock,
}

impl<'a> SolverInvoker<'a> {
    pub fn new(config: &'a SolverConfig, clock: &'a dyn Clock) -> Self {
        SolverInvoker { config, clock }
    }

    /// 运行一次求解器
    pub fn invoke(
        &self,
        endpoint: &mut dyn AutomationEndpoint,
        input: &Path,
        options: Option<&str>,
    ) -> Result<Invocation> {
        if !input.is_file() {
            return Err(FastSolverError::FileNotFound {
                path: input.display().to_string(),
            });
        }

        let input = std::path::absolute(input).map_err(|e| FastSolverError::FileReadError {
            path: input.display().to_string(),
            source: e,
        })?;
        let input_dir = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let kind = self.config.kind;
        let options = self.config.resolve_options(options);
        let command_line = build_command_line(&input, &options);

        output::print_info(&format!("Calling {} with: {}", kind, command_line));

        endpoint.start(&command_line)?;
        let timed_out = self.wait_for_completion(endpoint)?;

        let output_path = input_dir.join(kind.output_file());

        if kind == SolverKind::FasterCap {
            let written = endpoint
                .fetch_matrix()
                .and_then(|capacitance| matrix::write_matrix(&capacitance, &output_path));

            match written {
                Ok(()) => output::print_success(&format!(
                    "Capacitance matrix written to: {}",
                    output_path.display()
                )),
                Err(e) if timed_out => output::print_warning(&format!(
                    "No capacitance matrix after timeout: {}",
                    e
                )),
                Err(e) => return Err(e),
            }
        }

        Ok(Invocation {
            kind,
            command_line,
            output_path,
            timed_out,
        })
    }

    /// 轮询直到完成；返回是否超时
    fn wait_for_completion(&self, endpoint: &mut dyn AutomationEndpoint) -> Result<bool> {
        let kind = self.config.kind;
        let start = self.clock.now();
        let spinner = self
            .config
            .show_progress
            .then(|| progress::create_spinner(&format!("Waiting for {}...", kind)));

        loop {
            if !endpoint.is_running()? {
                if let Some(pb) = &spinner {
                    pb.finish_and_clear();
                }
                return Ok(false);
            }

            if self.clock.now().saturating_sub(start) > self.config.timeout {
                if let Some(pb) = &spinner {
                    pb.finish_and_clear();
                }
                output::print_warning(&format!(
                    "Timeout: {} still running after {} s",
                    kind,
                    self.config.timeout.as_secs()
                ));
                return Ok(true);
            }

            self.clock.sleep(self.config.poll_interval);
        }
    }
}
