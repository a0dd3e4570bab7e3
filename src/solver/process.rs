//! # 子进程端点
//!
//! 以子进程方式运行求解器可执行文件：
//! - 命令行按空白拆分，双引号内视为一个参数
//! - 工作目录为第一个参数（输入文件）所在目录，FastHenry 会把 `Zc.mat` 写到工作目录
//! - 标准输出与标准错误重定向到工作目录下的 `<求解器名>.log`
//! - `fetch_matrix` 从该日志中提取最后一个电容矩阵块
//!
//! 超时后不终止子进程。
//!
//! ## 依赖关系
//! - 实现 `solver/endpoint.rs` 的 `AutomationEndpoint`
//! - 使用 `matrix/parse.rs` 解析日志

use super::{AutomationEndpoint, SolverConfig, SolverKind};
use crate::error::{FastSolverError, Result};
use crate::matrix::{self, CapacitanceMatrix};
use crate::utils::output;

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// 拆分命令行（支持双引号）
pub fn split_command_line(command_line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in command_line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}

/// 基于子进程的自动化端点
pub struct ProcessEndpoint {
    kind: SolverKind,
    executable: String,
    child: Option<Child>,
    log_path: Option<PathBuf>,
}

impl ProcessEndpoint {
    pub fn new(kind: SolverKind, executable: impl Into<String>) -> Self {
        ProcessEndpoint {
            kind,
            executable: executable.into(),
            child: None,
            log_path: None,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.kind, config.executable.clone())
    }

    /// 控制台日志路径（启动后可用）
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }
}

impl AutomationEndpoint for ProcessEndpoint {
    fn start(&mut self, command_line: &str) -> Result<()> {
        let args = split_command_line(command_line);

        let working_dir = args
            .first()
            .and_then(|input| Path::new(input).parent())
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let log_path = working_dir.join(self.kind.log_file());
        let log = File::create(&log_path).map_err(|e| FastSolverError::FileWriteError {
            path: log_path.display().to_string(),
            source: e,
        })?;
        let log_err = log.try_clone().map_err(|e| FastSolverError::FileWriteError {
            path: log_path.display().to_string(),
            source: e,
        })?;

        let child = Command::new(&self.executable)
            .args(&args)
            .current_dir(&working_dir)
            .stdin(Stdio::null())
            .stdout(log)
            .stderr(log_err)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FastSolverError::CommandNotFound {
                    command: self.executable.clone(),
                },
                _ => FastSolverError::CommandFailed {
                    command: format!("{} {}", self.executable, command_line),
                    stderr: e.to_string(),
                },
            })?;

        self.child = Some(child);
        self.log_path = Some(log_path);
        Ok(())
    }

    fn is_running(&mut self) -> Result<bool> {
        let child = self
            .child
            .as_mut()
            .ok_or_else(|| FastSolverError::Automation(format!("{} was not started", self.kind)))?;

        match child.try_wait() {
            Ok(None) => Ok(true),
            Ok(Some(status)) => {
                if !status.success() {
                    output::print_warning(&format!("{} exited with {}", self.kind, status));
                }
                Ok(false)
            }
            Err(e) => Err(FastSolverError::Automation(format!(
                "failed to query {} status: {}",
                self.kind, e
            ))),
        }
    }

    fn fetch_matrix(&mut self) -> Result<CapacitanceMatrix> {
        let log_path = self
            .log_path
            .as_ref()
            .ok_or_else(|| FastSolverError::Automation(format!("{} was not started", self.kind)))?;

        let content = fs::read_to_string(log_path).map_err(|e| FastSolverError::FileReadError {
            path: log_path.display().to_string(),
            source: e,
        })?;

        matrix::extract_from_log(&content, &log_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_line() {
        assert_eq!(
            split_command_line(r#""C:\geo dir\FastSolver\in.txt" -a0.01 -i"#),
            vec![r"C:\geo dir\FastSolver\in.txt", "-a0.01", "-i"]
        );
        assert_eq!(split_command_line("  a   b "), vec!["a", "b"]);
        assert_eq!(split_command_line(r#""""#), vec![""]);
        assert!(split_command_line("   ").is_empty());
    }

    #[test]
    fn test_missing_executable() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Wire_Sections.inp");
        fs::write(&input, "*\n").unwrap();

        let mut endpoint =
            ProcessEndpoint::new(SolverKind::FastHenry, "definitely-not-a-real-solver-binary");
        let err = endpoint
            .start(&format!("\"{}\"", input.display()))
            .unwrap_err();
        assert!(matches!(err, FastSolverError::CommandNotFound { .. }));
    }

    #[test]
    fn test_poll_before_start() {
        let mut endpoint = ProcessEndpoint::new(SolverKind::FasterCap, "FasterCap");
        assert!(matches!(
            endpoint.is_running(),
            Err(FastSolverError::Automation(_))
        ));
        assert!(endpoint.fetch_matrix().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_process_and_reads_log() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Wire_Sections_FastCap.txt");
        fs::write(
            &input,
            "Capacitance matrix is:\nDimension 2 x 2\ng1_1 3.0e-12 -1.0e-13\ng2_1 -1.0e-13 3.1e-12\n",
        )
        .unwrap();

        // `cat` 把输入回显到日志，模拟求解器输出
        let mut endpoint = ProcessEndpoint::new(SolverKind::FasterCap, "cat");
        endpoint
            .start(&format!("\"{}\"", input.display()))
            .unwrap();

        let mut polls = 0;
        while endpoint.is_running().unwrap() {
            polls += 1;
            assert!(polls < 500, "cat did not finish");
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert_eq!(endpoint.log_path(), Some(dir.path().join("FasterCap.log").as_path()));
        let m = endpoint.fetch_matrix().unwrap();
        assert_eq!(m.dimension(), 2);
        assert_eq!(m.get(1, 1).map(|e| e.re()), Some(3.1e-12));
    }
}
