//! # 统一错误处理模块
//!
//! 定义 fastsolver 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fastsolver 统一错误类型
#[derive(Error, Debug)]
pub enum FastSolverError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Invalid capacitance matrix: {0}")]
    InvalidMatrix(String),

    // ─────────────────────────────────────────────────────────────
    // 外部求解器错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Automation endpoint error: {0}")]
    Automation(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl FastSolverError {
    /// 是否属于 "未找到" 类错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, FastSolverError::FileNotFound { .. })
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FastSolverError>;
