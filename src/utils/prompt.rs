//! # 交互输入
//!
//! 命令行未给出列表文件时，从终端读取一行路径。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `console` crate

use crate::error::{FastSolverError, Result};

use console::Term;
use std::io::BufRead;

/// 提示并读取一行输入（去除首尾空白）
pub fn read_line(prompt: &str) -> Result<String> {
    let term = Term::stdout();
    let io_err = |e: std::io::Error| FastSolverError::FileReadError {
        path: "<stdin>".to_string(),
        source: e,
    };

    term.write_str(prompt).map_err(io_err)?;

    // 非终端（管道、重定向）时 console 不读取，直接读 stdin
    let line = if term.is_term() {
        term.read_line().map_err(io_err)?
    } else {
        let mut buf = String::new();
        std::io::stdin().lock().read_line(&mut buf).map_err(io_err)?;
        buf
    };

    Ok(line.trim().to_string())
}
