//! # 列表文件读取
//!
//! 纯文本，每行一个几何目录路径；行首尾空白去除，空行忽略，
//! 保持原顺序，不去重。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用

use crate::error::{FastSolverError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 读取几何目录列表
pub fn read_folder_list(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(FastSolverError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| FastSolverError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut folders = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| FastSolverError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let line = line.trim();
        if !line.is_empty() {
            folders.push(line.to_string());
        }
    }

    Ok(folders)
}
