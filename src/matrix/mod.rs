//! # 电容矩阵模块
//!
//! FasterCap 求解结果（Maxwell 电容矩阵）的数据模型、文本序列化与解析。
//!
//! ## 子模块
//! - `format`: 矩阵 → 文本（`CapacitanceMatrix.txt` 的输出格式）
//! - `parse`: 文本 → 矩阵，以及从求解器控制台日志中提取矩阵块
//!
//! ## 依赖关系
//! - 被 `solver/`, `batch/`, `commands/` 使用
//! - 使用 `num-complex` 表示复数元素

pub mod format;
pub mod parse;

pub use format::{format_entry, format_sci, to_text, write_matrix};
pub use parse::{extract_from_log, parse_matrix_file, parse_matrix_text};

use crate::error::{FastSolverError, Result};
use num_complex::Complex64;

/// 文件名：电容矩阵输出
pub const CAPACITANCE_MATRIX_FILE: &str = "CapacitanceMatrix.txt";

/// 矩阵元素（实数或复数）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixEntry {
    Real(f64),
    Complex(Complex64),
}

impl MatrixEntry {
    /// 转换为复数
    pub fn to_complex(self) -> Complex64 {
        match self {
            MatrixEntry::Real(v) => Complex64::new(v, 0.0),
            MatrixEntry::Complex(c) => c,
        }
    }

    /// 实部
    pub fn re(self) -> f64 {
        self.to_complex().re
    }

    /// 虚部
    pub fn im(self) -> f64 {
        self.to_complex().im
    }
}

impl From<f64> for MatrixEntry {
    fn from(v: f64) -> Self {
        MatrixEntry::Real(v)
    }
}

impl From<Complex64> for MatrixEntry {
    fn from(c: Complex64) -> Self {
        MatrixEntry::Complex(c)
    }
}

impl std::fmt::Display for MatrixEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_entry(*self))
    }
}

/// 电容矩阵
///
/// 行列顺序与求解器返回顺序一致，不保存导体标签。
#[derive(Debug, Clone, PartialEq)]
pub struct CapacitanceMatrix {
    rows: Vec<Vec<MatrixEntry>>,
}

impl CapacitanceMatrix {
    /// 从行数据构造，要求非空方阵
    pub fn new(rows: Vec<Vec<MatrixEntry>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(FastSolverError::InvalidMatrix("matrix is empty".to_string()));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(FastSolverError::InvalidMatrix(format!(
                    "row {} has {} entries, expected {}",
                    i + 1,
                    row.len(),
                    n
                )));
            }
        }

        Ok(CapacitanceMatrix { rows })
    }

    /// 从实数行数据构造
    pub fn from_real(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(MatrixEntry::Real).collect())
                .collect(),
        )
    }

    /// 矩阵维度（导体数）
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<MatrixEntry>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<MatrixEntry> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// 是否含有复数元素
    pub fn is_complex(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|e| matches!(e, MatrixEntry::Complex(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_square() {
        let err = CapacitanceMatrix::from_real(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, FastSolverError::InvalidMatrix(_)));

        let err = CapacitanceMatrix::from_real(vec![vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, FastSolverError::InvalidMatrix(_)));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(CapacitanceMatrix::new(vec![]).is_err());
    }

    #[test]
    fn test_accessors() {
        let m = CapacitanceMatrix::new(vec![
            vec![MatrixEntry::Real(1.0), MatrixEntry::Complex(Complex64::new(2.0, -1.0))],
            vec![MatrixEntry::Real(3.0), MatrixEntry::Real(4.0)],
        ])
        .unwrap();

        assert_eq!(m.dimension(), 2);
        assert!(m.is_complex());
        assert_eq!(m.get(0, 1).map(|e| e.im()), Some(-1.0));
        assert_eq!(m.get(1, 0), Some(MatrixEntry::Real(3.0)));
        assert_eq!(m.get(2, 0), None);
    }
}
