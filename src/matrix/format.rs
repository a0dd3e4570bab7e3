//! # 电容矩阵文本输出
//!
//! 输出格式：每行一个矩阵行，元素之间单个空格，每行以 `\n` 结束。
//!
//! - 每个元素都按复数输出：`<实部><符号><虚部>j`，如 `1.000000e-12+2.500000e-15j`
//! - 实数元素虚部为 0：`5.575260e-11+0.000000e+00j`
//! - 各部分为科学计数法，小数点后 6 位，指数带符号且至少两位
//! - 非有限值：`nan`, `inf`, `-inf`
//!
//! ## 依赖关系
//! - 被 `solver/invoker.rs`, `commands/show.rs` 调用

use super::{CapacitanceMatrix, MatrixEntry};
use crate::error::{FastSolverError, Result};

use std::fs;
use std::path::Path;

/// 格式化单个实数
pub fn format_sci(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rust 的 `{:e}` 输出形如 `1.234560e-12` / `1.000000e0`，需补齐指数
    let raw = format!("{:.6e}", value);
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };

    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

/// 格式化单个矩阵元素（实数按虚部为 0 的复数输出）
pub fn format_entry(entry: MatrixEntry) -> String {
    let c = entry.to_complex();
    let im = format_sci(c.im);
    // 负零虚部保留负号
    let im = if im.starts_with('-') {
        im
    } else if c.im == 0.0 && c.im.is_sign_negative() {
        format!("-{}", im)
    } else {
        format!("+{}", im)
    };
    format!("{}{}j", format_sci(c.re), im)
}

/// 矩阵序列化为文本
pub fn to_text(matrix: &CapacitanceMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line = row
            .iter()
            .map(|e| format_entry(*e))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// 写入矩阵文件（覆盖已有内容）
pub fn write_matrix(matrix: &CapacitanceMatrix, output_path: &Path) -> Result<()> {
    fs::write(output_path, to_text(matrix)).map_err(|e| FastSolverError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
