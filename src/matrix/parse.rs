//! # 电容矩阵解析
//!
//! - `parse_matrix_text`: 解析 `CapacitanceMatrix.txt` 格式的文本
//! - `extract_from_log`: 从 FasterCap 控制台日志中提取最后一个完整的矩阵块
//!
//! FasterCap 日志中的矩阵块形如：
//! ```text
//! Capacitance matrix is:
//! Dimension 2 x 2
//! g1_1  5.57526e-011 -1.71226e-011
//! g2_1  -1.71226e-011 5.60112e-011
//! ```
//!
//! ## 依赖关系
//! - 被 `solver/process.rs`, `commands/show.rs` 调用
//! - 使用 `regex` 识别块头

use super::{CapacitanceMatrix, MatrixEntry};
use crate::error::{FastSolverError, Result};

use num_complex::Complex64;
use regex::Regex;
use std::fs;
use std::path::Path;

/// 解析单个元素（实数或 `a+bj` 形式的复数）
pub fn parse_entry(token: &str) -> Option<MatrixEntry> {
    let token = token.trim();
    let token = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(token);

    let body = match token.strip_suffix('j').or_else(|| token.strip_suffix('J')) {
        Some(body) => body,
        None => return token.parse::<f64>().ok().map(MatrixEntry::Real),
    };

    // 虚部起始位置：最后一个不在开头、且不紧跟指数符号的 '+' / '-'
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| (bytes[i] == b'+' || bytes[i] == b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

    let (re, im) = match split {
        Some(i) => (body[..i].parse::<f64>().ok()?, body[i..].parse::<f64>().ok()?),
        None => (0.0, body.parse::<f64>().ok()?),
    };

    Some(MatrixEntry::Complex(Complex64::new(re, im)))
}

/// 解析矩阵文本
pub fn parse_matrix_text(content: &str, path: &str) -> Result<CapacitanceMatrix> {
    let mut rows = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|tok| {
                parse_entry(tok).ok_or_else(|| FastSolverError::ParseError {
                    format: "capacitance matrix".to_string(),
                    path: path.to_string(),
                    reason: format!("line {}: invalid value '{}'", line_no + 1, tok),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        rows.push(row);
    }

    CapacitanceMatrix::new(rows)
}

/// 读取并解析矩阵文件
pub fn parse_matrix_file(path: &Path) -> Result<CapacitanceMatrix> {
    if !path.is_file() {
        return Err(FastSolverError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| FastSolverError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_matrix_text(&content, &path.display().to_string())
}

/// 日志中正在收集的矩阵块
#[derive(Default)]
struct LogBlock {
    dimension: Option<usize>,
    rows: Vec<Vec<MatrixEntry>>,
}

impl LogBlock {
    fn is_complete(&self) -> bool {
        let n = self.rows.len();
        n > 0 && self.dimension.map_or(true, |d| d == n) && self.rows.iter().all(|r| r.len() == n)
    }
}

/// 解析日志中的一行矩阵数据：可选的导体标签 + 数值字段
fn parse_log_row(line: &str) -> Option<Vec<MatrixEntry>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let values = if tokens[0].parse::<f64>().is_ok() {
        &tokens[..]
    } else {
        &tokens[1..]
    };
    if values.is_empty() {
        return None;
    }

    values
        .iter()
        .map(|t| t.parse::<f64>().ok().map(MatrixEntry::Real))
        .collect()
}

/// 从求解器控制台日志中提取最后一个完整矩阵块
pub fn extract_from_log(content: &str, path: &str) -> Result<CapacitanceMatrix> {
    let header = Regex::new(r"(?i)capacitance\s+matrix").unwrap();
    let dimension = Regex::new(r"(?i)^\s*dimension\s+(\d+)\s*x\s*(\d+)").unwrap();

    let mut current: Option<LogBlock> = None;
    let mut last_complete: Option<LogBlock> = None;

    for line in content.lines() {
        if header.is_match(line) {
            if let Some(block) = current.take() {
                if block.is_complete() {
                    last_complete = Some(block);
                }
            }
            current = Some(LogBlock::default());
            continue;
        }

        let block = match current.as_mut() {
            Some(block) => block,
            None => continue,
        };

        if let Some(caps) = dimension.captures(line) {
            block.dimension = caps[1].parse().ok();
            continue;
        }

        let full = block.dimension.map_or(false, |d| block.rows.len() >= d);
        let ended = match parse_log_row(line) {
            Some(row) if !full => {
                block.rows.push(row);
                false
            }
            _ => !block.rows.is_empty(),
        };

        // 行数据结束
        if ended {
            if let Some(done) = current.take() {
                if done.is_complete() {
                    last_complete = Some(done);
                }
            }
        }
    }

    if let Some(block) = current.take() {
        if block.is_complete() {
            last_complete = Some(block);
        }
    }

    let block = last_complete.ok_or_else(|| FastSolverError::ParseError {
        format: "solver log".to_string(),
        path: path.to_string(),
        reason: "no complete capacitance matrix block found".to_string(),
    })?;

    CapacitanceMatrix::new(block.rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::to_text;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("1.000000e-12"), Some(MatrixEntry::Real(1e-12)));
        assert_eq!(
            parse_entry("1.000000e-12+2.500000e-15j"),
            Some(MatrixEntry::Complex(Complex64::new(1e-12, 2.5e-15)))
        );
        assert_eq!(
            parse_entry("-1.0e+00-2.0e-03j"),
            Some(MatrixEntry::Complex(Complex64::new(-1.0, -2e-3)))
        );
        assert_eq!(
            parse_entry("(1+2j)"),
            Some(MatrixEntry::Complex(Complex64::new(1.0, 2.0)))
        );
        assert_eq!(
            parse_entry("3e-3j"),
            Some(MatrixEntry::Complex(Complex64::new(0.0, 3e-3)))
        );
        assert_eq!(parse_entry("abc"), None);
    }

    #[test]
    fn test_text_round_trip_within_precision() {
        let original = vec![
            vec![5.575261234e-11, -1.712263e-11, -3.3e-13],
            vec![-1.712263e-11, 5.601129e-11, -7.77777777e-12],
            vec![-3.3e-13, -7.77777777e-12, 1.0],
        ];
        let m = CapacitanceMatrix::from_real(original.clone()).unwrap();
        let text = to_text(&m);

        let line = Regex::new(r"^\S+( \S+)*\n").unwrap();
        let value = Regex::new(r"^-?\d\.\d{6}e[+-]\d{2,3}[+-]\d\.\d{6}e[+-]\d{2,3}j$").unwrap();
        for row in text.split_inclusive('\n') {
            assert!(line.is_match(row), "bad row: {:?}", row);
            for tok in row.split_whitespace() {
                assert!(value.is_match(tok), "bad value: {}", tok);
            }
        }

        let parsed = parse_matrix_text(&text, "mem").unwrap();
        assert_eq!(parsed.dimension(), 3);
        for (i, row) in original.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                assert_eq!(parsed.get(i, j).unwrap().im(), 0.0);
                let got = parsed.get(i, j).unwrap().re();
                assert!((got - v).abs() <= v.abs() * 1e-6, "{} vs {}", got, v);
            }
        }
    }

    #[test]
    fn test_complex_text_round_trip() {
        let m = CapacitanceMatrix::new(vec![
            vec![
                MatrixEntry::Complex(Complex64::new(1.5e-12, -2.0e-15)),
                MatrixEntry::Complex(Complex64::new(-4.0e-13, 0.0)),
            ],
            vec![
                MatrixEntry::Complex(Complex64::new(-4.0e-13, 0.0)),
                MatrixEntry::Complex(Complex64::new(1.25e-12, 3.0e-16)),
            ],
        ])
        .unwrap();

        let parsed = parse_matrix_text(&to_text(&m), "mem").unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn test_parse_matrix_text_rejects_garbage() {
        let err = parse_matrix_text("1.0 x\n2.0 3.0\n", "bad.txt").unwrap_err();
        assert!(matches!(err, FastSolverError::ParseError { .. }));
    }

    #[test]
    fn test_parse_matrix_file_missing() {
        let err = parse_matrix_file(Path::new("/nonexistent/CapacitanceMatrix.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_extract_from_log_takes_last_block() {
        let log = r#"Running FasterCap
Iteration number #0
Capacitance matrix is:
Demo evaluation version
Dimension 2 x 2
g1_1  1.0e-011 -2.0e-012
g2_1  -2.0e-012 1.1e-011
Weighted Frobenius norm of the difference between capacitance (auto option): 0.05

Iteration number #1
Capacitance matrix is:
Dimension 2 x 2
g1_1  5.57526e-011 -1.71226e-011
g2_1  -1.71226e-011 5.60112e-011
Total allocated memory: 1234 kB
"#;
        let m = extract_from_log(log, "FasterCap.log").unwrap();
        assert_eq!(m.dimension(), 2);
        assert_eq!(m.get(0, 0), Some(MatrixEntry::Real(5.57526e-11)));
        assert_eq!(m.get(1, 0), Some(MatrixEntry::Real(-1.71226e-11)));
    }

    #[test]
    fn test_extract_from_log_ignores_truncated_block() {
        let log = "Capacitance matrix is:\nDimension 2 x 2\ng1_1 1.0 2.0\n";
        let err = extract_from_log(log, "FasterCap.log").unwrap_err();
        assert!(matches!(err, FastSolverError::ParseError { .. }));
    }

    #[test]
    fn test_extract_from_log_without_block() {
        assert!(extract_from_log("nothing useful here\n", "log").is_err());
    }
}
