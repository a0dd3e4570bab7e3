//! # show 命令实现
//!
//! 重新解析 `CapacitanceMatrix.txt` 并以表格显示。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `matrix/parse.rs`

use crate::cli::show::ShowArgs;
use crate::error::Result;
use crate::matrix::{self, CapacitanceMatrix};
use crate::utils::output;

use tabled::builder::Builder;

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let m = matrix::parse_matrix_file(&args.matrix)?;

    let kind = if m.is_complex() { "complex" } else { "real" };
    output::print_header(&format!(
        "Capacitance matrix ({0} x {0}, {1}): {2}",
        m.dimension(),
        kind,
        args.matrix.display()
    ));
    println!("{}", build_table(&m));

    Ok(())
}

fn build_table(m: &CapacitanceMatrix) -> String {
    let n = m.dimension();
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend((1..=n).map(|j| j.to_string()));
    builder.push_record(header);

    for (i, row) in m.rows().iter().enumerate() {
        let mut record = vec![(i + 1).to_string()];
        record.extend(row.iter().map(|e| matrix::format_entry(*e)));
        builder.push_record(record);
    }

    builder.build().to_string()
}
