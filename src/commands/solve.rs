//! # fastercap / fasthenry 命令实现
//!
//! 对单个输入文件运行一次求解器。附加参数以空格连接作为选项，
//! 为空时使用配置中的默认选项。
//!
//! ## 依赖关系
//! - 使用 `cli/solve.rs` 定义的参数
//! - 使用 `solver/`
//! - 使用 `utils/output.rs`

use super::solver_config;
use crate::cli::solve::SolveArgs;
use crate::error::Result;
use crate::solver::{ProcessEndpoint, SolverInvoker, SolverKind, SystemClock};
use crate::utils::output;

/// 执行单次求解
pub fn execute(kind: SolverKind, args: SolveArgs) -> Result<()> {
    output::print_header(&format!("Running {}", kind));

    let config = solver_config(&args.solver, kind);
    let options = args.options.join(" ");
    let clock = SystemClock::new();

    let mut endpoint = ProcessEndpoint::from_config(&config);
    let invocation = SolverInvoker::new(&config, &clock).invoke(
        &mut endpoint,
        &args.input,
        Some(options.as_str()),
    )?;

    if let Some(log) = endpoint.log_path() {
        output::print_info(&format!("Solver log: {}", log.display()));
    }

    if invocation.output_path.is_file() {
        output::print_done(&format!(
            "{} output: {}",
            kind,
            invocation.output_path.display()
        ));
    } else {
        output::print_warning(&format!(
            "{} not found after running {}",
            kind.output_file(),
            kind
        ));
    }

    Ok(())
}
