//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `solver/`, `matrix/`, `utils/`
//! - 子模块: batch, solve, show

pub mod batch;
pub mod show;
pub mod solve;

use crate::cli::solve::SolverArgs;
use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::solver::{SolverConfig, SolverKind};

use std::time::Duration;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Batch(args)) => batch::execute(args),
        Some(Commands::Fastercap(args)) => solve::execute(SolverKind::FasterCap, args),
        Some(Commands::Fasthenry(args)) => solve::execute(SolverKind::FastHenry, args),
        Some(Commands::Show(args)) => show::execute(args),
        None => batch::execute(cli.batch),
    }
}

/// 根据命令行参数构造求解器配置
pub fn solver_config(args: &SolverArgs, kind: SolverKind) -> SolverConfig {
    let (executable, default_options) = match kind {
        SolverKind::FastHenry => (&args.fasthenry_exe, &args.fasthenry_options),
        SolverKind::FasterCap => (&args.fastercap_exe, &args.fastercap_options),
    };

    SolverConfig {
        kind,
        executable: executable.clone(),
        default_options: default_options.clone(),
        timeout: Duration::from_secs(args.timeout),
        poll_interval: Duration::from_millis(args.poll_interval),
        show_progress: !args.no_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_solver_config_from_args() {
        let cli = Cli::try_parse_from([
            "fastsolver",
            "--timeout",
            "30",
            "--poll-interval",
            "100",
            "--fastercap-options=-a0.001",
            "--no-progress",
            "list.txt",
        ])
        .unwrap();

        let cap = solver_config(&cli.batch.solver, SolverKind::FasterCap);
        assert_eq!(cap.timeout, Duration::from_secs(30));
        assert_eq!(cap.poll_interval, Duration::from_millis(100));
        assert_eq!(cap.default_options, "-a0.001");
        assert!(!cap.show_progress);

        let henry = solver_config(&cli.batch.solver, SolverKind::FastHenry);
        assert_eq!(henry.kind, SolverKind::FastHenry);
        assert_eq!(henry.default_options, "");
    }
}
