//! # fastsolver - FastHenry / FasterCap 批处理工具
//!
//! 对列表文件中的每个几何目录运行电感求解器（FastHenry）与电容求解器（FasterCap），
//! 并检查输出文件是否生成。
//!
//! ## 子命令
//! - `batch`（默认）- 批量处理列表文件中的几何目录
//! - `fastercap` - 对单个几何文件运行 FasterCap，写出 `CapacitanceMatrix.txt`
//! - `fasthenry` - 对单个 `.inp` 文件运行 FastHenry
//! - `show` - 显示电容矩阵文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (批量编排)
//!   │     ├── solver/    (求解器调用与自动化端点)
//!   │     └── matrix/    (电容矩阵模型与文本格式)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod matrix;
mod solver;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
