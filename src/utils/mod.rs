//! # 工具函数模块
//!
//! 提供美化输出、进度显示、交互输入等工具。
//!
//! ## 依赖关系
//! - 被 `batch/`, `solver/`, `commands/` 使用
//! - 子模块: output, progress, prompt

pub mod output;
pub mod progress;
pub mod prompt;
