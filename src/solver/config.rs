//! # 求解器配置
//!
//! "选项为空则使用默认选项" 的规则在这里显式表达，由调用方传入调用器。
//!
//! ## 依赖关系
//! - 被 `solver/invoker.rs`, `batch/runner.rs` 使用
//! - 由 `commands/` 根据命令行参数构造

use super::SolverKind;
use std::time::Duration;

/// 默认等待上限（10 分钟）
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// 单个求解器的配置
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub kind: SolverKind,
    /// 可执行文件名或路径
    pub executable: String,
    /// 调用时未给出选项（或选项为空白）时使用的选项
    pub default_options: String,
    /// 等待完成的最长时间
    pub timeout: Duration,
    /// 轮询 "是否仍在运行" 的间隔
    pub poll_interval: Duration,
    /// 等待期间是否显示 spinner
    pub show_progress: bool,
}

impl SolverConfig {
    /// 使用该求解器的默认值创建配置
    pub fn new(kind: SolverKind) -> Self {
        SolverConfig {
            kind,
            executable: kind.default_executable().to_string(),
            default_options: kind.default_options().to_string(),
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            show_progress: true,
        }
    }

    /// 解析本次调用实际使用的选项
    pub fn resolve_options(&self, options: Option<&str>) -> String {
        match options.map(str::trim) {
            Some(opts) if !opts.is_empty() => opts.to_string(),
            _ => self.default_options.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cap = SolverConfig::new(SolverKind::FasterCap);
        assert_eq!(cap.default_options, "-a0.01");
        assert_eq!(cap.timeout, Duration::from_secs(600));
        assert!(cap.poll_interval < Duration::from_secs(1));

        let henry = SolverConfig::new(SolverKind::FastHenry);
        assert_eq!(henry.executable, "fasthenry");
        assert_eq!(henry.default_options, "");
    }

    #[test]
    fn test_resolve_options() {
        let cap = SolverConfig::new(SolverKind::FasterCap);
        assert_eq!(cap.resolve_options(None), "-a0.01");
        assert_eq!(cap.resolve_options(Some("   ")), "-a0.01");
        assert_eq!(cap.resolve_options(Some("  -a0.001 -i ")), "-a0.001 -i");
    }
}
