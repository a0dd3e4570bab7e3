//! # 自动化端点抽象
//!
//! 外部求解器是唯一的协作边界，只需要三个操作：
//! - `start`: 接收命令行并开始执行（提交即返回）
//! - `is_running`: 查询是否仍在执行
//! - `fetch_matrix`: 完成后取回结果矩阵
//!
//! 轮询等待通过 `Clock` 进行，便于测试中不真正睡眠。
//!
//! ## 依赖关系
//! - 被 `solver/invoker.rs`, `solver/process.rs`, `batch/runner.rs` 使用

use crate::error::Result;
use crate::matrix::CapacitanceMatrix;

use std::time::{Duration, Instant};

/// 外部求解器自动化端点
pub trait AutomationEndpoint {
    /// 提交命令行并开始执行
    fn start(&mut self, command_line: &str) -> Result<()>;

    /// 是否仍在执行
    fn is_running(&mut self) -> Result<bool>;

    /// 取回结果矩阵
    fn fetch_matrix(&mut self) -> Result<CapacitanceMatrix>;
}

/// 等待循环使用的时钟
pub trait Clock {
    /// 自某固定起点以来经过的时间
    fn now(&self) -> Duration;

    /// 阻塞当前线程
    fn sleep(&self, duration: Duration);
}

/// 系统时钟
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
