// 実行設定の具象実装

use crate::core::RunnerConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultRunnerConfig {
    max_concurrent: usize,
    enable_progress: bool,
}

impl DefaultRunnerConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            max_concurrent: cpu_count.max(1) * 2,
            enable_progress: true,
        }
    }

    /// 0 を指定した場合は 1 に切り上げる
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultRunnerConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl RunnerConfig for DefaultRunnerConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
