// 進捗監視の具象実装

use crate::core::{CleanupReporter, CleanupSummary};
use async_trait::async_trait;
use std::path::Path;

/// コンソール出力による報告実装
///
/// headless時は装飾付きのステータス行を出さない。
/// エンジン出力・警告・エラーは常に出力する。
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    headless: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headless() -> Self {
        Self { headless: true }
    }

    pub fn is_headless(&self) -> bool {
        self.headless
    }

    pub fn status_message(&self, message: &str) {
        if !self.headless {
            println!("🤖 {message}");
        }
    }

    pub fn success_message(&self, message: &str) {
        if !self.headless {
            println!("✅ {message}");
        }
    }

    pub fn failure_message(&self, message: &str) {
        if !self.headless {
            println!("❌ {message}");
        }
    }
}

#[async_trait]
impl CleanupReporter for ConsoleReporter {
    async fn report_started(&self, total_files: usize) {
        self.status_message(&format!("Processing {total_files} files..."));
    }

    async fn report_output(&self, _file: &Path, output: &str) {
        let output = output.trim_end_matches('\n');
        if !output.is_empty() {
            println!("{output}");
        }
    }

    async fn report_warning(&self, message: &str) {
        eprintln!("⚠️  {message}");
    }

    async fn report_error(&self, file: &Path, error: &str) {
        eprintln!("Error refactoring {}", file.display());
        eprintln!("\t{error}");
    }

    async fn report_completed(&self, summary: &CleanupSummary) {
        let message = format!(
            "Completed! Refactored: {}, Skipped: {}, Errors: {}",
            summary.refactored_files, summary.skipped_files, summary.error_count
        );
        if summary.error_count > 0 {
            self.failure_message(&message);
        } else {
            self.success_message(&message);
        }
    }
}

/// 何もしない報告実装（テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CleanupReporter for NoOpReporter {
    async fn report_started(&self, _total_files: usize) {}

    async fn report_output(&self, _file: &Path, _output: &str) {}

    async fn report_warning(&self, _message: &str) {}

    async fn report_error(&self, _file: &Path, _error: &str) {}

    async fn report_completed(&self, _summary: &CleanupSummary) {}
}
