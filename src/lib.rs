pub mod cli;
pub mod core;
pub mod engine;
pub mod file_scanner;
pub mod services;

use crate::core::{
    CleanupReporter, CleanupSummary, FileSource, RefactorError, RefactorOptions, RunnerConfig,
    Variable,
};
use engine::EngineRegistry;
use services::{run_engine_jobs, EngineJob, FileFilter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// cleanup 1回分の入力
#[derive(Debug, Clone)]
pub struct CleanupRequest {
    /// 対象リポジトリのルート
    pub root: PathBuf,
    pub variable: Variable,
    pub options: RefactorOptions,
    pub filter: FileFilter,
}

// DIコンテナの役割を果たすジェネリックなApp構造体
pub struct App<F, R, C>
where
    F: FileSource,
    R: CleanupReporter,
    C: RunnerConfig,
{
    pub source: F,
    pub registry: EngineRegistry,
    pub reporter: R,
    pub config: C,
}

impl<F, R, C> App<F, R, C>
where
    F: FileSource,
    R: CleanupReporter,
    C: RunnerConfig,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(source: F, registry: EngineRegistry, reporter: R, config: C) -> Self {
        Self {
            source,
            registry,
            reporter,
            config,
        }
    }

    /// 対象ファイルを列挙・絞り込みし、拡張子ごとのエンジンで処理する
    pub async fn run(&self, request: &CleanupRequest) -> anyhow::Result<CleanupSummary> {
        let start_time = Instant::now();

        let files = self
            .source
            .list_files(&request.root)
            .await
            .map_err(|e| RefactorError::file_listing(request.root.display().to_string(), e))?;

        let files: Vec<PathBuf> = files
            .into_iter()
            .filter(|file| request.filter.accepts(file))
            .collect();

        if files.is_empty() {
            self.reporter
                .report_warning("No files found to process.")
                .await;
            return Ok(CleanupSummary::default());
        }

        let mut jobs = Vec::new();
        let mut skipped_files = 0;
        for file in &files {
            let engines = self.registry.engines_for_file(file);
            if engines.is_empty() {
                skipped_files += 1;
                continue;
            }
            for engine in engines {
                jobs.push(EngineJob {
                    engine: Arc::clone(engine),
                    file: request.root.join(file),
                    display_path: file.clone(),
                });
            }
        }

        tracing::debug!(
            files = files.len(),
            jobs = jobs.len(),
            skipped = skipped_files,
            "dispatching refactor engines"
        );

        if self.config.enable_progress_reporting() {
            self.reporter.report_started(files.len()).await;
        }

        let stats = run_engine_jobs(
            jobs,
            Arc::new(request.variable.clone()),
            Arc::new(request.options.clone()),
            &self.config,
            &self.reporter,
        )
        .await;

        let summary = CleanupSummary {
            total_files: files.len(),
            refactored_files: stats.succeeded,
            skipped_files,
            error_count: stats.failed,
            total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        if self.config.enable_progress_reporting() {
            self.reporter.report_completed(&summary).await;
        }

        Ok(summary)
    }
}
