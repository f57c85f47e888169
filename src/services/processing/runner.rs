// Runner - エンジン実行の並列制御

use super::worker::{refactor_single_file, JobOutcome};
use crate::core::{CleanupReporter, EngineBackend, RefactorOptions, RunnerConfig, Variable};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// 1ファイル × 1エンジンの処理単位
#[derive(Clone)]
pub struct EngineJob {
    pub engine: Arc<dyn EngineBackend>,
    /// エンジンへ渡す実パス
    pub file: PathBuf,
    /// 報告用のパス（ルートからの相対パス）
    pub display_path: PathBuf,
}

/// 実行結果の集計
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub succeeded: usize,
    pub failed: usize,
}

/// ジョブをセマフォで同時実行数を制限しながら実行する
///
/// 個々の失敗は報告・集計のみ行い、処理全体は止めない。
pub async fn run_engine_jobs<C, R>(
    jobs: Vec<EngineJob>,
    variable: Arc<Variable>,
    options: Arc<RefactorOptions>,
    config: &C,
    reporter: &R,
) -> RunStats
where
    C: RunnerConfig + ?Sized,
    R: CleanupReporter + ?Sized,
{
    let semaphore = Arc::new(Semaphore::new(config.max_concurrent_tasks().max(1)));
    let mut tasks = JoinSet::new();

    for job in jobs {
        let semaphore = Arc::clone(&semaphore);
        let variable = Arc::clone(&variable);
        let options = Arc::clone(&options);

        tasks.spawn(async move {
            // セマフォで同時実行数制御
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    return JobOutcome::Error {
                        file_path: job.display_path,
                        error: format!("Semaphore error: {e}"),
                        recoverable: false,
                    }
                }
            };

            refactor_single_file(
                job.engine.as_ref(),
                &job.file,
                &job.display_path,
                &variable,
                &options,
            )
            .await
        });
    }

    let mut stats = RunStats::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(JobOutcome::Success {
                outcome,
                processing_time_ms,
            }) => {
                tracing::debug!(
                    engine = %outcome.engine,
                    file = %outcome.file.display(),
                    processing_time_ms,
                    "engine run finished"
                );
                reporter.report_output(&outcome.file, &outcome.output).await;
                stats.succeeded += 1;
            }
            Ok(JobOutcome::Error {
                file_path,
                error,
                recoverable,
            }) => {
                if !recoverable {
                    tracing::error!(
                        file = %file_path.display(),
                        error = %error,
                        "engine rejected its input"
                    );
                }
                reporter.report_error(&file_path, &error).await;
                stats.failed += 1;
            }
            Err(join_error) => {
                reporter
                    .report_warning(&format!("Engine task failed: {join_error}"))
                    .await;
                stats.failed += 1;
            }
        }
    }

    stats
}
