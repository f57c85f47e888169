// Worker - 単一ファイル処理機能

use crate::core::{EngineBackend, RefactorOptions, RefactorOutcome, Variable};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// 個別処理の結果
#[derive(Debug)]
pub enum JobOutcome {
    Success {
        outcome: RefactorOutcome,
        processing_time_ms: u64,
    },
    Error {
        file_path: PathBuf,
        error: String,
        /// 偽なら他のファイルでも同じ失敗が起きる
        recoverable: bool,
    },
}

/// 単一ファイルを1つのエンジンで処理
///
/// `file` はエンジンへ渡す実パス、`display_path` は報告用のパス。
pub async fn refactor_single_file<E>(
    engine: &E,
    file: &Path,
    display_path: &Path,
    variable: &Variable,
    options: &RefactorOptions,
) -> JobOutcome
where
    E: EngineBackend + ?Sized,
{
    let start_time = Instant::now();

    match engine.refactor(file, variable, options).await {
        Ok(mut outcome) => {
            outcome.file = display_path.to_path_buf();
            JobOutcome::Success {
                outcome,
                processing_time_ms: start_time.elapsed().as_millis() as u64,
            }
        }
        Err(error) => {
            tracing::debug!(
                engine = engine.name(),
                file = %display_path.display(),
                error = %error,
                "engine run failed"
            );
            JobOutcome::Error {
                file_path: display_path.to_path_buf(),
                error: error.to_string(),
                recoverable: error.is_recoverable(),
            }
        }
    }
}
