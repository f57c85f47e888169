// cleanup処理のトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::RefactorResult;
use super::types::{CleanupSummary, RefactorOptions, RefactorOutcome, Variable};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

/// 言語別リファクタリングエンジンの抽象化トレイト
#[automock]
#[async_trait]
pub trait EngineBackend: Send + Sync {
    /// エンジン名（ログ・レポート用）
    fn name(&self) -> &str;

    /// 単一ファイルをリファクタリング
    async fn refactor(
        &self,
        file: &Path,
        variable: &Variable,
        options: &RefactorOptions,
    ) -> RefactorResult<RefactorOutcome>;
}

/// 対象ファイル一覧の取得元
#[automock]
#[async_trait]
pub trait FileSource: Send + Sync {
    /// `root` からの相対パスで一覧を返す
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    fn name(&self) -> &'static str;
}

/// 実行設定を抽象化するトレイト
#[automock]
pub trait RunnerConfig: Send + Sync {
    /// 最大同時実行エンジン数を取得
    fn max_concurrent_tasks(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// 進捗・結果報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait CleanupReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// エンジン出力の報告（console出力時はリファクタリング後のコード）
    async fn report_output(&self, file: &Path, output: &str);

    /// 警告の報告
    async fn report_warning(&self, message: &str);

    /// エラー発生時の報告
    async fn report_error(&self, file: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, summary: &CleanupSummary);
}
