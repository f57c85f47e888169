// エンジン実行機能
// 単一ファイル処理と並列実行の制御

pub mod runner;
pub mod worker;

// 公開API
pub use runner::{run_engine_jobs, EngineJob, RunStats};
pub use worker::{refactor_single_file, JobOutcome};
