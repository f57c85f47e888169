// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod processing;
pub mod prompt;
pub mod selection;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultRunnerConfig, RepoConfig};
pub use monitoring::{ConsoleReporter, NoOpReporter};
pub use processing::{run_engine_jobs, EngineJob, RunStats};
pub use selection::{resolve_aliases, FileFilter};
