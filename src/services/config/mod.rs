// 設定管理機能
// 実行設定とリポジトリ設定ファイル

pub mod implementations;
pub mod repo;

// 公開API
pub use implementations::DefaultRunnerConfig;
pub use repo::{config_path, resolve_config_path, CodeInsightsConfig, RepoConfig};
