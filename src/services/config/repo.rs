// リポジトリ設定ファイル（YAML）の読み込み

use crate::core::{RefactorError, RefactorResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 設定ファイルパスを上書きする環境変数
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// 既定の設定ファイル位置（cleanup対象ルートからの相対パス）
pub const DEFAULT_CONFIG_PATH: &str = ".devcycle/config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoConfig {
    #[serde(default)]
    pub code_insights: CodeInsightsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeInsightsConfig {
    #[serde(default)]
    pub include_files: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_files: Option<Vec<String>>,
    /// エイリアス → 変数キー
    #[serde(default)]
    pub variable_aliases: BTreeMap<String, String>,
}

impl RepoConfig {
    /// 設定ファイルを読み込む。ファイルが無ければ空の設定を返す
    pub fn load(path: &Path) -> RefactorResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "repo config not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            RefactorError::configuration(format!("{} を読み込めません: {e}", path.display()))
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            RefactorError::ConfigurationError { message } => {
                RefactorError::configuration(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_yaml(yaml: &str) -> RefactorResult<Self> {
        // 空ファイルは空の設定として扱う
        let config: Option<RepoConfig> = serde_yaml::from_str(yaml)
            .map_err(|e| RefactorError::configuration(format!("YAMLが不正です: {e}")))?;
        Ok(config.unwrap_or_default())
    }
}

/// 設定ファイルのパスを決定する
///
/// 環境変数の値があればそれを、無ければ `root` 配下の既定パスを使う。
pub fn resolve_config_path(root: &Path, env_value: Option<&str>) -> PathBuf {
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(path) => PathBuf::from(path),
        None => root.join(DEFAULT_CONFIG_PATH),
    }
}

/// 環境変数 `CONFIG_PATH` を参照して設定ファイルのパスを決定する
pub fn config_path(root: &Path) -> PathBuf {
    let env_value = std::env::var(CONFIG_PATH_ENV).ok();
    resolve_config_path(root, env_value.as_deref())
}
