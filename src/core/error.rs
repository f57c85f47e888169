// Custom error types for the cleanup pipeline
// リファクタリング処理専用のカスタムエラー型定義

use thiserror::Error;

/// リファクタリング処理固有のエラー型
#[derive(Error, Debug)]
pub enum RefactorError {
    #[error("引数不足: {name} が指定されていません")]
    MissingArgumentError { name: String },

    #[error("ペイロード解析エラー: {payload} - {source}")]
    InvalidPayloadError {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("ファイル一覧取得エラー: {path} - {source}")]
    FileListingError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Could not find {command} executable. Is it installed?")]
    EngineNotFoundError { command: String },

    #[error("Error refactoring {file_path}: {message}")]
    EngineFailureError { file_path: String, message: String },

    #[error("I/Oエラー: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl RefactorError {
    /// 引数不足エラーの作成
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgumentError { name: name.into() }
    }

    /// ペイロード解析エラーの作成
    pub fn invalid_payload(payload: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidPayloadError {
            payload: payload.into(),
            source,
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// ファイル一覧取得エラーの作成
    pub fn file_listing(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::FileListingError {
            path: path.into(),
            source,
        }
    }

    /// エンジン実行ファイル不在エラーの作成
    pub fn engine_not_found(command: impl Into<String>) -> Self {
        Self::EngineNotFoundError {
            command: command.into(),
        }
    }

    /// エンジン実行失敗エラーの作成
    pub fn engine_failure(file_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EngineFailureError {
            file_path: file_path.into(),
            message: message.into(),
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// ファイル単位のエラーは集計して処理を継続する。入力・設定・一覧取得のエラーは全体に及ぶ
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingArgumentError { .. }
            | Self::InvalidPayloadError { .. }
            | Self::ValidationError { .. }
            | Self::ConfigurationError { .. }
            | Self::FileListingError { .. } => false,
            Self::EngineNotFoundError { .. } | Self::EngineFailureError { .. } => true,
            Self::IoError { .. } => true,
        }
    }
}

/// リファクタリング処理の結果型
pub type RefactorResult<T> = std::result::Result<T, RefactorError>;
