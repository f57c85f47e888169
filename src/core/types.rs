// 変数・オプション・処理結果のデータ型定義

use super::error::{RefactorError, RefactorResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// 置き換え後の値の型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum VariableType {
    #[value(name = "String")]
    String,
    #[value(name = "Boolean")]
    Boolean,
    #[value(name = "Number")]
    Number,
    #[serde(rename = "JSON")]
    #[value(name = "JSON")]
    Json,
}

impl VariableType {
    pub const ALL: [VariableType; 4] = [
        VariableType::String,
        VariableType::Boolean,
        VariableType::Number,
        VariableType::Json,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = RefactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                RefactorError::validation(
                    "type",
                    format!("{s} は無効です (String, Boolean, Number, JSON のいずれか)"),
                )
            })
    }
}

/// フィーチャーフラグ変数
///
/// エンジン引数として受け取る場合は全フィールドが省略可能。
/// `value` は文字列以外のスカラーやオブジェクトも受け付け、文字列表現で保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub key: String,
    #[serde(
        default,
        deserialize_with = "deserialize_value_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<VariableType>,
}

fn deserialize_value_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl Variable {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        variable_type: VariableType,
    ) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            variable_type: Some(variable_type),
        }
    }

    /// JSON文字列から変数を復元
    pub fn from_json(payload: &str) -> RefactorResult<Self> {
        serde_json::from_str(payload).map_err(|e| RefactorError::invalid_payload("variable", e))
    }

    pub fn to_json(&self) -> RefactorResult<String> {
        serde_json::to_string(self).map_err(|e| RefactorError::invalid_payload("variable", e))
    }

    /// キー・型・値が揃っていて、値が型に適合するか検証
    pub fn validate(&self) -> RefactorResult<()> {
        if self.key.trim().is_empty() {
            return Err(RefactorError::validation("key", "変数キーが空です"));
        }
        if self.variable_type.is_none() {
            return Err(RefactorError::validation("type", "変数の型が指定されていません"));
        }
        if self.value.is_none() {
            return Err(RefactorError::validation("value", "置き換える値が指定されていません"));
        }
        self.static_value().map(|_| ())
    }

    /// 型に従って置き換え後の静的な値へ変換
    pub fn static_value(&self) -> RefactorResult<Value> {
        let raw = self
            .value
            .as_deref()
            .ok_or_else(|| RefactorError::validation("value", "置き換える値が指定されていません"))?;
        let variable_type = self
            .variable_type
            .ok_or_else(|| RefactorError::validation("type", "変数の型が指定されていません"))?;

        match variable_type {
            VariableType::String => Ok(Value::String(raw.to_string())),
            VariableType::Boolean => Ok(Value::Bool(!raw.eq_ignore_ascii_case("false"))),
            VariableType::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| {
                    RefactorError::validation("value", format!("{raw} は数値として解釈できません"))
                }),
            VariableType::Json => serde_json::from_str(raw).map_err(|e| {
                RefactorError::validation("value", format!("JSONとして解釈できません: {e}"))
            }),
        }
    }
}

/// リファクタリング結果の出力先
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Console,
    File,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("console"),
            Self::File => f.write_str("file"),
        }
    }
}

/// エンジンへ渡すオプション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefactorOptions {
    #[serde(default)]
    pub output: OutputMode,
    #[serde(default, deserialize_with = "deserialize_aliases")]
    pub aliases: Vec<String>,
}

// 配列・オブジェクト（キーを採用）の両方を受け付ける。
// JavaScriptのSetをJSON化すると `{}` になるため空として扱う。
fn deserialize_aliases<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(D::Error::custom(format!(
                    "alias must be a string, got {other}"
                ))),
            })
            .collect(),
        Some(Value::Object(map)) => Ok(map.into_iter().map(|(k, _)| k).collect()),
        Some(other) => Err(D::Error::custom(format!(
            "aliases must be an array or object, got {other}"
        ))),
    }
}

impl RefactorOptions {
    pub fn new(output: OutputMode) -> Self {
        Self {
            output,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn from_json(payload: &str) -> RefactorResult<Self> {
        serde_json::from_str(payload).map_err(|e| RefactorError::invalid_payload("options", e))
    }

    pub fn to_json(&self) -> RefactorResult<String> {
        serde_json::to_string(self).map_err(|e| RefactorError::invalid_payload("options", e))
    }
}

/// 単一エンジン実行の結果
#[derive(Debug, Clone, PartialEq)]
pub struct RefactorOutcome {
    pub file: PathBuf,
    pub engine: String,
    /// エンジンが標準出力へ書いた内容
    pub output: String,
}

/// cleanup処理全体のサマリー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanupSummary {
    pub total_files: usize,
    pub refactored_files: usize,
    pub skipped_files: usize,
    pub error_count: usize,
    pub total_processing_time_ms: u64,
}
