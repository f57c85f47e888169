use crate::core::{
    EngineBackend, RefactorError, RefactorOptions, RefactorOutcome, RefactorResult, Variable,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// 外部プロセスとして起動するエンジン（node / python3 など）
///
/// `command engine_file <file> <variable_json> <options_json>` の形で起動し、
/// 標準出力を結果として受け取る。
#[derive(Debug, Clone)]
pub struct ExternalEngine {
    name: String,
    command: String,
    engine_file: PathBuf,
}

impl ExternalEngine {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        engine_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            engine_file: engine_file.into(),
        }
    }
}

#[async_trait]
impl EngineBackend for ExternalEngine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn refactor(
        &self,
        file: &Path,
        variable: &Variable,
        options: &RefactorOptions,
    ) -> RefactorResult<RefactorOutcome> {
        let variable_json = variable.to_json()?;
        let options_json = options.to_json()?;

        tracing::debug!(
            engine = %self.name,
            command = %self.command,
            file = %file.display(),
            "spawning refactor engine"
        );

        let output = Command::new(&self.command)
            .arg(&self.engine_file)
            .arg(file)
            .arg(&variable_json)
            .arg(&options_json)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => RefactorError::engine_not_found(&self.command),
                _ => RefactorError::engine_failure(file.display().to_string(), e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RefactorError::engine_failure(
                file.display().to_string(),
                format!("{} {}", output.status, stderr.trim()).trim_end().to_string(),
            ));
        }

        Ok(RefactorOutcome {
            file: file.to_path_buf(),
            engine: self.name.clone(),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
