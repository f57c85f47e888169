use crate::core::{
    EngineBackend, RefactorError, RefactorOptions, RefactorOutcome, RefactorResult, Variable,
};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Java用リファクタリングエンジン
///
/// 入力を保持するだけで、ソースの書き換えは行わない。
#[derive(Debug, Clone)]
pub struct JavaEngine {
    filename: String,
    variable: Variable,
    options: RefactorOptions,
}

impl JavaEngine {
    pub const MESSAGE: &'static str = "Refactoring Java code";

    pub fn new(filename: impl Into<String>, variable: Variable, options: RefactorOptions) -> Self {
        Self {
            filename: filename.into(),
            variable,
            options,
        }
    }

    /// `[filename, variable_json, options_json]` からエンジンを構築
    pub fn from_args<I, S>(args: I) -> RefactorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let filename = args
            .next()
            .ok_or_else(|| RefactorError::missing_argument("filename"))?;
        let variable = args
            .next()
            .ok_or_else(|| RefactorError::missing_argument("variable"))?;
        let options = args
            .next()
            .ok_or_else(|| RefactorError::missing_argument("options"))?;

        Ok(Self::new(
            filename.as_ref(),
            Variable::from_json(variable.as_ref())?,
            RefactorOptions::from_json(options.as_ref())?,
        ))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn options(&self) -> &RefactorOptions {
        &self.options
    }

    pub fn refactor(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.refactor_to(&mut handle)
    }

    pub fn refactor_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", Self::MESSAGE)
    }
}

/// cleanupから呼び出されるプロセス内Javaエンジン
#[derive(Debug, Clone, Default)]
pub struct JavaEngineBackend;

impl JavaEngineBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EngineBackend for JavaEngineBackend {
    fn name(&self) -> &str {
        "java"
    }

    async fn refactor(
        &self,
        file: &Path,
        variable: &Variable,
        options: &RefactorOptions,
    ) -> RefactorResult<RefactorOutcome> {
        let engine = JavaEngine::new(
            file.to_string_lossy(),
            variable.clone(),
            options.clone(),
        );

        let mut buffer = Vec::new();
        engine.refactor_to(&mut buffer)?;

        Ok(RefactorOutcome {
            file: PathBuf::from(engine.filename()),
            engine: self.name().to_string(),
            output: String::from_utf8_lossy(&buffer).into_owned(),
        })
    }
}
