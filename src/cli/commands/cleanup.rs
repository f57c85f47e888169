use crate::core::{CleanupSummary, OutputMode, RefactorOptions, Variable, VariableType};
use crate::engine::{default_engine_lib, EngineRegistry};
use crate::file_scanner::FallbackFileSource;
use crate::services::config::{config_path, DefaultRunnerConfig, RepoConfig};
use crate::services::prompt::complete_variable;
use crate::services::{resolve_aliases, ConsoleReporter, FileFilter};
use crate::{App, CleanupRequest};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for cleanup command to reduce argument count
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub key: Option<String>,
    pub value: Option<String>,
    pub variable_type: Option<VariableType>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub output: OutputMode,
    pub var_alias: Vec<String>,
    pub path: PathBuf,
    /// 未指定なら実行ファイルの位置から解決する
    pub engine_lib: Option<PathBuf>,
    pub threads: Option<usize>,
    pub headless: bool,
}

/// Build the cleanup request from CLI input and the repository config
pub fn build_request(config: &CleanupConfig, variable: Variable) -> Result<CleanupRequest> {
    let repo_config = RepoConfig::load(&config_path(&config.path))?;
    let code_insights = &repo_config.code_insights;

    let aliases = resolve_aliases(
        &code_insights.variable_aliases,
        &config.var_alias,
        &variable.key,
    )?;

    let filter = FileFilter::from_sources(
        &config.include,
        &config.exclude,
        code_insights.include_files.as_deref(),
        code_insights.exclude_files.as_deref(),
    )?;

    Ok(CleanupRequest {
        root: config.path.clone(),
        variable,
        options: RefactorOptions::new(config.output).with_aliases(aliases),
        filter,
    })
}

/// Replace a variable with a static value across the repository
pub async fn execute_cleanup(config: CleanupConfig) -> Result<CleanupSummary> {
    // Validate target directory
    if !config.path.exists() {
        anyhow::bail!("Target directory does not exist: {}", config.path.display());
    }

    if !config.path.is_dir() {
        anyhow::bail!("Target path is not a directory: {}", config.path.display());
    }

    let variable = {
        let partial = Variable {
            key: config.key.clone().unwrap_or_default(),
            value: config.value.clone(),
            variable_type: config.variable_type,
        };
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        complete_variable(
            partial,
            !config.headless,
            &mut stdin.lock(),
            &mut stdout.lock(),
        )?
    };

    let request = build_request(&config, variable)?;

    let reporter = if config.headless {
        ConsoleReporter::headless()
    } else {
        ConsoleReporter::new()
    };
    let runner_config = match config.threads {
        Some(threads) => DefaultRunnerConfig::default().with_max_concurrent(threads),
        None => DefaultRunnerConfig::default(),
    }
    .with_progress_reporting(!config.headless);

    if !config.headless {
        reporter.status_message(&format!(
            "Replacing {} with {} value {}",
            request.variable.key,
            request.variable.variable_type.map(|t| t.as_str()).unwrap_or("?"),
            request.variable.value.as_deref().unwrap_or_default()
        ));
    }

    let app = App::new(
        FallbackFileSource::standard(),
        EngineRegistry::standard(
            config
                .engine_lib
                .clone()
                .unwrap_or_else(default_engine_lib),
        ),
        reporter,
        runner_config,
    );

    app.run(&request).await
}
