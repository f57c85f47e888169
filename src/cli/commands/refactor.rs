use crate::core::{RefactorOptions, RefactorOutcome, Variable};
use crate::engine::{default_engine_lib, EngineRegistry};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run every engine registered for the file's extension
pub async fn refactor_file(
    registry: &EngineRegistry,
    file: &Path,
    variable_json: &str,
    options_json: &str,
) -> Result<Vec<RefactorOutcome>> {
    let variable = Variable::from_json(variable_json)?;
    let options = RefactorOptions::from_json(options_json)?;

    let engines = registry.engines_for_file(file);
    if engines.is_empty() {
        anyhow::bail!(
            "No refactor engine registered for: {} (supported: {})",
            file.display(),
            registry.supported_extensions().join(", ")
        );
    }

    let mut outcomes = Vec::with_capacity(engines.len());
    for engine in engines {
        outcomes.push(engine.refactor(file, &variable, &options).await?);
    }
    Ok(outcomes)
}

/// Refactor a single file and print the engine output
pub async fn execute_refactor(
    file: PathBuf,
    variable_json: String,
    options_json: String,
    engine_lib: Option<PathBuf>,
) -> Result<()> {
    let registry = EngineRegistry::standard(engine_lib.unwrap_or_else(default_engine_lib));

    for outcome in refactor_file(&registry, &file, &variable_json, &options_json).await? {
        print!("{}", outcome.output);
    }

    Ok(())
}
