use crate::core::{OutputMode, VariableType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flag_cleanup")]
#[command(about = "A tool for replacing feature flag variables with static values")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace a variable with a static value in the current version of your code
    Cleanup {
        /// Key of variable to replace
        key: Option<String>,

        /// Value to use in place of variable
        #[arg(long)]
        value: Option<String>,

        /// The type of the value that will be replacing the variable
        #[arg(long = "type", value_enum)]
        variable_type: Option<VariableType>,

        /// Files to include when scanning for variables to cleanup (glob, repeatable)
        #[arg(long)]
        include: Vec<String>,

        /// Files to exclude when scanning for variables to cleanup (glob, repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Where the refactored code will be output
        #[arg(long, value_enum, default_value_t = OutputMode::File)]
        output: OutputMode,

        /// Alias for the variable in the form ALIAS=variable-key (repeatable)
        #[arg(long = "var-alias")]
        var_alias: Vec<String>,

        /// Repository root to clean up
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Directory containing the external refactor engines
        /// [default: lib/refactor next to the installed binary]
        #[arg(long, env = "FLAG_CLEANUP_ENGINE_LIB")]
        engine_lib: Option<PathBuf>,

        /// Number of engines to run concurrently
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Never prompt and suppress status output
        #[arg(long)]
        headless: bool,
    },

    /// Run the refactor engines registered for a single file
    Refactor {
        /// File to refactor
        file: PathBuf,

        /// JSON-encoded variable
        variable: String,

        /// JSON-encoded options
        options: String,

        /// Directory containing the external refactor engines
        #[arg(long, env = "FLAG_CLEANUP_ENGINE_LIB")]
        engine_lib: Option<PathBuf>,
    },
}
