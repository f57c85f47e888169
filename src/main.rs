use clap::Parser;
use flag_cleanup::cli::{execute_cleanup, execute_refactor, CleanupConfig, Cli, Commands};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cleanup {
            key,
            value,
            variable_type,
            include,
            exclude,
            output,
            var_alias,
            path,
            engine_lib,
            threads,
            headless,
        } => execute_cleanup(CleanupConfig {
            key,
            value,
            variable_type,
            include,
            exclude,
            output,
            var_alias,
            path,
            engine_lib,
            threads,
            headless,
        })
        .await
        .map(|summary| {
            tracing::info!(
                total_files = summary.total_files,
                refactored = summary.refactored_files,
                skipped = summary.skipped_files,
                errors = summary.error_count,
                elapsed_ms = summary.total_processing_time_ms,
                "cleanup finished"
            );
        }),
        Commands::Refactor {
            file,
            variable,
            options,
            engine_lib,
        } => execute_refactor(file, variable, options, engine_lib).await,
    };

    if let Err(error) = result {
        eprintln!("❌ Error: {error}");
        std::process::exit(1);
    }
}
