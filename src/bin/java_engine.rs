// Javaリファクタリングエンジンのエントリーポイント
// java-engine <filename> <variable-json> <options-json>

use clap::Parser;
use flag_cleanup::engine::JavaEngine;

#[derive(Parser)]
#[command(name = "java-engine")]
#[command(about = "Refactor a Java source file for a feature flag variable")]
#[command(version)]
struct Args {
    /// Source file to refactor
    #[arg(allow_hyphen_values = true)]
    filename: String,

    /// JSON-encoded variable
    #[arg(allow_hyphen_values = true)]
    variable: String,

    /// JSON-encoded options
    #[arg(allow_hyphen_values = true)]
    options: String,

    // 余分な引数は無視する
    #[arg(allow_hyphen_values = true, hide = true)]
    _extra: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let result = JavaEngine::from_args([&args.filename, &args.variable, &args.options])
        .map_err(anyhow::Error::from)
        .and_then(|engine| engine.refactor().map_err(anyhow::Error::from));

    if let Err(error) = result {
        eprintln!("❌ Error: {error}");
        std::process::exit(1);
    }
}
