use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use lugha_drv::compile_and_run;

/// Compiles and runs a single source file (or stdin) through the full
/// pipeline, printing the execution artifacts as JSON.
#[derive(ClapParser, Debug)]
#[command(name = "lugha", version, about)]
struct Cli {
    /// Source file to compile. Reads from stdin when omitted.
    file: Option<PathBuf>,

    /// Print only the `output` list instead of all five artifacts.
    #[arg(long)]
    output_only: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match compile_and_run(&source) {
        Ok(result) if cli.output_only => {
            print_json(&result.output);
            ExitCode::SUCCESS
        }
        Ok(result) => {
            print_json(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "compilation failed");
            print_json(&serde_json::json!({ "error": err.to_string() }));
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: &Option<PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: failed to serialize result: {err}"),
    }
}
