use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use fpgen_core::{BasicMatch, GenerateRequest, GeneratedUnit, generate, generate_basic, generate_basic_tests};

#[derive(Parser, Debug)]
#[command(name = "fpgen")]
#[command(version)]
#[command(about = "Generate typed list operations (map, filter, zip, ...) as Go source")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate operations for user-defined types and every pairing of them
    Generate {
        /// Package name written into the generated file
        #[arg(long = "pkg", value_name = "PKG")]
        pkg: String,
        /// Comma-separated type names, e.g. "Employee, Teacher"
        #[arg(long = "type", value_name = "TYPES")]
        types: String,
        /// Comma-separated import paths for types declared in other packages
        #[arg(long, value_name = "IMPORTS")]
        imports: Option<String>,
        /// File to write; printed to stdout when omitted
        #[arg(long, value_name = "FILE")]
        destination: Option<PathBuf>,
        /// Treat any name found inside the basic type list as basic
        #[arg(long)]
        legacy_basic_match: bool,
    },
    /// Generate operations for every built-in scalar type
    Basic {
        #[arg(long = "pkg", value_name = "PKG")]
        pkg: String,
        #[arg(long, value_name = "FILE")]
        destination: Option<PathBuf>,
        /// Generate the matching Go tests (a `_test.go` unit) instead of the operations
        #[arg(long)]
        tests: bool,
    },
}

fn init_tracing() {
    // FPGEN_LOG holds an EnvFilter directive; FPGEN_LOG_STYLE=full adds span events
    let Ok(filter) = EnvFilter::try_from_env("FPGEN_LOG") else { return };
    let span_events = if std::env::var("FPGEN_LOG_STYLE").is_ok_and(|s| s == "full") {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("tracing initialized");
}

fn emit(unit: &GeneratedUnit, destination: Option<&Path>) -> ExitCode {
    let Some(path) = destination else {
        print!("{unit}");
        return ExitCode::SUCCESS;
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Unable to create destination directory {}: {}", dir.display(), e);
            return ExitCode::FAILURE;
        }
    }
    if let Err(e) = fs::write(path, unit.text()) {
        eprintln!("Failed writing {}: {}", path.display(), e);
        return ExitCode::FAILURE;
    }
    tracing::info!(path = %path.display(), functions = unit.function_names().len(), "wrote generated code");
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate { pkg, types, imports, destination, legacy_basic_match } => {
            let basic_match = if legacy_basic_match { BasicMatch::Substring } else { BasicMatch::Exact };
            let req = GenerateRequest::parse(&pkg, &types, imports.as_deref()).with_basic_match(basic_match);
            match generate(&req) {
                Ok(unit) => emit(&unit, destination.as_deref()),
                Err(e) => {
                    eprintln!("Code generation failed: {}", e);
                    eprintln!("Usage: fpgen generate --pkg employee --type \"Employee, Teacher\" --destination fp.go");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Basic { pkg, destination, tests } => {
            let unit = if tests { generate_basic_tests(&pkg) } else { generate_basic(&pkg) };
            match unit {
                Ok(unit) => emit(&unit, destination.as_deref()),
                Err(e) => {
                    eprintln!("Code generation failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
