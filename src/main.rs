use clap::{Parser, Subcommand};
use fieldcheck::{Checker, MessageCatalog, Requirement, Result, diagnostics};

use anyhow::{Context, bail};
use serde_json::Value;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code when the record fails validation (input errors exit with 1).
const EXIT_INVALID: u8 = 2;

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(about = "Required-field validation from descriptor strings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,

    /// Report malformed descriptors and unknown types on stderr.
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record; prints an error report on failure.
    Check {
        /// JSON array of descriptors and either-or groups.
        #[arg(long)]
        rules: String,

        /// JSON record to validate.
        #[arg(long)]
        data: String,

        /// JSON object of localized messages.
        #[arg(long)]
        messages: Option<String>,
    },

    /// Show how a descriptor string is parsed.
    Explain { descriptor: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.cmd {
        Commands::Check {
            rules,
            data,
            messages,
        } => {
            // 1) Load inputs.
            let requirements: Vec<Requirement> = read_json(&rules, "rules")?;
            if requirements.is_empty() {
                bail!(
                    "{}",
                    diagnostics::error_message(format!("{} contains no requirements", rules))
                );
            }
            let record: Value = read_json(&data, "data")?;
            let catalog = match messages {
                Some(path) => MessageCatalog::load(&path)?,
                None => MessageCatalog::default(),
            };

            // 2) Check and report.
            let checker = Checker::new(catalog);
            if let Err(report) = checker.check(&requirements, &record) {
                println!("{}", report.to_json()?);
                return Ok(ExitCode::from(EXIT_INVALID));
            }
        }
        Commands::Explain { descriptor } => {
            let spec = fieldcheck::parse(&descriptor);
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr; stdout carries only the report.
///
/// `--debug` enables this crate's debug events, otherwise `RUST_LOG` decides
/// (default: warnings only).
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fieldcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read {} file {}", what, path)))?;
    serde_json::from_str(&text)
        .with_context(|| diagnostics::error_message(format!("parse {} file {}", what, path)))
}
