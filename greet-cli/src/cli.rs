use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use greet::output::{write_human, write_json};
use greet::samples::{sample, samples};
use greet::{CheckReport, ValidationConfig, ValidationError, greet_with, validate_with};
use serde_json::Value;

use crate::logging::init_tracing;
use crate::server::{ServerConfig, serve};

/// Validate person records and format greetings.
#[derive(Debug, Parser)]
#[command(name = "greet", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug with request bodies).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a person document and print the greeting.
    Hello {
        /// JSON file to read, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
        /// Report only the first violation.
        #[arg(long)]
        first_failure: bool,
    },
    /// Validate a person document and print a report.
    Check {
        /// JSON file to read, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
        /// Report only the first violation.
        #[arg(long)]
        first_failure: bool,
    },
    /// Print the documentation sample payloads.
    Samples {
        /// Print only the sample with this key.
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the HTTP server.
    Server {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Report only the first violation per request.
        #[arg(long)]
        first_failure: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Parse arguments, install logging and run the selected command.
///
/// # Errors
///
/// Returns an error if the command fails or the input is rejected.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    execute(cli).await
}

/// Run an already parsed command line.
///
/// # Errors
///
/// Returns an error if the command fails or the input is rejected.
pub async fn execute(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout();
    match cli.command {
        Commands::Hello {
            input,
            first_failure,
        } => {
            let raw = read_input(&input)?;
            match hello_document(&raw, &validation_config(first_failure)) {
                Ok(greeting) => writeln!(stdout, "{greeting}")?,
                Err(err) => {
                    if let Some(rejection) = err.downcast_ref::<ValidationError>() {
                        let mut stderr = std::io::stderr();
                        for violation in rejection.violations() {
                            writeln!(stderr, "{}", violation.format_human_readable())?;
                        }
                    }
                    return Err(err);
                }
            }
        }
        Commands::Check {
            input,
            format,
            first_failure,
        } => {
            let raw = read_input(&input)?;
            let errors = check_document(
                &raw,
                &validation_config(first_failure),
                format,
                &mut stdout,
            )?;
            if errors > 0 {
                bail!("{errors} violation(s) found in {input}");
            }
        }
        Commands::Samples { name } => {
            let json = if let Some(key) = name {
                let Some(found) = sample(&key) else {
                    bail!("Unknown sample '{key}'");
                };
                serde_json::to_string_pretty(&found)?
            } else {
                serde_json::to_string_pretty(&samples())?
            };
            writeln!(stdout, "{json}")?;
        }
        Commands::Server {
            host,
            port,
            first_failure,
        } => {
            let config = ServerConfig {
                host,
                port,
                verbose: cli.verbose,
                validation: validation_config(first_failure),
            };
            serve(&config).await?;
        }
    }
    Ok(())
}

fn validation_config(first_failure: bool) -> ValidationConfig {
    if first_failure {
        ValidationConfig::first_failure()
    } else {
        ValidationConfig::default()
    }
}

/// Read a JSON document from `input`, or from stdin when `input` is `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid JSON.
pub fn read_input(input: &str) -> Result<Value> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
    };
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {input}"))
}

/// Validate `raw` and render the `{"Hello": ...}` response as pretty JSON.
///
/// # Errors
///
/// Returns the validation error when `raw` is rejected.
pub fn hello_document(raw: &Value, config: &ValidationConfig) -> Result<String> {
    let greeting = greet_with(raw, config)?;
    Ok(serde_json::to_string_pretty(&greeting)?)
}

/// Validate `raw` and write a report in `format`. Returns the violation count.
///
/// # Errors
///
/// Returns an error if the report cannot be written.
pub fn check_document(
    raw: &Value,
    config: &ValidationConfig,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<usize> {
    let report = CheckReport::from_outcome(validate_with(raw, config));
    match format {
        OutputFormat::Human => write_human(&report, writer)?,
        OutputFormat::Json => write_json(&report, writer)?,
    }
    Ok(report.errors_count())
}
