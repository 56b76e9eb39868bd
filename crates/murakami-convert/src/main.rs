use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use murakami_core::exporters::OutputFormat;
use murakami_core::pipeline::{ConvertOptions, Pipeline, RunSummary};
use murakami_parser::TestKind;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Converts Murakami line-delimited JSON test results into tabular files.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Cli {
    /// Set the logging level
    #[arg(
        short = 'l',
        long = "loglevel",
        env = "MURAKAMI_CONVERT_LOGLEVEL",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    loglevel: LogLevel,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Set the output format
    #[arg(short, long, env = "MURAKAMI_CONVERT_FORMAT", default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// The type of test data that is being parsed (speedtest, dash_legacy, ndt_legacy)
    #[arg(short, long, env = "MURAKAMI_CONVERT_TEST")]
    test: TestKind,

    /// Path to output file
    #[arg(short, long, env = "MURAKAMI_CONVERT_OUTPUT")]
    output: PathBuf,

    /// An input filename pattern containing one or more of %l (location type),
    /// %n (network type), %c (connection type), and %d (datestamp)
    #[arg(short, long, env = "MURAKAMI_CONVERT_PATTERN")]
    pattern: Option<String>,

    /// The input filename, directory, or pattern containing test results
    #[arg(required = true, num_args = 1..)]
    input: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.loglevel, cli.log_format);

    match convert(&cli) {
        Ok(summary) => {
            info!(
                summary = %serde_json::to_string(&summary).unwrap_or_default(),
                "conversion finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn convert(cli: &Cli) -> Result<RunSummary> {
    let options = ConvertOptions {
        test: cli.test,
        format: cli.format,
        output: cli.output.clone(),
        pattern: cli.pattern.clone(),
        inputs: cli.input.clone(),
    };
    Pipeline::standard()
        .run(&options)
        .with_context(|| format!("{} conversion to {} failed", options.test, options.output.display()))
}
