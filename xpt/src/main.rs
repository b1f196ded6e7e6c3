//! Xpt CLI - Inspect the token stream of XPath expressions.
//!
//! This is the main entry point for the xpt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::read_expression;
use commands::{CheckArgs, CheckCommand, Command, TokensArgs, TokensCommand};
use config::Config;
use error::{Result, XptError};

/// Xpt - Inspect the token stream of XPath expressions
#[derive(Parser, Debug)]
#[command(name = "xpt")]
#[command(author = "XPathc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the token stream of XPath expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "XPT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "XPT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "XPT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the xpt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of an expression
    ///
    /// Lists every token with its kind, lexeme and payload, ending with
    /// the end-of-expression token.
    Tokens(TokensCommandArgs),

    /// Check an expression for lexical errors
    ///
    /// Exits with a non-zero status and a rendered diagnostic when the
    /// expression contains an unterminated string or a number with an
    /// exponent.
    Check(CheckCommandArgs),
}

/// Where the expression comes from.
#[derive(Parser, Debug)]
struct ExpressionInput {
    /// The expression to scan
    expression: Option<String>,

    /// Read the expression from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Byte offset to start scanning at
    #[arg(short, long, default_value_t = 0)]
    start: usize,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    #[command(flatten)]
    input: ExpressionInput,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Show byte spans in text output
    #[arg(long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    #[command(flatten)]
    input: ExpressionInput,
}

/// Main entry point for the xpt CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| XptError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<String> {
    match command {
        Commands::Tokens(args) => {
            let expression = read_expression(args.input.expression, args.input.file.as_deref())?;
            let tokens_args = TokensArgs {
                expression,
                start: args.input.start,
                format: args.format,
                show_spans: args.spans,
            };
            tracing::debug!(command = TokensCommand::name(), "executing");
            TokensCommand::new(tokens_args, config).execute()
        },
        Commands::Check(args) => {
            let expression = read_expression(args.input.expression, args.input.file.as_deref())?;
            let check_args = CheckArgs {
                expression,
                start: args.input.start,
            };
            tracing::debug!(command = CheckCommand::name(), "executing");
            CheckCommand::new(check_args, config).execute()
        },
    }
}
