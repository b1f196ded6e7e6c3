//! Tokens command implementation.
//!
//! Scans an expression and lists its tokens as text or JSON.

use tracing::{debug, info};
use xpath_lex::Scanner;

use crate::commands::common::{render_json, render_text, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// The expression to scan.
    pub expression: String,
    /// Byte offset to start scanning at.
    pub start: usize,
    /// Output format; falls back to the configured one.
    pub format: Option<String>,
    /// Print spans in text output.
    pub show_spans: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    fn output_format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.output.format);
        OutputFormat::resolve(name)
    }

    fn show_spans(&self) -> bool {
        self.args.show_spans || self.config.output.show_spans
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<String> {
        let format = self.output_format()?;
        debug!(start = self.args.start, format = ?format, "scanning expression");

        let scanner = Scanner::with_offset(&self.args.expression, self.args.start)?;
        let tokens = scanner.collect::<std::result::Result<Vec<_>, _>>()?;
        info!(count = tokens.len(), "scanned tokens");

        match format {
            OutputFormat::Text => Ok(render_text(&tokens, self.show_spans())),
            OutputFormat::Json => {
                let mut json = render_json(&tokens)?;
                json.push('\n');
                Ok(json)
            },
        }
    }

    fn name() -> &'static str {
        "tokens"
    }
}
