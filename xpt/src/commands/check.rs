//! Check command implementation.
//!
//! Scans an expression to the end and reports the first lexical error.

use tracing::info;
use xpath_lex::{LexKind, Scanner};

use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// The expression to check.
    pub expression: String,
    /// Byte offset to start scanning at.
    pub start: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, _config: Config) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<String> {
        let mut scanner = Scanner::with_offset(&self.args.expression, self.args.start)?;
        let mut count = 0;
        while scanner.kind() != LexKind::Eof {
            count += 1;
            scanner.advance()?;
        }
        info!(count, "expression is lexically valid");
        Ok(format!("ok: {} tokens\n", count))
    }

    fn name() -> &'static str {
        "check"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XptError;
    use xpath_lex::{ErrorKind, LexError};

    fn check(expression: &str) -> Result<String> {
        let args = CheckArgs {
            expression: expression.to_string(),
            start: 0,
        };
        CheckCommand::new(args, Config::default()).execute()
    }

    #[test]
    fn test_valid_expression() {
        assert_eq!(check("count(//para) > 1").unwrap(), "ok: 7 tokens\n");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(check("   ").unwrap(), "ok: 0 tokens\n");
    }

    #[test]
    fn test_scientific_notation_mid_expression() {
        match check("a + 1e3") {
            Err(XptError::Scan(err)) => {
                assert_eq!(err.kind(), ErrorKind::ScientificNotation);
            },
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_error_on_first_token() {
        assert!(matches!(
            check("'open"),
            Err(XptError::Lex(LexError::Syntax(_)))
        ));
    }

    #[test]
    fn test_empty_expression() {
        assert!(matches!(
            check(""),
            Err(XptError::Lex(LexError::OffsetOutOfRange { .. }))
        ));
    }
}
