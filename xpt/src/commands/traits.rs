//! Command trait for the xpt CLI.
//!
//! Every subcommand is built from its arguments and the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all xpt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance from its arguments and the
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, returning what it prints.
    fn execute(&self) -> Result<String>;

    /// Get the command name.
    fn name() -> &'static str;
}
