//! Command modules for the xpt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};
pub use traits::Command;
