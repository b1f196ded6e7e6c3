//! Scanner module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Scanner struct, accessors and dispatch
//! - `name` - Name, qualified name and axis lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod name;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, Scanner};
