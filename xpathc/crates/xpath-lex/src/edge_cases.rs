//! Edge case tests for xpath-lex
