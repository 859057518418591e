//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for the parser. It handles:
//!
//! - Pull-based tokenization, one token per call
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Line comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
