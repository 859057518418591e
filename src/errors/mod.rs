//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while parsing and
//! evaluating. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the parser and the evaluator
//! - Helpful suggestions for the reporting layer

pub mod errors;
