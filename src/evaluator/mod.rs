//! Expression evaluation.
//!
//! Evaluates a single parsed expression against an environment of named
//! values. Statements, calls and user functions are not executed; the
//! evaluator covers literals, identifiers, prefix and infix operators and
//! `typeof`.

pub mod environment;
pub mod evaluator;
pub mod object;
