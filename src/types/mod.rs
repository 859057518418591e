//! Primitive types and the type environment.
//!
//! Types are named by the source keywords (`int`, `string`, `float`,
//! `void`); anything that cannot be resolved is `unknown`. The
//! [`types::TypeEnv`] records the declared type of each top-level name.

pub mod types;
