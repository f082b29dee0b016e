//! # linescript
//!
//! linescript is a line-oriented scripting interpreter written in Rust.
//! It supports variable bindings, infix arithmetic and comparisons,
//! function calls, aggregate literals (sequences, tuples, sets),
//! conditional blocks and pre-test loops.
//!
//! There is no lexer and no syntax tree: every expression is resolved by
//! matching raw substrings against an ordered table of structural
//! patterns and recursing over the captured pieces.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{executor::core::Interpreter, scanner::LineScanner};

/// Provides the unified error type for evaluation and dispatch.
///
/// This module defines the single error kind every failure is reported
/// through, with one variant per failure category and complete
/// human-readable messages.
///
/// # Responsibilities
/// - Defines `EvalError` with struct variants for each failure mode.
/// - Renders messages for user feedback and propagation.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together the line scanner, the statement dispatcher,
/// the expression evaluator, the value types and the builtin function
/// registry to provide a complete runtime for line-oriented scripts.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, executor, evaluator,
///   registry and values.
/// - Provides entry points for running whole scripts or single lines.
/// - Manages the flow of values and errors between components.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Runs a complete script and returns the finished interpreter.
///
/// This function builds a scanner over `source`, drains it through the
/// statement dispatcher and hands back the interpreter instance so the
/// caller can inspect the final variable bindings.
///
/// # Errors
/// Returns the first evaluation or structural error raised while running
/// the script.
///
/// # Examples
/// ```
/// use linescript::{interpreter::value::core::Value, run_script};
///
/// let interpreter = run_script("var x = 2\nvar y = x + 1").unwrap();
/// assert_eq!(interpreter.variables().get("y"), Some(&Value::Integer(3)));
///
/// // An undefined variable is an error.
/// assert!(run_script("var y = x + 1").is_err());
/// ```
pub fn run_script(source: &str) -> Result<Interpreter, error::EvalError> {
    let mut interpreter = Interpreter::new(LineScanner::new(source));
    interpreter.parse_all()?;
    Ok(interpreter)
}
