use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        function::core::FunctionRegistry,
        scanner::LineScanner,
        value::core::Value,
    },
};

static LET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:let|var|define) ([A-Za-z_][A-Za-z0-9_]{0,127}) *= *(.+)$")
        .expect("binding pattern is valid")
});
static IF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^if ?(.*)$").expect("conditional pattern is valid"));
static WHILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^while ?(.*)$").expect("loop pattern is valid"));

/// One interpreter instance: a line source, a function registry and a flat
/// scope of named variables.
///
/// The scope is owned by the instance, never process-global, so multiple
/// independent interpreters can coexist. Nested use (a script spawning a
/// sub-script) is done by constructing a fresh instance, optionally seeded
/// through [`Interpreter::with_variables`] — never by sharing mutable
/// state.
///
/// # Example
/// ```
/// use linescript::interpreter::{executor::core::Interpreter, scanner::LineScanner, value::core::Value};
///
/// let mut interpreter = Interpreter::new(LineScanner::new("var x = 2\nvar y = x ^ 3"));
/// interpreter.parse_all().unwrap();
///
/// assert_eq!(interpreter.variables().get("y"), Some(&Value::Integer(8)));
/// ```
pub struct Interpreter {
    pub(crate) scanner:   LineScanner,
    pub(crate) registry:  FunctionRegistry,
    pub(crate) variables: HashMap<String, Value>,
}

impl Interpreter {
    /// Creates an interpreter over the given line source with an empty
    /// scope.
    #[must_use]
    pub fn new(scanner: LineScanner) -> Self {
        Self::with_variables(scanner, HashMap::new())
    }

    /// Creates an interpreter with a pre-seeded scope.
    ///
    /// This is the host-embedding entry point: bindings survive across
    /// runs by handing the previous instance's variables to the next one.
    #[must_use]
    pub fn with_variables(scanner: LineScanner, variables: HashMap<String, Value>) -> Self {
        Self { scanner,
               registry: FunctionRegistry::new(),
               variables }
    }

    /// Drains the line source, dispatching every line in order.
    ///
    /// # Errors
    /// Propagates the first evaluation or structural error.
    pub fn parse_all(&mut self) -> EvalResult<()> {
        while self.scanner.has_next() {
            let line = self.scanner.next_line().unwrap_or_default();
            self.run(&line)?;
        }
        Ok(())
    }

    /// Classifies and executes a single line.
    ///
    /// Order of classification on the trimmed line: block comment opener,
    /// line comment stripping, empty line, binding, conditional, loop, and
    /// finally a bare expression whose value is discarded. Block handlers
    /// pull further lines from the scanner themselves.
    ///
    /// # Errors
    /// Propagates evaluation errors and structural errors (an unterminated
    /// `/*` comment).
    pub fn run(&mut self, line: &str) -> EvalResult<()> {
        let mut line = line.trim().to_string();

        if line == "/*" {
            loop {
                let Some(next) = self.scanner.next_line() else {
                    return Err(EvalError::UnexpectedEndOfFile { expected: "*/" });
                };
                line = next.trim().to_string();
                if line.eq_ignore_ascii_case("*/") {
                    break;
                }
            }
            // The line after the close marker is classified in this same
            // invocation; a second back-to-back `/*` is not special-cased.
            match self.scanner.next_line() {
                Some(next) => line = next.trim().to_string(),
                None => return Ok(()),
            }
        }

        let line = strip_comment(&line);
        if line.is_empty() {
            return Ok(());
        }

        if let Some(caps) = LET_PATTERN.captures(line) {
            let value = self.evaluate(&caps[2])?;
            self.variables.insert(caps[1].to_string(), value);
            return Ok(());
        }
        if let Some(caps) = IF_PATTERN.captures(line) {
            let condition = caps[1].to_string();
            return self.run_if_block(&condition);
        }
        if let Some(caps) = WHILE_PATTERN.captures(line) {
            let condition = caps[1].to_string();
            return self.run_while_block(&condition);
        }

        self.evaluate(line)?;
        Ok(())
    }

    /// Read access to the scope store.
    #[must_use]
    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    /// Write access to the scope store, for seeding or patching bindings
    /// between runs.
    pub fn variables_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.variables
    }
}

/// Truncates a line at the first `//` marker and trims the remainder.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(position) => line[..position].trim(),
        None => line,
    }
}
