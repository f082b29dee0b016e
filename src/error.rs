#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating expressions or
/// dispatching statements.
///
/// The interpreter makes no recoverable-vs-fatal distinction: every variant
/// aborts the current `run`/`evaluate` call and propagates to the caller.
/// Callers distinguish failure categories only by the rendered message.
pub enum EvalError {
    /// A piece of text matched no structural pattern and is not a bound
    /// variable.
    UndefinedSymbol {
        /// The offending expression text.
        text: String,
    },
    /// Called a function that is not registered.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:  String,
        /// The number of arguments that were supplied.
        count: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division (or remainder) by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// Tried to write a tuple slot outside the fixed length.
    IndexOutOfBounds {
        /// The largest valid index.
        max:   usize,
        /// The index that was actually requested.
        found: usize,
    },
    /// The line source was exhausted while a block terminator was still
    /// expected.
    UnexpectedEndOfFile {
        /// The terminator that was never seen (`fi`, `done` or `*/`).
        expected: &'static str,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { text } => {
                write!(f, "Invalid statement or undefined variable '{text}'.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name, count } => {
                write!(f, "Function '{name}' does not accept {count} argument(s).")
            },
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
            Self::IndexOutOfBounds { max, found } => {
                write!(f,
                       "Index out of bounds. Maximum is {max}, but found {found} instead.")
            },
            Self::UnexpectedEndOfFile { expected } => {
                write!(f, "Unexpected end of file, missing {expected}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
