/// The expression evaluator.
///
/// The centerpiece of the interpreter: classifies raw expression text
/// against an ordered table of structural patterns and resolves it
/// recursively, with no token stream and no syntax tree in between.
///
/// # Responsibilities
/// - Recognizes literals (numbers, booleans, absent, strings).
/// - Walks the pattern table (sequence, call, tuple, set, infix) in
///   registration order; the first full match wins.
/// - Falls back to variable lookup and the unary `!` forms.
pub mod evaluator;
/// The statement dispatcher.
///
/// Classifies each source line as a comment, binding, conditional, loop or
/// bare expression and drives block consumption for the control-flow
/// forms.
///
/// # Responsibilities
/// - Owns the scope store and the line scanner.
/// - Binds variables, discards bare expression values.
/// - Runs `if`/`else`/`fi` and `while`/`done` blocks via the scanner.
pub mod executor;
/// The builtin function registry.
///
/// Resolves function names (operator tokens included) to executable
/// builtins with declared arities.
pub mod function;
/// The line source.
///
/// Supplies lines one at a time and supports seeking back to a recorded
/// index for loop re-entry.
pub mod scanner;
/// Runtime value types.
///
/// Declares the `Value` union plus the hashable set projection and the
/// fixed-length tuple wrapper.
pub mod value;
