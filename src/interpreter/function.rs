/// Registry plumbing: the builtin table, arity checks and name lookup.
pub mod core;
/// Named builtin functions (`len`, `fac`, `neg`, `print`).
pub mod builtin;
/// Infix operator builtins.
///
/// Operators are ordinary two-argument registry functions whose names are
/// the operator tokens themselves (`+`, `<=`, `==`, ...); the expression
/// evaluator invokes them exactly like a call written by name.
pub mod operator;
