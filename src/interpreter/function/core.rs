use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        function::{builtin, operator},
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of already-evaluated argument values and
/// returns the computed value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name (operator tokens are names too),
/// - an arity specification,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every registered builtin, operators included.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+"     => { arity: Arity::Exact(2), func: operator::add },
    "-"     => { arity: Arity::Exact(2), func: operator::sub },
    "*"     => { arity: Arity::Exact(2), func: operator::mul },
    "."     => { arity: Arity::Exact(2), func: operator::concat },
    "%"     => { arity: Arity::Exact(2), func: operator::rem },
    "^"     => { arity: Arity::Exact(2), func: operator::pow },
    "/"     => { arity: Arity::Exact(2), func: operator::div },
    "<="    => { arity: Arity::Exact(2), func: |args| operator::compare("<=", args) },
    "<"     => { arity: Arity::Exact(2), func: |args| operator::compare("<", args) },
    ">="    => { arity: Arity::Exact(2), func: |args| operator::compare(">=", args) },
    ">"     => { arity: Arity::Exact(2), func: |args| operator::compare(">", args) },
    "=="    => { arity: Arity::Exact(2), func: operator::eq },
    "!="    => { arity: Arity::Exact(2), func: operator::ne },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "fac"   => { arity: Arity::Exact(1), func: builtin::fac },
    "neg"   => { arity: Arity::Exact(1), func: builtin::neg },
    "print" => { arity: Arity::AtLeast(1), func: builtin::print },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }
}

/// Resolves function names to executable builtins.
///
/// The registry owns the dispatch-by-name mechanism: the expression
/// evaluator hands it a name plus evaluated arguments and receives the
/// result or a failure. One registry instance lives inside each
/// interpreter.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionRegistry;

impl FunctionRegistry {
    /// Creates a registry over the builtin table.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Invokes a function by name.
    ///
    /// # Errors
    /// - `EvalError::UnknownFunction` if the name is not registered.
    /// - `EvalError::ArgumentCountMismatch` if the argument count violates
    ///   the declared arity.
    /// - Any error raised by the builtin itself.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{function::core::FunctionRegistry, value::core::Value};
    ///
    /// let registry = FunctionRegistry::new();
    /// let sum = registry.invoke("+", &[Value::Integer(2), Value::Integer(3)]).unwrap();
    ///
    /// assert_eq!(sum, Value::Integer(5));
    /// ```
    pub fn invoke(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| EvalError::UnknownFunction { name:
                                                                                   name.to_string(), })?;

        if !builtin.arity.check(args.len()) {
            return Err(EvalError::ArgumentCountMismatch { name:  name.to_string(),
                                                          count: args.len(), });
        }
        (builtin.func)(args)
    }

    /// Returns `true` if `name` is registered and accepts `count` arguments.
    ///
    /// Used by the evaluator for early argument-count validation before any
    /// argument is evaluated.
    #[must_use]
    pub fn accepts_arity(&self, name: &str, count: usize) -> bool {
        BUILTIN_TABLE.iter()
                     .find(|b| b.name == name)
                     .is_some_and(|b| b.arity.check(count))
    }

    /// Returns `true` if `name` is a registered function.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        BUILTIN_TABLE.iter().any(|b| b.name == name)
    }
}

/// Checks that a builtin received exactly `expected` arguments.
///
/// Builtins re-check their arity so that direct calls from host code are as
/// safe as calls routed through the registry.
pub(crate) fn check_arity(name: &str, args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() != expected {
        return Err(EvalError::ArgumentCountMismatch { name:  name.to_string(),
                                                      count: args.len(), });
    }
    Ok(())
}
