use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        function::core::check_arity,
        value::core::Value,
    },
};

/// Returns the length of an aggregate or text value.
///
/// Accepts exactly one argument.
/// - `Text`: the number of characters.
/// - `Sequence`, `Tuple`, `Set`: the number of elements.
///
/// Any other value is a type error.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::builtin::len, value::core::Value};
///
/// let n = len(&[Value::Text("ab".to_string())]).unwrap();
/// assert_eq!(n, Value::Integer(2));
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity("len", args, 1)?;

    let count = match &args[0] {
        Value::Text(s) => s.chars().count(),
        Value::Sequence(items) => items.len(),
        Value::Tuple(tuple) => tuple.len(),
        Value::Set(set) => set.len(),
        other => {
            return Err(EvalError::TypeError { details:
                                                  format!("cannot compute length of {other}"), });
        },
    };
    Ok(Value::Integer(count as i64))
}

/// Computes the factorial of a non-negative integer.
///
/// Accepts exactly one argument, which must be an integer or an integral
/// real. Bound to the trailing-`!` expression form.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::builtin::fac, value::core::Value};
///
/// let r = fac(&[Value::Integer(5)]).unwrap();
/// assert_eq!(r, Value::Integer(120));
/// ```
pub fn fac(args: &[Value]) -> EvalResult<Value> {
    check_arity("fac", args, 1)?;

    let n = args[0].as_integer()?;
    if n < 0 {
        return Err(EvalError::TypeError { details:
                                              format!("factorial is not defined for negative integer {n}"), });
    }

    let mut result: i64 = 1;
    for factor in 2..=n {
        result = result.checked_mul(factor).ok_or(EvalError::Overflow)?;
    }
    Ok(Value::Integer(result))
}

/// Negates a value.
///
/// Booleans are logically inverted; integers and reals are arithmetically
/// negated. Bound to the leading-`!` expression form.
pub fn neg(args: &[Value]) -> EvalResult<Value> {
    check_arity("neg", args, 1)?;

    match &args[0] {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        Value::Integer(n) => n.checked_neg().map(Value::Integer).ok_or(EvalError::Overflow),
        Value::Real(r) => Ok(Value::Real(-r)),
        other => Err(EvalError::TypeError { details: format!("cannot negate {other}") }),
    }
}

/// Prints one or more values to standard output.
///
/// The display forms of all arguments are joined with single spaces and
/// followed by a newline. Returns [`Value::Absent`].
pub fn print(args: &[Value]) -> EvalResult<Value> {
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::Absent)
}
