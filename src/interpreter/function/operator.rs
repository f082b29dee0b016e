use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        function::core::check_arity,
        value::core::Value,
    },
};

/// Adds two numeric values.
///
/// Integer operands stay integers (checked, overflow is an error); mixed
/// operands are promoted to reals.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::operator::add, value::core::Value};
///
/// let r = add(&[Value::Integer(2), Value::Real(0.5)]).unwrap();
/// assert_eq!(r, Value::Real(2.5));
/// ```
pub fn add(args: &[Value]) -> EvalResult<Value> {
    check_arity("+", args, 2)?;
    numeric_op("+", &args[0], &args[1], i64::checked_add, |a, b| a + b)
}

/// Subtracts the right operand from the left.
pub fn sub(args: &[Value]) -> EvalResult<Value> {
    check_arity("-", args, 2)?;
    numeric_op("-", &args[0], &args[1], i64::checked_sub, |a, b| a - b)
}

/// Multiplies two numeric values.
pub fn mul(args: &[Value]) -> EvalResult<Value> {
    check_arity("*", args, 2)?;
    numeric_op("*", &args[0], &args[1], i64::checked_mul, |a, b| a * b)
}

/// Divides the left operand by the right.
///
/// Integer division truncates, exactly like the integer `/` of the host
/// language. A zero divisor is an error for both numeric flavours.
pub fn div(args: &[Value]) -> EvalResult<Value> {
    check_arity("/", args, 2)?;

    if divisor_is_zero(&args[1]) {
        return Err(EvalError::DivisionByZero);
    }
    numeric_op("/", &args[0], &args[1], i64::checked_div, |a, b| a / b)
}

/// Computes the remainder of the left operand by the right.
pub fn rem(args: &[Value]) -> EvalResult<Value> {
    check_arity("%", args, 2)?;

    if divisor_is_zero(&args[1]) {
        return Err(EvalError::DivisionByZero);
    }
    numeric_op("%", &args[0], &args[1], i64::checked_rem, |a, b| a % b)
}

/// Raises the left operand to the power of the right.
///
/// An integer base with a non-negative integer exponent stays an integer
/// (checked); every other numeric combination goes through `f64::powf`.
pub fn pow(args: &[Value]) -> EvalResult<Value> {
    check_arity("^", args, 2)?;

    if let (Value::Integer(base), Value::Integer(exp)) = (&args[0], &args[1]) {
        if *exp >= 0 {
            let exp = u32::try_from(*exp).map_err(|_| EvalError::Overflow)?;
            return base.checked_pow(exp).map(Value::Integer).ok_or(EvalError::Overflow);
        }
    }
    let (left, right) = args[0].promote_to_real(&args[1])?;
    Ok(Value::Real(left.powf(right)))
}

/// Concatenates the display forms of both operands into text.
///
/// Any two values can be concatenated; numbers, booleans and aggregates
/// are rendered the same way `print` renders them.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::operator::concat, value::core::Value};
///
/// let joined = concat(&[Value::Text("x = ".to_string()), Value::Integer(4)]).unwrap();
/// assert_eq!(joined, Value::Text("x = 4".to_string()));
/// ```
pub fn concat(args: &[Value]) -> EvalResult<Value> {
    check_arity(".", args, 2)?;
    Ok(Value::Text(format!("{}{}", args[0], args[1])))
}

/// Compares two numeric values with the operator named by `op`.
///
/// Integer pairs compare exactly; mixed pairs are promoted to reals first.
/// Non-numeric operands are a type error.
pub fn compare(op: &str, args: &[Value]) -> EvalResult<Value> {
    check_arity(op, args, 2)?;

    let ordering = if let (Value::Integer(a), Value::Integer(b)) = (&args[0], &args[1]) {
        a.cmp(b)
    } else {
        let (a, b) = args[0].promote_to_real(&args[1])?;
        a.partial_cmp(&b)
         .ok_or_else(|| EvalError::TypeError { details: format!("cannot order {a} and {b}") })?
    };

    let result = match op {
        "<" => ordering.is_lt(),
        "<=" => ordering.is_le(),
        ">" => ordering.is_gt(),
        ">=" => ordering.is_ge(),
        _ => unreachable!(),
    };
    Ok(Value::Bool(result))
}

/// Tests two values for equality.
///
/// Numeric operands of different flavours are compared numerically, so
/// `1 == 1.0` holds. Everything else uses structural value equality.
pub fn eq(args: &[Value]) -> EvalResult<Value> {
    check_arity("==", args, 2)?;
    Ok(Value::Bool(values_equal(&args[0], &args[1])?))
}

/// Tests two values for inequality.
pub fn ne(args: &[Value]) -> EvalResult<Value> {
    check_arity("!=", args, 2)?;
    Ok(Value::Bool(!values_equal(&args[0], &args[1])?))
}

fn values_equal(left: &Value, right: &Value) -> EvalResult<bool> {
    if left.is_numeric() && right.is_numeric() && left.is_integer() != right.is_integer() {
        let (a, b) = left.promote_to_real(right)?;
        return Ok(a == b);
    }
    Ok(left == right)
}

fn divisor_is_zero(value: &Value) -> bool {
    matches!(value, Value::Integer(0)) || matches!(value, Value::Real(r) if *r == 0.0)
}

/// Applies a binary numeric operation with integer/real dispatch.
///
/// Integer pairs use the checked integer operation (a `None` result is an
/// overflow error); any other numeric pair is promoted to reals.
fn numeric_op(op: &str,
              left: &Value,
              right: &Value,
              int_op: fn(i64, i64) -> Option<i64>,
              real_op: fn(f64, f64) -> f64)
              -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            int_op(*a, *b).map(Value::Integer).ok_or(EvalError::Overflow)
        },
        _ if left.is_numeric() && right.is_numeric() => {
            let (a, b) = left.promote_to_real(right)?;
            Ok(Value::Real(real_op(a, b)))
        },
        _ => Err(EvalError::TypeError { details:
                                            format!("invalid operands for '{op}': {left} and {right}"), }),
    }
}
