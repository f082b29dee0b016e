use crate::error::EvalError;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(EvalError::Overflow)` if the magnitude exceeds
/// `MAX_SAFE_INT`.
///
/// ## Example
/// ```
/// use linescript::util::num::{i64_to_f64_checked, MAX_SAFE_INT};
///
/// assert_eq!(i64_to_f64_checked(42).unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_INT + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_checked(value: i64) -> Result<f64, EvalError> {
    if value.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(EvalError::Overflow);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if it is finite, integral and in range.
///
/// ## Errors
/// Returns `Err(EvalError::TypeError)` if the value is not finite or has a
/// fractional part, and `Err(EvalError::Overflow)` if it falls outside the
/// exactly representable integer range.
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64) -> Result<i64, EvalError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(EvalError::TypeError { details: format!("{value} is not an integer") });
    }
    if value.abs() > MAX_SAFE_INT as f64 {
        return Err(EvalError::Overflow);
    }
    Ok(value as i64)
}
