use std::{collections::HashSet, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{set_value::SetValue, tuple::TupleValue},
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear as the result of
/// evaluating an expression: the two numeric flavours, booleans, the absent
/// value produced by `null`/`nil`/`undefined` literals, text, and the three
/// aggregate kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit).
    Integer(i64),
    /// A real value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by the
    /// `true`/`false` literals. Block guards only take the then/body path
    /// when they evaluate to `Bool(true)`.
    Bool(bool),
    /// The absent value, produced by the `null`, `nil` and `undefined`
    /// literals. Displays as `null`.
    Absent,
    /// A UTF-8 string. Quoted literals carry their inner text verbatim; no
    /// escape sequences are processed.
    Text(String),
    /// An ordered, growable, 0-indexed sequence of values.
    Sequence(Rc<Vec<Self>>),
    /// A fixed-length tuple. The length never changes after construction.
    Tuple(Rc<TupleValue>),
    /// An unordered set of unique values. Membership uses value equality.
    Set(Rc<HashSet<SetValue>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Sequence(Rc::new(v))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Integer` and `Value::Real`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(EvalError::TypeError | Overflow)`: If not numeric or not
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n)?),
            _ => Err(EvalError::TypeError { details: format!("expected a number, found {self}") }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::value::core::Value;
    ///
    /// assert!(Value::Bool(true).as_bool().unwrap());
    /// assert!(Value::Integer(1).as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::TypeError { details: format!("expected a boolean, found {self}") }),
        }
    }

    /// Converts the value to an `i64`, performing safe conversion if
    /// necessary.
    ///
    /// - Accepts `Value::Integer` directly.
    /// - Converts `Value::Real` if the value is finite, in range and not
    ///   fractional.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value if conversion succeeds.
    /// - `Err(EvalError)`: If the value is not numeric or cannot be
    ///   converted without loss.
    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_checked(*r),
            _ => Err(EvalError::TypeError { details: format!("expected an integer, found {self}") }),
        }
    }

    /// Promotes an integer to a real value for mixed math, or returns the
    /// pair unchanged when both sides already share a numeric flavour.
    ///
    /// # Returns
    /// - `Ok((f64, f64))`: Both operands as reals.
    /// - `Err(EvalError)`: If either side is not numeric.
    pub fn promote_to_real(&self, other: &Self) -> EvalResult<(f64, f64)> {
        Ok((self.as_real()?, other.as_real()?))
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is numeric (integer or real).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Absent => write!(f, "null"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Tuple(tuple) => {
                write!(f, "(")?;
                for (index, value) in tuple.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ")")
            },
            Self::Set(set) => {
                // Render in a stable order so equal sets display equally.
                fn print_key(val: &SetValue)
                             -> (u8, Option<i64>, Option<OrderedFloat<f64>>, Option<bool>, String)
                {
                    match val {
                        SetValue::Bool(b) => (0, None, None, Some(*b), String::new()),
                        SetValue::Integer(n) => (1, Some(*n), None, None, String::new()),
                        SetValue::Real(r) => (2, None, Some(*r), None, String::new()),
                        SetValue::Absent => (3, None, None, None, String::new()),
                        SetValue::Text(s) => (4, None, None, None, s.clone()),
                        SetValue::Sequence(_) | SetValue::Tuple(_) | SetValue::Set(_) => {
                            (5, None, None, None, format!("{val}"))
                        },
                    }
                }

                let mut elems: Vec<&SetValue> = set.iter().collect();
                elems.sort_by_key(|v| print_key(v));

                write!(f, "{{")?;
                for (index, value) in elems.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
