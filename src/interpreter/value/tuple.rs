use crate::{
    error::EvalError,
    interpreter::value::core::Value,
};

/// A fixed-length tuple of values.
///
/// The length is chosen at construction time and can never change: the
/// elements live in a boxed slice, which has no growth operations. Slots
/// start out as [`Value::Absent`] and are filled by index.
///
/// # Example
/// ```
/// use linescript::interpreter::value::{core::Value, tuple::TupleValue};
///
/// let mut tuple = TupleValue::with_len(2);
/// tuple.set(0, Value::Integer(1)).unwrap();
/// tuple.set(1, Value::Integer(2)).unwrap();
///
/// assert_eq!(tuple.len(), 2);
/// assert!(!tuple.is_empty());
/// assert_eq!(tuple.get(1), Some(&Value::Integer(2)));
/// assert!(tuple.set(2, Value::Absent).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TupleValue {
    items: Box<[Value]>,
}

impl TupleValue {
    /// Creates a tuple of the given length with every slot set to
    /// [`Value::Absent`].
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self { items: vec![Value::Absent; len].into_boxed_slice() }
    }

    /// Writes a slot by index.
    ///
    /// # Errors
    /// Returns `EvalError::IndexOutOfBounds` if `index` is not below the
    /// fixed length.
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), EvalError> {
        if index >= self.items.len() {
            return Err(EvalError::IndexOutOfBounds { max:   self.items.len().saturating_sub(1),
                                                     found: index, });
        }
        self.items[index] = value;
        Ok(())
    }

    /// Reads a slot by index, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns the fixed length of the tuple.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the tuple has length zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl From<Vec<Value>> for TupleValue {
    fn from(values: Vec<Value>) -> Self {
        Self { items: values.into_boxed_slice() }
    }
}
