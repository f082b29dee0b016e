use std::{
    collections::HashSet,
    fmt::Display,
    hash::{Hash, Hasher},
    rc::Rc,
};

use ordered_float::OrderedFloat;

use crate::interpreter::value::{core::Value, tuple::TupleValue};

/// Enum representing values allowed in sets.
///
/// Mirrors [`Value`] with every variant hashable: reals are wrapped in
/// `OrderedFloat` and aggregates carry `SetValue` elements recursively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetValue {
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A boolean such as `true`.
    Bool(bool),
    /// A real such as `3.141592653589793`.
    Real(OrderedFloat<f64>),
    /// The absent value.
    Absent,
    /// A string such as `"abc"`.
    Text(String),
    /// A sequence such as `[1, 2, 2]`.
    Sequence(Vec<SetValue>),
    /// A tuple such as `(1, 2)`.
    Tuple(Vec<SetValue>),
    /// A set such as `{1, 2, true}`.
    Set(HashSet<SetValue>),
}

impl From<&Value> for SetValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Integer(i) => Self::Integer(*i),
            Value::Real(r) => Self::Real(OrderedFloat(*r)),
            Value::Bool(b) => Self::Bool(*b),
            Value::Absent => Self::Absent,
            Value::Text(s) => Self::Text(s.clone()),
            Value::Sequence(items) => Self::Sequence(items.iter().map(Self::from).collect()),
            Value::Tuple(tuple) => Self::Tuple(tuple.iter().map(Self::from).collect()),
            Value::Set(set) => Self::Set(set.iter().cloned().collect()),
        }
    }
}

impl From<SetValue> for Value {
    fn from(s: SetValue) -> Self {
        match s {
            SetValue::Integer(i) => Self::Integer(i),
            SetValue::Real(r) => Self::Real(r.into_inner()),
            SetValue::Bool(b) => Self::Bool(b),
            SetValue::Absent => Self::Absent,
            SetValue::Text(s) => Self::Text(s),
            SetValue::Sequence(items) => {
                Self::Sequence(Rc::new(items.into_iter().map(Self::from).collect()))
            },
            SetValue::Tuple(items) => {
                let values: Vec<Self> = items.into_iter().map(Self::from).collect();
                Self::Tuple(Rc::new(TupleValue::from(values)))
            },
            SetValue::Set(set) => Self::Set(Rc::new(set.into_iter().collect())),
        }
    }
}

impl Hash for SetValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(i) => {
                state.write_u8(0);
                i.hash(state);
            },
            Self::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            },
            Self::Real(r) => {
                state.write_u8(2);
                r.hash(state);
            },
            Self::Absent => {
                state.write_u8(3);
            },
            Self::Text(s) => {
                state.write_u8(4);
                s.hash(state);
            },
            Self::Sequence(items) => {
                state.write_u8(5);
                items.hash(state);
            },
            Self::Tuple(items) => {
                state.write_u8(6);
                items.hash(state);
            },
            Self::Set(set) => {
                state.write_u8(7);
                // Membership is unordered, so combine element hashes
                // order-independently.
                let mut hashes: Vec<u64> =
                    set.iter()
                       .map(|item| {
                           let mut hasher = std::collections::hash_map::DefaultHasher::new();
                           item.hash(&mut hasher);
                           hasher.finish()
                       })
                       .collect();

                hashes.sort_unstable();

                let mut combined: u64 = 0;
                for h in hashes {
                    combined = combined.wrapping_add(h);
                }
                combined.hash(state);
            },
        }
    }
}

impl Display for SetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value: Value = self.clone().into();
        write!(f, "{value}")
    }
}
