/// Safe numeric conversion helpers.
///
/// Provides checked conversions between `i64` and `f64` that refuse to
/// silently lose precision. Used by the value promotion rules and by the
/// factorial builtin.
pub mod num;
