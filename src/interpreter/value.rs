/// Core value representation.
///
/// Declares the `Value` enum together with conversion, promotion and
/// display logic used throughout evaluation.
pub mod core;
/// Hashable projection of values for set membership.
///
/// Sets deduplicate by value equality, so every value that can live inside
/// a set needs a hashable mirror type.
pub mod set_value;
/// Fixed-length tuple values.
///
/// The length of a tuple is fixed at construction; the wrapper type makes
/// that invariant impossible to violate.
pub mod tuple;
