/// Evaluation driver: literals, the pattern walk, variable lookup and the
/// unary suffix/prefix forms.
pub mod core;
/// The ordered table of structural expression patterns.
pub mod pattern;
