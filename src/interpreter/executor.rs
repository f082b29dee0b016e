/// The interpreter instance and line classification.
pub mod core;
/// Conditional and loop block handlers.
pub mod block;
