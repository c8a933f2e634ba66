/// Frame indices, ranges, frame rates, canvas and colors.
pub mod core;
/// Crate error type.
pub mod error;
