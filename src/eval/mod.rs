//! Per-frame evaluation of a timeline.

/// [`Composer`](composer::Composer) and the frame descriptions it produces.
pub mod composer;
