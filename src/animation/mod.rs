//! Per-frame value computation: keyframe curves, easing, springs and small helpers.
//!
//! Everything here is a pure function of the frame number.

/// Keyframed interpolation with extrapolation control.
pub mod curve;
/// Easing curves applied to segment progress.
pub mod ease;
/// Staggering, cross-fades and typewriter helpers.
pub mod ops;
/// Damped-spring animation.
pub mod spring;
