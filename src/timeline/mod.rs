//! The timeline: which scene is mounted when.

/// Video settings, JSON timeline documents and scene registries.
pub mod config;
/// Builder for timelines.
pub mod dsl;
/// Entries, audio track and contiguity checks.
pub mod model;
