//! Scene contract and the visual description scenes emit.

/// The [`Scene`](model::Scene) trait, its per-frame context and closure adapter.
pub mod model;
/// Styled element trees.
pub mod visual;
