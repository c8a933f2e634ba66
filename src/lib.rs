//! Tidereel composes scripted promo videos as pure functions of the frame number.
//!
//! A [`Timeline`] mounts [`Scene`]s over half-open frame windows on top of an optional
//! persistent background. Evaluating a frame yields a [`FrameDescription`]: the styled
//! element tree of every visible layer, with all animated values already resolved.
//!
//! - Build a timeline with [`TimelineBuilder`] or load a [`TimelineDef`] from JSON
//! - Evaluate single frames with [`Composer::eval_frame`]
//! - Stream a range into a [`FrameSink`] with [`render_range`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Animation primitives: curves, easing and springs.
pub mod animation;
/// Static asset references and resolvers.
pub mod assets;
/// Frame fingerprints.
pub mod compile;
/// Per-frame evaluation.
pub mod eval;
/// Core value types and the crate error.
pub mod foundation;
/// The "Rising Tides Starter Pack" promo video.
pub mod promo;
/// Range rendering into frame sinks.
pub mod render;
/// Scene contract and visual trees.
pub mod scene;
/// Timelines, their builder and JSON documents.
pub mod timeline;

pub use crate::animation::curve::{Curve, CurveOpts, Extrapolate, interpolate};
pub use crate::animation::ease::Ease;
pub use crate::animation::spring::{Spring, SpringConfig, measure_spring, spring_progress};
pub use crate::assets::store::{AssetRef, AssetResolver, StaticDir};
pub use crate::compile::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::eval::composer::{Composer, FrameDescription, MountedScene};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::render::pipeline::{RenderStats, RenderThreading, eval_frames, render_range};
pub use crate::render::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use crate::scene::model::{Scene, SceneCtx, scene_fn};
pub use crate::scene::visual::Node;
pub use crate::timeline::config::{SceneRegistry, TimelineDef, VideoConfig};
pub use crate::timeline::dsl::TimelineBuilder;
pub use crate::timeline::model::{AudioTrack, Timeline, TimelineEntry};
