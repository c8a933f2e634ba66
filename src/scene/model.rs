use crate::{
    animation::curve::{Curve, CurveOpts},
    animation::spring::{Spring, SpringConfig},
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::ReelResult,
    scene::visual::Node,
};

/// A timed unit of animation.
///
/// Scenes are pure: the same [`SceneCtx`] always yields the same tree, so frames can be evaluated
/// in any order or in parallel.
pub trait Scene: Send + Sync {
    /// Stable name used by registries and logs.
    fn name(&self) -> &str;

    /// Describe this scene at `ctx.frame()`.
    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node>;
}

impl std::fmt::Debug for dyn Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scene({})", self.name())
    }
}

/// Per-invocation inputs of a [`Scene`].
///
/// Only the scene-local frame is visible; scenes cannot observe their placement on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    frame: FrameIndex,
    duration: u64,
    fps: Fps,
    canvas: Canvas,
}

impl SceneCtx {
    /// Context for scene-local `frame` of a scene mounted for `duration` frames.
    pub fn new(frame: FrameIndex, duration: u64, fps: Fps, canvas: Canvas) -> Self {
        Self {
            frame,
            duration,
            fps,
            canvas,
        }
    }

    /// Scene-local frame as `f64`, ready for curve sampling.
    pub fn frame(&self) -> f64 {
        self.frame.0 as f64
    }

    /// Scene-local frame index.
    pub fn frame_index(&self) -> FrameIndex {
        self.frame
    }

    /// Number of frames the scene is mounted for.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Video frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Scene-local time in seconds.
    pub fn seconds(&self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }

    /// Fraction of the scene window elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            0.0
        } else {
            (self.frame() / self.duration as f64).clamp(0.0, 1.0)
        }
    }

    /// Clamped interpolation of the current frame over `inputs -> outputs`.
    pub fn curve(&self, inputs: &[f64], outputs: &[f64]) -> ReelResult<f64> {
        self.curve_with(inputs, outputs, CurveOpts::clamp())
    }

    /// Interpolation of the current frame with explicit boundary policy and easing.
    pub fn curve_with(&self, inputs: &[f64], outputs: &[f64], opts: CurveOpts) -> ReelResult<f64> {
        Ok(Curve::new(inputs, outputs, opts)?.sample(self.frame()))
    }

    /// Spring progress for motion triggered at local frame `trigger`.
    pub fn spring(&self, trigger: i64, config: SpringConfig) -> ReelResult<f64> {
        self.sample_spring(&Spring::new(trigger, config))
    }

    /// Sample a fully configured spring at the current frame.
    pub fn sample_spring(&self, spring: &Spring) -> ReelResult<f64> {
        spring.sample(self.frame(), self.fps)
    }
}

/// [`Scene`] backed by a closure.
pub struct FnScene<F> {
    name: String,
    render: F,
}

impl<F> std::fmt::Debug for FnScene<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnScene").field("name", &self.name).finish()
    }
}

impl<F> Scene for FnScene<F>
where
    F: Fn(&SceneCtx) -> ReelResult<Node> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        (self.render)(ctx)
    }
}

/// Wrap a closure as a named scene.
pub fn scene_fn<F>(name: impl Into<String>, render: F) -> FnScene<F>
where
    F: Fn(&SceneCtx) -> ReelResult<Node> + Send + Sync,
{
    FnScene {
        name: name.into(),
        render,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
