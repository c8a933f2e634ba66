use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// What a curve returns for frames outside its first/last breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    Clamp,
    /// Continue the edge segment linearly.
    Extend,
    /// Return the input frame unchanged.
    Identity,
}

/// Boundary policy and easing for a [`Curve`].
///
/// No `Default`: every curve states its boundary policy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveOpts {
    /// Policy before the first breakpoint.
    pub left: Extrapolate,
    /// Policy after the last breakpoint.
    pub right: Extrapolate,
    /// Easing applied to progress within each segment.
    pub ease: Ease,
}

impl CurveOpts {
    /// Clamp on both sides, linear segments.
    pub const fn clamp() -> Self {
        Self::new(Extrapolate::Clamp, Extrapolate::Clamp)
    }

    /// Extend linearly on both sides, linear segments.
    pub const fn extend() -> Self {
        Self::new(Extrapolate::Extend, Extrapolate::Extend)
    }

    /// Explicit per-side policies with linear segments.
    pub const fn new(left: Extrapolate, right: Extrapolate) -> Self {
        Self {
            left,
            right,
            ease: Ease::Linear,
        }
    }

    /// Replace the segment easing.
    pub const fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// One `(input frame, output value)` breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint {
    /// Input frame (may be fractional).
    pub frame: f64,
    /// Output value at `frame`.
    pub value: f64,
}

/// Piecewise-linear keyframe curve over frame time.
///
/// Breakpoint frames are strictly increasing and there are at least two of them; both invariants
/// are checked on construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CurveDef")]
pub struct Curve {
    keys: Vec<Breakpoint>,
    opts: CurveOpts,
}

#[derive(serde::Deserialize)]
struct CurveDef {
    keys: Vec<Breakpoint>,
    opts: CurveOpts,
}

impl TryFrom<CurveDef> for Curve {
    type Error = ReelError;

    fn try_from(def: CurveDef) -> ReelResult<Self> {
        Self::from_breakpoints(def.keys, def.opts)
    }
}

impl Curve {
    /// Build a curve from parallel input/output slices.
    pub fn new(inputs: &[f64], outputs: &[f64], opts: CurveOpts) -> ReelResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(ReelError::animation(format!(
                "curve input range has {} entries but output range has {}",
                inputs.len(),
                outputs.len()
            )));
        }
        let keys = inputs
            .iter()
            .zip(outputs)
            .map(|(&frame, &value)| Breakpoint { frame, value })
            .collect();
        Self::from_breakpoints(keys, opts)
    }

    /// Build a curve from explicit breakpoints.
    pub fn from_breakpoints(keys: Vec<Breakpoint>, opts: CurveOpts) -> ReelResult<Self> {
        let curve = Self { keys, opts };
        curve.validate()?;
        Ok(curve)
    }

    /// Validate breakpoint invariants (used for deserialized curves too).
    pub fn validate(&self) -> ReelResult<()> {
        if self.keys.len() < 2 {
            return Err(ReelError::animation("curve needs at least two breakpoints"));
        }
        if let Some(k) = self
            .keys
            .iter()
            .find(|k| !k.frame.is_finite() || !k.value.is_finite())
        {
            return Err(ReelError::animation(format!(
                "curve breakpoint ({}, {}) is not finite",
                k.frame, k.value
            )));
        }
        if let Some(w) = self.keys.windows(2).find(|w| w[0].frame >= w[1].frame) {
            return Err(ReelError::animation(format!(
                "curve input frames must be strictly increasing ({} then {})",
                w[0].frame, w[1].frame
            )));
        }
        Ok(())
    }

    /// Breakpoints in increasing frame order.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.keys
    }

    /// Boundary policy and easing of this curve.
    pub fn opts(&self) -> CurveOpts {
        self.opts
    }

    /// Sample the curve at `frame`.
    pub fn sample(&self, frame: f64) -> f64 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];

        if frame < first.frame {
            return match self.opts.left {
                Extrapolate::Clamp => first.value,
                Extrapolate::Identity => frame,
                Extrapolate::Extend => self.segment(0, frame),
            };
        }
        if frame > last.frame {
            return match self.opts.right {
                Extrapolate::Clamp => last.value,
                Extrapolate::Identity => frame,
                Extrapolate::Extend => self.segment(self.keys.len() - 2, frame),
            };
        }

        // First segment whose end frame is >= `frame`.
        let end = self.keys.partition_point(|k| k.frame < frame).max(1);
        self.segment(end - 1, frame)
    }

    fn segment(&self, i: usize, frame: f64) -> f64 {
        let a = self.keys[i];
        let b = self.keys[i + 1];
        let t = (frame - a.frame) / (b.frame - a.frame);
        let te = if (0.0..=1.0).contains(&t) {
            self.opts.ease.apply(t)
        } else {
            t
        };
        a.value + (b.value - a.value) * te
    }
}

/// One-shot interpolation of `frame` over `inputs -> outputs`.
pub fn interpolate(
    frame: f64,
    inputs: &[f64],
    outputs: &[f64],
    opts: CurveOpts,
) -> ReelResult<f64> {
    Ok(Curve::new(inputs, outputs, opts)?.sample(frame))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
