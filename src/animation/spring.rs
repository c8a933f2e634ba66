use crate::{
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Physical parameters of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient (`>= 0`).
    pub damping: f64,
    /// Spring stiffness (`> 0`).
    pub stiffness: f64,
    /// Attached mass (`> 0`).
    pub mass: f64,
    /// Never let the value pass its target.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Config with the given physics and no overshoot clamping.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
            overshoot_clamping: false,
        }
    }

    /// Same config with overshoot clamping enabled.
    pub const fn clamped(mut self) -> Self {
        self.overshoot_clamping = true;
        self
    }

    /// Reject non-physical parameters.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.damping.is_finite() && self.stiffness.is_finite() && self.mass.is_finite()) {
            return Err(ReelError::animation("spring parameters must be finite"));
        }
        if self.mass <= 0.0 {
            return Err(ReelError::animation("spring mass must be > 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(ReelError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(ReelError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta`; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt()).max(1e-9)
    }

    /// `true` when the response overshoots its target before settling.
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }
}

/// Spring progress after `elapsed_frames` frames since the trigger.
///
/// Closed-form step response `x(0) = 0, v(0) = 0` settling at `1`. Negative elapsed time
/// (before the trigger) is `0`.
pub fn spring_progress(elapsed_frames: f64, fps: Fps, config: &SpringConfig) -> f64 {
    if elapsed_frames.is_nan() || elapsed_frames <= 0.0 {
        return 0.0;
    }
    let t = elapsed_frames * fps.frame_duration_secs();
    step_response(t, config.stiffness, config.damping, config.mass)
}

fn step_response(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 1.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

/// Frames consecutively within threshold before a spring counts as settled.
const SETTLED_RUN: u64 = 20;

/// Number of frames until the spring stays within `threshold` of rest.
///
/// Fails when the spring has not settled after ten minutes of footage (e.g. zero damping).
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> ReelResult<u64> {
    config.validate()?;
    if threshold.is_nan() || threshold <= 0.0 {
        return Err(ReelError::animation("spring threshold must be > 0"));
    }

    let max_frames = u64::from(fps.num).saturating_mul(600) / u64::from(fps.den).max(1);
    let within = |f: u64| (spring_progress(f as f64, fps, config) - 1.0).abs() < threshold;

    let mut frame = 0u64;
    while !within(frame) {
        frame += 1;
        if frame > max_frames {
            return Err(ReelError::animation(format!(
                "spring {config:?} does not settle within {max_frames} frames"
            )));
        }
    }

    let mut finished = frame;
    let mut run = 0u64;
    while run < SETTLED_RUN {
        frame += 1;
        if frame > max_frames {
            return Err(ReelError::animation(format!(
                "spring {config:?} does not settle within {max_frames} frames"
            )));
        }
        if within(frame) {
            run += 1;
        } else {
            run = 0;
            finished = frame + 1;
        }
    }
    Ok(finished)
}

/// A spring animation triggered at a scene-local frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Oscillator parameters.
    pub config: SpringConfig,
    /// Scene-local frame at which motion starts (may be negative).
    pub trigger: i64,
    /// Value before the trigger.
    pub from: f64,
    /// Rest value.
    pub to: f64,
    /// Stretch the natural settling time to exactly this many frames.
    #[serde(default)]
    pub duration_frames: Option<u64>,
}

impl Spring {
    /// Spring from `0` to `1` starting at `trigger`.
    pub fn new(trigger: i64, config: SpringConfig) -> Self {
        Self {
            config,
            trigger,
            from: 0.0,
            to: 1.0,
            duration_frames: None,
        }
    }

    /// Map progress onto `[from, to]`.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Stretch the settling time to `frames`.
    pub fn duration(mut self, frames: u64) -> Self {
        self.duration_frames = Some(frames);
        self
    }

    /// Sample the spring value at scene-local `frame`.
    pub fn sample(&self, frame: f64, fps: Fps) -> ReelResult<f64> {
        self.config.validate()?;
        let mut elapsed = frame - self.trigger as f64;
        if let Some(target) = self.duration_frames {
            if target == 0 {
                return Err(ReelError::animation("spring duration must be > 0 frames"));
            }
            let natural = measure_spring(fps, &self.config, 0.005)?.max(1);
            elapsed *= natural as f64 / target as f64;
        }

        let mut progress = spring_progress(elapsed, fps, &self.config);
        if self.config.overshoot_clamping {
            progress = progress.min(1.0);
        }
        Ok(self.from + (self.to - self.from) * progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
