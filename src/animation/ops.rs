use crate::{
    animation::curve::{Curve, CurveOpts},
    foundation::error::{ReelError, ReelResult},
};

/// Trigger frame of the `index`-th item in a staggered group.
pub fn stagger(start: i64, index: usize, step: i64) -> i64 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    start.saturating_add(index.saturating_mul(step))
}

/// Opacity that fades in over `[a, b]`, holds, then fades out over `[c, d]`.
pub fn fade_through(frame: f64, [a, b, c, d]: [f64; 4]) -> ReelResult<f64> {
    let curve = Curve::new(&[a, b, c, d], &[0.0, 1.0, 1.0, 0.0], CurveOpts::clamp())?;
    Ok(curve.sample(frame))
}

/// Blend `a` toward `b` by `t`, with `t` clamped to `[0, 1]`.
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Number of characters of a typed-out string visible at `frame`.
///
/// Typing starts at `start` and advances one character every `frames_per_char` frames.
pub fn typed_chars(frame: f64, start: f64, frames_per_char: f64, len: usize) -> ReelResult<usize> {
    if frames_per_char.is_nan() || frames_per_char <= 0.0 {
        return Err(ReelError::animation("frames_per_char must be > 0"));
    }
    let elapsed = frame - start;
    if elapsed.is_nan() || elapsed < 0.0 {
        return Ok(0);
    }
    let n = (elapsed / frames_per_char).floor();
    Ok(if n >= len as f64 { len } else { n as usize })
}

/// Prefix of `text` containing its first `chars` characters.
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
