use rayon::prelude::*;

use crate::{
    assets::store::AssetResolver,
    compile::fingerprint::{FrameFingerprint, fingerprint_frame},
    eval::composer::{Composer, FrameDescription},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::sink::{FrameSink, SinkConfig},
    timeline::model::Timeline,
};

/// How a range of frames is evaluated.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Evaluate each chunk on a rayon pool.
    pub parallel: bool,
    /// Frames per chunk (0 is treated as 1).
    pub chunk_size: usize,
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Send frames identical to their predecessor as repeats.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Counters reported by [`render_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the range.
    pub frames_total: u64,
    /// Frames pushed with their full description.
    pub frames_rendered: u64,
    /// Frames pushed as repeats.
    pub frames_elided: u64,
}

/// Evaluate every frame of `range` in order.
///
/// Frames past the timeline end hold the last frame, as in [`Composer::eval_frame`].
pub fn eval_frames(
    timeline: &Timeline,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<FrameDescription>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let pool = maybe_pool(threading)?;
    for chunk in chunks(range, threading.chunk_size) {
        out.append(&mut eval_chunk(timeline, chunk, pool.as_ref())?);
    }
    Ok(out)
}

/// Evaluate `range` and stream it into `sink`.
///
/// When `assets` is given, the audio track is resolved before any frame is evaluated so a
/// missing voiceover fails fast.
#[tracing::instrument(skip(timeline, assets, sink), fields(start = range.start.0, end = range.end.0))]
pub fn render_range(
    timeline: &Timeline,
    range: FrameRange,
    threading: &RenderThreading,
    assets: Option<&dyn AssetResolver>,
    sink: &mut dyn FrameSink,
) -> ReelResult<RenderStats> {
    let duration = timeline.duration_frames();
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > duration {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds timeline duration {duration}",
            range.end.0
        )));
    }

    let audio_path = match (&timeline.audio, assets) {
        (Some(audio), Some(assets)) => Some(assets.resolve(&audio.asset)?),
        _ => None,
    };
    sink.begin(SinkConfig {
        fps: timeline.fps,
        canvas: timeline.canvas,
        duration_frames: duration,
        range,
        audio: timeline.audio.clone(),
        audio_path,
    })?;

    let pool = maybe_pool(threading)?;
    let mut stats = RenderStats::default();
    let mut last: Option<FrameFingerprint> = None;
    for chunk in chunks(range, threading.chunk_size) {
        for frame in eval_chunk(timeline, chunk, pool.as_ref())? {
            stats.frames_total += 1;
            if threading.static_frame_elision {
                let fp = fingerprint_frame(&frame);
                if last == Some(fp) {
                    sink.push_repeat(frame.frame)?;
                    stats.frames_elided += 1;
                    continue;
                }
                last = Some(fp);
            }
            sink.push_frame(&frame)?;
            stats.frames_rendered += 1;
        }
    }
    sink.end()?;

    tracing::debug!(
        total = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "render finished"
    );
    Ok(stats)
}

fn eval_chunk(
    timeline: &Timeline,
    range: FrameRange,
    pool: Option<&rayon::ThreadPool>,
) -> ReelResult<Vec<FrameDescription>> {
    let frames = range.start.0..range.end.0;
    match pool {
        Some(pool) => pool.install(|| {
            frames
                .into_par_iter()
                .map(|f| Composer::eval_frame(timeline, FrameIndex(f)))
                .collect()
        }),
        None => frames
            .map(|f| Composer::eval_frame(timeline, FrameIndex(f)))
            .collect(),
    }
}

fn chunks(range: FrameRange, chunk_size: usize) -> impl Iterator<Item = FrameRange> {
    let step = normalized_chunk_size(chunk_size);
    (range.start.0..range.end.0)
        .step_by(step as usize)
        .map(move |start| FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(start.saturating_add(step).min(range.end.0)),
        })
}

fn maybe_pool(threading: &RenderThreading) -> ReelResult<Option<rayon::ThreadPool>> {
    if threading.parallel {
        build_thread_pool(threading.threads).map(Some)
    } else {
        Ok(None)
    }
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
