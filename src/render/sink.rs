use std::{io::Write, path::PathBuf};

use crate::{
    eval::composer::FrameDescription,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    timeline::model::AudioTrack,
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Total timeline length in frames.
    pub duration_frames: u64,
    /// Frames that will be pushed.
    pub range: FrameRange,
    /// Audio track played from frame 0.
    pub audio: Option<AudioTrack>,
    /// Resolved audio file, when an asset resolver was supplied.
    pub audio_path: Option<PathBuf>,
}

/// Consumer of evaluated frames.
///
/// Ordering contract: `push_frame` and `push_repeat` are called in strictly increasing
/// [`FrameIndex`] order within the range announced by `begin`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    /// Push one evaluated frame.
    fn push_frame(&mut self, frame: &FrameDescription) -> ReelResult<()>;
    /// Frame `idx` looks exactly like the previously pushed frame.
    fn push_repeat(&mut self, idx: FrameIndex) -> ReelResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
///
/// Repeats are materialized as copies of the previous frame.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameDescription>,
    repeats: u64,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Captured frames in timeline order.
    pub fn frames(&self) -> &[FrameDescription] {
        &self.frames
    }

    /// Number of frames received through `push_repeat`.
    pub fn repeats(&self) -> u64 {
        self.repeats
    }

    /// `true` once `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.repeats = 0;
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameDescription) -> ReelResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn push_repeat(&mut self, idx: FrameIndex) -> ReelResult<()> {
        let mut copy = self
            .frames
            .last()
            .cloned()
            .ok_or_else(|| ReelError::evaluation("push_repeat before any frame"))?;
        let delta = idx.0.checked_sub(copy.frame.0).ok_or_else(|| {
            ReelError::evaluation(format!(
                "push_repeat({}) is not after frame {}",
                idx.0, copy.frame.0
            ))
        })?;
        // Repeats stay inside the same entries, so local frames advance with the global one.
        for s in &mut copy.scenes {
            s.local_frame = FrameIndex(s.local_frame.0 + delta);
        }
        copy.frame = idx;
        copy.resolved_frame = idx;
        self.frames.push(copy);
        self.repeats += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Line<'a> {
    Header(&'a SinkConfig),
    Frame(&'a FrameDescription),
    Repeat { frame: FrameIndex },
}

/// Sink writing one JSON object per line: a header, then one line per frame.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    out: W,
    lines: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line<'_>) -> ReelResult<()> {
        serde_json::to_writer(&mut self.out, line)
            .map_err(|e| ReelError::serde(format!("frame JSON encode failed: {e}")))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| ReelError::Other(anyhow::Error::new(e).context("write frame line")))?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.write_line(&Line::Header(&cfg))
    }

    fn push_frame(&mut self, frame: &FrameDescription) -> ReelResult<()> {
        self.write_line(&Line::Frame(frame))
    }

    fn push_repeat(&mut self, idx: FrameIndex) -> ReelResult<()> {
        self.write_line(&Line::Repeat { frame: idx })
    }

    fn end(&mut self) -> ReelResult<()> {
        self.out
            .flush()
            .map_err(|e| ReelError::Other(anyhow::Error::new(e).context("flush frame lines")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
