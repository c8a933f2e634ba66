use std::sync::Arc;

use crate::{
    assets::store::AssetRef,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    scene::model::Scene,
    timeline::config::VideoConfig,
};

/// One scene mounted on the timeline for `[start, start + duration)`.
#[derive(Clone, Debug)]
pub struct TimelineEntry {
    /// Scene rendered inside the window.
    pub scene: Arc<dyn Scene>,
    /// First global frame of the window.
    pub start: FrameIndex,
    /// Window length in frames.
    pub duration: u64,
}

impl TimelineEntry {
    /// Entry for `scene` starting at global frame `start`.
    pub fn new(scene: Arc<dyn Scene>, start: u64, duration: u64) -> Self {
        Self {
            scene,
            start: FrameIndex(start),
            duration,
        }
    }

    /// Global frames during which the scene is mounted.
    pub fn window(&self) -> FrameRange {
        FrameRange::from_start_len(self.start, self.duration)
    }

    /// Exclusive end frame.
    pub fn end(&self) -> FrameIndex {
        self.window().end
    }

    /// Scene-local frame for global `frame`, or `None` outside the window.
    pub fn local_frame(&self, frame: FrameIndex) -> Option<FrameIndex> {
        self.window()
            .contains(frame)
            .then(|| FrameIndex(frame.0 - self.start.0))
    }
}

/// Audio played from global frame 0 for the whole video.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioTrack {
    /// Static file to play.
    pub asset: AssetRef,
    /// Linear gain in `[0, 1]`.
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    1.0
}

impl AudioTrack {
    /// Full-volume track.
    pub fn new(asset: AssetRef) -> Self {
        Self {
            asset,
            volume: 1.0,
        }
    }

    /// Reject volumes outside `[0, 1]`.
    pub fn validate(&self) -> ReelResult<()> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ReelError::validation(format!(
                "audio volume {} must be within [0, 1]",
                self.volume
            )));
        }
        Ok(())
    }
}

/// Structural problems of a timeline's entry table.
///
/// Evaluation tolerates all of these; they are reported by [`Timeline::issues`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimelineIssue {
    /// Entry starts before its predecessor.
    Unsorted {
        /// Offending entry.
        index: usize,
    },
    /// Frames between the previous entry's end and this entry's start show no scene.
    Gap {
        /// Entry after the gap.
        index: usize,
        /// Previous entry's end.
        expected: FrameIndex,
        /// This entry's start.
        start: FrameIndex,
    },
    /// Entry starts before its predecessor ends.
    Overlap {
        /// Entry starting early.
        index: usize,
        /// Previous entry's end.
        expected: FrameIndex,
        /// This entry's start.
        start: FrameIndex,
    },
    /// Entry has zero duration and never mounts.
    EmptyEntry {
        /// Offending entry.
        index: usize,
    },
    /// First entry does not start at frame 0.
    LateStart {
        /// First entry's start.
        start: FrameIndex,
    },
}

impl std::fmt::Display for TimelineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsorted { index } => write!(f, "entry {index} starts before entry {}", index - 1),
            Self::Gap {
                index,
                expected,
                start,
            } => write!(
                f,
                "gap before entry {index}: frames {}..{} have no scene",
                expected.0, start.0
            ),
            Self::Overlap {
                index,
                expected,
                start,
            } => write!(
                f,
                "entry {index} starts at {} but entry {} runs until {}",
                start.0,
                index - 1,
                expected.0
            ),
            Self::EmptyEntry { index } => write!(f, "entry {index} has zero duration"),
            Self::LateStart { start } => {
                write!(f, "first entry starts at {} instead of 0", start.0)
            }
        }
    }
}

/// Fixed table of timed scenes plus the persistent layers of a video.
#[derive(Clone, Debug)]
pub struct Timeline {
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Scene windows in table order.
    pub entries: Vec<TimelineEntry>,
    /// Scene mounted for the whole video behind every entry (local frame = global frame).
    pub background: Option<Arc<dyn Scene>>,
    /// Voiceover or music track.
    pub audio: Option<AudioTrack>,
}

impl Timeline {
    /// Empty timeline with the given video settings.
    pub fn new(config: VideoConfig) -> Self {
        Self {
            fps: config.fps,
            canvas: config.canvas,
            entries: Vec::new(),
            background: None,
            audio: None,
        }
    }

    /// Frame rate and canvas.
    pub fn config(&self) -> VideoConfig {
        VideoConfig {
            fps: self.fps,
            canvas: self.canvas,
        }
    }

    /// Total length: the last entry's start plus its duration.
    pub fn duration_frames(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.end().0)
    }

    /// Entries whose window contains `frame`, with the rebased local frame, in table order.
    pub fn active_at(
        &self,
        frame: FrameIndex,
    ) -> impl Iterator<Item = (usize, &TimelineEntry, FrameIndex)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(move |(i, e)| e.local_frame(frame).map(|local| (i, e, local)))
    }

    /// Ordering and contiguity problems of the entry table.
    pub fn issues(&self) -> Vec<TimelineIssue> {
        let mut out = Vec::new();
        if let Some(first) = self.entries.first()
            && first.start.0 != 0
        {
            out.push(TimelineIssue::LateStart { start: first.start });
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.duration == 0 {
                out.push(TimelineIssue::EmptyEntry { index });
            }
            let Some(prev) = index.checked_sub(1).map(|p| &self.entries[p]) else {
                continue;
            };
            let expected = prev.end();
            if entry.start < prev.start {
                out.push(TimelineIssue::Unsorted { index });
            } else if entry.start > expected {
                out.push(TimelineIssue::Gap {
                    index,
                    expected,
                    start: entry.start,
                });
            } else if entry.start < expected {
                out.push(TimelineIssue::Overlap {
                    index,
                    expected,
                    start: entry.start,
                });
            }
        }
        out
    }

    /// Check video settings and audio only; entry-table issues are not errors here.
    pub fn validate_settings(&self) -> ReelResult<()> {
        self.fps.validate()?;
        self.canvas.validate()?;
        if let Some(audio) = &self.audio {
            audio.validate()?;
        }
        Ok(())
    }

    /// Strict validation: settings must be valid, the table non-empty, sorted and contiguous.
    pub fn validate(&self) -> ReelResult<()> {
        self.validate_settings()?;
        if self.entries.is_empty() {
            return Err(ReelError::validation("timeline has no entries"));
        }
        let issues = self.issues();
        if !issues.is_empty() {
            let joined = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ReelError::validation(format!("timeline is not contiguous: {joined}")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
