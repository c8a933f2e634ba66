use std::sync::Arc;

use crate::{
    assets::store::AssetRef,
    foundation::error::ReelResult,
    scene::model::Scene,
    timeline::config::VideoConfig,
    timeline::model::{AudioTrack, Timeline, TimelineEntry},
};

/// Builder for [`Timeline`].
pub struct TimelineBuilder {
    timeline: Timeline,
}

impl TimelineBuilder {
    /// Start an empty timeline.
    pub fn new(config: VideoConfig) -> Self {
        Self {
            timeline: Timeline::new(config),
        }
    }

    /// Mount `scene` for `[start, start + duration)`.
    pub fn scene(self, scene: impl Scene + 'static, start: u64, duration: u64) -> Self {
        self.scene_arc(Arc::new(scene), start, duration)
    }

    /// Mount a shared scene for `[start, start + duration)`.
    pub fn scene_arc(mut self, scene: Arc<dyn Scene>, start: u64, duration: u64) -> Self {
        self.timeline
            .entries
            .push(TimelineEntry::new(scene, start, duration));
        self
    }

    /// Mount `scene` right after the last entry.
    pub fn then(self, scene: impl Scene + 'static, duration: u64) -> Self {
        let start = self.timeline.duration_frames();
        self.scene(scene, start, duration)
    }

    /// Persistent background scene.
    pub fn background(self, scene: impl Scene + 'static) -> Self {
        self.background_arc(Arc::new(scene))
    }

    /// Persistent background scene (shared).
    pub fn background_arc(mut self, scene: Arc<dyn Scene>) -> Self {
        self.timeline.background = Some(scene);
        self
    }

    /// Audio track at `volume`.
    pub fn audio(self, asset: AssetRef, volume: f64) -> Self {
        self.audio_track(AudioTrack { asset, volume })
    }

    /// Audio track.
    pub fn audio_track(mut self, audio: AudioTrack) -> Self {
        self.timeline.audio = Some(audio);
        self
    }

    /// Build the timeline, logging contiguity problems as warnings.
    pub fn build(self) -> ReelResult<Timeline> {
        let timeline = self.timeline;
        timeline.validate_settings()?;
        for issue in timeline.issues() {
            tracing::warn!(%issue, "timeline issue");
        }
        tracing::debug!(
            entries = timeline.entries.len(),
            duration = timeline.duration_frames(),
            "built timeline"
        );
        Ok(timeline)
    }

    /// Build the timeline, rejecting any contiguity problem.
    pub fn build_strict(self) -> ReelResult<Timeline> {
        self.timeline.validate()?;
        Ok(self.timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
