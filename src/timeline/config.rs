use std::{collections::BTreeMap, path::Path, sync::Arc};

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::model::Scene,
    timeline::dsl::TimelineBuilder,
    timeline::model::{AudioTrack, Timeline},
};

/// Frame rate and output size of a video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
}

impl VideoConfig {
    /// Check fps and canvas invariants.
    pub fn validate(&self) -> ReelResult<()> {
        self.fps.validate()?;
        self.canvas.validate()
    }
}

/// Named scenes available to [`TimelineDef::into_timeline`].
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    scenes: BTreeMap<String, Arc<dyn Scene>>,
}

impl SceneRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `scene` under its own name; duplicate names are rejected.
    pub fn register(&mut self, scene: Arc<dyn Scene>) -> ReelResult<()> {
        let name = scene.name().to_owned();
        if self.scenes.contains_key(&name) {
            return Err(ReelError::validation(format!("duplicate scene name '{name}'")));
        }
        self.scenes.insert(name, scene);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, scene: impl Scene + 'static) -> ReelResult<Self> {
        self.register(Arc::new(scene))?;
        Ok(self)
    }

    /// Look up a scene by name.
    pub fn get(&self, name: &str) -> ReelResult<Arc<dyn Scene>> {
        self.scenes
            .get(name)
            .cloned()
            .ok_or_else(|| ReelError::validation(format!("unknown scene '{name}'")))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

/// One entry of a [`TimelineDef`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDef {
    /// Registered scene name.
    pub scene: String,
    /// First global frame.
    pub from: u64,
    /// Window length in frames.
    pub duration: u64,
}

/// JSON description of a timeline that refers to scenes by name.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineDef {
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Persistent background scene name.
    #[serde(default)]
    pub background: Option<String>,
    /// Audio track.
    #[serde(default)]
    pub audio: Option<AudioTrack>,
    /// Scene windows in table order.
    pub entries: Vec<EntryDef>,
}

impl TimelineDef {
    /// Parse a timeline document.
    pub fn from_reader(r: impl std::io::Read) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("timeline JSON parse failed: {e}")))
    }

    /// Read and parse a timeline document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            ReelError::validation(format!("open timeline \"{}\": {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::serde(format!("timeline JSON encode failed: {e}")))
    }

    /// Resolve scene names against `registry` and build the timeline.
    ///
    /// Contiguity problems are logged, not rejected; call [`Timeline::validate`] for strict checks.
    pub fn into_timeline(self, registry: &SceneRegistry) -> ReelResult<Timeline> {
        let mut b = TimelineBuilder::new(VideoConfig {
            fps: self.fps,
            canvas: self.canvas,
        });
        if let Some(name) = &self.background {
            b = b.background_arc(registry.get(name)?);
        }
        if let Some(audio) = self.audio {
            b = b.audio_track(audio);
        }
        for e in &self.entries {
            b = b.scene_arc(registry.get(&e.scene)?, e.from, e.duration);
        }
        b.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
