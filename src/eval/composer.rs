use crate::{
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
    scene::model::{Scene, SceneCtx},
    scene::visual::Node,
    timeline::model::Timeline,
};

/// Everything visible at one global frame, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameDescription {
    /// Requested global frame.
    pub frame: FrameIndex,
    /// Frame actually evaluated (requests past the end hold the last frame).
    pub resolved_frame: FrameIndex,
    /// Persistent background layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Node>,
    /// Mounted scenes in timeline table order.
    pub scenes: Vec<MountedScene>,
}

/// A scene evaluated inside its window.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MountedScene {
    /// Index into [`Timeline::entries`].
    pub entry: usize,
    /// Scene name.
    pub scene: String,
    /// Frame the scene saw.
    pub local_frame: FrameIndex,
    /// Emitted tree.
    pub root: Node,
}

impl FrameDescription {
    /// Root trees in paint order: background first, then scenes.
    pub fn layers(&self) -> impl Iterator<Item = &Node> {
        self.background
            .iter()
            .chain(self.scenes.iter().map(|s| &s.root))
    }

    /// Names of mounted scenes in table order.
    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.iter().map(|s| s.scene.as_str()).collect()
    }

    /// Mounted scene by name.
    pub fn scene(&self, name: &str) -> Option<&MountedScene> {
        self.scenes.iter().find(|s| s.scene == name)
    }
}

/// Maps global frames onto the timeline and evaluates the mounted scenes.
pub struct Composer;

impl Composer {
    /// Evaluate one global frame.
    ///
    /// Timeline contiguity is not checked here; overlapping entries are all mounted and gaps
    /// show only the background.
    #[tracing::instrument(skip(timeline), fields(duration = timeline.duration_frames()))]
    pub fn eval_frame(timeline: &Timeline, frame: FrameIndex) -> ReelResult<FrameDescription> {
        let total = timeline.duration_frames();
        if total == 0 {
            return Err(ReelError::evaluation("timeline has no frames"));
        }
        let resolved = if frame.0 >= total {
            tracing::debug!(requested = frame.0, last = total - 1, "holding last frame");
            FrameIndex(total - 1)
        } else {
            frame
        };

        let background = match &timeline.background {
            Some(bg) => {
                let ctx = SceneCtx::new(resolved, total, timeline.fps, timeline.canvas);
                Some(render_scene(bg.as_ref(), &ctx)?)
            }
            None => None,
        };

        let mut scenes = Vec::new();
        for (entry, e, local) in timeline.active_at(resolved) {
            tracing::trace!(entry, scene = e.scene.name(), local = local.0, "mount");
            let ctx = SceneCtx::new(local, e.duration, timeline.fps, timeline.canvas);
            scenes.push(MountedScene {
                entry,
                scene: e.scene.name().to_owned(),
                local_frame: local,
                root: render_scene(e.scene.as_ref(), &ctx)?,
            });
        }

        Ok(FrameDescription {
            frame,
            resolved_frame: resolved,
            background,
            scenes,
        })
    }
}

fn render_scene(scene: &dyn Scene, ctx: &SceneCtx) -> ReelResult<Node> {
    let root = scene.render(ctx)?;
    root.validate_resolved().map_err(|e| match e {
        ReelError::Evaluation(msg) => ReelError::evaluation(format!(
            "scene '{}' at local frame {}: {msg}",
            scene.name(),
            ctx.frame_index().0
        )),
        other => other,
    })?;
    Ok(root)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/composer.rs"]
mod tests;
