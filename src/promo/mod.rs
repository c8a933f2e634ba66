//! The "Rising Tides Starter Pack" promo: nine scenes over a persistent sunrays background,
//! voiced by `voiceover.mp3`.
//!
//! ```text
//! 0-12s     (0-360)      PainPoints
//! 12-20s    (360-600)    LogoReveal
//! 20-40s    (600-1200)   WhatYouGet
//! 40-55s    (1200-1650)  TheCLIs
//! 55-70s    (1650-2100)  TheMCPs
//! 70-82s    (2100-2460)  HowItWorks
//! 82-92s    (2460-2760)  ContextEfficiency
//! 92-102s   (2760-3060)  OneCommandInstall
//! 102-112s  (3060-3360)  CallToAction
//! ```

use std::sync::Arc;

use crate::{
    assets::store::AssetRef,
    foundation::core::{Canvas, Fps},
    foundation::error::ReelResult,
    timeline::config::{SceneRegistry, VideoConfig},
    timeline::dsl::TimelineBuilder,
    timeline::model::Timeline,
};

mod background;
mod call_to_action;
mod clis;
mod context_efficiency;
mod how_it_works;
mod install;
mod logo_reveal;
mod mcps;
mod pain_points;
mod parts;
pub mod theme;
mod what_you_get;

pub use background::SunraysBackground;
pub use call_to_action::CallToAction;
pub use clis::TheClis;
pub use context_efficiency::ContextEfficiency;
pub use how_it_works::HowItWorks;
pub use install::OneCommandInstall;
pub use logo_reveal::LogoReveal;
pub use mcps::TheMcps;
pub use pain_points::PainPoints;
pub use what_you_get::WhatYouGet;

/// 1920x1080 at 30 fps.
pub const VIDEO: VideoConfig = VideoConfig {
    fps: Fps { num: 30, den: 1 },
    canvas: Canvas {
        width: 1920,
        height: 1080,
    },
};

/// Total length in frames (112 s).
pub const DURATION_FRAMES: u64 = 3360;

/// Voiceover played from the first frame.
pub const VOICEOVER: &str = "voiceover.mp3";

/// Name of the persistent background scene.
pub const BACKGROUND: &str = "SunraysBackground";

/// `(scene name, start frame, duration)` in playback order.
pub const SCHEDULE: [(&str, u64, u64); 9] = [
    ("PainPoints", 0, 360),
    ("LogoReveal", 360, 240),
    ("WhatYouGet", 600, 600),
    ("TheCLIs", 1200, 450),
    ("TheMCPs", 1650, 450),
    ("HowItWorks", 2100, 360),
    ("ContextEfficiency", 2460, 300),
    ("OneCommandInstall", 2760, 300),
    ("CallToAction", 3060, 300),
];

/// Every promo scene, including the background, under its timeline name.
pub fn registry() -> ReelResult<SceneRegistry> {
    SceneRegistry::new()
        .with(SunraysBackground)?
        .with(PainPoints)?
        .with(LogoReveal)?
        .with(WhatYouGet)?
        .with(TheClis)?
        .with(TheMcps)?
        .with(HowItWorks)?
        .with(ContextEfficiency)?
        .with(OneCommandInstall)?
        .with(CallToAction)
}

/// The full promo timeline with background and voiceover.
pub fn timeline() -> ReelResult<Timeline> {
    let registry = registry()?;
    let mut b = TimelineBuilder::new(VIDEO)
        .background_arc(registry.get(BACKGROUND)?)
        .audio(AssetRef::new(VOICEOVER)?, 1.0);
    for (name, start, duration) in SCHEDULE {
        b = b.scene_arc(registry.get(name)?, start, duration);
    }
    b.build_strict()
}

/// Shared handle to a single promo scene, e.g. for previewing it alone.
pub fn scene(name: &str) -> ReelResult<Arc<dyn crate::scene::model::Scene>> {
    registry()?.get(name)
}

#[cfg(test)]
#[path = "../../tests/unit/promo/schedule.rs"]
mod tests;
