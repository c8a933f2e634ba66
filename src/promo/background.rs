use std::f64::consts::TAU;

use crate::{
    foundation::error::ReelResult,
    promo::theme,
    scene::model::{Scene, SceneCtx},
    scene::visual::{Edges, Fill, GradientStop, Node},
};

const RAYS: usize = 12;
/// Degrees of rotation per frame.
const DRIFT_DEG: f64 = 0.05;
/// Seconds per glow pulse.
const PULSE_SECS: f64 = 6.0;

/// Slowly rotating sun rays and a breathing glow, mounted behind every scene.
#[derive(Clone, Copy, Debug, Default)]
pub struct SunraysBackground;

impl Scene for SunraysBackground {
    fn name(&self) -> &str {
        "SunraysBackground"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let canvas = ctx.canvas();
        let reach = f64::from(canvas.width.max(canvas.height)) * 1.2;
        let drift = ctx.frame() * DRIFT_DEG;
        let pulse = (ctx.seconds() * TAU / PULSE_SECS).sin();
        let fade_in = ctx.curve(&[0.0, 30.0], &[0.0, 1.0])?;

        let rays = (0..RAYS).map(|i| {
            let angle = i as f64 * 360.0 / RAYS as f64 + drift;
            // Alternate strong and faint rays.
            let alpha = if i % 2 == 0 { 0x22 } else { 0x12 };
            Node::container()
                .overlay()
                .size(120.0, reach)
                .translate(0.0, -reach / 2.0)
                .rotate(angle)
                .background(Fill::LinearGradient {
                    angle_deg: 0.0,
                    stops: vec![
                        GradientStop::new(0.0, theme::ACCENT.with_alpha(alpha)),
                        GradientStop::new(1.0, theme::ACCENT.with_alpha(0)),
                    ],
                })
                .blur(8.0)
        });

        let glow = Node::container()
            .overlay()
            .size(900.0, 900.0)
            .radius(450.0)
            .background(Fill::RadialGradient(vec![
                GradientStop::new(0.0, theme::ACCENT.with_alpha(0x30)),
                GradientStop::new(0.6, theme::ACCENT_DIM.with_alpha(0x10)),
                GradientStop::new(1.0, theme::BG.with_alpha(0)),
            ]))
            .opacity(0.6 + 0.15 * pulse)
            .scale(1.0 + 0.04 * pulse)
            .blur(60.0);

        Ok(Node::container()
            .absolute(Edges::ZERO)
            .center()
            .background(Fill::Solid(theme::BG))
            .child(
                Node::fill()
                    .opacity(fade_in)
                    .children(rays)
                    .child(glow),
            ))
    }
}
