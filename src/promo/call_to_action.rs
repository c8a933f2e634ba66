use std::f64::consts::TAU;

use crate::{
    animation::spring::SpringConfig,
    foundation::error::ReelResult,
    promo::{parts::rise, theme},
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Edges, Fill, Node, Shadow},
};

const BUTTON_AT: i64 = 60;
const BUTTON: SpringConfig = SpringConfig::new(10.0, 160.0, 0.8);
/// Seconds per button pulse once it has landed.
const PULSE_SECS: f64 = 1.5;

/// Closing lockup with a pulsing call-to-action button; fades the video out.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallToAction;

impl Scene for CallToAction {
    fn name(&self) -> &str {
        "CallToAction"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let end = ctx.duration().saturating_sub(1) as f64;
        let fade_in = ctx.curve(&[0.0, 20.0], &[0.0, 1.0])?;
        let fade_out = ctx.curve(&[end - 40.0, end], &[1.0, 0.0])?;
        let (title_opacity, title_y) = rise(ctx, 0.0, 25.0, 25.0)?;
        let (sub_opacity, sub_y) = rise(ctx, 30.0, 20.0, 15.0)?;
        let (foot_opacity, _) = rise(ctx, 100.0, 20.0, 0.0)?;

        let landed = ctx.spring(BUTTON_AT, BUTTON)?;
        let since_secs = (ctx.frame() - BUTTON_AT as f64).max(0.0) / ctx.fps().as_f64();
        let pulse = 1.0 + 0.03 * (since_secs * TAU / PULSE_SECS).sin();

        let brand = Node::row(24.0)
            .align(Align::Center)
            .opacity(title_opacity)
            .translate(0.0, title_y)
            .child(
                Node::text("~")
                    .font(theme::mono(110.0))
                    .color(theme::ACCENT_BRIGHT)
                    .shadow(Shadow::glow(40.0, theme::ACCENT.with_alpha(0xcc))),
            )
            .child(
                Node::text("Rising Tides")
                    .font(theme::mono(88.0).weight(700).spacing(-2.0))
                    .color(theme::TEXT_BRIGHT),
            );

        let subtitle = Node::text("Everything you need, nothing you don't.")
            .font(theme::sans(36.0))
            .color(theme::TEXT)
            .opacity(sub_opacity)
            .translate(0.0, sub_y);

        let button = Node::row(0.0)
            .center()
            .padding(Edges::xy(56.0, 22.0))
            .radius(40.0)
            .background(Fill::Solid(theme::ACCENT))
            .shadow(Shadow::glow(50.0, theme::ACCENT.with_alpha(0x80)))
            .opacity(landed.clamp(0.0, 1.0))
            .scale(landed.max(0.0) * pulse)
            .margin(Edges::top(48.0))
            .child(
                Node::text("Get the Starter Pack")
                    .font(theme::sans(34.0).weight(700))
                    .color(theme::BG),
            );

        let footer = Node::text("Free and open source.")
            .font(theme::sans(26.0))
            .color(theme::PURPLE_BRIGHT)
            .opacity(foot_opacity)
            .margin(Edges::top(32.0));

        Ok(Node::fill()
            .opacity(fade_in * fade_out)
            .children([brand, subtitle, button, footer]))
    }
}
