use crate::{
    animation::{curve::CurveOpts, ease::Ease},
    foundation::core::Rgba8,
    foundation::error::ReelResult,
    promo::{
        parts::{envelope, heading, rise},
        theme,
    },
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Fill, Node, Shadow},
};

const BAR_WIDTH: f64 = 1200.0;
/// Share of the context window used at startup when every tool is preloaded.
const PRELOADED_PCT: f64 = 100.0;
/// Share used when skills load on demand.
const ON_DEMAND_PCT: f64 = 8.0;
const COUNT_FROM: f64 = 60.0;
const COUNT_TO: f64 = 150.0;

/// Two context-usage bars and a counter shrinking toward the on-demand figure.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContextEfficiency;

fn bar(label: &str, fraction: f64, color: Rgba8) -> Node {
    Node::column(12.0)
        .child(
            Node::text(label)
                .font(theme::sans(28.0))
                .color(theme::TEXT),
        )
        .child(
            Node::container()
                .size(BAR_WIDTH, 36.0)
                .radius(18.0)
                .background(Fill::Solid(theme::SURFACE))
                .child(
                    Node::container()
                        .size(BAR_WIDTH * fraction.clamp(0.0, 1.0), 36.0)
                        .radius(18.0)
                        .background(Fill::Solid(color)),
                ),
        )
}

impl Scene for ContextEfficiency {
    fn name(&self) -> &str {
        "ContextEfficiency"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let shrink = CurveOpts::clamp().with_ease(Ease::OutCubic);
        let pct = ctx.curve_with(
            &[COUNT_FROM, COUNT_TO],
            &[PRELOADED_PCT, ON_DEMAND_PCT],
            shrink,
        )?;
        let (bars_opacity, bars_y) = rise(ctx, 20.0, 20.0, 30.0)?;
        let (caption_opacity, caption_y) = rise(ctx, COUNT_TO + 20.0, 20.0, 15.0)?;

        let counter = Node::text(format!("{pct:.0}%"))
            .font(theme::mono(140.0).weight(700))
            .color(theme::ACCENT_BRIGHT)
            .shadow(Shadow::glow(40.0, theme::ACCENT.with_alpha(0x80)));

        let bars = Node::column(36.0)
            .opacity(bars_opacity)
            .translate(0.0, bars_y)
            .child(bar("Everything preloaded", PRELOADED_PCT / 100.0, theme::RED))
            .child(bar("Rising Tides, on demand", pct / 100.0, theme::ACCENT));

        let caption = Node::text("of your context window, spent before you type a word")
            .font(theme::sans(30.0))
            .color(theme::TEXT_DIM)
            .opacity(caption_opacity)
            .translate(0.0, caption_y);

        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "Context stays lean")?)
            .child(
                Node::column(40.0)
                    .align(Align::Center)
                    .children([counter, caption, bars]),
            ))
    }
}
