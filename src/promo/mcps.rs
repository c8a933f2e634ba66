use crate::{
    animation::{curve::CurveOpts, ease::Ease, ops::stagger},
    foundation::error::ReelResult,
    promo::{
        parts::{card, envelope, heading},
        theme,
    },
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Direction, Node},
};

const MCPS: [(&str, &str); 5] = [
    ("context7", "Up-to-date library docs"),
    ("playwright", "Browser automation"),
    ("github", "Issues, PRs and code search"),
    ("memory", "Persistent knowledge graph"),
    ("sequential-thinking", "Structured reasoning"),
];
const FIRST_AT: i64 = 40;
const STEP: i64 = 35;
const SLIDE_FRAMES: f64 = 20.0;

/// MCP servers sliding in as rows of name and capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct TheMcps;

impl Scene for TheMcps {
    fn name(&self) -> &str {
        "TheMCPs"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let slide = CurveOpts::clamp().with_ease(Ease::OutCubic);
        let rows = MCPS
            .iter()
            .enumerate()
            .map(|(i, (name, does))| -> ReelResult<Node> {
                let at = stagger(FIRST_AT, i, STEP) as f64;
                let keys = [at, at + SLIDE_FRAMES];
                let x = ctx.curve_with(&keys, &[60.0, 0.0], slide)?;
                let opacity = ctx.curve(&keys, &[0.0, 1.0])?;
                Ok(card()
                    .flex(Direction::Row, 24.0)
                    .align(Align::Center)
                    .width(1000.0)
                    .opacity(opacity)
                    .translate(x, 0.0)
                    .child(
                        Node::text("●")
                            .font(theme::mono(20.0))
                            .color(theme::GREEN),
                    )
                    .child(
                        Node::text(*name)
                            .font(theme::mono(32.0).weight(600))
                            .color(theme::PURPLE_BRIGHT)
                            .min_width(380.0),
                    )
                    .child(
                        Node::text(*does)
                            .font(theme::sans(28.0))
                            .color(theme::TEXT),
                    ))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "MCP servers, wired in")?)
            .child(Node::column(20.0).children(rows)))
    }
}
