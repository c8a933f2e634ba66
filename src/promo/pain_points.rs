use crate::{
    animation::ops::stagger,
    foundation::error::ReelResult,
    promo::{
        parts::{envelope, heading},
        theme,
    },
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Node},
};

const POINTS: [&str; 4] = [
    "Hunting for the right MCP server. Again.",
    "Copy-pasting setup scripts between projects.",
    "A context window stuffed with tools you never use.",
    "Every new machine means starting from scratch.",
];
const FIRST_AT: i64 = 40;
const STEP: i64 = 45;
const SLIDE_FRAMES: f64 = 15.0;

/// Opening list of problems, one line at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PainPoints;

impl Scene for PainPoints {
    fn name(&self) -> &str {
        "PainPoints"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let rows = POINTS
            .iter()
            .enumerate()
            .map(|(i, text)| -> ReelResult<Node> {
                let at = stagger(FIRST_AT, i, STEP) as f64;
                let keys = [at, at + SLIDE_FRAMES];
                let opacity = ctx.curve(&keys, &[0.0, 1.0])?;
                let x = ctx.curve(&keys, &[-40.0, 0.0])?;
                Ok(Node::row(20.0)
                    .align(Align::Center)
                    .opacity(opacity)
                    .translate(x, 0.0)
                    .child(
                        Node::text("✕")
                            .font(theme::mono(32.0).weight(700))
                            .color(theme::RED),
                    )
                    .child(
                        Node::text(*text)
                            .font(theme::sans(40.0))
                            .color(theme::TEXT),
                    ))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "Sound familiar?")?)
            .child(Node::column(28.0).children(rows)))
    }
}
