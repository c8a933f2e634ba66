use crate::{
    animation::ops::{char_prefix, stagger, typed_chars},
    foundation::error::ReelResult,
    promo::{
        parts::{card, envelope, heading, rise},
        theme,
    },
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Edges, Fill, Node},
};

const COMMAND: &str = "npx rising-tides@latest init";
const TYPE_AT: f64 = 30.0;
const FRAMES_PER_CHAR: f64 = 2.0;
const BLINK_FRAMES: u64 = 15;
const OUTPUT: [&str; 4] = [
    "skills installed",
    "plugins enabled",
    "CLIs detected",
    "MCP servers configured",
];
/// Frames after the command finishes typing before output starts.
const OUTPUT_DELAY: i64 = 15;
const OUTPUT_STEP: i64 = 12;

/// Terminal window typing the install command, then its output.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneCommandInstall;

impl Scene for OneCommandInstall {
    fn name(&self) -> &str {
        "OneCommandInstall"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let len = COMMAND.chars().count();
        let shown = typed_chars(ctx.frame(), TYPE_AT, FRAMES_PER_CHAR, len)?;
        let cursor_on = (ctx.frame_index().0 / BLINK_FRAMES) % 2 == 0;
        let typed_done = (TYPE_AT + len as f64 * FRAMES_PER_CHAR).ceil() as i64;

        let prompt = Node::row(16.0)
            .child(Node::text("$").font(theme::mono(34.0)).color(theme::GREEN))
            .child(
                Node::text(char_prefix(COMMAND, shown))
                    .font(theme::mono(34.0))
                    .color(theme::TEXT_BRIGHT),
            )
            .child(
                Node::container()
                    .size(18.0, 38.0)
                    .background(Fill::Solid(theme::ACCENT_BRIGHT))
                    .opacity(if cursor_on { 1.0 } else { 0.0 }),
            );

        let output = OUTPUT
            .iter()
            .enumerate()
            .map(|(i, line)| -> ReelResult<Node> {
                let at = stagger(typed_done + OUTPUT_DELAY, i, OUTPUT_STEP) as f64;
                let (opacity, y) = rise(ctx, at, 10.0, 8.0)?;
                Ok(Node::row(16.0)
                    .opacity(opacity)
                    .translate(0.0, y)
                    .child(Node::text("✓").font(theme::mono(30.0)).color(theme::GREEN))
                    .child(Node::text(*line).font(theme::mono(30.0)).color(theme::TEXT)))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        let dots = [theme::RED, theme::ACCENT_BRIGHT, theme::GREEN]
            .map(|c| Node::container().size(14.0, 14.0).radius(7.0).background(Fill::Solid(c)));
        let terminal = card()
            .width(1200.0)
            .child(Node::row(10.0).margin(Edges::bottom(16.0)).children(dots))
            .child(prompt)
            .children(output);

        let (done_opacity, done_y) = rise(ctx, 230.0, 20.0, 15.0)?;
        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "One command. Done.")?)
            .child(terminal)
            .child(
                Node::text("Works on any machine, in under a minute.")
                    .font(theme::sans(30.0))
                    .color(theme::PURPLE_BRIGHT)
                    .text_align(Align::Center)
                    .opacity(done_opacity)
                    .translate(0.0, done_y)
                    .margin(Edges::top(40.0)),
            ))
    }
}
