use crate::{
    animation::ops::{char_prefix, stagger, typed_chars},
    foundation::error::ReelResult,
    promo::{
        parts::{card, envelope, heading, rise},
        theme,
    },
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Node},
};

/// `(tree line, annotation)` pairs of the installed layout.
const TREE: [(&str, &str); 7] = [
    ("~/.claude/", ""),
    ("├── skills/", "curated skills"),
    ("├── plugins/", "workflow plugins"),
    ("├── commands/", "slash commands"),
    ("├── agents/", "specialist agents"),
    ("├── hooks/", "lifecycle hooks"),
    ("└── mcp.json", "MCP servers, pre-wired"),
];
const FIRST_AT: i64 = 40;
const STEP: i64 = 50;
const FRAMES_PER_CHAR: f64 = 1.5;
/// Frames between a line finishing typing and its annotation appearing.
const NOTE_DELAY: f64 = 10.0;

/// Installation tree typed out line by line with annotations.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhatYouGet;

impl Scene for WhatYouGet {
    fn name(&self) -> &str {
        "WhatYouGet"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let lines = TREE
            .iter()
            .enumerate()
            .map(|(i, (path, note))| -> ReelResult<Node> {
                let at = stagger(FIRST_AT, i, STEP) as f64;
                let len = path.chars().count();
                let shown = typed_chars(ctx.frame(), at, FRAMES_PER_CHAR, len)?;
                let note_at = at + len as f64 * FRAMES_PER_CHAR + NOTE_DELAY;
                let note_opacity = ctx.curve(&[note_at, note_at + 15.0], &[0.0, 1.0])?;
                Ok(Node::row(32.0)
                    .align(Align::Center)
                    .child(
                        Node::text(char_prefix(path, shown))
                            .font(theme::mono(34.0))
                            .color(theme::ACCENT_BRIGHT)
                            .min_width(360.0),
                    )
                    .child(
                        Node::text(*note)
                            .font(theme::sans(28.0))
                            .color(theme::TEXT_DIM)
                            .opacity(note_opacity),
                    ))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        let (panel_opacity, panel_y) = rise(ctx, 15.0, 20.0, 30.0)?;
        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "What you get")?)
            .child(
                card()
                    .width(1100.0)
                    .opacity(panel_opacity)
                    .translate(0.0, panel_y)
                    .children(lines),
            ))
    }
}
