use crate::{
    animation::{ops::stagger, spring::SpringConfig},
    foundation::error::ReelResult,
    promo::{
        parts::{card, envelope, heading},
        theme,
    },
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Node},
};

/// `(command, what it manages)` for each card, in grid order.
const CLIS: [(&str, &str); 9] = [
    ("gh", "GitHub"),
    ("vercel", "Deployments"),
    ("supabase", "Postgres & auth"),
    ("stripe", "Payments"),
    ("railway", "Infrastructure"),
    ("neonctl", "Serverless Postgres"),
    ("flyctl", "Edge apps"),
    ("wrangler", "Workers"),
    ("docker", "Containers"),
];
const COLUMNS: usize = 3;
const FIRST_AT: i64 = 30;
const STEP: i64 = 8;
const POP: SpringConfig = SpringConfig::new(12.0, 180.0, 1.0);

/// Grid of CLI cards popping in one after another.
#[derive(Clone, Copy, Debug, Default)]
pub struct TheClis;

impl Scene for TheClis {
    fn name(&self) -> &str {
        "TheCLIs"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let cards = CLIS
            .iter()
            .enumerate()
            .map(|(i, (cmd, about))| -> ReelResult<Node> {
                let at = stagger(FIRST_AT, i, STEP);
                let pop = ctx.spring(at, POP)?;
                let opacity = ctx.curve(&[at as f64, at as f64 + 10.0], &[0.0, 1.0])?;
                Ok(card()
                    .width(420.0)
                    .opacity(opacity)
                    .scale(0.6 + 0.4 * pop)
                    .child(
                        Node::text(*cmd)
                            .font(theme::mono(38.0).weight(700))
                            .color(theme::ACCENT_BRIGHT),
                    )
                    .child(
                        Node::text(*about)
                            .font(theme::sans(24.0))
                            .color(theme::TEXT_DIM),
                    ))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        let mut cards = cards.into_iter();
        let rows = (0..CLIS.len().div_ceil(COLUMNS))
            .map(|_| {
                Node::row(32.0)
                    .justify(Align::Center)
                    .children(cards.by_ref().take(COLUMNS))
            })
            .collect::<Vec<_>>();

        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "9 CLIs, ready to go")?)
            .child(Node::column(32.0).children(rows)))
    }
}
