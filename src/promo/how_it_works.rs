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

const STEPS: [(&str, &str); 3] = [
    ("1", "You describe the task"),
    ("2", "The right skill is discovered"),
    ("3", "Only that skill is loaded"),
];
const FIRST_AT: i64 = 30;
const STEP: i64 = 70;
/// Frames after a step lands before the arrow to the next one fades in.
const ARROW_DELAY: i64 = 30;
const SETTLE: SpringConfig = SpringConfig::new(14.0, 120.0, 1.0);

/// Three-step auto-discovery flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct HowItWorks;

impl Scene for HowItWorks {
    fn name(&self) -> &str {
        "HowItWorks"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let mut flow = Vec::with_capacity(STEPS.len() * 2);
        for (i, (num, label)) in STEPS.iter().enumerate() {
            let at = stagger(FIRST_AT, i, STEP);
            if i > 0 {
                let arrow_at = (at - STEP + ARROW_DELAY) as f64;
                let arrow = ctx.curve(&[arrow_at, arrow_at + 15.0], &[0.0, 1.0])?;
                flow.push(
                    Node::text("→")
                        .font(theme::mono(56.0))
                        .color(theme::ACCENT)
                        .opacity(arrow),
                );
            }
            let settle = ctx.spring(at, SETTLE)?;
            flow.push(
                card()
                    .width(440.0)
                    .align(Align::Center)
                    .opacity(settle.min(1.0))
                    .translate(0.0, 40.0 * (1.0 - settle))
                    .child(
                        Node::text(*num)
                            .font(theme::mono(56.0).weight(700))
                            .color(theme::ACCENT_BRIGHT),
                    )
                    .child(
                        Node::text(*label)
                            .font(theme::sans(30.0))
                            .color(theme::TEXT_BRIGHT)
                            .text_align(Align::Center),
                    ),
            );
        }

        Ok(Node::fill()
            .opacity(envelope(ctx, 15.0, 30.0)?)
            .child(heading(ctx, "How it works")?)
            .child(Node::row(28.0).align(Align::Center).children(flow)))
    }
}
