use crate::{
    animation::spring::SpringConfig,
    foundation::core::Rgba8,
    foundation::error::ReelResult,
    promo::{parts::rise, theme},
    scene::model::{Scene, SceneCtx},
    scene::visual::{Align, Edges, Fill, GradientStop, Node, Shadow},
};

const BRAND: &str = "Rising Tides";
const BRAND_START: f64 = 70.0;
const CHAR_STEP: f64 = 3.0;
const CHAR_FRAMES: f64 = 8.0;
/// Frame at which the wave, burst and brand appear.
const WAVE_AT: i64 = 50;
const WAVE: SpringConfig = SpringConfig::new(8.0, 200.0, 0.5);

/// Brand reveal: intro line, burst, springing wave glyph and per-letter title.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogoReveal;

impl Scene for LogoReveal {
    fn name(&self) -> &str {
        "LogoReveal"
    }

    fn render(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let frame = ctx.frame();
        let fade_in = ctx.curve(&[0.0, 15.0], &[0.0, 1.0])?;
        let fade_out = ctx.curve(&[210.0, 240.0], &[1.0, 0.0])?;
        let intro = ctx.curve(&[0.0, 15.0, 45.0, 60.0], &[0.0, 1.0, 1.0, 0.0])?;
        let wave = ctx.spring(WAVE_AT, WAVE)?;
        let burst_opacity = ctx.curve(&[50.0, 65.0, 120.0], &[0.0, 1.0, 0.0])?;
        let burst_scale = ctx.curve(&[50.0, 120.0], &[0.3, 3.0])?;
        let brand_visible = if frame > WAVE_AT as f64 { 1.0 } else { 0.0 };

        let intro_line = Node::text("There's a better way.")
            .overlay()
            .font(theme::sans(48.0))
            .color(theme::TEXT_BRIGHT)
            .opacity(intro)
            .shadow(Shadow::glow(30.0, theme::ACCENT.with_alpha(0x40)));

        let burst = Node::container()
            .overlay()
            .size(500.0, 500.0)
            .radius(250.0)
            .background(Fill::RadialGradient(vec![
                GradientStop::new(0.0, theme::ACCENT_HOT.with_alpha(0x90)),
                GradientStop::new(0.25, theme::ACCENT_BRIGHT.with_alpha(0x60)),
                GradientStop::new(0.5, theme::ACCENT.with_alpha(0x30)),
                GradientStop::new(0.7, Rgba8::transparent()),
            ]))
            .opacity(burst_opacity)
            .scale(burst_scale)
            .blur(30.0);

        let glyph = Node::text("~")
            .font(theme::mono(150.0))
            .color(theme::ACCENT_BRIGHT)
            .scale(wave.max(0.0))
            .shadow(Shadow::glow(30.0, theme::ACCENT_BRIGHT))
            .shadow(Shadow::glow(60.0, theme::ACCENT.with_alpha(0xcc)))
            .shadow(Shadow::glow(120.0, theme::ACCENT.with_alpha(0x80)))
            .shadow(Shadow::glow(200.0, theme::ACCENT_DIM.with_alpha(0x40)))
            .margin(Edges::bottom(10.0))
            .opacity(brand_visible);

        let letters = BRAND
            .chars()
            .enumerate()
            .map(|(i, ch)| -> ReelResult<Node> {
                let at = BRAND_START + i as f64 * CHAR_STEP;
                let (opacity, y) = rise(ctx, at, CHAR_FRAMES, 20.0)?;
                let mut letter = Node::text(ch.to_string())
                    .opacity(opacity)
                    .translate(0.0, y)
                    .shadow(Shadow::glow(20.0, theme::ACCENT_BRIGHT.with_alpha(0x40)));
                if ch == ' ' {
                    letter = letter.min_width(22.0);
                }
                Ok(letter)
            })
            .collect::<ReelResult<Vec<_>>>()?;
        let brand = Node::row(0.0)
            .justify(Align::Center)
            .font(theme::mono(82.0).weight(700).spacing(-2.0))
            .color(theme::TEXT_BRIGHT)
            .opacity(brand_visible)
            .children(letters);

        let (starter_opacity, starter_y) = rise(ctx, 130.0, 20.0, 15.0)?;
        let starter = Node::text("Starter Pack")
            .font(theme::mono(36.0).weight(600))
            .color(theme::ACCENT_BRIGHT)
            .opacity(starter_opacity)
            .translate(0.0, starter_y)
            .margin(Edges::top(12.0))
            .shadow(Shadow::glow(20.0, theme::ACCENT.with_alpha(0x60)));

        let (tag_opacity, tag_y) = rise(ctx, 160.0, 20.0, 15.0)?;
        let tagline = Node::text("The complete starter pack for Claude Code.")
            .font(theme::sans(26.0).spacing(1.0))
            .color(theme::PURPLE_BRIGHT)
            .opacity(tag_opacity)
            .translate(0.0, tag_y)
            .margin(Edges::top(20.0));

        let lockup = Node::column(0.0)
            .text_align(Align::Center)
            .align(Align::Center)
            .children([glyph, brand, starter, tagline]);

        Ok(Node::fill()
            .opacity(fade_in * fade_out)
            .children([intro_line, burst, lockup]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/promo/logo_reveal.rs"]
mod tests;
