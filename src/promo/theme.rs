//! Palette and type scale shared by every promo scene.

use crate::{
    foundation::core::Rgba8,
    scene::visual::{Font, FontFamily},
};

/// Near-black page background.
pub const BG: Rgba8 = Rgba8::rgb(0x0c, 0x0a, 0x09);
/// Raised card surface.
pub const SURFACE: Rgba8 = Rgba8::rgb(0x1c, 0x19, 0x17);
/// Card outline.
pub const BORDER: Rgba8 = Rgba8::rgb(0x44, 0x40, 0x3c);
/// Primary amber.
pub const ACCENT: Rgba8 = Rgba8::rgb(0xf5, 0x9e, 0x0b);
/// Highlight amber.
pub const ACCENT_BRIGHT: Rgba8 = Rgba8::rgb(0xfb, 0xbf, 0x24);
/// Hot orange used at the center of bursts.
pub const ACCENT_HOT: Rgba8 = Rgba8::rgb(0xf9, 0x73, 0x16);
/// Dim amber for far glows.
pub const ACCENT_DIM: Rgba8 = Rgba8::rgb(0xb4, 0x53, 0x09);
/// Headline text.
pub const TEXT_BRIGHT: Rgba8 = Rgba8::rgb(0xfa, 0xfa, 0xf9);
/// Body text.
pub const TEXT: Rgba8 = Rgba8::rgb(0xd6, 0xd3, 0xd1);
/// Secondary text.
pub const TEXT_DIM: Rgba8 = Rgba8::rgb(0x78, 0x71, 0x6c);
/// Secondary brand color.
pub const PURPLE: Rgba8 = Rgba8::rgb(0x8b, 0x5c, 0xf6);
/// Light secondary brand color.
pub const PURPLE_BRIGHT: Rgba8 = Rgba8::rgb(0xc4, 0xb5, 0xfd);
/// Problems and "before" states.
pub const RED: Rgba8 = Rgba8::rgb(0xf8, 0x71, 0x71);
/// Success marks.
pub const GREEN: Rgba8 = Rgba8::rgb(0x4a, 0xde, 0x80);

/// Proportional face at `size` px.
pub const fn sans(size: f64) -> Font {
    Font::new(FontFamily::Sans, size)
}

/// Monospaced face at `size` px.
pub const fn mono(size: f64) -> Font {
    Font::new(FontFamily::Mono, size)
}
