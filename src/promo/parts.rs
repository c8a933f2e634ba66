use crate::{
    foundation::error::ReelResult,
    promo::theme,
    scene::model::SceneCtx,
    scene::visual::{Edges, Node},
};

/// Scene opacity: fade in over the first `fade_in` frames, out over the last `fade_out`.
///
/// Reaches `0` on the last local frame.
pub(crate) fn envelope(ctx: &SceneCtx, fade_in: f64, fade_out: f64) -> ReelResult<f64> {
    let end = ctx.duration().saturating_sub(1) as f64;
    let fade_in = ctx.curve(&[0.0, fade_in], &[0.0, 1.0])?;
    let fade_out = ctx.curve(&[end - fade_out, end], &[1.0, 0.0])?;
    Ok(fade_in * fade_out)
}

/// Opacity and vertical offset of an element rising into place over `[at, at + over]`.
pub(crate) fn rise(ctx: &SceneCtx, at: f64, over: f64, dy: f64) -> ReelResult<(f64, f64)> {
    let keys = [at, at + over];
    Ok((ctx.curve(&keys, &[0.0, 1.0])?, ctx.curve(&keys, &[dy, 0.0])?))
}

/// Scene title that rises in during the first 20 frames.
pub(crate) fn heading(ctx: &SceneCtx, text: &str) -> ReelResult<Node> {
    let (opacity, y) = rise(ctx, 0.0, 20.0, 20.0)?;
    Ok(Node::text(text)
        .font(theme::sans(64.0).weight(700))
        .color(theme::TEXT_BRIGHT)
        .opacity(opacity)
        .translate(0.0, y)
        .margin(Edges::bottom(48.0)))
}

/// Rounded surface card.
pub(crate) fn card() -> Node {
    Node::column(8.0)
        .background(crate::scene::visual::Fill::Solid(theme::SURFACE))
        .border(1.0, theme::BORDER)
        .radius(16.0)
        .padding(Edges::xy(28.0, 20.0))
}
