use tidereel::{Composer, FrameIndex, promo};

/// Usage: `dump_frame_json [FRAME]` (default 450, mid logo reveal).
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let frame: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 450,
    };
    let timeline = promo::timeline()?;
    let desc = Composer::eval_frame(&timeline, FrameIndex(frame))?;
    println!("{}", serde_json::to_string_pretty(&desc)?);
    Ok(())
}
