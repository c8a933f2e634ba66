use tidereel::{Composer, FrameIndex, fingerprint_frame, promo};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let timeline = promo::timeline()?;
    println!(
        "{} frames at {} fps",
        timeline.duration_frames(),
        timeline.fps.as_f64()
    );

    for (_, start, duration) in promo::SCHEDULE {
        for f in [start, start + duration / 2] {
            let frame = Composer::eval_frame(&timeline, FrameIndex(f))?;
            let nodes: usize = frame.layers().map(|n| n.count()).sum();
            println!(
                "frame {f:>4}: {:<18} {nodes:>4} nodes  {}",
                frame.scene_names().join(","),
                fingerprint_frame(&frame)
            );
        }
    }

    Ok(())
}
