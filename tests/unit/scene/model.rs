use super::*;
use crate::animation::spring::SpringConfig;

fn ctx(frame: u64, duration: u64) -> SceneCtx {
    SceneCtx::new(
        FrameIndex(frame),
        duration,
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

#[test]
fn ctx_exposes_local_time() {
    let c = ctx(45, 90);
    assert_eq!(c.frame(), 45.0);
    assert_eq!(c.frame_index(), FrameIndex(45));
    assert!((c.seconds() - 1.5).abs() < 1e-12);
    assert!((c.progress() - 0.5).abs() < 1e-12);
    assert_eq!(ctx(0, 0).progress(), 0.0);
    assert_eq!(ctx(200, 90).progress(), 1.0);
}

#[test]
fn ctx_curve_clamps_both_sides() {
    assert_eq!(ctx(0, 90).curve(&[10.0, 20.0], &[0.0, 1.0]).unwrap(), 0.0);
    assert_eq!(ctx(15, 90).curve(&[10.0, 20.0], &[0.0, 1.0]).unwrap(), 0.5);
    assert_eq!(ctx(80, 90).curve(&[10.0, 20.0], &[0.0, 1.0]).unwrap(), 1.0);
    assert_eq!(
        ctx(30, 90)
            .curve_with(&[10.0, 20.0], &[0.0, 1.0], CurveOpts::extend())
            .unwrap(),
        2.0
    );
    assert!(ctx(0, 90).curve(&[10.0], &[0.0]).is_err());
}

#[test]
fn ctx_spring_is_zero_before_trigger() {
    let cfg = SpringConfig::default();
    assert_eq!(ctx(10, 90).spring(20, cfg).unwrap(), 0.0);
    assert!(ctx(80, 90).spring(20, cfg).unwrap() > 0.9);
}

#[test]
fn scene_fn_renders_from_local_frame() {
    let s = scene_fn("counter", |ctx: &SceneCtx| {
        Ok(Node::text(format!("{}", ctx.frame_index().0)))
    });
    assert_eq!(s.name(), "counter");
    let node = s.render(&ctx(7, 10)).unwrap();
    assert_eq!(node.texts(), vec!["7"]);
}
