use super::*;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::model::scene_fn;
use crate::timeline::{config::VideoConfig, dsl::TimelineBuilder};

fn config() -> VideoConfig {
    VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 64,
            height: 64,
        },
    }
}

fn echo(name: &'static str) -> impl Scene + 'static {
    scene_fn(name, move |ctx: &SceneCtx| {
        Ok(Node::text(format!("{name}:{}", ctx.frame_index().0)))
    })
}

fn ab() -> Timeline {
    TimelineBuilder::new(config())
        .scene(echo("A"), 0, 10)
        .scene(echo("B"), 10, 10)
        .build_strict()
        .unwrap()
}

fn mounted(t: &Timeline, frame: u64) -> Vec<(String, u64)> {
    Composer::eval_frame(t, FrameIndex(frame))
        .unwrap()
        .scenes
        .into_iter()
        .map(|s| (s.scene, s.local_frame.0))
        .collect()
}

#[test]
fn exactly_one_scene_per_contiguous_frame() {
    let t = ab();
    assert_eq!(mounted(&t, 0), vec![("A".to_string(), 0)]);
    assert_eq!(mounted(&t, 5), vec![("A".to_string(), 5)]);
    assert_eq!(mounted(&t, 9), vec![("A".to_string(), 9)]);
    assert_eq!(mounted(&t, 10), vec![("B".to_string(), 0)]);
    assert_eq!(mounted(&t, 19), vec![("B".to_string(), 9)]);
}

#[test]
fn scene_sees_rebased_frame() {
    let t = TimelineBuilder::new(config())
        .scene(echo("pre"), 0, 100)
        .scene(echo("S"), 100, 50)
        .scene(echo("post"), 150, 10)
        .build_strict()
        .unwrap();
    let d = Composer::eval_frame(&t, FrameIndex(120)).unwrap();
    assert_eq!(d.scene_names(), vec!["S"]);
    assert_eq!(d.scenes[0].root.texts(), vec!["S:20"]);
    assert_eq!(mounted(&t, 99), vec![("pre".to_string(), 99)]);
    assert_eq!(mounted(&t, 150), vec![("post".to_string(), 0)]);
}

#[test]
fn frames_past_the_end_hold_last_frame() {
    let t = ab();
    let d = Composer::eval_frame(&t, FrameIndex(25)).unwrap();
    assert_eq!(d.frame, FrameIndex(25));
    assert_eq!(d.resolved_frame, FrameIndex(19));
    assert_eq!(d.scenes[0].root.texts(), vec!["B:9"]);
}

#[test]
fn evaluation_is_idempotent() {
    let t = ab();
    let a = Composer::eval_frame(&t, FrameIndex(7)).unwrap();
    let b = Composer::eval_frame(&t, FrameIndex(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn background_uses_global_frame_behind_scenes() {
    let t = TimelineBuilder::new(config())
        .background(echo("bg"))
        .scene(echo("A"), 0, 10)
        .scene(echo("B"), 10, 10)
        .build()
        .unwrap();
    let d = Composer::eval_frame(&t, FrameIndex(14)).unwrap();
    assert_eq!(d.background.as_ref().unwrap().texts(), vec!["bg:14"]);
    let layers: Vec<_> = d.layers().flat_map(|n| n.texts()).collect();
    assert_eq!(layers, vec!["bg:14", "B:4"]);
}

#[test]
fn gaps_and_overlaps_are_tolerated() {
    let t = TimelineBuilder::new(config())
        .scene(echo("A"), 0, 10)
        .scene(echo("B"), 5, 10)
        .scene(echo("C"), 20, 5)
        .build()
        .unwrap();
    assert_eq!(
        mounted(&t, 7),
        vec![("A".to_string(), 7), ("B".to_string(), 2)]
    );
    assert!(mounted(&t, 17).is_empty());
}

#[test]
fn empty_timeline_is_an_error() {
    let t = Timeline::new(config());
    let err = Composer::eval_frame(&t, FrameIndex(0)).unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn non_finite_output_names_the_scene() {
    let t = TimelineBuilder::new(config())
        .scene(
            scene_fn("broken", |_| Ok(Node::container().translate(f64::NAN, 0.0))),
            0,
            10,
        )
        .build()
        .unwrap();
    let err = Composer::eval_frame(&t, FrameIndex(3)).unwrap_err().to_string();
    assert!(err.contains("scene 'broken' at local frame 3"), "{err}");
}

#[test]
fn scene_errors_propagate() {
    let t = TimelineBuilder::new(config())
        .scene(
            scene_fn("bad_curve", |ctx: &SceneCtx| {
                Ok(Node::container().opacity(ctx.curve(&[10.0, 5.0], &[0.0, 1.0])?))
            }),
            0,
            10,
        )
        .build()
        .unwrap();
    let err = Composer::eval_frame(&t, FrameIndex(0)).unwrap_err();
    assert!(matches!(err, ReelError::Animation(_)));
}
