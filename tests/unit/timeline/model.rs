use super::*;
use crate::scene::{model::scene_fn, visual::Node};

fn blank(name: &'static str) -> Arc<dyn Scene> {
    Arc::new(scene_fn(name, |_| Ok(Node::container())))
}

fn timeline(entries: &[(u64, u64)]) -> Timeline {
    let mut t = Timeline::new(VideoConfig {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 64,
            height: 64,
        },
    });
    t.entries = entries
        .iter()
        .map(|&(start, dur)| TimelineEntry::new(blank("s"), start, dur))
        .collect();
    t
}

#[test]
fn window_boundaries_are_half_open() {
    let t = timeline(&[(100, 50)]);
    let active = |f| t.active_at(FrameIndex(f)).count();
    assert_eq!(active(99), 0);
    assert_eq!(active(100), 1);
    assert_eq!(active(149), 1);
    assert_eq!(active(150), 0);
}

#[test]
fn local_frame_is_rebased_on_start() {
    let t = timeline(&[(100, 50)]);
    let (i, _, local) = t.active_at(FrameIndex(120)).next().unwrap();
    assert_eq!(i, 0);
    assert_eq!(local, FrameIndex(20));
    assert_eq!(t.entries[0].local_frame(FrameIndex(100)), Some(FrameIndex(0)));
}

#[test]
fn duration_is_last_entry_end() {
    assert_eq!(timeline(&[]).duration_frames(), 0);
    assert_eq!(timeline(&[(0, 10), (10, 10)]).duration_frames(), 20);
}

#[test]
fn contiguous_table_has_no_issues() {
    let t = timeline(&[(0, 10), (10, 5), (15, 30)]);
    assert!(t.issues().is_empty());
    t.validate().unwrap();
}

#[test]
fn issues_cover_gaps_overlaps_and_order() {
    let t = timeline(&[(5, 10), (20, 10), (25, 0), (0, 10)]);
    let issues = t.issues();
    assert_eq!(
        issues,
        vec![
            TimelineIssue::LateStart {
                start: FrameIndex(5)
            },
            TimelineIssue::Gap {
                index: 1,
                expected: FrameIndex(15),
                start: FrameIndex(20)
            },
            TimelineIssue::EmptyEntry { index: 2 },
            TimelineIssue::Overlap {
                index: 2,
                expected: FrameIndex(30),
                start: FrameIndex(25)
            },
            TimelineIssue::Unsorted { index: 3 },
        ]
    );
    let err = t.validate().unwrap_err().to_string();
    assert!(err.contains("gap before entry 1"));
}

#[test]
fn overlapping_entries_are_both_active() {
    let t = timeline(&[(0, 20), (10, 20)]);
    let active: Vec<_> = t
        .active_at(FrameIndex(15))
        .map(|(i, _, local)| (i, local.0))
        .collect();
    assert_eq!(active, vec![(0, 15), (1, 5)]);
}

#[test]
fn validate_rejects_empty_table_and_bad_audio() {
    assert!(timeline(&[]).validate().is_err());
    let mut t = timeline(&[(0, 10)]);
    t.audio = Some(AudioTrack {
        asset: AssetRef::new("voiceover.mp3").unwrap(),
        volume: 1.5,
    });
    assert!(t.validate_settings().is_err());
}
