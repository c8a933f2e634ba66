use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::visual::NodeKind;

fn at(frame: u64) -> Node {
    let ctx = SceneCtx::new(
        FrameIndex(frame),
        240,
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
    );
    LogoReveal.render(&ctx).unwrap()
}

fn text<'a>(root: &'a Node, s: &str) -> &'a Node {
    root.find_text(s)
        .unwrap_or_else(|| panic!("no text node {s:?}"))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn brand_row(root: &Node) -> &Node {
    &root.children[2].children[1]
}

#[test]
fn overall_opacity_fades_in_and_out() {
    assert_eq!(at(0).style.opacity, 0.0);
    assert!(close(at(7).style.opacity, 7.0 / 15.0));
    assert_eq!(at(100).style.opacity, 1.0);
    assert!(close(at(225).style.opacity, 0.5));
    assert!(at(239).style.opacity > 0.0);
}

#[test]
fn intro_line_holds_then_clears_before_the_wave() {
    let line = "There's a better way.";
    assert_eq!(text(&at(0), line).style.opacity, 0.0);
    assert_eq!(text(&at(15), line).style.opacity, 1.0);
    assert_eq!(text(&at(45), line).style.opacity, 1.0);
    assert!(close(text(&at(50), line).style.opacity, 2.0 / 3.0));
    assert_eq!(text(&at(60), line).style.opacity, 0.0);
}

#[test]
fn wave_glyph_springs_in_after_frame_50() {
    let before = at(50);
    let wave = text(&before, "~");
    assert_eq!(wave.style.opacity, 0.0);
    assert_eq!(wave.style.transform.scale, 0.0);

    let after = at(51);
    assert_eq!(text(&after, "~").style.opacity, 1.0);

    // Underdamped: overshoots, then settles near 1.
    let peak = (51..90)
        .map(|f| text(&at(f), "~").style.transform.scale)
        .fold(0.0, f64::max);
    assert!(peak > 1.05, "peak {peak}");
    assert!((text(&at(200), "~").style.transform.scale - 1.0).abs() < 0.01);
}

#[test]
fn burst_grows_and_fades() {
    let burst = |f| at(f).children[1].clone();
    assert_eq!(burst(50).style.opacity, 0.0);
    assert!(close(burst(50).style.transform.scale, 0.3));
    assert_eq!(burst(65).style.opacity, 1.0);
    assert_eq!(burst(120).style.opacity, 0.0);
    assert!(close(burst(120).style.transform.scale, 3.0));
    assert_eq!(burst(80).style.blur_px, 30.0);
}

#[test]
fn brand_letters_reveal_every_three_frames() {
    let root = at(76);
    let row = brand_row(&root);
    let letters: Vec<&str> = row.texts();
    assert_eq!(letters.concat(), "Rising Tides");

    let opacity = |i: usize| row.children[i].style.opacity;
    // Letter i starts at 70 + 3i and takes 8 frames.
    assert!(close(opacity(0), 6.0 / 8.0));
    assert!(close(opacity(1), 3.0 / 8.0));
    assert_eq!(opacity(2), 0.0);
    assert!(close(row.children[0].style.transform.translate.y, 5.0));

    let space = &row.children[6];
    assert!(matches!(&space.kind, NodeKind::Text(t) if t == " "));
    assert_eq!(space.style.min_width, Some(22.0));

    let done = at(120);
    assert!(brand_row(&done).children.iter().all(|c| c.style.opacity == 1.0));
}

#[test]
fn subtitle_and_tagline_rise_in_late() {
    let sub = "Starter Pack";
    let tag = "The complete starter pack for Claude Code.";
    assert_eq!(text(&at(130), sub).style.opacity, 0.0);
    assert!(close(text(&at(140), sub).style.opacity, 0.5));
    assert!(close(text(&at(140), sub).style.transform.translate.y, 7.5));
    assert_eq!(text(&at(150), sub).style.opacity, 1.0);
    assert_eq!(text(&at(159), tag).style.opacity, 0.0);
    assert_eq!(text(&at(180), tag).style.opacity, 1.0);
    assert_eq!(text(&at(180), tag).style.transform.translate.y, 0.0);
}

#[test]
fn typography_matches_the_brand() {
    let root = at(200);
    let row = brand_row(&root);
    let font = row.style.font.unwrap();
    assert_eq!(font.size_px, 82.0);
    assert_eq!(font.weight, 700);
    assert_eq!(font.letter_spacing_px, -2.0);
    let sub = text(&root, "Starter Pack").style.font.unwrap();
    assert_eq!((sub.size_px, sub.weight), (36.0, 600));
}
