use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_clamp_holds_last_frame() {
    let r = FrameRange::from_start_len(FrameIndex(0), 20);
    assert_eq!(r.clamp(FrameIndex(19)), FrameIndex(19));
    assert_eq!(r.clamp(FrameIndex(400)), FrameIndex(19));
    let empty = FrameRange::from_start_len(FrameIndex(7), 0);
    assert_eq!(empty.clamp(FrameIndex(100)), FrameIndex(7));
}

#[test]
fn fps_converts_frames_to_seconds() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_to_secs(3360), 112.0);
    assert_eq!(fps.secs_to_frames_floor(12.0), 360);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::from_hex("#ff8800").unwrap(), Rgba8::rgb(255, 136, 0));
    assert_eq!(
        Rgba8::from_hex("FF880040").unwrap(),
        Rgba8::rgb(255, 136, 0).with_alpha(0x40)
    );
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}

#[test]
fn colors_serialize_as_hex_strings() {
    let c = Rgba8::rgb(1, 2, 3);
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, "\"#010203ff\"");
    let back: Rgba8 = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}
