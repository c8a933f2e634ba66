use super::*;

#[test]
fn stagger_offsets_by_index() {
    assert_eq!(stagger(70, 0, 3), 70);
    assert_eq!(stagger(70, 4, 3), 82);
    assert_eq!(stagger(-10, 2, 5), 0);
}

#[test]
fn fade_through_matches_four_point_window() {
    let w = [0.0, 15.0, 45.0, 60.0];
    assert_eq!(fade_through(-5.0, w).unwrap(), 0.0);
    assert_eq!(fade_through(30.0, w).unwrap(), 1.0);
    assert!((fade_through(52.5, w).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(fade_through(90.0, w).unwrap(), 0.0);
    assert!(fade_through(0.0, [0.0, 15.0, 15.0, 20.0]).is_err());
}

#[test]
fn mix_clamps_factor() {
    assert_eq!(mix(10.0, 20.0, 0.5), 15.0);
    assert_eq!(mix(10.0, 20.0, 4.0), 20.0);
    assert_eq!(mix(10.0, 20.0, -1.0), 10.0);
}

#[test]
fn typed_chars_advance_and_saturate() {
    assert_eq!(typed_chars(9.0, 10.0, 2.0, 5).unwrap(), 0);
    assert_eq!(typed_chars(10.0, 10.0, 2.0, 5).unwrap(), 0);
    assert_eq!(typed_chars(15.0, 10.0, 2.0, 5).unwrap(), 2);
    assert_eq!(typed_chars(500.0, 10.0, 2.0, 5).unwrap(), 5);
    assert!(typed_chars(0.0, 0.0, 0.0, 5).is_err());
}

#[test]
fn char_prefix_respects_utf8_boundaries() {
    assert_eq!(char_prefix("~ tides", 1), "~");
    assert_eq!(char_prefix("héllo", 2), "hé");
    assert_eq!(char_prefix("abc", 10), "abc");
    assert_eq!(char_prefix("abc", 0), "");
}
