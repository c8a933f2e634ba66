use super::*;

#[test]
fn every_ease_hits_endpoints() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::EASE_IN,
        Ease::EASE_OUT,
        Ease::EASE_IN_OUT,
        Ease::ElasticOut,
        Ease::BounceOut,
    ] {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
    }
}

#[test]
fn progress_outside_unit_interval_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn ease_in_out_bezier_is_symmetric_at_midpoint() {
    let v = Ease::EASE_IN_OUT.apply(0.5);
    assert!((v - 0.5).abs() < 1e-3, "got {v}");
}

#[test]
fn ease_parses_from_snake_case() {
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    let e: Ease = serde_json::from_str(
        "{\"cubic_bezier\": {\"x1\": 0.25, \"y1\": 0.1, \"x2\": 0.25, \"y2\": 1.0}}",
    )
    .unwrap();
    assert!(matches!(e, Ease::CubicBezier { .. }));
}
