use super::*;

#[test]
fn default_style_is_visible_and_untransformed() {
    let s = Style::default();
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.transform, Transform::IDENTITY);
    assert_eq!(s.position, Position::Relative);
}

#[test]
fn builder_sets_properties() {
    let n = Node::text("~")
        .opacity(1.4)
        .translate(0.0, 20.0)
        .scale(0.5)
        .font(Font::new(FontFamily::Mono, 150.0).weight(700))
        .shadow(Shadow::glow(30.0, Rgba8::rgb(0, 200, 255)));
    assert_eq!(n.style.opacity, 1.0);
    assert_eq!(n.style.transform.translate, Vec2::new(0.0, 20.0));
    assert_eq!(n.style.transform.scale, 0.5);
    assert_eq!(n.style.font.unwrap().weight, 700);
    assert_eq!(n.style.shadows.len(), 1);
}

#[test]
fn fill_is_absolute_and_centered() {
    let n = Node::fill();
    assert_eq!(n.style.position, Position::Absolute);
    assert_eq!(n.style.inset, Some(Edges::ZERO));
    let flex = n.style.layout.unwrap();
    assert_eq!(flex.direction, Direction::Column);
    assert_eq!(flex.justify, Align::Center);
    assert_eq!(flex.align, Align::Center);
}

#[test]
fn traversal_helpers_walk_whole_tree() {
    let tree = Node::fill().child(
        Node::column(8.0)
            .child(Node::text("a"))
            .children(["b", "c"].map(Node::text)),
    );
    assert_eq!(tree.count(), 5);
    assert_eq!(tree.texts(), vec!["a", "b", "c"]);
    assert!(tree.find_text("c").is_some());
    assert!(tree.find_text("d").is_none());
}

#[test]
fn validate_resolved_rejects_non_finite_anywhere() {
    let ok = Node::fill().child(Node::text("x").translate(1.0, 2.0));
    ok.validate_resolved().unwrap();

    let bad = Node::fill().child(Node::container().child(Node::text("x").scale(f64::NAN)));
    let err = bad.validate_resolved().unwrap_err();
    assert!(err.to_string().contains("transform.scale"));

    let bad_opacity = Node::text("x").opacity(f64::NAN);
    assert!(bad_opacity.validate_resolved().is_err());

    let bad_stop = Node::container().background(Fill::RadialGradient(vec![GradientStop::new(
        f64::INFINITY,
        Rgba8::rgb(1, 2, 3),
    )]));
    assert!(bad_stop.validate_resolved().is_err());
}

#[test]
fn serializes_without_default_noise() {
    let v = serde_json::to_value(Node::text("hi").color(Rgba8::rgb(255, 0, 0))).unwrap();
    assert_eq!(v["kind"]["text"], "hi");
    assert_eq!(v["style"]["color"], "#ff0000ff");
    assert_eq!(v["style"]["opacity"], 1.0);
    assert!(v["style"].get("transform").is_none());
    assert!(v.get("children").is_none());
}
