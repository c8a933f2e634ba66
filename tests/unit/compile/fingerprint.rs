use super::*;
use crate::eval::composer::MountedScene;
use crate::foundation::core::FrameIndex;

fn frame(at: u64, root: Node) -> FrameDescription {
    FrameDescription {
        frame: FrameIndex(at),
        resolved_frame: FrameIndex(at),
        background: None,
        scenes: vec![MountedScene {
            entry: 0,
            scene: "S".to_string(),
            local_frame: FrameIndex(at),
            root,
        }],
    }
}

#[test]
fn fingerprint_is_deterministic() {
    let f = frame(3, Node::text("hi").opacity(0.5));
    assert_eq!(fingerprint_frame(&f), fingerprint_frame(&f.clone()));
}

#[test]
fn fingerprint_ignores_frame_indices() {
    let a = frame(3, Node::text("hi"));
    let b = frame(40, Node::text("hi"));
    assert_eq!(fingerprint_frame(&a), fingerprint_frame(&b));
}

#[test]
fn fingerprint_changes_with_visible_properties() {
    let base = fingerprint_node(&Node::text("hi").opacity(0.5));
    assert_ne!(base, fingerprint_node(&Node::text("hi").opacity(0.6)));
    assert_ne!(base, fingerprint_node(&Node::text("ho").opacity(0.5)));
    assert_ne!(
        base,
        fingerprint_node(&Node::text("hi").opacity(0.5).translate(0.0, 1.0))
    );
    assert_ne!(
        fingerprint_node(&Node::container()),
        fingerprint_node(&Node::container().child(Node::container()))
    );
}

#[test]
fn negative_zero_hashes_like_zero() {
    assert_eq!(
        fingerprint_node(&Node::container().translate(-0.0, 0.0)),
        fingerprint_node(&Node::container())
    );
}

#[test]
fn display_is_32_hex_digits() {
    let s = fingerprint_node(&Node::container()).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
