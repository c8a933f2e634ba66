use xxhash_rust::xxh3::Xxh3;

use crate::{
    eval::composer::FrameDescription,
    foundation::core::{Rgba8, Vec2},
    scene::visual::{
        Align, Direction, Edges, Fill, Font, FontFamily, GradientStop, Node, NodeKind, Position,
        Style,
    },
};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit digest of an evaluated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint of everything visible in `frame`.
///
/// The global and local frame indices are not hashed, so a still picture elides across time.
pub fn fingerprint_frame(frame: &FrameDescription) -> FrameFingerprint {
    let mut h = StableHasher::new();
    match &frame.background {
        Some(bg) => {
            h.write_bool(true);
            write_node(&mut h, bg);
        }
        None => h.write_bool(false),
    }
    h.write_u64(frame.scenes.len() as u64);
    for s in &frame.scenes {
        h.write_u64(s.entry as u64);
        h.write_str(&s.scene);
        write_node(&mut h, &s.root);
    }
    h.finish()
}

/// Fingerprint of a single tree.
pub fn fingerprint_node(node: &Node) -> FrameFingerprint {
    let mut h = StableHasher::new();
    write_node(&mut h, node);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 hash the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &Node) {
    match &node.kind {
        NodeKind::Box => h.write_u8(0),
        NodeKind::Text(t) => {
            h.write_u8(1);
            h.write_str(t);
        }
    }
    write_style(h, &node.style);
    h.write_u64(node.children.len() as u64);
    for c in &node.children {
        write_node(h, c);
    }
}

fn write_opt_f64(h: &mut StableHasher, v: Option<f64>) {
    match v {
        Some(v) => {
            h.write_bool(true);
            h.write_f64(v);
        }
        None => h.write_bool(false),
    }
}

fn write_edges(h: &mut StableHasher, e: Edges) {
    for v in [e.top, e.right, e.bottom, e.left] {
        h.write_f64(v);
    }
}

fn write_vec2(h: &mut StableHasher, v: Vec2) {
    h.write_f64(v.x);
    h.write_f64(v.y);
}

fn write_color(h: &mut StableHasher, c: Rgba8) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn write_align(h: &mut StableHasher, a: Align) {
    h.write_u8(match a {
        Align::Start => 0,
        Align::Center => 1,
        Align::End => 2,
        Align::SpaceBetween => 3,
    });
}

fn write_stops(h: &mut StableHasher, stops: &[GradientStop]) {
    h.write_u64(stops.len() as u64);
    for s in stops {
        h.write_f64(s.offset);
        write_color(h, s.color);
    }
}

fn write_font(h: &mut StableHasher, f: &Font) {
    h.write_u8(match f.family {
        FontFamily::Sans => 0,
        FontFamily::Mono => 1,
    });
    h.write_f64(f.size_px);
    h.write_u16(f.weight);
    h.write_f64(f.letter_spacing_px);
}

fn write_style(h: &mut StableHasher, s: &Style) {
    h.write_u8(match s.position {
        Position::Relative => 0,
        Position::Absolute => 1,
    });
    match s.inset {
        Some(e) => {
            h.write_bool(true);
            write_edges(h, e);
        }
        None => h.write_bool(false),
    }
    write_opt_f64(h, s.width);
    write_opt_f64(h, s.height);
    write_opt_f64(h, s.min_width);
    match &s.layout {
        Some(flex) => {
            h.write_bool(true);
            h.write_u8(match flex.direction {
                Direction::Row => 0,
                Direction::Column => 1,
            });
            write_align(h, flex.justify);
            write_align(h, flex.align);
            h.write_f64(flex.gap);
            h.write_bool(flex.wrap);
        }
        None => h.write_bool(false),
    }
    write_edges(h, s.margin);
    write_edges(h, s.padding);
    h.write_f64(s.opacity);
    write_vec2(h, s.transform.translate);
    h.write_f64(s.transform.scale);
    h.write_f64(s.transform.rotate_deg);
    match &s.background {
        None => h.write_u8(0),
        Some(Fill::Solid(c)) => {
            h.write_u8(1);
            write_color(h, *c);
        }
        Some(Fill::RadialGradient(stops)) => {
            h.write_u8(2);
            write_stops(h, stops);
        }
        Some(Fill::LinearGradient { angle_deg, stops }) => {
            h.write_u8(3);
            h.write_f64(*angle_deg);
            write_stops(h, stops);
        }
    }
    match &s.border {
        Some(b) => {
            h.write_bool(true);
            h.write_f64(b.width);
            write_color(h, b.color);
        }
        None => h.write_bool(false),
    }
    h.write_f64(s.border_radius);
    match s.color {
        Some(c) => {
            h.write_bool(true);
            write_color(h, c);
        }
        None => h.write_bool(false),
    }
    match &s.font {
        Some(f) => {
            h.write_bool(true);
            write_font(h, f);
        }
        None => h.write_bool(false),
    }
    match s.text_align {
        Some(a) => {
            h.write_bool(true);
            write_align(h, a);
        }
        None => h.write_bool(false),
    }
    h.write_u64(s.shadows.len() as u64);
    for sh in &s.shadows {
        write_vec2(h, sh.offset);
        h.write_f64(sh.blur_px);
        write_color(h, sh.color);
    }
    h.write_f64(s.blur_px);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
