use crate::{
    foundation::core::{Rgba8, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// One element of a scene's visual description.
///
/// Trees are immutable values produced fresh each frame. Every numeric property is a plain `f64`
/// that has already been resolved for the frame being described.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// What this element draws.
    pub kind: NodeKind,
    /// Box model and paint properties.
    pub style: Style,
    /// Nested elements in painter's order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Element kinds understood by the rendering driver.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Plain container box.
    Box,
    /// Text run.
    Text(String),
}

/// CSS-like style block.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    /// Positioning scheme.
    pub position: Position,
    /// Offsets for absolutely positioned elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inset: Option<Edges>,
    /// Fixed width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Fixed height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Minimum width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Flex layout of children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Flex>,
    /// Outer spacing.
    #[serde(skip_serializing_if = "Edges::is_zero")]
    pub margin: Edges,
    /// Inner spacing.
    #[serde(skip_serializing_if = "Edges::is_zero")]
    pub padding: Edges,
    /// Opacity in `[0, 1]`, multiplied down the tree.
    pub opacity: f64,
    /// 2D transform around the element center.
    #[serde(skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
    /// Background paint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Fill>,
    /// Border stroke.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "is_zero")]
    pub border_radius: f64,
    /// Foreground (text) color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    /// Text font.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Horizontal text alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<Align>,
    /// Glow/drop shadows (text-shadow for text, box-shadow otherwise).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shadows: Vec<Shadow>,
    /// Gaussian blur radius in pixels.
    #[serde(skip_serializing_if = "is_zero")]
    pub blur_px: f64,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Default for Style {
    fn default() -> Self {
        Self {
            position: Position::Relative,
            inset: None,
            width: None,
            height: None,
            min_width: None,
            layout: None,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            opacity: 1.0,
            transform: Transform::IDENTITY,
            background: None,
            border: None,
            border_radius: 0.0,
            color: None,
            font: None,
            text_align: None,
            shadows: Vec::new(),
            blur_px: 0.0,
        }
    }
}

/// Positioning scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Flow layout inside the parent.
    Relative,
    /// Offset from the parent box by [`Style::inset`].
    Absolute,
}

/// Four-sided box spacing in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// All edges zero.
    pub const ZERO: Self = Self::all(0.0);

    /// Same value on every edge.
    pub const fn all(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Horizontal `x`, vertical `y`.
    pub const fn xy(x: f64, y: f64) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    /// Only a top edge.
    pub const fn top(v: f64) -> Self {
        Self {
            top: v,
            ..Self::ZERO
        }
    }

    /// Only a bottom edge.
    pub const fn bottom(v: f64) -> Self {
        Self {
            bottom: v,
            ..Self::ZERO
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Flex container settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Flex {
    /// Main axis.
    pub direction: Direction,
    /// Main-axis distribution.
    pub justify: Align,
    /// Cross-axis alignment.
    pub align: Align,
    /// Gap between children in pixels.
    pub gap: f64,
    /// Wrap children onto new lines.
    pub wrap: bool,
}

/// Flex main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
}

/// Alignment along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Start edge.
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
    /// Space distributed between items.
    SpaceBetween,
}

/// Element transform: translate, then rotate and scale about the center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transform {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees, clockwise.
    pub rotate_deg: f64,
}

impl Transform {
    /// No-op transform.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Background paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Flat color.
    Solid(Rgba8),
    /// Circular gradient from the center outward.
    RadialGradient(Vec<GradientStop>),
    /// Linear gradient along `angle_deg` (0 = bottom to top, as in CSS).
    LinearGradient {
        /// Gradient direction in degrees.
        angle_deg: f64,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
}

/// One gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Rgba8,
}

impl GradientStop {
    /// Stop at `offset` with `color`.
    pub const fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Solid border stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Rgba8,
}

/// Font families available to the promo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Proportional UI face.
    Sans,
    /// Monospaced code face.
    Mono,
}

/// Text font settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Font {
    /// Typeface.
    pub family: FontFamily,
    /// Size in pixels.
    pub size_px: f64,
    /// CSS weight (100..=900).
    pub weight: u16,
    /// Extra spacing between glyphs in pixels.
    pub letter_spacing_px: f64,
}

impl Font {
    /// Regular-weight font.
    pub const fn new(family: FontFamily, size_px: f64) -> Self {
        Self {
            family,
            size_px,
            weight: 400,
            letter_spacing_px: 0.0,
        }
    }

    /// Same font with another weight.
    pub const fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Same font with letter spacing.
    pub const fn spacing(mut self, px: f64) -> Self {
        self.letter_spacing_px = px;
        self
    }
}

/// Shadow or glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    /// Offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur_px: f64,
    /// Shadow color.
    pub color: Rgba8,
}

impl Shadow {
    /// Centered glow of radius `blur_px`.
    pub const fn glow(blur_px: f64, color: Rgba8) -> Self {
        Self {
            offset: Vec2::ZERO,
            blur_px,
            color,
        }
    }
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Plain container box.
    pub fn container() -> Self {
        Self::new(NodeKind::Box)
    }

    /// Text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(text.into()))
    }

    /// Box filling its parent, children centered in a column.
    pub fn fill() -> Self {
        Self::container()
            .absolute(Edges::ZERO)
            .flex(Direction::Column, 0.0)
            .center()
    }

    /// Horizontal flex box.
    pub fn row(gap: f64) -> Self {
        Self::container().flex(Direction::Row, gap)
    }

    /// Vertical flex box.
    pub fn column(gap: f64) -> Self {
        Self::container().flex(Direction::Column, gap)
    }

    /// Arbitrary style edit.
    pub fn style(mut self, f: impl FnOnce(&mut Style)) -> Self {
        f(&mut self.style);
        self
    }

    /// Make this a flex container.
    pub fn flex(mut self, direction: Direction, gap: f64) -> Self {
        self.style.layout = Some(Flex {
            direction,
            justify: Align::Start,
            align: Align::Start,
            gap,
            wrap: false,
        });
        self
    }

    /// Center children on both axes (turns the node into a column if it is not a flex box).
    pub fn center(mut self) -> Self {
        let flex = self.style.layout.get_or_insert(Flex {
            direction: Direction::Column,
            justify: Align::Start,
            align: Align::Start,
            gap: 0.0,
            wrap: false,
        });
        flex.justify = Align::Center;
        flex.align = Align::Center;
        self
    }

    /// Main-axis distribution of flex children.
    pub fn justify(mut self, justify: Align) -> Self {
        if let Some(flex) = self.style.layout.as_mut() {
            flex.justify = justify;
        }
        self
    }

    /// Cross-axis alignment of flex children.
    pub fn align(mut self, align: Align) -> Self {
        if let Some(flex) = self.style.layout.as_mut() {
            flex.align = align;
        }
        self
    }

    /// Allow flex children to wrap.
    pub fn wrap(mut self) -> Self {
        if let Some(flex) = self.style.layout.as_mut() {
            flex.wrap = true;
        }
        self
    }

    /// Absolutely position with `inset` offsets.
    pub fn absolute(mut self, inset: Edges) -> Self {
        self.style.position = Position::Absolute;
        self.style.inset = Some(inset);
        self
    }

    /// Absolutely position without offsets (centered by the parent's flex layout).
    pub fn overlay(mut self) -> Self {
        self.style.position = Position::Absolute;
        self
    }

    /// Fixed size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.style.width = Some(width);
        self.style.height = Some(height);
        self
    }

    /// Fixed width.
    pub fn width(mut self, width: f64) -> Self {
        self.style.width = Some(width);
        self
    }

    /// Minimum width.
    pub fn min_width(mut self, width: f64) -> Self {
        self.style.min_width = Some(width);
        self
    }

    /// Opacity, clamped to `[0, 1]` (NaN is kept so validation rejects it).
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = if opacity.is_nan() {
            opacity
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    /// Translate by `(x, y)` pixels.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.style.transform.translate = Vec2::new(x, y);
        self
    }

    /// Uniform scale.
    pub fn scale(mut self, scale: f64) -> Self {
        self.style.transform.scale = scale;
        self
    }

    /// Rotation in degrees.
    pub fn rotate(mut self, deg: f64) -> Self {
        self.style.transform.rotate_deg = deg;
        self
    }

    /// Outer spacing.
    pub fn margin(mut self, margin: Edges) -> Self {
        self.style.margin = margin;
        self
    }

    /// Inner spacing.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    /// Background paint.
    pub fn background(mut self, fill: Fill) -> Self {
        self.style.background = Some(fill);
        self
    }

    /// Border stroke.
    pub fn border(mut self, width: f64, color: Rgba8) -> Self {
        self.style.border = Some(Border { width, color });
        self
    }

    /// Corner radius.
    pub fn radius(mut self, px: f64) -> Self {
        self.style.border_radius = px;
        self
    }

    /// Foreground color.
    pub fn color(mut self, color: Rgba8) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Text font.
    pub fn font(mut self, font: Font) -> Self {
        self.style.font = Some(font);
        self
    }

    /// Horizontal text alignment.
    pub fn text_align(mut self, align: Align) -> Self {
        self.style.text_align = Some(align);
        self
    }

    /// Append a shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.style.shadows.push(shadow);
        self
    }

    /// Gaussian blur.
    pub fn blur(mut self, px: f64) -> Self {
        self.style.blur_px = px;
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first pre-order traversal.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for c in &self.children {
            c.visit(f);
        }
    }

    /// Total number of nodes in this tree.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.visit(&mut |_| n += 1);
        n
    }

    /// All text runs in traversal order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.visit(&mut |n| {
            if let NodeKind::Text(t) = &n.kind {
                out.push(t.as_str());
            }
        });
        out
    }

    /// First text node whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&Node> {
        let mut found = None;
        self.visit(&mut |n| {
            if found.is_none() && matches!(&n.kind, NodeKind::Text(t) if t == text) {
                found = Some(n);
            }
        });
        found
    }

    /// Check that every numeric property in the tree is finite.
    pub fn validate_resolved(&self) -> ReelResult<()> {
        let mut bad: Option<&'static str> = None;
        self.visit(&mut |n| {
            if bad.is_none() {
                bad = n.style.first_non_finite();
            }
        });
        match bad {
            Some(field) => Err(ReelError::evaluation(format!(
                "style property `{field}` is not a finite number"
            ))),
            None => Ok(()),
        }
    }
}

impl Style {
    fn first_non_finite(&self) -> Option<&'static str> {
        let mut fields: Vec<(&'static str, f64)> = vec![
            ("opacity", self.opacity),
            ("transform.translate.x", self.transform.translate.x),
            ("transform.translate.y", self.transform.translate.y),
            ("transform.scale", self.transform.scale),
            ("transform.rotate_deg", self.transform.rotate_deg),
            ("border_radius", self.border_radius),
            ("blur_px", self.blur_px),
        ];
        fields.extend(
            [
                ("width", self.width),
                ("height", self.height),
                ("min_width", self.min_width),
            ]
            .into_iter()
            .filter_map(|(name, v)| v.map(|v| (name, v))),
        );
        let edges = [
            ("margin", Some(self.margin)),
            ("padding", Some(self.padding)),
            ("inset", self.inset),
        ];
        for (name, e) in edges.into_iter().filter_map(|(n, e)| e.map(|e| (n, e))) {
            fields.extend([(name, e.top), (name, e.right), (name, e.bottom), (name, e.left)]);
        }
        if let Some(flex) = &self.layout {
            fields.push(("layout.gap", flex.gap));
        }
        if let Some(b) = &self.border {
            fields.push(("border.width", b.width));
        }
        if let Some(f) = &self.font {
            fields.push(("font.size_px", f.size_px));
            fields.push(("font.letter_spacing_px", f.letter_spacing_px));
        }
        for s in &self.shadows {
            fields.extend([
                ("shadow.offset", s.offset.x),
                ("shadow.offset", s.offset.y),
                ("shadow.blur_px", s.blur_px),
            ]);
        }
        match &self.background {
            Some(Fill::RadialGradient(stops)) => {
                fields.extend(stops.iter().map(|s| ("background.stop", s.offset)));
            }
            Some(Fill::LinearGradient { angle_deg, stops }) => {
                fields.push(("background.angle_deg", *angle_deg));
                fields.extend(stops.iter().map(|s| ("background.stop", s.offset)));
            }
            Some(Fill::Solid(_)) | None => {}
        }
        fields
            .into_iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/visual.rs"]
mod tests;
