use crate::foundation::core::{Point, Rect, Rgba8, Surface};

/// Stroke style for outlines and lines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: Rgba8,
    pub width: f64,
    /// `(dash, gap)` lengths; solid when `None`.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Rgba8, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: Some((dash, gap)),
        }
    }
}

/// Soft shadow around a shape, in the shape's own color family.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glow {
    pub color: Rgba8,
    pub blur: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAlign {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Backend-agnostic drawing command.
///
/// A frame is an ordered list of these, painted back to front.
pub enum DrawOp {
    /// Fill the whole surface, discarding anything drawn before.
    Clear { color: Rgba8 },
    Rect {
        rect: Rect,
        radius: f64,
        fill: Option<Rgba8>,
        stroke: Option<Stroke>,
        glow: Option<Glow>,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Rgba8>,
        stroke: Option<Stroke>,
        glow: Option<Glow>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
        glow: Option<Glow>,
    },
    Polyline {
        points: Vec<Point>,
        closed: bool,
        fill: Option<Rgba8>,
        stroke: Option<Stroke>,
    },
    Text {
        at: Point,
        text: String,
        font: Font,
        color: Rgba8,
        align: TextAlign,
    },
    /// Horizontal linear gradient from `from` (left edge) to `to` (right edge).
    Trail { rect: Rect, from: Rgba8, to: Rgba8 },
}

/// All draw operations of one frame, together with the surface they were laid out for.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawList {
    pub surface: Surface,
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Text content of every `Text` op, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Extend<DrawOp> for DrawList {
    fn extend<T: IntoIterator<Item = DrawOp>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

/// Text op helper used throughout the renderer.
pub(crate) fn text(at: Point, s: impl Into<String>, font: Font, color: Rgba8) -> DrawOp {
    DrawOp::Text {
        at,
        text: s.into(),
        font,
        color,
        align: TextAlign::Middle,
    }
}
