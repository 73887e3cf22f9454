//! The animated entity primitive: a labeled marker travelling between two anchors.
//!
//! Every in-flight packet, frame or acknowledgment in a scene is drawn through
//! [`AnimatedEntity`]. Position is a pure function of `progress`, so the same entity can be
//! frozen mid-flight, swept continuously, or driven backwards for a return trip.

use crate::{
    animation::{ease::Ease, progress::window_progress},
    foundation::core::{Point, Rect, Rgba8, Surface, Vec2},
    render::draw::{DrawOp, Font, Glow, Stroke, TextAlign},
};

const TRAIL_LEN: f64 = 28.0;
const GLOW_PAD: f64 = 6.0;

/// Fixed start/end positions in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchors {
    pub start: Point,
    pub end: Point,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityShape {
    /// Rounded label box sized to its text.
    #[default]
    Box,
    /// Disc with the label inside and the subtitle underneath.
    Circle { radius: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Heading {
    /// Travels from `start` towards `end` as progress grows.
    #[default]
    Forward,
    /// Driven with `1 - progress`: travels from `end` back towards `start`.
    Backward,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedEntity {
    /// Interpolation fraction, 0 at `start`, 1 at `end`. Values outside `[0, 1]` extrapolate.
    pub progress: f64,
    /// Vertical offset from the interpolated position (or from the surface mid-line).
    pub vertical_offset: f64,
    pub label: String,
    pub subtitle: Option<String>,
    pub color: Rgba8,
    pub text_color: Rgba8,
    pub active: bool,
    pub delay_ms: u64,
    pub duration_ms: u64,
    /// Pixel anchors; `None` falls back to a 10%..85% horizontal sweep on the mid-line.
    pub anchors: Option<Anchors>,
    pub shape: EntityShape,
    pub heading: Heading,
}

impl AnimatedEntity {
    pub fn new(label: impl Into<String>, progress: f64) -> Self {
        Self {
            progress,
            vertical_offset: 0.0,
            label: label.into(),
            subtitle: None,
            color: Rgba8::CYAN,
            text_color: Rgba8::INK,
            active: true,
            delay_ms: 0,
            duration_ms: 1_000,
            anchors: None,
            shape: EntityShape::Box,
            heading: Heading::Forward,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn color(mut self, color: Rgba8, text_color: Rgba8) -> Self {
        self.color = color;
        self.text_color = text_color;
        self
    }

    pub fn offset(mut self, vertical_offset: f64) -> Self {
        self.vertical_offset = vertical_offset;
        self
    }

    pub fn anchors(mut self, start: Point, end: Point) -> Self {
        self.anchors = Some(Anchors { start, end });
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn timing(mut self, delay_ms: u64, duration_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self.duration_ms = duration_ms;
        self
    }

    pub fn shape(mut self, shape: EntityShape) -> Self {
        self.shape = shape;
        self
    }

    /// The same entity driven in reverse: progress becomes `1 - progress` and the trail flips.
    pub fn reversed(mut self) -> Self {
        self.progress = 1.0 - self.progress;
        self.heading = match self.heading {
            Heading::Forward => Heading::Backward,
            Heading::Backward => Heading::Forward,
        };
        self
    }

    /// Progress `elapsed_ms` after the animation was triggered, on the `easeInOut` curve.
    pub fn progress_at(&self, elapsed_ms: u64) -> f64 {
        window_progress(self.delay_ms, self.duration_ms, elapsed_ms, Ease::EaseInOut)
    }

    /// Marker center on `surface`.
    pub fn position(&self, surface: Surface) -> Point {
        let p = self.progress;
        let base = match self.anchors {
            Some(Anchors { start, end }) => start.lerp(end, p),
            None => Point::new(surface.width * (0.10 + 0.75 * p), surface.height / 2.0),
        };
        base + Vec2::new(0.0, self.vertical_offset)
    }

    /// Screen-space bounds of the marker body, or `None` when nothing is drawn.
    pub fn bounds(&self, surface: Surface) -> Option<Rect> {
        if !self.active || !surface.is_drawable() {
            return None;
        }
        let c = self.position(surface);
        Some(match self.shape {
            EntityShape::Box => Rect::from_center_size(c, self.box_size()),
            EntityShape::Circle { radius } => {
                Rect::from_center_size(c, (radius * 2.0, radius * 2.0))
            }
        })
    }

    /// Draw operations for this entity. Inactive entities produce nothing at all.
    pub fn render(&self, surface: Surface) -> Vec<DrawOp> {
        let Some(body) = self.bounds(surface) else {
            return Vec::new();
        };
        let center = body.center();
        let mut ops = Vec::with_capacity(6);

        let glow = Glow {
            color: self.color,
            blur: 18.0,
        };

        match self.shape {
            EntityShape::Box => {
                ops.push(DrawOp::Rect {
                    rect: body.inflate(GLOW_PAD, GLOW_PAD),
                    radius: 10.0,
                    fill: Some(self.color.with_opacity(0.3)),
                    stroke: None,
                    glow: Some(glow),
                });
            }
            EntityShape::Circle { radius } => {
                ops.push(DrawOp::Circle {
                    center,
                    radius: radius + GLOW_PAD,
                    fill: Some(self.color.with_opacity(0.3)),
                    stroke: None,
                    glow: Some(glow),
                });
            }
        }

        if self.progress > 0.0 && self.progress < 1.0 {
            ops.push(self.trail(body));
        }

        match self.shape {
            EntityShape::Box => {
                ops.push(DrawOp::Rect {
                    rect: body,
                    radius: 8.0,
                    fill: Some(self.color),
                    stroke: Some(Stroke::solid(self.color, 2.0)),
                    glow: None,
                });
                let label_y = if self.subtitle.is_some() {
                    center.y - 2.0
                } else {
                    center.y + 4.0
                };
                ops.push(DrawOp::Text {
                    at: Point::new(center.x, label_y),
                    text: self.label.clone(),
                    font: Font::bold(11.0),
                    color: self.text_color,
                    align: TextAlign::Middle,
                });
                if let Some(sub) = &self.subtitle {
                    ops.push(DrawOp::Text {
                        at: Point::new(center.x, center.y + 10.0),
                        text: sub.clone(),
                        font: Font::regular(8.0),
                        color: self.text_color,
                        align: TextAlign::Middle,
                    });
                }
            }
            EntityShape::Circle { radius } => {
                ops.push(DrawOp::Circle {
                    center,
                    radius,
                    fill: Some(self.color),
                    stroke: Some(Stroke::solid(self.color, 2.0)),
                    glow: None,
                });
                ops.push(DrawOp::Text {
                    at: Point::new(center.x, center.y + 4.0),
                    text: self.label.clone(),
                    font: Font::bold(12.0),
                    color: self.text_color,
                    align: TextAlign::Middle,
                });
                if let Some(sub) = &self.subtitle {
                    ops.push(DrawOp::Text {
                        at: Point::new(center.x, center.y + radius + 14.0),
                        text: sub.clone(),
                        font: Font::bold(9.0),
                        color: self.color,
                        align: TextAlign::Middle,
                    });
                }
            }
        }

        ops
    }

    fn box_size(&self) -> (f64, f64) {
        let longest = self
            .subtitle
            .as_deref()
            .map_or(0, |s| s.chars().count())
            .max(self.label.chars().count());
        let w = (longest as f64 * 7.0 + 20.0).max(60.0);
        let h = if self.subtitle.is_some() { 30.0 } else { 24.0 };
        (w, h)
    }

    /// Direction of travel along x: `1.0` rightwards, `-1.0` leftwards.
    fn travel_dir(&self) -> f64 {
        let forward = match self.anchors {
            Some(Anchors { start, end }) if end.x < start.x => -1.0,
            _ => 1.0,
        };
        match self.heading {
            Heading::Forward => forward,
            Heading::Backward => -forward,
        }
    }

    fn trail(&self, body: Rect) -> DrawOp {
        let y0 = body.center().y - 1.0;
        let y1 = body.center().y + 1.0;
        let faded = self.color.with_opacity(0.0);
        let bright = self.color.with_opacity(0.5);
        if self.travel_dir() >= 0.0 {
            DrawOp::Trail {
                rect: Rect::new(body.x0 - TRAIL_LEN, y0, body.x0, y1),
                from: faded,
                to: bright,
            }
        } else {
            DrawOp::Trail {
                rect: Rect::new(body.x1, y0, body.x1 + TRAIL_LEN, y1),
                from: bright,
                to: faded,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entity.rs"]
mod tests;
