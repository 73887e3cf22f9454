use std::collections::BTreeSet;

use crate::{
    animation::entity::EntityShape,
    foundation::core::Rgba8,
    foundation::error::{ProtovizError, ProtovizResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declarative description of one protocol visualization.
///
/// A scene is pure data: fixed actors, the links drawn between them, and step-gated cues.
/// It is consumed by [`crate::render_frame`], which lays it out for the current surface and
/// paints every cue active at the requested step.
pub struct Scene {
    /// Boxes that stay on screen for every step (hosts, servers, routers).
    pub actors: Vec<Actor>,
    /// Static connection lines between actors.
    #[serde(default)]
    pub links: Vec<Link>,
    /// Step-gated items, painted in declaration order.
    #[serde(default)]
    pub cues: Vec<Cue>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fixed participant drawn as a glowing labeled box.
pub struct Actor {
    /// Unique key referenced by links, markers and badges.
    pub id: String,
    /// Bold caption inside the box.
    pub label: String,
    /// Optional second line (address, port, state).
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Box fill.
    pub color: Rgba8,
    /// Text color inside the box.
    pub text_color: Rgba8,
    /// Where the box sits on the surface.
    pub placement: Placement,
    /// Responsive box size.
    #[serde(default)]
    pub size: BoxSize,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Actor placement, resolved against the surface on every render.
pub enum Placement {
    /// Left edge inset by the responsive margin, vertically centered.
    Left,
    /// Right edge inset by the responsive margin, vertically centered.
    Right,
    /// Box center at a fractional surface position.
    At { x: f64, y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Responsive size: each side is `min(max_px, fraction * surface side)`.
pub struct BoxSize {
    pub max_w: f64,
    pub w_frac: f64,
    pub max_h: f64,
    pub h_frac: f64,
}

impl Default for BoxSize {
    fn default() -> Self {
        Self {
            max_w: 90.0,
            w_frac: 0.13,
            max_h: 70.0,
            h_frac: 0.23,
        }
    }
}

impl BoxSize {
    pub fn compact() -> Self {
        Self {
            max_w: 70.0,
            w_frac: 0.11,
            max_h: 50.0,
            h_frac: 0.17,
        }
    }

    pub fn large() -> Self {
        Self {
            max_w: 100.0,
            w_frac: 0.14,
            max_h: 100.0,
            h_frac: 0.25,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static line between two actors.
pub struct Link {
    pub from: String,
    pub to: String,
    /// Theme link color when `None`.
    #[serde(default)]
    pub color: Option<Rgba8>,
    #[serde(default)]
    pub dashed: bool,
    /// Vertical offset as a fraction of surface height (parallel channels).
    #[serde(default)]
    pub lane: f64,
    /// Caption drawn above the line midpoint.
    #[serde(default)]
    pub label: Option<String>,
    /// Arrowhead at the `to` end.
    #[serde(default)]
    pub arrow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Half-open step range `[from, until)`; `until = None` stays active through the last step.
pub struct StepSpan {
    pub from: usize,
    #[serde(default)]
    pub until: Option<usize>,
}

impl StepSpan {
    /// Exactly one step.
    pub fn at(step: usize) -> Self {
        Self {
            from: step,
            until: Some(step + 1),
        }
    }

    /// `step` and every later step.
    pub fn from(step: usize) -> Self {
        Self {
            from: step,
            until: None,
        }
    }

    /// `[from, until)`.
    pub fn range(from: usize, until: usize) -> Self {
        Self {
            from,
            until: Some(until),
        }
    }

    pub fn always() -> Self {
        Self::from(0)
    }

    pub fn contains(self, step: usize) -> bool {
        step >= self.from && self.until.is_none_or(|u| step < u)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One step-gated item.
pub struct Cue {
    pub when: StepSpan,
    pub item: Item,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Everything a cue can draw.
pub enum Item {
    /// An in-flight packet/frame between two endpoints.
    Marker(Marker),
    /// Free text.
    Caption(Caption),
    /// Text prefixed with a drawn checkmark (completion banner).
    Check(Caption),
    /// Red X marking a lost frame.
    Cross { x: f64, y: f64, size: f64 },
    /// Row or column of numbered slots (sliding windows, receive buffers).
    Slots(Slots),
    /// Text attached below an actor box.
    Badge {
        actor: String,
        text: String,
        color: Rgba8,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Anchor for marker travel.
pub enum Endpoint {
    /// The side of the actor box facing the other endpoint.
    Edge { actor: String },
    /// The actor box center.
    Center { actor: String },
    /// Fractional surface position.
    Spot { x: f64, y: f64 },
}

impl Endpoint {
    pub fn edge(actor: impl Into<String>) -> Self {
        Self::Edge {
            actor: actor.into(),
        }
    }

    pub fn center(actor: impl Into<String>) -> Self {
        Self::Center {
            actor: actor.into(),
        }
    }

    pub fn spot(x: f64, y: f64) -> Self {
        Self::Spot { x, y }
    }

    pub fn actor(&self) -> Option<&str> {
        match self {
            Self::Edge { actor } | Self::Center { actor } => Some(actor),
            Self::Spot { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An in-flight marker frozen at a scripted fraction between two endpoints.
pub struct Marker {
    pub from: Endpoint,
    pub to: Endpoint,
    /// Interpolation fraction used for still frames.
    pub at: f64,
    /// Vertical offset as a fraction of surface height.
    #[serde(default)]
    pub lane: f64,
    pub label: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub color: Rgba8,
    pub text_color: Rgba8,
    #[serde(default)]
    pub shape: EntityShape,
    /// Hover text; never painted.
    #[serde(default)]
    pub tooltip: Option<String>,
    /// Draw a lost-frame cross over the marker.
    #[serde(default)]
    pub lost: bool,
    /// Return leg of a round trip: drawn travelling from `to` back to `from`, with `at` as
    /// the fraction of the way home.
    #[serde(default)]
    pub returning: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Text at a fractional surface position.
pub struct Caption {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Theme text color when `None`.
    #[serde(default)]
    pub color: Option<Rgba8>,
    pub size: f64,
    #[serde(default)]
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Numbered slot strip.
pub struct Slots {
    /// Top-left of the first slot as a surface fraction.
    pub x: f64,
    pub y: f64,
    pub count: usize,
    /// Slot side in pixels.
    pub size: f64,
    /// Distance between slot origins in pixels.
    pub pitch: f64,
    #[serde(default)]
    pub vertical: bool,
    pub color: Rgba8,
    /// Indices drawn highlighted and labeled.
    #[serde(default)]
    pub filled: Vec<usize>,
    /// Slots labeled dimly even when not filled.
    #[serde(default)]
    pub ghost_labels: bool,
    /// Label prefix, e.g. `F` for `F0`, `F1`, ...
    pub prefix: String,
}

impl Scene {
    pub fn actor(&self, id: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Check internal references and that every cue fits inside `step_count` steps.
    pub fn validate(&self, step_count: usize) -> ProtovizResult<()> {
        let mut ids = BTreeSet::new();
        for a in &self.actors {
            if a.id.is_empty() {
                return Err(ProtovizError::validation("actor id must be non-empty"));
            }
            if !ids.insert(a.id.as_str()) {
                return Err(ProtovizError::validation(format!(
                    "duplicate actor id '{}'",
                    a.id
                )));
            }
        }

        let known = |id: &str, what: &str| -> ProtovizResult<()> {
            if ids.contains(id) {
                Ok(())
            } else {
                Err(ProtovizError::validation(format!(
                    "{what} references unknown actor '{id}'"
                )))
            }
        };

        for l in &self.links {
            known(&l.from, "link")?;
            known(&l.to, "link")?;
        }

        for (idx, cue) in self.cues.iter().enumerate() {
            let span = cue.when;
            if span.from >= step_count {
                return Err(ProtovizError::validation(format!(
                    "cue {idx} starts at step {} but there are only {step_count} steps",
                    span.from
                )));
            }
            if let Some(until) = span.until {
                if until <= span.from || until > step_count {
                    return Err(ProtovizError::validation(format!(
                        "cue {idx} has invalid span [{}, {until})",
                        span.from
                    )));
                }
            }

            match &cue.item {
                Item::Marker(m) => {
                    for ep in [&m.from, &m.to] {
                        if let Some(a) = ep.actor() {
                            known(a, "marker")?;
                        }
                    }
                    if !m.at.is_finite() || !m.lane.is_finite() {
                        return Err(ProtovizError::validation(format!(
                            "marker '{}' has a non-finite position",
                            m.label
                        )));
                    }
                }
                Item::Badge { actor, .. } => known(actor, "badge")?,
                Item::Slots(s) => {
                    if s.count == 0 {
                        return Err(ProtovizError::validation("slot strip must have slots"));
                    }
                    if let Some(bad) = s.filled.iter().find(|&&i| i >= s.count) {
                        return Err(ProtovizError::validation(format!(
                            "slot index {bad} out of range for {} slots",
                            s.count
                        )));
                    }
                }
                Item::Caption(_) | Item::Check(_) | Item::Cross { .. } => {}
            }
        }
        Ok(())
    }

    /// Cues active at `step`, in paint order.
    pub fn active_cues(&self, step: usize) -> impl Iterator<Item = &Cue> {
        self.cues.iter().filter(move |c| c.when.contains(step))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
