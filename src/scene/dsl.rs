use crate::{
    animation::entity::EntityShape,
    foundation::core::Rgba8,
    scene::model::{
        Actor, BoxSize, Caption, Cue, Endpoint, Item, Link, Marker, Placement, Scene, Slots,
        StepSpan,
    },
};

/// Builder for [`Scene`](crate::Scene).
#[derive(Default)]
pub struct SceneBuilder {
    actors: Vec<Actor>,
    links: Vec<Link>,
    cues: Vec<Cue>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn cue(mut self, when: StepSpan, item: Item) -> Self {
        self.cues.push(Cue { when, item });
        self
    }

    pub fn marker(self, when: StepSpan, marker: Marker) -> Self {
        self.cue(when, Item::Marker(marker))
    }

    pub fn caption(self, when: StepSpan, caption: Caption) -> Self {
        self.cue(when, Item::Caption(caption))
    }

    pub fn check(self, when: StepSpan, caption: Caption) -> Self {
        self.cue(when, Item::Check(caption))
    }

    pub fn cross(self, when: StepSpan, x: f64, y: f64, size: f64) -> Self {
        self.cue(when, Item::Cross { x, y, size })
    }

    pub fn slots(self, when: StepSpan, slots: Slots) -> Self {
        self.cue(when, Item::Slots(slots))
    }

    pub fn badge(
        self,
        when: StepSpan,
        actor: impl Into<String>,
        text: impl Into<String>,
        color: Rgba8,
    ) -> Self {
        self.cue(
            when,
            Item::Badge {
                actor: actor.into(),
                text: text.into(),
                color,
            },
        )
    }

    /// Apply `f` once per step in `steps`, for cues that vary with the step index.
    pub fn each_step(
        mut self,
        steps: std::ops::Range<usize>,
        mut f: impl FnMut(Self, usize) -> Self,
    ) -> Self {
        for step in steps {
            self = f(self, step);
        }
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            actors: self.actors,
            links: self.links,
            cues: self.cues,
        }
    }
}

impl Actor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, placement: Placement) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subtitle: None,
            color: Rgba8::CYAN,
            text_color: Rgba8::INK,
            placement,
            size: BoxSize::default(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn colors(mut self, fill: Rgba8, text: Rgba8) -> Self {
        self.color = fill;
        self.text_color = text;
        self
    }

    pub fn size(mut self, size: BoxSize) -> Self {
        self.size = size;
        self
    }
}

impl Link {
    /// Line in the theme's link color.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            color: None,
            dashed: false,
            lane: 0.0,
            label: None,
            arrow: false,
        }
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = Some(color);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn lane(mut self, lane: f64) -> Self {
        self.lane = lane;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn arrow(mut self) -> Self {
        self.arrow = true;
        self
    }
}

impl Marker {
    /// Marker from `from` to `to`, frozen at the midpoint.
    pub fn between(from: Endpoint, to: Endpoint, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            at: 0.5,
            lane: 0.0,
            label: label.into(),
            subtitle: None,
            color: Rgba8::CYAN,
            text_color: Rgba8::INK,
            shape: EntityShape::Box,
            tooltip: None,
            lost: false,
            returning: false,
        }
    }

    pub fn at(mut self, at: f64) -> Self {
        self.at = at;
        self
    }

    pub fn lane(mut self, lane: f64) -> Self {
        self.lane = lane;
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn colors(mut self, fill: Rgba8, text: Rgba8) -> Self {
        self.color = fill;
        self.text_color = text;
        self
    }

    pub fn circle(mut self, radius: f64) -> Self {
        self.shape = EntityShape::Circle { radius };
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Run the marker back along its outbound leg, the way an acknowledgment answers a frame.
    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }

    pub fn lost(mut self) -> Self {
        self.lost = true;
        self
    }
}

impl Caption {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color: None,
            size: 12.0,
            bold: false,
        }
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Slots {
    /// Horizontal strip of `count` slots starting at fractional `(x, y)`.
    pub fn row(x: f64, y: f64, count: usize, size: f64, pitch: f64, color: Rgba8) -> Self {
        Self {
            x,
            y,
            count,
            size,
            pitch,
            vertical: false,
            color,
            filled: Vec::new(),
            ghost_labels: false,
            prefix: "F".to_string(),
        }
    }

    pub fn column(x: f64, y: f64, count: usize, size: f64, pitch: f64, color: Rgba8) -> Self {
        Self {
            vertical: true,
            ..Self::row(x, y, count, size, pitch, color)
        }
    }

    pub fn filled(mut self, filled: impl IntoIterator<Item = usize>) -> Self {
        self.filled = filled.into_iter().collect();
        self
    }

    pub fn ghost_labels(mut self) -> Self {
        self.ghost_labels = true;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
