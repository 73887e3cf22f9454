use crate::{
    foundation::core::{Point, Rect, Surface},
    scene::model::{Actor, Endpoint, Marker, Placement, Scene},
};

/// Actor boxes resolved for one surface size.
///
/// Computed fresh for every frame; it borrows actor ids from the scene and never outlives the
/// render call that produced it.
#[derive(Clone, Debug)]
pub struct SceneLayout<'a> {
    pub surface: Surface,
    pub margin: f64,
    boxes: Vec<(&'a str, Rect)>,
}

impl<'a> SceneLayout<'a> {
    pub fn compute(scene: &'a Scene, surface: Surface) -> Self {
        let margin = 60.0_f64.min(surface.width * 0.08);
        let boxes = scene
            .actors
            .iter()
            .map(|a| (a.id.as_str(), actor_rect(a, surface, margin)))
            .collect();
        Self {
            surface,
            margin,
            boxes,
        }
    }

    pub fn rect(&self, actor: &str) -> Option<Rect> {
        self.boxes
            .iter()
            .find(|(id, _)| *id == actor)
            .map(|(_, r)| *r)
    }

    fn center_of(&self, ep: &Endpoint) -> Option<Point> {
        match ep {
            Endpoint::Edge { actor } | Endpoint::Center { actor } => {
                self.rect(actor).map(|r| r.center())
            }
            Endpoint::Spot { x, y } => Some(self.surface.at_fraction(*x, *y)),
        }
    }

    /// Resolve `ep`, facing towards `toward` for edge endpoints.
    pub fn endpoint(&self, ep: &Endpoint, toward: Point) -> Option<Point> {
        match ep {
            Endpoint::Edge { actor } => {
                let r = self.rect(actor)?;
                let c = r.center();
                let x = if toward.x >= c.x { r.x1 } else { r.x0 };
                Some(Point::new(x, c.y))
            }
            _ => self.center_of(ep),
        }
    }

    /// Start and end anchors of a marker, or `None` if it references a missing actor.
    pub fn marker_anchors(&self, marker: &Marker) -> Option<(Point, Point)> {
        self.segment(&marker.from, &marker.to)
    }

    pub fn segment(&self, from: &Endpoint, to: &Endpoint) -> Option<(Point, Point)> {
        let a = self.center_of(from)?;
        let b = self.center_of(to)?;
        Some((self.endpoint(from, b)?, self.endpoint(to, a)?))
    }
}

fn actor_rect(actor: &Actor, surface: Surface, margin: f64) -> Rect {
    let w = actor.size.max_w.min(surface.width * actor.size.w_frac);
    let h = actor.size.max_h.min(surface.height * actor.size.h_frac);
    let center = match actor.placement {
        Placement::Left => Point::new(margin + w / 2.0, surface.height / 2.0),
        Placement::Right => Point::new(surface.width - margin - w / 2.0, surface.height / 2.0),
        Placement::At { x, y } => surface.at_fraction(x, y),
    };
    Rect::from_center_size(center, (w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
