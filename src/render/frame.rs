use crate::{
    animation::{entity::AnimatedEntity, progress::ProgressMode},
    decor::theme::Palette,
    foundation::core::{Point, Rect, Rgba8, Surface, Vec2},
    render::draw::{DrawList, DrawOp, Font, Glow, Stroke, text},
    scene::{
        layout::SceneLayout,
        model::{Actor, Caption, Item, Link, Marker, Scene, Slots},
    },
};

const GRID_PITCH: f64 = 40.0;
const HOVER_MARGIN: f64 = 6.0;
const LOST_CROSS: f64 = 14.0;

/// Hover text for the marker under the pointer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Tooltip {
    pub label: String,
    pub text: String,
    /// Marker body bounds the tooltip is attached to.
    pub bounds: Rect,
}

/// Something that can produce a full frame for a step.
pub trait FrameRenderer {
    fn render(&self, surface: Surface, step: usize, playing: bool, palette: &Palette) -> DrawList;

    fn hit_test(&self, surface: Surface, step: usize, point: Point) -> Option<Tooltip>;
}

impl FrameRenderer for Scene {
    fn render(&self, surface: Surface, step: usize, playing: bool, palette: &Palette) -> DrawList {
        render_frame(self, surface, step, playing, palette)
    }

    fn hit_test(&self, surface: Surface, step: usize, point: Point) -> Option<Tooltip> {
        hit_test(self, surface, step, point)
    }
}

/// Render the frame for `step`, with every in-flight marker frozen at its scripted fraction.
///
/// The frame is rebuilt from scratch: it starts with a `Clear` and recomputes the layout from
/// `surface`. A surface with no area yields an empty list.
#[tracing::instrument(skip(scene, palette))]
pub fn render_frame(
    scene: &Scene,
    surface: Surface,
    step: usize,
    playing: bool,
    palette: &Palette,
) -> DrawList {
    render_frame_at(
        scene,
        surface,
        step,
        playing,
        palette,
        ProgressMode::Snapshot,
        0,
    )
}

/// Like [`render_frame`], with marker progress resolved through `mode`.
///
/// `elapsed_ms` is the time spent in the current step.
#[tracing::instrument(skip(scene, palette))]
pub fn render_frame_at(
    scene: &Scene,
    surface: Surface,
    step: usize,
    playing: bool,
    palette: &Palette,
    mode: ProgressMode,
    elapsed_ms: u64,
) -> DrawList {
    let mut out = DrawList::new(surface);
    if !surface.is_drawable() {
        tracing::trace!("surface has no area, skipping frame");
        return out;
    }

    out.push(DrawOp::Clear {
        color: palette.background,
    });
    draw_grid(&mut out, surface, palette);

    let layout = SceneLayout::compute(scene, surface);
    for link in &scene.links {
        draw_link(&mut out, &layout, link, palette);
    }
    for actor in &scene.actors {
        if let Some(rect) = layout.rect(&actor.id) {
            draw_actor(&mut out, actor, rect);
        }
    }

    for cue in scene.active_cues(step) {
        match &cue.item {
            Item::Marker(m) => {
                let progress = mode.resolve(m.at, playing, elapsed_ms);
                if let Some(entity) = marker_entity(&layout, m, progress) {
                    out.extend(entity.render(surface));
                    if m.lost {
                        out.extend(cross(entity.position(surface), LOST_CROSS));
                    }
                }
            }
            Item::Caption(c) => out.push(caption(surface, c, palette.text)),
            Item::Check(c) => draw_check(&mut out, surface, c),
            Item::Cross { x, y, size } => out.extend(cross(surface.at_fraction(*x, *y), *size)),
            Item::Slots(s) => draw_slots(&mut out, surface, s, palette),
            Item::Badge { actor, text: t, color } => {
                if let Some(r) = layout.rect(actor) {
                    out.push(text(
                        Point::new(r.center().x, r.y1 + 18.0),
                        t.clone(),
                        Font::bold(11.0),
                        *color,
                    ));
                }
            }
        }
    }

    out
}

/// Tooltip of the topmost marker visible at `step` whose body contains `point`.
pub fn hit_test(scene: &Scene, surface: Surface, step: usize, point: Point) -> Option<Tooltip> {
    hit_test_at(scene, surface, step, false, ProgressMode::Snapshot, 0, point)
}

/// Like [`hit_test`], with markers placed where [`render_frame_at`] draws them.
pub fn hit_test_at(
    scene: &Scene,
    surface: Surface,
    step: usize,
    playing: bool,
    mode: ProgressMode,
    elapsed_ms: u64,
    point: Point,
) -> Option<Tooltip> {
    if !surface.is_drawable() {
        return None;
    }
    let layout = SceneLayout::compute(scene, surface);
    let markers: Vec<&Marker> = scene
        .active_cues(step)
        .filter_map(|c| match &c.item {
            Item::Marker(m) => Some(m),
            _ => None,
        })
        .collect();

    markers.into_iter().rev().find_map(|m| {
        let tip = m.tooltip.as_ref()?;
        let progress = mode.resolve(m.at, playing, elapsed_ms);
        let bounds = marker_entity(&layout, m, progress)?.bounds(surface)?;
        bounds
            .inflate(HOVER_MARGIN, HOVER_MARGIN)
            .contains(point)
            .then(|| Tooltip {
                label: m.label.clone(),
                text: tip.clone(),
                bounds,
            })
    })
}

fn marker_entity(layout: &SceneLayout<'_>, m: &Marker, progress: f64) -> Option<AnimatedEntity> {
    let (start, end) = layout.marker_anchors(m)?;
    let mut entity = AnimatedEntity::new(m.label.clone(), progress)
        .color(m.color, m.text_color)
        .offset(m.lane * layout.surface.height)
        .anchors(start, end)
        .shape(m.shape);
    if let Some(sub) = &m.subtitle {
        entity = entity.subtitle(sub.clone());
    }
    if m.returning {
        entity = entity.reversed();
    }
    Some(entity)
}

fn draw_grid(out: &mut DrawList, surface: Surface, palette: &Palette) {
    let stroke = Stroke::solid(palette.grid, 1.0);
    let mut x = GRID_PITCH;
    while x < surface.width {
        out.push(DrawOp::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, surface.height),
            stroke,
            glow: None,
        });
        x += GRID_PITCH;
    }
    let mut y = GRID_PITCH;
    while y < surface.height {
        out.push(DrawOp::Line {
            from: Point::new(0.0, y),
            to: Point::new(surface.width, y),
            stroke,
            glow: None,
        });
        y += GRID_PITCH;
    }
}

fn draw_link(out: &mut DrawList, layout: &SceneLayout<'_>, link: &Link, palette: &Palette) {
    let (Some(a), Some(b)) = (layout.rect(&link.from), layout.rect(&link.to)) else {
        return;
    };
    let dy = Vec2::new(0.0, link.lane * layout.surface.height);
    let (ax, bx) = if b.center().x >= a.center().x {
        (a.x1, b.x0)
    } else {
        (a.x0, b.x1)
    };
    let from = Point::new(ax, a.center().y) + dy;
    let to = Point::new(bx, b.center().y) + dy;

    let color = link.color.map_or(palette.link, |c| c.with_opacity(0.5));
    let stroke = if link.dashed {
        Stroke::dashed(color, 2.0, 5.0, 5.0)
    } else {
        Stroke::solid(color, 2.0)
    };
    out.push(DrawOp::Line {
        from,
        to,
        stroke,
        glow: None,
    });

    if link.arrow {
        let dir = (to - from).normalize();
        let normal = Vec2::new(-dir.y, dir.x);
        let base = to - dir * 10.0;
        out.push(DrawOp::Polyline {
            points: vec![to, base + normal * 5.0, base - normal * 5.0],
            closed: true,
            fill: Some(color),
            stroke: None,
        });
    }

    if let Some(label) = &link.label {
        let mid = from.midpoint(to);
        out.push(text(
            Point::new(mid.x, mid.y - 8.0),
            label.clone(),
            Font::regular(10.0),
            palette.muted,
        ));
    }
}

fn draw_actor(out: &mut DrawList, actor: &Actor, rect: Rect) {
    out.push(DrawOp::Rect {
        rect: rect.inflate(4.0, 4.0),
        radius: 10.0,
        fill: Some(actor.color.with_opacity(0.2)),
        stroke: None,
        glow: Some(Glow {
            color: actor.color,
            blur: 20.0,
        }),
    });
    out.push(DrawOp::Rect {
        rect,
        radius: 8.0,
        fill: Some(actor.color),
        stroke: Some(Stroke::solid(actor.color, 2.0)),
        glow: None,
    });

    let c = rect.center();
    let label_y = if actor.subtitle.is_some() {
        c.y - 4.0
    } else {
        c.y + 5.0
    };
    out.push(text(
        Point::new(c.x, label_y),
        actor.label.clone(),
        Font::bold(13.0),
        actor.text_color,
    ));
    if let Some(sub) = &actor.subtitle {
        out.push(text(
            Point::new(c.x, c.y + 12.0),
            sub.clone(),
            Font::regular(9.0),
            actor.text_color,
        ));
    }
}

fn caption(surface: Surface, c: &Caption, fallback: Rgba8) -> DrawOp {
    let font = if c.bold {
        Font::bold(c.size)
    } else {
        Font::regular(c.size)
    };
    text(
        surface.at_fraction(c.x, c.y),
        c.text.clone(),
        font,
        c.color.unwrap_or(fallback),
    )
}

fn draw_check(out: &mut DrawList, surface: Surface, c: &Caption) {
    let color = c.color.unwrap_or(Rgba8::GREEN);
    let at = surface.at_fraction(c.x, c.y);
    // Rough advance width; text is centered on `at`.
    let half = c.text.chars().count() as f64 * c.size * 0.3;
    let s = c.size * 0.5;
    let x = at.x - half - s - 8.0;
    let y = at.y - s * 0.6;
    out.push(DrawOp::Polyline {
        points: vec![
            Point::new(x - s, y),
            Point::new(x - s * 0.3, y + s * 0.7),
            Point::new(x + s, y - s * 0.7),
        ],
        closed: false,
        fill: None,
        stroke: Some(Stroke::solid(color, 3.0)),
    });
    out.push(caption(
        surface,
        &Caption {
            color: Some(color),
            bold: true,
            ..c.clone()
        },
        color,
    ));
}

fn cross(center: Point, size: f64) -> [DrawOp; 2] {
    let h = size / 2.0;
    let stroke = Stroke::solid(Rgba8::RED, 3.0);
    [
        DrawOp::Line {
            from: center + Vec2::new(-h, -h),
            to: center + Vec2::new(h, h),
            stroke,
            glow: None,
        },
        DrawOp::Line {
            from: center + Vec2::new(h, -h),
            to: center + Vec2::new(-h, h),
            stroke,
            glow: None,
        },
    ]
}

fn draw_slots(out: &mut DrawList, surface: Surface, s: &Slots, palette: &Palette) {
    let origin = surface.at_fraction(s.x, s.y);
    let step = if s.vertical {
        Vec2::new(0.0, s.pitch)
    } else {
        Vec2::new(s.pitch, 0.0)
    };

    for i in 0..s.count {
        let top_left = origin + step * i as f64;
        let rect = Rect::from_origin_size(top_left, (s.size, s.size));
        let filled = s.filled.contains(&i);
        let (fill, stroke) = if filled {
            (
                Some(s.color.with_opacity(0.3)),
                Stroke::solid(s.color, 2.0),
            )
        } else {
            (None, Stroke::dashed(palette.muted, 1.0, 4.0, 4.0))
        };
        out.push(DrawOp::Rect {
            rect,
            radius: 4.0,
            fill,
            stroke: Some(stroke),
            glow: None,
        });

        if filled || s.ghost_labels {
            let color = if filled { s.color } else { palette.muted };
            out.push(text(
                Point::new(rect.center().x, rect.center().y + 4.0),
                format!("{}{i}", s.prefix),
                Font::bold(11.0),
                color,
            ));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
