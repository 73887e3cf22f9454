use super::*;
use crate::{
    animation::ease::Ease,
    decor::theme::Theme,
    scene::{
        dsl::SceneBuilder,
        model::{Endpoint, Placement, StepSpan},
    },
};

fn handshake() -> Scene {
    SceneBuilder::new()
        .actor(Actor::new("client", "CLIENT", Placement::Left).subtitle("192.168.1.100"))
        .actor(
            Actor::new("server", "SERVER", Placement::Right)
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .link(Link::new("client", "server").dashed())
        .marker(
            StepSpan::at(0),
            Marker::between(Endpoint::edge("client"), Endpoint::edge("server"), "SYN")
                .tooltip("SYN | Seq: 1000"),
        )
        .marker(
            StepSpan::at(1),
            Marker::between(Endpoint::edge("server"), Endpoint::edge("client"), "SYN-ACK").lost(),
        )
        .check(StepSpan::from(2), Caption::new("CONNECTION ESTABLISHED", 0.5, 0.85))
        .build()
}

fn palette() -> Palette {
    Theme::DARK.palette()
}

#[test]
fn zero_sized_surface_is_a_no_op() {
    let scene = handshake();
    for surface in [
        Surface::unmounted(),
        Surface::new(0.0, 300.0),
        Surface::new(f64::NAN, 300.0),
    ] {
        assert!(render_frame(&scene, surface, 0, false, &palette()).is_empty());
    }
}

#[test]
fn frame_starts_with_clear() {
    let list = render_frame(&handshake(), Surface::new(800.0, 400.0), 0, false, &palette());
    assert_eq!(
        list.ops.first(),
        Some(&DrawOp::Clear {
            color: palette().background
        })
    );
}

#[test]
fn rendering_is_idempotent() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);
    for step in 0..3 {
        for playing in [false, true] {
            let a = render_frame(&scene, surface, step, playing, &palette());
            let b = render_frame(&scene, surface, step, playing, &palette());
            assert_eq!(a, b);
        }
    }
}

#[test]
fn cues_are_gated_by_step() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);

    let s0 = render_frame(&scene, surface, 0, false, &palette());
    assert!(s0.contains_text("SYN"));
    assert!(!s0.contains_text("SYN-ACK"));
    assert!(!s0.contains_text("ESTABLISHED"));

    let s2 = render_frame(&scene, surface, 2, false, &palette());
    assert!(s2.contains_text("CONNECTION ESTABLISHED"));
    assert!(!s2.contains_text("SYN"));
    // Actors are always present.
    assert!(s2.contains_text("CLIENT"));
    assert!(s2.contains_text("192.168.1.100"));
}

#[test]
fn lost_marker_gets_a_red_cross() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);
    let red_lines = |list: &DrawList| {
        list.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { stroke, .. } if stroke.color == Rgba8::RED))
            .count()
    };
    assert_eq!(red_lines(&render_frame(&scene, surface, 0, false, &palette())), 0);
    assert_eq!(red_lines(&render_frame(&scene, surface, 1, false, &palette())), 2);
}

#[test]
fn layout_follows_resize() {
    let scene = handshake();
    let big = render_frame(&scene, Surface::new(800.0, 400.0), 0, false, &palette());
    let small = render_frame(&scene, Surface::new(400.0, 300.0), 0, false, &palette());
    assert_ne!(big, small);
    assert_eq!(small.surface, Surface::new(400.0, 300.0));
}

#[test]
fn snapshot_ignores_elapsed_time() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);
    let base = render_frame(&scene, surface, 0, true, &palette());
    let later = render_frame_at(
        &scene,
        surface,
        0,
        true,
        &palette(),
        ProgressMode::Snapshot,
        1_500,
    );
    assert_eq!(base, later);
}

#[test]
fn elapsed_mode_moves_markers_only_while_playing() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);
    let mode = ProgressMode::Elapsed {
        duration_ms: 2_000,
        ease: Ease::Linear,
    };

    let paused = render_frame_at(&scene, surface, 0, false, &palette(), mode, 300);
    assert_eq!(paused, render_frame(&scene, surface, 0, false, &palette()));

    let early = render_frame_at(&scene, surface, 0, true, &palette(), mode, 200);
    let late = render_frame_at(&scene, surface, 0, true, &palette(), mode, 1_800);
    assert_ne!(early, late);
}

#[test]
fn hit_test_finds_marker_tooltip() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);
    // Client edge at x=150, server edge at x=650: SYN midpoint is (400, 200).
    let tip = hit_test(&scene, surface, 0, Point::new(400.0, 200.0)).unwrap();
    assert_eq!(tip.label, "SYN");
    assert_eq!(tip.text, "SYN | Seq: 1000");

    assert!(hit_test(&scene, surface, 0, Point::new(10.0, 10.0)).is_none());
    // The step-1 marker has no tooltip.
    assert!(hit_test(&scene, surface, 1, Point::new(400.0, 200.0)).is_none());
    assert!(hit_test(&scene, Surface::unmounted(), 0, Point::new(400.0, 200.0)).is_none());
}

#[test]
fn elapsed_hit_test_follows_the_drawn_marker() {
    let scene = handshake();
    let surface = Surface::new(800.0, 400.0);
    let mode = ProgressMode::Elapsed {
        duration_ms: 2_000,
        ease: Ease::Linear,
    };
    // 10% of the way from x=150 to x=650.
    let drawn = Point::new(200.0, 200.0);
    let midpoint = Point::new(400.0, 200.0);

    let tip = hit_test_at(&scene, surface, 0, true, mode, 200, drawn).unwrap();
    assert_eq!(tip.label, "SYN");
    assert!(hit_test_at(&scene, surface, 0, true, mode, 200, midpoint).is_none());

    // Paused frames keep the scripted position.
    assert!(hit_test_at(&scene, surface, 0, false, mode, 200, midpoint).is_some());
    assert!(hit_test_at(&scene, surface, 0, false, mode, 200, drawn).is_none());
}

#[test]
fn light_theme_links_stay_visible() {
    let scene = handshake();
    let palette = Theme::LIGHT.palette();
    let list = render_frame(&scene, Surface::new(800.0, 400.0), 0, false, &palette);
    let link = list
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Line { stroke, .. } if stroke.dash.is_some() => Some(stroke.color),
            _ => None,
        })
        .unwrap();
    assert_eq!(link, palette.link);
    assert_ne!(link, palette.background);
}

#[test]
fn returning_marker_retraces_the_outbound_leg() {
    let one_marker = |marker: Marker| {
        SceneBuilder::new()
            .actor(Actor::new("client", "CLIENT", Placement::Left))
            .actor(Actor::new("server", "SERVER", Placement::Right))
            .marker(StepSpan::at(0), marker.at(0.3).tooltip("SYN-ACK"))
            .build()
    };
    let swapped = one_marker(Marker::between(
        Endpoint::edge("server"),
        Endpoint::edge("client"),
        "SYN-ACK",
    ));
    let returning = one_marker(
        Marker::between(Endpoint::edge("client"), Endpoint::edge("server"), "SYN-ACK").returning(),
    );
    let surface = Surface::new(800.0, 400.0);
    let list = render_frame(&returning, surface, 0, false, &palette());
    assert_eq!(list, render_frame(&swapped, surface, 0, false, &palette()));

    // Leftward travel: the bright end of the trail sits against the marker's right side.
    let trail = list
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Trail { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .unwrap();
    assert!(trail.0.a > trail.1.a);

    let drawn = Point::new(500.0, 200.0);
    let tip = hit_test(&returning, surface, 0, drawn).unwrap();
    assert_eq!(tip.text, "SYN-ACK");
    assert_eq!(Some(tip), hit_test(&swapped, surface, 0, drawn));
}

#[test]
fn trait_object_renders_like_free_function() {
    let scene = handshake();
    let r: &dyn FrameRenderer = &scene;
    let surface = Surface::new(640.0, 360.0);
    assert_eq!(
        r.render(surface, 1, false, &palette()),
        render_frame(&scene, surface, 1, false, &palette())
    );
}
