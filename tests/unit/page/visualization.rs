use super::*;
use crate::{
    animation::ease::Ease,
    foundation::{clock::ManualClock, error::ProtovizError},
    render::draw::DrawOp,
};

fn page(id: &str, clock: &ManualClock) -> VisualizationPage<'static, ManualClock> {
    VisualizationPage::new(Registry::builtin().unwrap(), id, clock.clone())
        .unwrap()
        .with_surface(Surface::new(800.0, 400.0))
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("protoviz-page-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn unknown_protocol_is_an_error() {
    let err = VisualizationPage::new(Registry::builtin().unwrap(), "nope", ManualClock::default())
        .err()
        .unwrap();
    assert!(matches!(err, ProtovizError::UnknownProtocol(id) if id == "nope"));
}

#[test]
fn unmounted_canvas_draws_nothing_until_resized() {
    let clock = ManualClock::default();
    let mut page = VisualizationPage::new(Registry::builtin().unwrap(), "udp", clock).unwrap();
    assert!(page.frame().is_empty());
    page.resize(Surface::new(640.0, 360.0));
    let frame = page.frame();
    assert!(matches!(frame.ops.first(), Some(DrawOp::Clear { .. })));
}

#[test]
fn frame_follows_the_theme() {
    let clock = ManualClock::default();
    let mut page = page("http", &clock);
    let dark = page.frame();
    page.set_theme(Theme::LIGHT);
    let light = page.frame();
    assert_ne!(dark, light);
    assert!(matches!(
        light.ops.first(),
        Some(DrawOp::Clear { color }) if *color == Theme::LIGHT.palette().background
    ));
}

#[test]
fn panel_tracks_the_active_step_and_log_tail() {
    let clock = ManualClock::starting_at(0);
    let mut page = page("go-back-n", &clock);

    let panel = page.panel();
    assert_eq!(panel.current_step, 0);
    assert!(panel.steps[0].active);
    assert!(!panel.can_export);
    assert!(panel.recent_log.is_empty());

    page.play();
    let period = page.sequencer().tick_period_ms();
    for _ in 0..4 {
        clock.advance(period);
        page.pump();
    }

    let panel = page.panel();
    assert_eq!(panel.recent_log.len(), 5);
    assert!(panel.can_export);
    assert_eq!(
        panel.steps.iter().filter(|s| s.active).count(),
        1,
        "exactly one active step"
    );
    let active = panel.steps.iter().position(|s| s.active).unwrap();
    assert_eq!(active, panel.current_step);
    assert!(panel.steps[..active].iter().all(|s| s.done));
    assert_eq!(panel.current_title, page.protocol().steps[active].title);
    assert!(panel.recent_log.last().unwrap().contains(panel.current_title));
}

#[test]
fn selecting_a_protocol_starts_over() {
    let clock = ManualClock::starting_at(0);
    let mut page = page("tcp-handshake", &clock);
    page.set_speed(2.0).unwrap();
    page.play();
    clock.advance(1_000);
    page.pump();
    assert!(page.sequencer().ticker().is_active());

    page.select_protocol("dns").unwrap();
    let seq = page.sequencer();
    assert_eq!(seq.protocol().id, "dns");
    assert_eq!(seq.current_step(), 0);
    assert!(!seq.is_playing());
    assert_eq!(seq.speed().value(), 1.0);
    assert!(seq.log().is_empty());
    assert!(!seq.ticker().is_active());
}

#[test]
fn selecting_an_unknown_protocol_keeps_the_current_one() {
    let clock = ManualClock::default();
    let mut page = page("arp", &clock);
    page.step_forward();
    assert!(page.select_protocol("missing").is_err());
    assert_eq!(page.protocol().id, "arp");
    assert_eq!(page.sequencer().current_step(), 1);
}

#[test]
fn export_posts_a_success_notice() {
    let clock = ManualClock::starting_at(0);
    let mut page = page("icmp", &clock);
    page.play();
    let artifact = page.export_log().unwrap();
    assert_eq!(artifact.file_name, "icmp-simulation-log.txt");
    assert_eq!(
        page.take_notices(),
        [Notice::success("Simulation log exported!")]
    );
    assert!(page.notices().is_empty());
}

#[test]
fn empty_export_posts_an_error_notice() {
    let clock = ManualClock::default();
    let mut page = page("icmp", &clock);
    let err = page.export_log().unwrap_err();
    assert!(matches!(err, ProtovizError::Export(_)));
    let notices = page.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

#[test]
fn save_log_writes_and_reports_io_failures() {
    let clock = ManualClock::starting_at(0);
    let mut page = page("smtp", &clock);
    page.play();

    let dir = scratch_dir("save");
    let path = page.save_log(&dir).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("Step 1:"));

    let blocker = dir.join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();
    let err = page.save_log(&blocker).unwrap_err();
    assert!(matches!(err, ProtovizError::Export(_)));

    let levels: Vec<_> = page.take_notices().into_iter().map(|n| n.level).collect();
    assert_eq!(levels, [NoticeLevel::Success, NoticeLevel::Error]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn elapsed_mode_animates_only_while_playing() {
    let clock = ManualClock::starting_at(0);
    let mut page = page("tcp-handshake", &clock).with_progress_mode(ProgressMode::Elapsed {
        duration_ms: 1_000,
        ease: Ease::Linear,
    });
    let still = page.frame();
    page.play();
    let start = page.frame();
    clock.advance(500);
    let mid = page.frame();
    assert_ne!(start, mid);
    page.pause();
    assert_eq!(page.frame(), still);
}

#[test]
fn hover_reports_marker_tooltip() {
    let clock = ManualClock::default();
    let page = page("tcp-handshake", &clock);
    let tip = page.hit_test(Point::new(400.0, 200.0 - 0.13 * 400.0)).unwrap();
    assert_eq!(tip.label, "SYN");
    assert!(page.hit_test(Point::new(5.0, 5.0)).is_none());
}

#[test]
fn teardown_cancels_the_timer() {
    let clock = ManualClock::default();
    let mut page = page("udp", &clock);
    page.play();
    page.teardown();
    assert!(!page.sequencer().ticker().is_active());
    assert!(!page.sequencer().is_playing());
}

#[test]
fn config_drives_the_page() {
    let cfg = Config::from_json_str(
        r#"{"playback": {"base_interval_ms": 1000, "default_speed": 2.0},
            "render": {"width": 320, "height": 240},
            "theme": {"dark": false}}"#,
    )
    .unwrap();
    let page = VisualizationPage::from_config(
        Registry::builtin().unwrap(),
        "ftp",
        ManualClock::default(),
        &cfg,
    )
    .unwrap();
    assert_eq!(page.sequencer().tick_period_ms(), 500);
    assert_eq!(page.surface(), Surface::new(320.0, 240.0));
    assert_eq!(page.theme(), Theme::LIGHT);
    assert_eq!(page.progress_mode(), ProgressMode::Snapshot);
}

#[test]
fn hover_tracks_markers_in_motion() {
    let clock = ManualClock::starting_at(0);
    let mut page = page("tcp-handshake", &clock).with_progress_mode(ProgressMode::Elapsed {
        duration_ms: 2_000,
        ease: Ease::Linear,
    });
    page.play();
    clock.advance(200);

    // SYN rides lane -0.13 and is 10% of the way from x=150 to x=650.
    let y = 200.0 - 0.13 * 400.0;
    assert_eq!(page.hit_test(Point::new(200.0, y)).unwrap().label, "SYN");
    assert!(page.hit_test(Point::new(400.0, y)).is_none());
}
