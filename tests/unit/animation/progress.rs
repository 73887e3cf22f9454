use super::*;

#[test]
fn snapshot_keeps_scripted_fraction() {
    let mode = ProgressMode::Snapshot;
    assert_eq!(mode.resolve(0.5, true, 1_999), 0.5);
    assert_eq!(mode.resolve(0.3, false, 0), 0.3);
}

#[test]
fn elapsed_tracks_time_while_playing() {
    let mode = ProgressMode::Elapsed {
        duration_ms: 1_000,
        ease: Ease::Linear,
    };
    assert_eq!(mode.resolve(0.5, true, 0), 0.0);
    assert_eq!(mode.resolve(0.5, true, 250), 0.25);
    assert_eq!(mode.resolve(0.5, true, 4_000), 1.0);
}

#[test]
fn elapsed_falls_back_to_fixed_when_paused() {
    let mode = ProgressMode::Elapsed {
        duration_ms: 1_000,
        ease: Ease::Linear,
    };
    assert_eq!(mode.resolve(0.7, false, 250), 0.7);
}

#[test]
fn window_respects_delay_and_zero_duration() {
    assert_eq!(window_progress(500, 1_000, 400, Ease::Linear), 0.0);
    assert_eq!(window_progress(500, 1_000, 1_000, Ease::Linear), 0.5);
    assert_eq!(window_progress(0, 0, 1, Ease::Linear), 1.0);
}

#[test]
fn mode_round_trips_through_json_tags() {
    let json = r#"{"kind":"elapsed","duration_ms":2000,"ease":"easeInOut"}"#;
    let mode: ProgressMode = serde_json::from_str(json).unwrap();
    assert_eq!(
        mode,
        ProgressMode::Elapsed {
            duration_ms: 2000,
            ease: Ease::EaseInOut
        }
    );
}
