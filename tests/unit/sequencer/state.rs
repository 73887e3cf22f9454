use super::*;
use crate::protocols::Registry;

fn tcp() -> &'static ProtocolDefinition {
    Registry::builtin().unwrap().get("tcp-handshake").unwrap()
}

fn ctx(now: u64) -> ReduceCtx<'static> {
    ReduceCtx {
        protocol: tcp(),
        now: Millis(now),
    }
}

#[test]
fn speed_accepts_half_steps_only() {
    for ok in [0.5, 1.0, 1.5, 2.0] {
        assert_eq!(Speed::new(ok).unwrap().value(), ok);
    }
    for bad in [0.0, 0.25, 0.75, 2.5, f64::NAN, -1.0] {
        assert!(Speed::new(bad).is_err(), "{bad}");
    }
    assert_eq!(Speed::new(2.0).unwrap().period_ms(2_000), 1_000);
    assert_eq!(Speed::new(1.5).unwrap().period_ms(2_000), 1_333);
}

#[test]
fn speed_deserializes_with_validation() {
    let s: Speed = serde_json::from_str("1.5").unwrap();
    assert_eq!(s.value(), 1.5);
    assert!(serde_json::from_str::<Speed>("3.0").is_err());
}

#[test]
fn play_announces_current_step_and_starts_timer() {
    let mut s = SimulationState::default();
    assert_eq!(reduce(&mut s, Action::Play, &ctx(0)), TimerCommand::Start);
    assert!(s.is_playing);
    assert_eq!(s.log.step_titles().collect::<Vec<_>>(), ["SYN"]);
    assert_eq!(s.phase(3), Phase::Advancing);

    // Playing again is a no-op.
    assert_eq!(reduce(&mut s, Action::Play, &ctx(10)), TimerCommand::None);
    assert_eq!(s.log.len(), 1);
}

#[test]
fn pause_then_play_does_not_duplicate_announcement() {
    let mut s = SimulationState::default();
    reduce(&mut s, Action::Play, &ctx(0));
    assert_eq!(reduce(&mut s, Action::Pause, &ctx(1)), TimerCommand::Stop);
    assert_eq!(reduce(&mut s, Action::Play, &ctx(2)), TimerCommand::Start);
    assert_eq!(s.log.len(), 1);
}

#[test]
fn ticks_advance_then_complete() {
    let mut s = SimulationState::default();
    reduce(&mut s, Action::Play, &ctx(0));
    for t in 1..=3 {
        assert_eq!(reduce(&mut s, Action::Tick, &ctx(t * 2_000)), TimerCommand::None);
    }
    assert_eq!(s.current_step, 3);
    assert!(s.is_playing);

    assert_eq!(reduce(&mut s, Action::Tick, &ctx(8_000)), TimerCommand::Stop);
    assert!(!s.is_playing);
    assert_eq!(s.current_step, 3);
    assert_eq!(s.phase(3), Phase::Complete);
    assert_eq!(
        s.log.entries().last().map(|e| e.kind.to_string()),
        Some("Simulation completed - TCP 3-Way Handshake".to_string())
    );
}

#[test]
fn stale_tick_is_ignored() {
    let mut s = SimulationState::default();
    assert_eq!(reduce(&mut s, Action::Tick, &ctx(0)), TimerCommand::None);
    assert_eq!(s.current_step, 0);
    assert!(s.log.is_empty());
}

#[test]
fn play_at_last_step_is_a_no_op() {
    let mut s = SimulationState {
        current_step: 3,
        ..SimulationState::default()
    };
    assert_eq!(reduce(&mut s, Action::Play, &ctx(0)), TimerCommand::None);
    assert!(!s.is_playing);
    assert!(s.log.is_empty());
}

#[test]
fn step_forward_saturates_and_stops() {
    let mut s = SimulationState::default();
    reduce(&mut s, Action::Play, &ctx(0));
    assert_eq!(reduce(&mut s, Action::StepForward, &ctx(1)), TimerCommand::Stop);
    assert!(!s.is_playing);
    assert_eq!(s.current_step, 1);

    for _ in 0..10 {
        reduce(&mut s, Action::StepForward, &ctx(2));
    }
    assert_eq!(s.current_step, 3);
    // Manual steps are not logged.
    assert_eq!(s.log.len(), 1);
}

#[test]
fn reset_keeps_log_and_speed() {
    let mut s = SimulationState::default();
    reduce(&mut s, Action::SetSpeed(Speed::new(2.0).unwrap()), &ctx(0));
    reduce(&mut s, Action::Play, &ctx(0));
    reduce(&mut s, Action::Tick, &ctx(1_000));
    assert_eq!(reduce(&mut s, Action::Reset, &ctx(1_500)), TimerCommand::Stop);

    assert_eq!(s.current_step, 0);
    assert!(!s.is_playing);
    assert_eq!(s.log.len(), 2);
    assert_eq!(s.speed.value(), 2.0);

    // After a reset the first step is announced again.
    reduce(&mut s, Action::Play, &ctx(2_000));
    assert_eq!(s.log.step_titles().collect::<Vec<_>>(), ["SYN", "SYN-ACK", "SYN"]);
}

#[test]
fn set_speed_reschedules_only_while_playing() {
    let mut s = SimulationState::default();
    let fast = Action::SetSpeed(Speed::new(2.0).unwrap());
    assert_eq!(reduce(&mut s, fast, &ctx(0)), TimerCommand::None);
    reduce(&mut s, Action::Play, &ctx(0));
    let slow = Action::SetSpeed(Speed::new(0.5).unwrap());
    assert_eq!(reduce(&mut s, slow, &ctx(0)), TimerCommand::Reschedule);
}

#[test]
fn toggle_alternates() {
    let mut s = SimulationState::default();
    assert_eq!(reduce(&mut s, Action::Toggle, &ctx(0)), TimerCommand::Start);
    assert_eq!(reduce(&mut s, Action::Toggle, &ctx(1)), TimerCommand::Stop);
    assert_eq!(s.phase(3), Phase::Idle);
}
