use super::*;

#[test]
fn manual_clock_clones_share_timeline() {
    let a = ManualClock::starting_at(1_000);
    let b = a.clone();
    a.advance(250);
    assert_eq!(b.now(), Millis(1_250));
    b.set(Millis(5));
    assert_eq!(a.now(), Millis(5));
}

#[test]
fn system_clock_is_past_2020() {
    assert!(SystemClock.now().0 > 1_577_836_800_000);
}

#[test]
fn borrowed_clock_reads_through() {
    let clock = ManualClock::starting_at(42);
    let by_ref: &dyn Clock = &clock;
    assert_eq!((&by_ref).now(), Millis(42));
    clock.advance(8);
    assert_eq!(by_ref.now(), Millis(50));
}
