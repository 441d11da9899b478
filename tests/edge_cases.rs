//! Edge case tests for the presence accumulator, driven with synthetic
//! timestamp sequences.

use sthiti_core::{Error, PresenceAccumulator, PresenceState};

fn feed(acc: &mut PresenceAccumulator, samples: &[(f64, bool)]) {
    for &(t, present) in samples {
        acc.observe(t, present).unwrap();
    }
}

#[test]
fn test_totals_never_decrease_over_a_noisy_session() {
    // Irregular cadence, plenty of flickers on both sides.
    let samples = [
        (0.0, true),
        (0.4, true),
        (0.9, false),
        (1.1, true),
        (2.0, true),
        (3.5, true),
        (5.0, true),
        (5.2, false),
        (8.0, false),
        (11.5, false),
        (11.9, true),
        (12.4, false),
        (16.0, false),
        (16.5, true),
        (20.0, true),
        (25.0, true),
    ];

    let mut acc = PresenceAccumulator::new();
    let mut prev = (0.0, 0.0);
    for &(t, present) in &samples {
        acc.observe(t, present).unwrap();
        let now = (acc.present_time(), acc.absent_time());
        assert!(now.0 >= prev.0, "present total decreased at t={}", t);
        assert!(now.1 >= prev.1, "absent total decreased at t={}", t);
        assert!(now.0 >= 0.0 && now.1 >= 0.0);
        prev = now;
    }
}

#[test]
fn test_flicker_on_either_side_leaves_no_trace() {
    // Confirmed present run, then a sub-threshold absent blip.
    let mut acc = PresenceAccumulator::new();
    feed(&mut acc, &[(0.0, true), (2.0, true), (4.0, true)]);
    let confirmed = acc.present_time();
    assert!(confirmed > 0.0);

    feed(&mut acc, &[(5.0, false), (6.0, true)]);
    assert_eq!(acc.present_time(), confirmed);
    assert_eq!(acc.absent_time(), 0.0);

    // Symmetric: confirmed absent run, then a sub-threshold present blip.
    let mut acc = PresenceAccumulator::new();
    feed(&mut acc, &[(0.0, false), (2.0, false), (4.0, false)]);
    let confirmed = acc.absent_time();
    assert!(confirmed > 0.0);

    feed(&mut acc, &[(5.0, true), (6.0, false)]);
    assert_eq!(acc.absent_time(), confirmed);
    assert_eq!(acc.present_time(), 0.0);
}

#[test]
fn test_rapid_alternation_confirms_nothing() {
    // Flip every second with a 3s debounce: no run ever sustains long
    // enough, so the whole noisy stretch counts for nothing.
    let mut acc = PresenceAccumulator::new();
    for i in 0..50 {
        acc.observe(i as f64, i % 2 == 0).unwrap();
    }
    assert_eq!(acc.present_time(), 0.0);
    assert_eq!(acc.absent_time(), 0.0);
}

#[test]
fn test_single_long_gap_counts_in_one_chunk() {
    // Two observations far apart fold the whole gap at once.
    let mut acc = PresenceAccumulator::new();
    feed(&mut acc, &[(0.0, true), (100.0, true)]);
    assert_eq!(acc.present_time(), 100.0);
}

#[test]
fn test_clear_then_reuse_accepts_any_monotonic_stream() {
    let mut acc = PresenceAccumulator::new();
    feed(&mut acc, &[(50.0, true), (60.0, true)]);
    assert!(acc.present_time() > 0.0);

    acc.clear();
    assert_eq!(acc.present_time(), 0.0);
    assert_eq!(acc.absent_time(), 0.0);

    // Timestamps restart below anything seen before the clear.
    feed(&mut acc, &[(0.0, false), (4.0, false)]);
    assert_eq!(acc.absent_time(), 4.0);
}

#[test]
fn test_out_of_order_and_duplicates_fail_fast() {
    let mut acc = PresenceAccumulator::new();
    feed(&mut acc, &[(1.0, true), (2.0, true)]);

    assert!(matches!(
        acc.observe(0.5, true),
        Err(Error::OutOfOrder { .. })
    ));
    assert!(matches!(
        acc.observe(2.0, false),
        Err(Error::OutOfOrder { .. })
    ));

    // A rejected call changes nothing; the stream resumes cleanly.
    acc.observe(3.0, true).unwrap();
    acc.observe(6.0, true).unwrap();
    assert_eq!(acc.present_time(), 5.0);
    assert_eq!(acc.state(), PresenceState::Present);
}

#[test]
fn test_threshold_boundary_is_strict() {
    // Pending exactly equal to the debounce threshold is not confirmed.
    let mut acc = PresenceAccumulator::new();
    feed(&mut acc, &[(0.0, true), (3.0, true)]);
    assert_eq!(acc.present_time(), 0.0);

    // One more instant of sustained presence tips it over.
    acc.observe(3.5, true).unwrap();
    assert_eq!(acc.present_time(), 3.5);
}

#[test]
fn test_many_small_steps_accumulate_accurately() {
    // 10 minutes of continuous presence at 2 Hz.
    let mut acc = PresenceAccumulator::new();
    for i in 0..1200 {
        acc.observe(i as f64 * 0.5, true).unwrap();
    }
    // Total span is 599.5s; whatever is still pending is less than the
    // 3s debounce threshold.
    assert!(acc.present_time() > 596.0);
    assert!(acc.present_time() <= 599.5);
    assert_eq!(acc.absent_time(), 0.0);
}
