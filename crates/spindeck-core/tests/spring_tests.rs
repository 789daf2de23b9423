// Behavioral tests for the spring interpolator.

use spindeck_core::{Motion, Spring, SpringConfig};

const CFG: SpringConfig = SpringConfig {
    mass: 1.0,
    tension: 150.0,
    friction: 40.0,
};

// Step in 16 ms frames for `ms` of simulated time; count completion edges.
fn run(spring: &mut Spring, ms: f32) -> usize {
    let mut completions = 0;
    let mut t = 0.0;
    while t < ms {
        if spring.step(16.0) {
            completions += 1;
        }
        t += 16.0;
    }
    completions
}

#[test]
fn converges_to_target_and_rests() {
    let mut s = Spring::at(0.0);
    s.set(1.0, CFG, Motion::EASED);
    let completions = run(&mut s, 4000.0);
    assert_eq!(completions, 1);
    assert!(s.is_at_rest());
    // value clamps exactly onto the target at rest
    assert_eq!(s.value(), 1.0);
}

#[test]
fn instant_update_jumps_without_completion() {
    let mut s = Spring::at(0.0);
    s.set(5.0, CFG, Motion::INSTANT);
    assert_eq!(s.value(), 5.0);
    assert!(s.is_at_rest());
    assert_eq!(run(&mut s, 500.0), 0);
}

#[test]
fn delayed_start_waits_before_moving() {
    let mut s = Spring::at(0.0);
    s.set_delayed(1.0, 500.0, CFG, Motion::EASED);
    run(&mut s, 480.0);
    assert_eq!(s.value(), 0.0); // still inside the delay window
    run(&mut s, 4000.0);
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 1.0);
}

#[test]
fn retarget_mid_flight_supersedes_the_old_target() {
    let mut s = Spring::at(0.0);
    s.set(1.0, CFG, Motion::EASED);
    run(&mut s, 200.0);
    s.set(0.2, CFG, Motion::EASED);
    run(&mut s, 4000.0);
    assert_eq!(s.value(), 0.2);
}

// Step until the first completion edge; false if none fires in `max_ms`.
fn step_until_completion(s: &mut Spring, max_ms: f32) -> bool {
    let mut t = 0.0;
    while t < max_ms {
        if s.step(16.0) {
            return true;
        }
        t += 16.0;
    }
    false
}

#[test]
fn looping_replays_from_the_start_until_halted() {
    let mut s = Spring::at(0.0);
    s.set(1.0, CFG, Motion::EASED_LOOPING);
    assert!(step_until_completion(&mut s, 4000.0));
    // the edge leaves the value on the target...
    assert_eq!(s.value(), 1.0);
    // ...but the next step replays from the start value
    s.step(16.0);
    assert!(s.value() < 0.5, "expected a replay, got {}", s.value());
    // and a second pass completes again
    assert!(step_until_completion(&mut s, 4000.0));
    s.halt_at(1.0);
    assert_eq!(run(&mut s, 500.0), 0);
    assert_eq!(s.value(), 1.0);
}

#[test]
fn retarget_cancels_a_queued_replay() {
    let mut s = Spring::at(0.0);
    s.set(1.0, CFG, Motion::EASED_LOOPING);
    assert!(step_until_completion(&mut s, 4000.0));
    // retarget right on the completion edge, as the settle logic does
    s.set(2.0, CFG, Motion::EASED);
    run(&mut s, 4000.0);
    assert_eq!(s.value(), 2.0);
    assert!(s.is_at_rest());
}
