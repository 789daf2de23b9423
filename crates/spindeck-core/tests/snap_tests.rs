// Host-side tests for the pure angle helpers: round-to-nearest-step
// snapping and the active-index wrap.

use spindeck_core::{snap_to_nearest, wrap_index};
use std::f32::consts::TAU;

const N: usize = 12;

fn step() -> f32 {
    TAU / N as f32
}

// The two-branch index formula as the interaction originally computed it:
// plain `%` for non-negative snapped angles, `|(N - k) % N|` with a
// truncating remainder for negative ones.
fn branch_index(snapped: f32, step: f32, n: i64) -> usize {
    if snapped >= 0.0 {
        (((snapped / step).round() as i64) % n) as usize
    } else {
        let k = ((-snapped) / step).round() as i64;
        ((n - k) % n).abs() as usize
    }
}

#[test]
fn snaps_to_the_nearest_multiple_for_offsets_below_half_a_step() {
    let step = step();
    for k in -24..=24i32 {
        for frac in [-0.49, -0.25, 0.0, 0.25, 0.49] {
            let angle = k as f32 * step + frac * step;
            let snapped = snap_to_nearest(angle, step);
            assert!(
                (snapped - k as f32 * step).abs() < 1e-3,
                "angle {} snapped to {}, expected {}",
                angle,
                snapped,
                k as f32 * step
            );
        }
    }
}

#[test]
fn index_stays_in_range_for_arbitrary_angles() {
    let step = step();
    // large positive and large negative rotations alike
    for k in (-1000..=1000i32).step_by(7) {
        let idx = wrap_index(k as f32 * step, step, N);
        assert!(idx < N, "index {} out of range for k = {}", idx, k);
    }
}

#[test]
fn index_wrap_agrees_with_the_branch_formulas_within_one_turn() {
    let step = step();
    // positive side: any number of turns
    for k in 0..=48i32 {
        let snapped = k as f32 * step;
        assert_eq!(wrap_index(snapped, step, N), branch_index(snapped, step, N as i64));
    }
    // negative side: the branch formula is only continuous within one full
    // revolution, so agreement is pinned on that domain (0 included)
    for k in 0..=12i32 {
        let snapped = -k as f32 * step;
        assert_eq!(
            wrap_index(snapped, step, N),
            branch_index(snapped, step, N as i64),
            "diverged at k = -{}",
            k
        );
    }
}

#[test]
fn one_step_of_rotation_moves_the_index_by_one() {
    let step = step();
    for k in -24..=36i32 {
        let here = wrap_index(k as f32 * step, step, N);
        let next = wrap_index((k + 1) as f32 * step, step, N);
        assert_eq!(next, (here + 1) % N, "discontinuity between {} and {}", k, k + 1);
    }
}

#[test]
fn raw_angle_just_past_half_a_step_centers_the_next_card() {
    let step = step(); // ~0.5236 for twelve cards
    // 0.30 is past the half-step boundary (~0.2618): rounds up to card 1
    let snapped = snap_to_nearest(0.30, step);
    assert!((snapped - step).abs() < 1e-4);
    assert_eq!(wrap_index(snapped, step, N), 1);
    // 0.26 is short of the boundary: rounds back to card 0
    let snapped = snap_to_nearest(0.26, step);
    assert!(snapped.abs() < 1e-4);
    assert_eq!(wrap_index(snapped, step, N), 0);
}
