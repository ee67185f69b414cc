#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- normalize ---

#[test]
fn centre_is_origin() {
    assert_eq!(normalize(500.0, 400.0, 1000.0, 800.0), Pointer::new(0.0, 0.0));
}

#[test]
fn corners_map_to_unit_square() {
    assert_eq!(normalize(0.0, 0.0, 1000.0, 800.0), Pointer::new(-1.0, 1.0));
    assert_eq!(normalize(1000.0, 800.0, 1000.0, 800.0), Pointer::new(1.0, -1.0));
}

#[test]
fn outside_viewport_is_clamped() {
    let p = normalize(-200.0, 5000.0, 1000.0, 800.0);
    assert_eq!(p, Pointer::new(-1.0, -1.0));
}

#[test]
fn degenerate_viewport_is_centre() {
    assert_eq!(normalize(10.0, 10.0, 0.0, -5.0), Pointer::default());
    assert_eq!(normalize(f64::NAN, 10.0, 100.0, 100.0).x, 0.0);
}

// --- PointerTracker ---

#[test]
fn tracker_starts_centred() {
    let t = PointerTracker::default();
    assert_eq!(t.current(), Pointer::default());
    assert_eq!(t.target(), Pointer::default());
}

#[test]
fn tick_moves_fraction_of_distance() {
    let mut t = PointerTracker::new(0.25);
    t.aim(1000.0, 400.0, 1000.0, 800.0);
    let p = t.tick();
    assert!(approx_eq(p.x, 0.25));
    assert!(approx_eq(p.y, 0.0));
    let p = t.tick();
    assert!(approx_eq(p.x, 0.4375));
}

#[test]
fn tick_converges_and_snaps_to_target() {
    let mut t = PointerTracker::default();
    t.aim(0.0, 0.0, 1000.0, 800.0);
    for _ in 0..500 {
        t.tick();
    }
    assert_eq!(t.current(), Pointer::new(-1.0, 1.0));
}

#[test]
fn smoothing_of_one_jumps_immediately() {
    let mut t = PointerTracker::new(1.0);
    t.aim(750.0, 200.0, 1000.0, 800.0);
    let p = t.tick();
    assert!(approx_eq(p.x, 0.5));
    assert!(approx_eq(p.y, 0.5));
}

#[test]
fn invalid_smoothing_falls_back_to_default() {
    for bad in [0.0, -1.0, 1.5, f64::NAN] {
        let mut t = PointerTracker::new(bad);
        t.aim(1000.0, 400.0, 1000.0, 800.0);
        let p = t.tick();
        assert!(approx_eq(p.x, DEFAULT_POINTER_SMOOTHING), "smoothing {bad} not replaced");
    }
}

#[test]
fn tick_stays_within_bounds() {
    let mut t = PointerTracker::new(0.5);
    for (x, y) in [(0.0, 0.0), (1000.0, 800.0), (-99.0, 9999.0), (500.0, 400.0)] {
        t.aim(x, y, 1000.0, 800.0);
        let p = t.tick();
        assert!((-1.0..=1.0).contains(&p.x));
        assert!((-1.0..=1.0).contains(&p.y));
    }
}
