// Host-side tests for the pointer follower math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
}

use crate::core::constants::{FOLLOWER_EASE, FOLLOWER_OFFSCREEN};
use crate::core::follower::*;
use glam::Vec2;

#[test]
fn mounts_offscreen_and_invisible() {
    let f = Follower::default();
    let s = f.state();
    assert_eq!(s.raw, FOLLOWER_OFFSCREEN);
    assert_eq!(s.smoothed, FOLLOWER_OFFSCREEN);
    assert!(!s.visible);
    assert!(!s.hovering_interactive);
    assert_eq!(f.ease(), FOLLOWER_EASE);
}

#[test]
fn first_move_seeds_ring_and_shows_follower() {
    let mut f = Follower::default();
    assert!(f.on_pointer_move(400.0, 300.0));
    assert!(f.state().visible);
    assert_eq!(f.dot_position(), Vec2::new(400.0, 300.0));
    // seeded, so the ring starts where the dot is instead of flying in
    assert_eq!(f.ring_position(), Vec2::new(400.0, 300.0));
    assert_eq!(f.tick(), Vec2::new(400.0, 300.0));
}

#[test]
fn visibility_never_reverts() {
    let mut f = Follower::default();
    let moves = [(1.0, 1.0), (-50.0, 20.0), (0.0, 0.0), (1e6, -1e6), (3.0, 4.0)];
    for (i, (x, y)) in moves.iter().enumerate() {
        let first = f.on_pointer_move(*x, *y);
        assert_eq!(first, i == 0);
        f.tick();
        f.set_hovering(i % 2 == 0);
        assert!(f.state().visible);
    }
}

#[test]
fn later_moves_do_not_reseed_the_ring() {
    let mut f = Follower::default();
    f.on_pointer_move(0.0, 0.0);
    f.on_pointer_move(100.0, 0.0);
    assert_eq!(f.dot_position(), Vec2::new(100.0, 0.0));
    assert_eq!(f.ring_position(), Vec2::ZERO);
    let p = f.tick();
    assert!((p.x - 15.0).abs() < 1e-4, "got {}", p.x);
    assert_eq!(p.y, 0.0);
}

#[test]
fn smoothed_converges_geometrically_without_overshoot() {
    let mut f = Follower::default();
    f.on_pointer_move(0.0, 0.0);
    let target = Vec2::new(200.0, -80.0);
    f.on_pointer_move(target.x, target.y);

    let e0 = (f.ring_position() - target).length();
    let mut prev = e0;
    for n in 1..=40 {
        let p = f.tick();
        let err = (p - target).length();
        let expected = (1.0 - FOLLOWER_EASE).powi(n) * e0;
        assert!(
            (err - expected).abs() <= 1e-3 * e0,
            "tick {}: err {} expected {}",
            n,
            err,
            expected
        );
        assert!(err < prev, "error must strictly decrease");
        // never passes the target on either axis
        assert!(p.x <= target.x && p.y >= target.y);
        prev = err;
    }
}

#[test]
fn axes_are_smoothed_independently() {
    let mut f = Follower::default();
    f.on_pointer_move(10.0, 10.0);
    f.on_pointer_move(10.0, 110.0);
    let p = f.tick();
    assert_eq!(p.x, 10.0);
    assert!((p.y - 25.0).abs() < 1e-4);
}

#[test]
fn hover_reports_changes_only() {
    let mut f = Follower::default();
    assert!(!f.set_hovering(false));
    assert!(f.set_hovering(true));
    assert!(!f.set_hovering(true));
    assert!(f.state().hovering_interactive);
    assert!(f.set_hovering(false));
}

#[test]
fn out_of_range_ease_falls_back_to_default() {
    assert_eq!(Follower::new(0.0).ease(), FOLLOWER_EASE);
    assert_eq!(Follower::new(1.0).ease(), FOLLOWER_EASE);
    assert_eq!(Follower::new(-0.5).ease(), FOLLOWER_EASE);
    assert_eq!(Follower::new(f32::NAN).ease(), FOLLOWER_EASE);
    assert_eq!(Follower::new(0.3).ease(), 0.3);
}

#[test]
fn lerp_step_and_transform_format() {
    let p = lerp_step(Vec2::ZERO, Vec2::new(10.0, 20.0), 0.5);
    assert_eq!(p, Vec2::new(5.0, 10.0));
    assert_eq!(
        translate3d(Vec2::new(400.0, 300.0)),
        "translate3d(400px, 300px, 0)"
    );
    assert_eq!(
        translate3d(FOLLOWER_OFFSCREEN),
        "translate3d(-100px, -100px, 0)"
    );
}
