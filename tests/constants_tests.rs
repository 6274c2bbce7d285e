// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_ease_is_a_damping_factor() {
    // (0, 1) exclusive: 0 never moves, 1 snaps, above 1 overshoots
    assert!(FOLLOWER_EASE > 0.0 && FOLLOWER_EASE < 1.0);
    assert_eq!(FOLLOWER_EASE, 0.15);
}

#[test]
fn offscreen_default_is_outside_the_viewport() {
    assert!(FOLLOWER_OFFSCREEN.x < 0.0);
    assert!(FOLLOWER_OFFSCREEN.y < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_constants_are_within_bounds() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_BOTTOM_MARGIN_PX >= 0.0);
    assert!(REVEAL_SELECTOR.starts_with('.'));
    assert_ne!(REVEALED_CLASS, &REVEAL_SELECTOR[1..]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn contact_constants_have_logical_relationships() {
    assert!(MESSAGE_HIGHLIGHT_AFTER < MESSAGE_SOFT_LIMIT);
    assert_eq!(REDIRECT_DELAY_MS, 3000);
    assert!(DEFAULT_ENDPOINT_URL.starts_with("https://"));
}

#[test]
fn interactive_markers_are_lowercase() {
    for tag in INTERACTIVE_TAGS.iter().chain(INTERACTIVE_ROLES) {
        assert_eq!(*tag, tag.to_ascii_lowercase());
    }
}
