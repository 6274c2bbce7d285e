use super::constants::{FOLLOWER_EASE, FOLLOWER_OFFSCREEN};
use glam::Vec2;

/// Ephemeral pointer state owned by the cursor follower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub hovering_interactive: bool,
    pub visible: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            raw: FOLLOWER_OFFSCREEN,
            smoothed: FOLLOWER_OFFSCREEN,
            hovering_interactive: false,
            visible: false,
        }
    }
}

/// Damped first-order follower: the dot tracks `raw` directly, the ring
/// tracks `smoothed`, which closes `ease` of the remaining gap each tick.
#[derive(Clone, Debug)]
pub struct Follower {
    state: PointerState,
    ease: f32,
}

impl Default for Follower {
    fn default() -> Self {
        Self::new(FOLLOWER_EASE)
    }
}

impl Follower {
    /// Ease outside the open interval (0, 1) would stall or overshoot, so it
    /// falls back to the default factor.
    pub fn new(ease: f32) -> Self {
        let ease = if ease > 0.0 && ease < 1.0 {
            ease
        } else {
            log::warn!(
                "[cursor] ease {} outside (0, 1); using {}",
                ease,
                FOLLOWER_EASE
            );
            FOLLOWER_EASE
        };
        Self {
            state: PointerState::default(),
            ease,
        }
    }

    #[inline]
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    #[inline]
    pub fn ease(&self) -> f32 {
        self.ease
    }

    /// Record the raw pointer position. Returns true on the first move, which
    /// also seeds the smoothed position so the ring does not fly in from
    /// off-screen.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.state.raw = Vec2::new(x, y);
        if self.state.visible {
            return false;
        }
        self.state.smoothed = self.state.raw;
        self.state.visible = true;
        true
    }

    /// Returns true when the hover state changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.state.hovering_interactive != hovering;
        self.state.hovering_interactive = hovering;
        changed
    }

    /// Advance the ring one frame and return its new position.
    pub fn tick(&mut self) -> Vec2 {
        self.state.smoothed = lerp_step(self.state.smoothed, self.state.raw, self.ease);
        self.state.smoothed
    }

    #[inline]
    pub fn dot_position(&self) -> Vec2 {
        self.state.raw
    }

    #[inline]
    pub fn ring_position(&self) -> Vec2 {
        self.state.smoothed
    }
}

#[inline]
pub fn lerp_step(current: Vec2, target: Vec2, ease: f32) -> Vec2 {
    current + (target - current) * ease
}

/// CSS transform placing an element's origin at `pos` (viewport px).
#[inline]
pub fn translate3d(pos: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", pos.x, pos.y)
}
