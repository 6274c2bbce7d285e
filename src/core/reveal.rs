use super::constants::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use fnv::FnvHashMap;
use serde::Deserialize;

/// Observer tuning for the scroll reveal.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealOptions {
    /// CSS margin string for the observer root (top right bottom left).
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    /// First intersection: apply the marker now.
    Revealed,
    /// Terminal state already reached; nothing to do.
    AlreadyRevealed,
    /// Not intersecting, or not a tracked element.
    Ignored,
}

/// Per-element reveal state; `Revealed` is terminal. Intersection itself is
/// decided by the browser observer and fed in through `on_intersect`.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: FnvHashMap<u32, RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `id` was already registered.
    pub fn register(&mut self, id: u32) -> bool {
        if self.states.contains_key(&id) {
            return false;
        }
        self.states.insert(id, RevealState::Unrevealed);
        true
    }

    /// Register an element that is already marked in the DOM.
    pub fn register_revealed(&mut self, id: u32) {
        self.states.insert(id, RevealState::Revealed);
    }

    pub fn on_intersect(&mut self, id: u32, is_intersecting: bool) -> RevealTransition {
        let Some(state) = self.states.get_mut(&id) else {
            return RevealTransition::Ignored;
        };
        match (*state, is_intersecting) {
            (RevealState::Revealed, _) => RevealTransition::AlreadyRevealed,
            (RevealState::Unrevealed, false) => RevealTransition::Ignored,
            (RevealState::Unrevealed, true) => {
                *state = RevealState::Revealed;
                RevealTransition::Revealed
            }
        }
    }

    pub fn state(&self, id: u32) -> Option<RevealState> {
        self.states.get(&id).copied()
    }

    #[inline]
    pub fn is_revealed(&self, id: u32) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn pending_count(&self) -> usize {
        self.states.len() - self.revealed_count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
