//! Platform input adapter
//!
//! Hosts report which keys are held each frame; the tracker turns that into
//! a [`TickInput`], deriving press edges for the one-shot actions.

use crate::sim::TickInput;

/// Raw held-key snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub assist: bool,
    pub confirm: bool,
}

/// Remembers last frame's keys to detect presses
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: KeyState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's input. Assist and confirm fire only on the frame
    /// the key goes down.
    pub fn frame(&mut self, keys: KeyState, dt: f32) -> TickInput {
        let input = TickInput {
            rotate_left: keys.left,
            rotate_right: keys.right,
            thrust: keys.thrust,
            toggle_assist: keys.assist && !self.previous.assist,
            confirm: keys.confirm && !self.previous.confirm,
            dt,
        };
        self.previous = keys;
        input
    }
}
