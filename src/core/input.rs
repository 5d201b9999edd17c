//=========================================================================
// Pointer Input
//=========================================================================
//
// Minimal pointer state tracking for menu widgets.
//
// The platform shell feeds position and button events between frames;
// per-frame deltas (just_pressed/just_released) survive until the shell
// calls end_frame() after update/draw.
//
// Frame lifecycle: events → update/draw queries → end_frame()
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== PointerState ========================================================

/// Tracks the primary pointer (mouse cursor or touch).
///
/// Persistent state (position, held) survives frame boundaries; the
/// `just_pressed` / `just_released` deltas are cleared once per frame by
/// the platform shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerState {
    //--- Persistent State (survives frame boundary) ----------------------
    position: Vec2,
    held: bool,

    //--- Frame Deltas (reset each frame via end_frame()) -----------------
    just_pressed: bool,
    just_released: bool,
}

impl PointerState {
    /// Creates a pointer at the origin with no buttons held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Feeding (platform shell) -----------------------------------

    /// Records a pointer move.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Records a button state change, deriving the per-frame deltas.
    pub fn set_held(&mut self, held: bool) {
        if held && !self.held {
            self.just_pressed = true;
        }
        if !held && self.held {
            self.just_released = true;
        }
        self.held = held;
    }

    /// Clears per-frame deltas. Called by the platform shell after the
    /// frame's update/draw pass has consumed them.
    pub fn end_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    //--- Queries ----------------------------------------------------------

    /// Current pointer position in window coordinates.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the primary button is currently held.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Whether the primary button went down this frame.
    pub fn just_pressed(&self) -> bool {
        self.just_pressed
    }

    /// Whether the primary button went up this frame.
    pub fn just_released(&self) -> bool {
        self.just_released
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let pointer = PointerState::new();
        assert!(!pointer.is_held());
        assert!(!pointer.just_pressed());
        assert!(!pointer.just_released());
        assert_eq!(pointer.position(), Vec2::ZERO);
    }

    #[test]
    fn press_sets_delta_and_held() {
        let mut pointer = PointerState::new();
        pointer.set_held(true);
        assert!(pointer.is_held());
        assert!(pointer.just_pressed());
        assert!(!pointer.just_released());
    }

    #[test]
    fn release_sets_delta() {
        let mut pointer = PointerState::new();
        pointer.set_held(true);
        pointer.end_frame();
        pointer.set_held(false);
        assert!(!pointer.is_held());
        assert!(pointer.just_released());
        assert!(!pointer.just_pressed());
    }

    #[test]
    fn repeated_press_is_not_a_new_delta() {
        let mut pointer = PointerState::new();
        pointer.set_held(true);
        pointer.end_frame();
        pointer.set_held(true);
        assert!(!pointer.just_pressed());
    }

    #[test]
    fn end_frame_keeps_held_state() {
        let mut pointer = PointerState::new();
        pointer.set_held(true);
        pointer.end_frame();
        assert!(pointer.is_held());
        assert!(!pointer.just_pressed());
    }

    #[test]
    fn position_tracks_moves() {
        let mut pointer = PointerState::new();
        pointer.set_position(Vec2::new(120.0, 40.0));
        assert_eq!(pointer.position(), Vec2::new(120.0, 40.0));
    }
}
