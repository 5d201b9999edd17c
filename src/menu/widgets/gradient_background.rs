//=========================================================================
// Gradient Background
//=========================================================================
//
// Full-window vertical gradient whose colors slowly cycle between the
// two configured endpoints.
//
//=========================================================================

//=== External Dependencies ===============================================

use crate::core::{GameContext, GameObject};
use crate::gfx::{Color, FrameTime, SpriteBatch};

//=== GradientBackground ==================================================

/// Animated two-color gradient filling the window.
///
/// The gradient endpoints swap smoothly over one cycle: at phase 0 the
/// configured `top` color is on top, at the half cycle the colors have
/// traded places. `speed` scales how fast the phase advances, in
/// milliseconds of phase per second of real time.
pub struct GradientBackground {
    top: Color,
    bottom: Color,
    period_ms: f32,
    speed: f32,
    phase_ms: f32,
}

impl GradientBackground {
    /// Creates a gradient cycling over `period_ms` at the given speed.
    ///
    /// # Panics
    ///
    /// Panics if `period_ms` is not positive.
    pub fn new(top: Color, bottom: Color, period_ms: u32, speed: f32) -> Self {
        assert!(period_ms > 0, "gradient period must be positive");
        Self {
            top,
            bottom,
            period_ms: period_ms as f32,
            speed,
            phase_ms: 0.0,
        }
    }

    /// Blend factor for the current phase, in `[0, 1]`.
    fn blend(&self) -> f32 {
        let turns = self.phase_ms / self.period_ms;
        0.5 - 0.5 * (turns * std::f32::consts::TAU).cos()
    }

    /// Colors at the current phase (top, bottom).
    pub fn current_colors(&self) -> (Color, Color) {
        let t = self.blend();
        (self.top.lerp(self.bottom, t), self.bottom.lerp(self.top, t))
    }
}

impl GameObject for GradientBackground {
    fn name(&self) -> &str {
        "gradient-background"
    }

    fn update(&mut self, time: &FrameTime, _ctx: &mut GameContext) {
        self.phase_ms = (self.phase_ms + time.delta_secs() * self.speed) % self.period_ms;
    }

    fn draw(&self, _time: &FrameTime, batch: &mut dyn SpriteBatch) {
        let (top, bottom) = self.current_colors();
        batch.fill_gradient(top, bottom);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
