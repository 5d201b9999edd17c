//=========================================================================
// Menu Text
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::{GameContext, GameObject};
use crate::gfx::{Color, FrameTime, SpriteBatch};

//=== MenuText ============================================================

/// Static text label centered at a fixed position.
pub struct MenuText {
    label: String,
    position: Vec2,
    color: Color,
}

impl MenuText {
    /// Creates a white label at the given position.
    pub fn new(label: impl Into<String>, position: Vec2) -> Self {
        Self {
            label: label.into(),
            position,
            color: Color::WHITE,
        }
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Label position (center).
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

impl GameObject for MenuText {
    fn name(&self) -> &str {
        &self.label
    }

    fn update(&mut self, _time: &FrameTime, _ctx: &mut GameContext) {}

    fn draw(&self, _time: &FrameTime, batch: &mut dyn SpriteBatch) {
        batch.draw_text(&self.label, self.position, Vec2::ONE, self.color);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
