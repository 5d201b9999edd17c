//=========================================================================
// Menu Button
//=========================================================================
//
// Pointer-driven button with a tagged release action.
//
// Interaction model:
//   press on button   → visual scale shrinks
//   release on button → scale restored, action dispatched via context
//   release elsewhere → scale restored, no side effects
//
// Per-widget behavior is a tagged command variant rather than a stored
// closure; the widget dispatches it through the game context.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::{GameContext, GameObject};
use crate::gfx::{Color, FrameTime, SpriteBatch};

//=== Constants ===========================================================

/// Visual scale while the button is held down.
const PRESSED_SCALE: f32 = 0.9;

/// Nominal glyph width/line height used for the hit rectangle.
const CHAR_WIDTH: f32 = 16.0;
const LINE_HEIGHT: f32 = 32.0;

//=== ButtonAction ========================================================

/// What a button does when released on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Request a switch to the named scene.
    LoadScene(String),

    /// Request engine exit.
    Exit,

    /// Purely decorative button.
    None,
}

//=== MenuButton ==========================================================

/// Clickable text button centered at a fixed position.
///
/// Driven by the context's pointer state during `update`; tests (and
/// custom input schemes) can call [`MenuButton::press`] and
/// [`MenuButton::release`] directly.
pub struct MenuButton {
    label: String,
    position: Vec2,
    scale: Vec2,
    action: ButtonAction,
    held: bool,
}

impl MenuButton {
    /// Creates a button at the given center position.
    pub fn new(label: impl Into<String>, position: Vec2, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            position,
            scale: Vec2::ONE,
            action,
            held: false,
        }
    }

    //--- Geometry ---------------------------------------------------------

    /// Button center position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current visual scale.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Whether a point (window coordinates) lies on the button.
    ///
    /// The hit rectangle derives from the label length at the nominal
    /// glyph size; visual scale does not shrink the hit area.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = Vec2::new(
            self.label.len() as f32 * CHAR_WIDTH * 0.5,
            LINE_HEIGHT * 0.5,
        );
        let min = self.position - half;
        let max = self.position + half;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    //--- Interaction ------------------------------------------------------

    /// Begins a press: shrinks the visual scale.
    pub fn press(&mut self) {
        debug!(target: "menu", "Button `{}` pressed", self.label);
        self.held = true;
        self.scale = Vec2::splat(PRESSED_SCALE);
    }

    /// Ends a press: restores the scale and, if released on the button,
    /// dispatches the configured action through the context.
    pub fn release(&mut self, released_on: bool, ctx: &mut GameContext) {
        self.held = false;
        self.scale = Vec2::ONE;

        if !released_on {
            return;
        }

        debug!(target: "menu", "Button `{}` activated", self.label);
        match &self.action {
            ButtonAction::LoadScene(target) => ctx.request_scene(target.clone()),
            ButtonAction::Exit => ctx.request_exit(),
            ButtonAction::None => {}
        }
    }

    /// Whether the button is currently held.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl GameObject for MenuButton {
    fn name(&self) -> &str {
        &self.label
    }

    fn update(&mut self, _time: &FrameTime, ctx: &mut GameContext) {
        let pointer = ctx.pointer;

        if pointer.just_pressed() && self.contains(pointer.position()) {
            self.press();
        }

        if pointer.just_released() && self.held {
            let released_on = self.contains(pointer.position());
            self.release(released_on, ctx);
        }
    }

    fn draw(&self, _time: &FrameTime, batch: &mut dyn SpriteBatch) {
        batch.draw_text(&self.label, self.position, self.scale, Color::WHITE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> GameContext {
        GameContext::new(Vec2::new(800.0, 600.0), false)
    }

    fn start_button() -> MenuButton {
        MenuButton::new(
            "Start Game",
            Vec2::new(400.0, 420.0),
            ButtonAction::LoadScene("game".to_owned()),
        )
    }

    //--- Direct Interaction -----------------------------------------------

    #[test]
    fn press_shrinks_scale() {
        let mut button = start_button();
        button.press();
        assert_eq!(button.scale(), Vec2::splat(0.9));
        assert!(button.is_held());
    }

    #[test]
    fn release_on_button_requests_scene() {
        let mut ctx = ctx();
        let mut button = start_button();

        button.press();
        button.release(true, &mut ctx);

        assert_eq!(button.scale(), Vec2::ONE);
        assert_eq!(ctx.take_scene_request().as_deref(), Some("game"));
    }

    #[test]
    fn release_off_button_has_no_side_effects() {
        let mut ctx = ctx();
        let mut button = start_button();

        button.press();
        button.release(false, &mut ctx);

        assert_eq!(button.scale(), Vec2::ONE);
        assert!(!ctx.has_scene_request());
        assert!(!ctx.exit_requested());
    }

    #[test]
    fn quit_button_requests_exit() {
        let mut ctx = ctx();
        let mut button = MenuButton::new("Quit", Vec2::new(400.0, 540.0), ButtonAction::Exit);

        button.press();
        button.release(true, &mut ctx);

        assert!(ctx.exit_requested());
        assert!(!ctx.has_scene_request());
    }

    #[test]
    fn decorative_button_does_nothing() {
        let mut ctx = ctx();
        let mut button = MenuButton::new("About", Vec2::ZERO, ButtonAction::None);

        button.press();
        button.release(true, &mut ctx);

        assert!(!ctx.has_scene_request());
        assert!(!ctx.exit_requested());
    }

    //--- Hit Testing ------------------------------------------------------

    #[test]
    fn contains_center_and_rejects_far_points() {
        let button = start_button();
        assert_eq!(button.position(), Vec2::new(400.0, 420.0));
        assert!(button.contains(button.position()));
        assert!(button.contains(Vec2::new(410.0, 425.0)));
        assert!(!button.contains(Vec2::new(400.0, 500.0)));
        assert!(!button.contains(Vec2::new(0.0, 0.0)));
    }

    //--- Pointer-Driven Update --------------------------------------------

    #[test]
    fn pointer_click_on_button_activates_it() {
        let mut ctx = ctx();
        let mut button = start_button();
        let time = FrameTime::default();

        // Frame 1: press on the button.
        ctx.pointer.set_position(Vec2::new(400.0, 420.0));
        ctx.pointer.set_held(true);
        button.update(&time, &mut ctx);
        assert!(button.is_held());
        assert_eq!(button.scale(), Vec2::splat(0.9));
        ctx.pointer.end_frame();

        // Frame 2: release still on the button.
        ctx.pointer.set_held(false);
        button.update(&time, &mut ctx);

        assert_eq!(button.scale(), Vec2::ONE);
        assert_eq!(ctx.take_scene_request().as_deref(), Some("game"));
    }

    #[test]
    fn pointer_drag_off_button_cancels() {
        let mut ctx = ctx();
        let mut button = start_button();
        let time = FrameTime::default();

        ctx.pointer.set_position(Vec2::new(400.0, 420.0));
        ctx.pointer.set_held(true);
        button.update(&time, &mut ctx);
        ctx.pointer.end_frame();

        // Drag away, then release.
        ctx.pointer.set_position(Vec2::new(10.0, 10.0));
        ctx.pointer.set_held(false);
        button.update(&time, &mut ctx);

        assert_eq!(button.scale(), Vec2::ONE);
        assert!(!ctx.has_scene_request());
    }

    #[test]
    fn press_elsewhere_is_ignored() {
        let mut ctx = ctx();
        let mut button = start_button();
        let time = FrameTime::default();

        ctx.pointer.set_position(Vec2::new(10.0, 10.0));
        ctx.pointer.set_held(true);
        button.update(&time, &mut ctx);

        assert!(!button.is_held());
        assert_eq!(button.scale(), Vec2::ONE);
    }

    //--- Drawing ----------------------------------------------------------

    #[test]
    fn draw_uses_current_scale() {
        use crate::gfx::{DrawCommand, RecordingBatch};

        let mut button = start_button();
        button.press();

        let mut batch = RecordingBatch::new();
        button.draw(&FrameTime::default(), &mut batch);

        assert_eq!(
            batch.commands(),
            &[DrawCommand::Text {
                text: "Start Game".to_owned(),
                position: Vec2::new(400.0, 420.0),
                scale: Vec2::splat(0.9),
                color: Color::WHITE,
            }]
        );
    }
}
