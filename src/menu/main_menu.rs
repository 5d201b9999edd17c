//=========================================================================
// Main Menu Scene
//=========================================================================
//
// Declarative composition only: a gradient backdrop, a title, and three
// buttons positioned as fractions of the current window size.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::widgets::{ButtonAction, GradientBackground, MenuButton, MenuText};
use crate::core::{GameContext, GameObject, Scene};
use crate::gfx::{Color, FrameTime, SpriteBatch};

//=== MainMenuScene =======================================================

/// The sample game's entry scene (name `"main"`).
///
/// On load it builds its widget list from the current window size and
/// signals completion synchronously. "Start Game" and "Back to Intro"
/// request scene switches; "Quit" requests engine exit.
pub struct MainMenuScene {
    elements: Vec<Box<dyn GameObject>>,
}

impl MainMenuScene {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Number of elements currently composed into the scene.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Default for MainMenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MainMenuScene {
    fn name(&self) -> &str {
        "main"
    }

    fn load(&mut self, ctx: &mut GameContext, done: &mut dyn FnMut()) {
        let window = ctx.window_size;

        self.elements.clear();
        self.elements.push(Box::new(GradientBackground::new(
            Color::ORANGE,
            Color::BLUE,
            2000,
            100.0,
        )));
        self.elements.push(Box::new(MenuText::new(
            "Main Menu",
            window * Vec2::new(0.5, 0.2),
        )));
        self.elements.push(Box::new(MenuButton::new(
            "Start Game",
            window * Vec2::new(0.5, 0.7),
            ButtonAction::LoadScene("game".to_owned()),
        )));
        self.elements.push(Box::new(MenuButton::new(
            "Back to Intro",
            window * Vec2::new(0.5, 0.8),
            ButtonAction::LoadScene("intro".to_owned()),
        )));
        self.elements.push(Box::new(MenuButton::new(
            "Quit",
            window * Vec2::new(0.5, 0.9),
            ButtonAction::Exit,
        )));

        done();
    }

    fn unload(&mut self, _ctx: &mut GameContext) {
        self.elements.clear();
    }

    fn update(&mut self, time: &FrameTime, ctx: &mut GameContext) {
        for element in &mut self.elements {
            element.update(time, ctx);
        }
    }

    fn draw(&self, time: &FrameTime, batch: &mut dyn SpriteBatch) {
        for element in &self.elements {
            element.draw(time, batch);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
