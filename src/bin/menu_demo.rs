//=========================================================================
// Menu Demo
//=========================================================================
//
// Runs the sample main-menu game in a window with a no-op renderer.
//
//   RUST_LOG=debug cargo run --bin menu_demo
//
//=========================================================================

use glam::Vec2;
use log::info;

use stagecraft_engine::menu::{MainMenuScene, MenuText};
use stagecraft_engine::prelude::*;

//=== Placeholder Scenes ==================================================

/// Stand-in scene for the menu's switch targets: a single centered label.
struct PlaceholderScene {
    name: &'static str,
    label: Option<MenuText>,
}

impl PlaceholderScene {
    fn boxed(name: &'static str) -> Box<dyn Scene> {
        Box::new(Self { name, label: None })
    }
}

impl Scene for PlaceholderScene {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&mut self, ctx: &mut GameContext, done: &mut dyn FnMut()) {
        self.label = Some(MenuText::new(
            format!("<{}>", self.name),
            ctx.window_size * Vec2::new(0.5, 0.5),
        ));
        done();
    }

    fn unload(&mut self, _ctx: &mut GameContext) {
        self.label = None;
    }

    fn update(&mut self, _time: &FrameTime, _ctx: &mut GameContext) {}

    fn draw(&self, time: &FrameTime, batch: &mut dyn SpriteBatch) {
        if let Some(label) = &self.label {
            label.draw(time, batch);
        }
    }
}

//=== Entry Point =========================================================

fn main() {
    env_logger::init();

    info!("Starting menu demo");

    let result = EngineBuilder::new()
        .with_title("Stagecraft Menu Demo")
        .with_screen_size(800, 600)
        .with_background_color(Color::BLACK)
        .with_content_root("content")
        .with_debug(true)
        .add_scene(Box::new(MainMenuScene::new()))
        .add_scene(PlaceholderScene::boxed("game"))
        .add_scene(PlaceholderScene::boxed("intro"))
        .preload_textures(["menu/background", "menu/button"])
        .preload_fonts(["menu/title"])
        .build()
        .run(Box::new(NullBatch::new()));

    if let Err(e) = result {
        eprintln!("engine failed: {}", e);
        std::process::exit(1);
    }
}
