//=========================================================================
// Stagecraft Engine — Library Root
//
// This crate defines the public API surface of the Stagecraft Engine.
//
// Responsibilities:
// - Expose the engine entry points (`Engine`, `EngineBuilder`)
// - Provide the core building blocks (game objects, layers, scenes,
//   content cache, game context)
// - Keep OS integration (`platform`) behind the `Engine::run` facade
//
// Typical usage:
// ```no_run
// use stagecraft_engine::prelude::*;
// use stagecraft_engine::menu::MainMenuScene;
//
// fn main() {
//     EngineBuilder::new()
//         .with_title("Sample")
//         .add_scene(Box::new(MainMenuScene::new()))
//         .build()
//         .run(Box::new(NullBatch::new()))
//         .unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the engine building blocks (objects, layers, scenes,
// content, context). `gfx` holds the rendering seam. `menu` is the
// sample game shipped with the engine.
//
pub mod core;
pub mod gfx;
pub mod menu;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit shell (window, event loop) and is kept
// private; applications reach it only through `Engine::run`.
//
// `engine` defines the builder and the lifecycle host.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::PlatformError;
