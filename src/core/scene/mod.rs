//=========================================================================
// Scene System
//=========================================================================
//
// Named, independently loadable units of game content.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<String, Box<dyn Scene>>
//     └─ current: Option<String>
//
// Flow:
//   load(name) → Scene::load(ctx, done) → update()/draw() while current
//             → Scene::unload() on switch or teardown
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::gfx::{FrameTime, SpriteBatch};

//=== Module Declarations =================================================

mod manager;

//=== Public API ==========================================================

pub use manager::SceneManager;

//=== Scene Trait =========================================================

/// A named unit of UI/game content with its own lifecycle.
///
/// Scenes are registered with the [`SceneManager`] and become active via
/// `load`. The `done` callback signals load completion; the contract is
/// callback-based, but every scene in this crate completes synchronously
/// before `load` returns.
pub trait Scene {
    /// Unique scene name used for registration and switching.
    fn name(&self) -> &str;

    /// Builds the scene's elements, then invokes `done` exactly once.
    fn load(&mut self, ctx: &mut GameContext, done: &mut dyn FnMut());

    /// Releases scene resources. Called on switch or engine teardown.
    ///
    /// Default implementation does nothing.
    fn unload(&mut self, _ctx: &mut GameContext) {}

    /// Called every frame while the scene is current.
    fn update(&mut self, time: &FrameTime, ctx: &mut GameContext);

    /// Called every frame after updates while the scene is current.
    fn draw(&self, time: &FrameTime, batch: &mut dyn SpriteBatch);
}
