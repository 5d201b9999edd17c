//=========================================================================
// Core Engine Systems
//=========================================================================
//
// Internal engine systems and the types game code builds on:
//
// - `context`: explicit per-game context handle (window, pointer, requests)
// - `object`:  persistent game objects and the layer collections
// - `scene`:   scene trait and the scene manager
// - `content`: eager asset cache used by the preload pass
// - `input`:   pointer state feeding the menu widgets
//
//=========================================================================

//=== Module Declarations =================================================

pub mod content;
pub mod context;
pub mod input;
pub mod object;
pub mod scene;

//=== Public API ==========================================================

pub use content::{AssetKind, ContentCache, ContentError};
pub use context::GameContext;
pub use input::PointerState;
pub use object::{GameObject, Layer};
pub use scene::{Scene, SceneManager};
