//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagecraft_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine entry points
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::platform::PlatformError;

// Core building blocks
pub use crate::core::{
    AssetKind, ContentCache, ContentError, GameContext, GameObject, Layer, PointerState, Scene,
    SceneManager,
};

// Graphics seam
pub use crate::gfx::{Color, FrameTime, NullBatch, RecordingBatch, SpriteBatch};
