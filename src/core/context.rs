//=========================================================================
// Game Context
//=========================================================================
//
// Shared context handle threaded through every update call.
//
// Replaces a process-global "current game" accessor with an explicit
// value: objects, scenes, and widgets receive `&mut GameContext` and use
// it to read the window size, query the pointer, and request scene
// switches or engine exit. Requests are queued here and applied by the
// engine at the frame boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::input::PointerState;

//=== GameContext =========================================================

/// Context data accessible to game objects, scenes, and widgets.
///
/// # Available Data
///
/// - `window_size`: current client area in logical pixels
/// - `debug_mode`: enables diagnostic logging (e.g. preload failures)
/// - `pointer`: pointer input state for the current frame
///
/// # Requests
///
/// Scene switches and engine exit are requested through the context
/// rather than performed immediately; the engine applies them at the end
/// of the frame's update pass.
pub struct GameContext {
    /// Current window client size, kept up to date by the platform shell.
    pub window_size: Vec2,

    /// Diagnostic logging flag.
    pub debug_mode: bool,

    /// Pointer input state for the current frame.
    pub pointer: PointerState,

    exit_requested: bool,
    scene_request: Option<String>,
}

impl GameContext {
    /// Creates a context with the given initial window size.
    pub fn new(window_size: Vec2, debug_mode: bool) -> Self {
        Self {
            window_size,
            debug_mode,
            pointer: PointerState::new(),
            exit_requested: false,
            scene_request: None,
        }
    }

    //--- Exit Request -----------------------------------------------------

    /// Requests engine shutdown.
    ///
    /// Honored by the platform shell after the current frame completes.
    pub fn request_exit(&mut self) {
        debug!(target: "context", "Exit requested");
        self.exit_requested = true;
    }

    /// Whether shutdown has been requested.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    //--- Scene Request ----------------------------------------------------

    /// Requests a switch to the named scene.
    ///
    /// A later request within the same frame wins. The engine drains the
    /// request at the frame boundary and forwards it to the scene manager.
    pub fn request_scene(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(target: "context", "Scene switch requested: {}", name);
        self.scene_request = Some(name);
    }

    /// Takes the pending scene request, if any, leaving none.
    pub fn take_scene_request(&mut self) -> Option<String> {
        self.scene_request.take()
    }

    /// Whether a scene switch is pending.
    pub fn has_scene_request(&self) -> bool {
        self.scene_request.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
