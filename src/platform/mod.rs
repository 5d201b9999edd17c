//=========================================================================
// Platform Shell
//=========================================================================
//
// Bridges Winit (OS-level events) to the engine lifecycle.
//
// Architecture:
// ```text
//  Winit Event Loop (main thread)
//    ├─ resumed            → create window, initialize(), load_content()
//    ├─ CursorMoved/Mouse  → feed GameContext::pointer
//    ├─ Resized            → update GameContext::window_size
//    ├─ RedrawRequested    → FrameTime → update() → draw() → end_frame()
//    └─ CloseRequested     → unload_content(), exit
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: update and draw run back to
//   back once per redraw; pointer deltas are cleared afterwards.
// - **Lazy window creation**: the window is created in `resumed()`
//   (mobile compatibility), and the engine lifecycle starts with it.
// - **Physical pixels everywhere**: the context's window size is taken
//   from the created window's inner size before any scene loads, and is
//   refreshed on resize and scale-factor changes. Scene layout and
//   cursor positions therefore share one coordinate space.
// - **Exit via context**: widgets request exit on the GameContext; the
//   shell honors it after the frame completes and unloads content first.
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use glam::Vec2;
use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::engine::Engine;
use crate::gfx::{FrameTime, SpriteBatch};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the engine cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and lifecycle driver.
///
/// Owns the engine and the sprite batch, runs on the main thread, and
/// translates Winit events into engine lifecycle calls.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(engine, batch)`
/// 2. **Execution**: `platform.run()` — starts the event loop (blocks)
/// 3. **Startup**: first `resumed()` creates the window and runs
///    `initialize()` + `load_content()` exactly once
/// 4. **Frames**: each `RedrawRequested` runs `update()` then `draw()`
/// 5. **Shutdown**: close request or context exit → `unload_content()`
pub struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// The engine whose lifecycle this shell drives.
    engine: Engine,

    /// Drawing surface handed to `Engine::draw` each frame.
    batch: Box<dyn SpriteBatch>,

    /// Engine start instant; basis for `FrameTime::total`.
    start: Instant,

    /// Previous frame instant; basis for `FrameTime::delta`.
    last_frame: Instant,

    /// Guards against unloading content twice.
    unloaded: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform shell around an engine and a batch.
    ///
    /// Does not create the window yet — that happens lazily in `resumed()`.
    pub fn new(engine: Engine, batch: Box<dyn SpriteBatch>) -> Self {
        info!(target: "platform", "Platform shell initialized");
        let now = Instant::now();
        Self {
            window: None,
            engine,
            batch,
            start: now,
            last_frame: now,
            unloaded: false,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until exit.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Starts the engine lifecycle against the actual window size.
    ///
    /// The window manager may hand back a different size than requested,
    /// and `inner_size()` is in physical pixels while the builder size is
    /// logical. Scenes compose their layout from `window_size` during
    /// `load_content`, and the pointer reports physical coordinates, so
    /// the context must carry the physical size before any scene loads.
    fn start_engine(&mut self, window_size: Vec2) {
        self.engine.context_mut().window_size = window_size;

        self.engine.initialize();
        self.engine.load_content();

        self.start = Instant::now();
        self.last_frame = self.start;
    }

    /// Produces the frame's timing and advances the frame clock.
    fn next_frame_time(&mut self) -> FrameTime {
        let now = Instant::now();
        let time = FrameTime::new(now - self.start, now - self.last_frame);
        self.last_frame = now;
        time
    }

    /// Unloads engine content exactly once.
    fn shutdown(&mut self) {
        if !self.unloaded {
            self.unloaded = true;
            self.engine.unload_content();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &Engine {
        &self.engine
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window on first call and starts the engine lifecycle
    /// (`initialize()` then `load_content()`) against the window's
    /// actual inner size.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let size = self.engine.screen_size();
        let attrs = WindowAttributes::default()
            .with_title(self.engine.title().to_owned())
            .with_inner_size(LogicalSize::new(size.x as f64, size.y as f64));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );

                let inner = window.inner_size();
                self.start_engine(Vec2::new(inner.width as f32, inner.height as f32));

                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                trace!(target: "platform", "Window resized: {}x{}", size.width, size.height);
                self.engine.context_mut().window_size =
                    Vec2::new(size.width as f32, size.height as f32);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed: {}x", scale_factor);
                if let Some(window) = &self.window {
                    let inner = window.inner_size();
                    self.engine.context_mut().window_size =
                        Vec2::new(inner.width as f32, inner.height as f32);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.engine
                    .context_mut()
                    .pointer
                    .set_position(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    self.engine.context_mut().pointer.set_held(state.is_pressed());
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: update, then draw, then clear deltas.
                let time = self.next_frame_time();

                self.engine.update(&time);

                if self.engine.context().exit_requested() {
                    info!(target: "platform", "Exit requested by game");
                    self.shutdown();
                    event_loop.exit();
                    return;
                }

                self.engine.draw(&time, self.batch.as_mut());
                self.engine.context_mut().pointer.end_frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Focused, Moved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
