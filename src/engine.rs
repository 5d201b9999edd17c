//=========================================================================
// Stagecraft Engine
//=========================================================================
//
// Builder and lifecycle host for a layered 2D game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Platform]
//         │                          │
//         ├─ with_screen_size()      ├─ initialize()
//         ├─ add_scene()             ├─ load_content()
//         ├─ add_background_object() ├─ update() / draw()  (per frame)
//         └─ preload_textures()      └─ unload_content()
// ```
//
// Each frame runs background layer → current scene → foreground layer,
// in that order, for both update and draw. Scene switch requests queued
// on the context are applied at the end of the update pass.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use glam::Vec2;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::{AssetKind, ContentCache, GameContext, GameObject, Layer, Scene, SceneManager};
use crate::gfx::{Color, FrameTime, SpriteBatch};
use crate::platform::{Platform, PlatformError};

//=== Constants ===========================================================

/// Back-buffer size used when the builder leaves width/height at 0.
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

//=== Init Hook ===========================================================

/// One-shot hook run at the start of `initialize`, before layers and
/// scenes are populated.
type InitHook = Box<dyn FnOnce(&mut GameContext)>;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Purely declarative: objects, scenes, and asset names are collected
/// here and handed to the engine, which performs no I/O until
/// [`Engine::load_content`].
///
/// # Default Values
///
/// - **Screen size**: 800×600 (a dimension of 0 means "use default")
/// - **Background color**: cornflower blue
/// - **Content root**: `content`
/// - **Debug mode**: off
///
/// # Examples
///
/// ```no_run
/// use stagecraft_engine::prelude::*;
///
/// # struct MyScene;
/// # impl Scene for MyScene {
/// #     fn name(&self) -> &str { "main" }
/// #     fn load(&mut self, _ctx: &mut GameContext, done: &mut dyn FnMut()) { done(); }
/// #     fn update(&mut self, _time: &FrameTime, _ctx: &mut GameContext) {}
/// #     fn draw(&self, _time: &FrameTime, _batch: &mut dyn SpriteBatch) {}
/// # }
/// EngineBuilder::new()
///     .with_title("My Game")
///     .with_screen_size(1280, 720)
///     .add_scene(Box::new(MyScene))
///     .build()
///     .run(Box::new(NullBatch::new()))
///     .unwrap();
/// ```
pub struct EngineBuilder {
    title: String,
    screen_width: u32,
    screen_height: u32,
    background_color: Color,
    content_root: PathBuf,
    debug_mode: bool,
    background_objects: Vec<Box<dyn GameObject>>,
    foreground_objects: Vec<Box<dyn GameObject>>,
    scenes: Vec<Box<dyn Scene>>,
    default_scene: Option<String>,
    preload_textures: Vec<String>,
    preload_fonts: Vec<String>,
    init_hook: Option<InitHook>,
}

impl EngineBuilder {
    /// Creates a builder with default settings and no content.
    pub fn new() -> Self {
        Self {
            title: "Stagecraft".to_owned(),
            screen_width: 0,
            screen_height: 0,
            background_color: Color::CORNFLOWER_BLUE,
            content_root: PathBuf::from("content"),
            debug_mode: false,
            background_objects: Vec::new(),
            foreground_objects: Vec::new(),
            scenes: Vec::new(),
            default_scene: None,
            preload_textures: Vec::new(),
            preload_fonts: Vec::new(),
            init_hook: None,
        }
    }

    //--- Window -----------------------------------------------------------

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the back-buffer size. A dimension of 0 keeps the default.
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Sets the frame clear color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    //--- Content ----------------------------------------------------------

    /// Sets the directory assets are loaded from.
    pub fn with_content_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.content_root = root.into();
        self
    }

    /// Declares texture asset names to preload during `load_content`.
    pub fn preload_textures<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preload_textures.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declares font asset names to preload during `load_content`.
    pub fn preload_fonts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preload_fonts.extend(names.into_iter().map(Into::into));
        self
    }

    //--- World ------------------------------------------------------------

    /// Adds a persistent object drawn behind every scene.
    pub fn add_background_object(mut self, object: Box<dyn GameObject>) -> Self {
        self.background_objects.push(object);
        self
    }

    /// Adds a persistent object drawn in front of every scene.
    pub fn add_foreground_object(mut self, object: Box<dyn GameObject>) -> Self {
        self.foreground_objects.push(object);
        self
    }

    /// Adds a scene. The first scene added is the default unless
    /// [`EngineBuilder::with_default_scene`] says otherwise.
    pub fn add_scene(mut self, scene: Box<dyn Scene>) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Names the scene loaded at startup.
    pub fn with_default_scene(mut self, name: impl Into<String>) -> Self {
        self.default_scene = Some(name.into());
        self
    }

    //--- Behavior ---------------------------------------------------------

    /// Enables diagnostic logging (e.g. preload failures).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Registers a one-shot hook run at the start of `initialize`.
    pub fn with_init<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&mut GameContext) + 'static,
    {
        self.init_hook = Some(Box::new(hook));
        self
    }

    //--- Build ------------------------------------------------------------

    /// Builds the engine. Stores configuration only; no I/O happens here.
    pub fn build(self) -> Engine {
        let width = if self.screen_width > 0 { self.screen_width } else { DEFAULT_WIDTH };
        let height = if self.screen_height > 0 { self.screen_height } else { DEFAULT_HEIGHT };
        let screen_size = Vec2::new(width as f32, height as f32);

        info!(
            "Building engine `{}` ({}x{}, content root: {})",
            self.title,
            width,
            height,
            self.content_root.display()
        );

        Engine {
            title: self.title,
            screen_size,
            background_color: self.background_color,
            context: GameContext::new(screen_size, self.debug_mode),
            content: ContentCache::new(self.content_root),
            scene_manager: SceneManager::new(),
            background: Layer::new("background"),
            foreground: Layer::new("foreground"),
            pending_background: self.background_objects,
            pending_foreground: self.foreground_objects,
            pending_scenes: self.scenes,
            default_scene: self.default_scene,
            preload_textures: self.preload_textures,
            preload_fonts: self.preload_fonts,
            init_hook: self.init_hook,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The engine host.
///
/// Owns the two object layers, the scene manager, the content cache, and
/// the game context. The lifecycle is linear and externally driven by the
/// platform shell:
///
/// 1. [`Engine::initialize`] — populate layers, register scenes
/// 2. [`Engine::load_content`] — preload assets, load default scene
/// 3. [`Engine::update`] / [`Engine::draw`] — once per frame
/// 4. [`Engine::unload_content`] — release scene resources
///
/// [`Engine::run`] hands the engine to the winit shell, which drives the
/// callbacks above.
pub struct Engine {
    title: String,
    screen_size: Vec2,
    background_color: Color,

    context: GameContext,
    content: ContentCache,
    scene_manager: SceneManager,
    background: Layer,
    foreground: Layer,

    // Declarative configuration, consumed by initialize()/load_content().
    pending_background: Vec<Box<dyn GameObject>>,
    pending_foreground: Vec<Box<dyn GameObject>>,
    pending_scenes: Vec<Box<dyn Scene>>,
    default_scene: Option<String>,
    preload_textures: Vec<String>,
    preload_fonts: Vec<String>,
    init_hook: Option<InitHook>,
}

impl Engine {
    //--- Lifecycle --------------------------------------------------------

    /// Runs the init hook, populates both layers from the configured
    /// object lists, and registers all configured scenes.
    ///
    /// # Panics
    ///
    /// Panics if two configured objects share a name within a layer —
    /// duplicate names are a configuration fault and are never silently
    /// overwritten.
    pub fn initialize(&mut self) {
        info!("Initializing engine `{}`", self.title);

        if let Some(hook) = self.init_hook.take() {
            hook(&mut self.context);
        }

        for object in self.pending_background.drain(..) {
            self.background.insert(object);
        }
        for object in self.pending_foreground.drain(..) {
            self.foreground.insert(object);
        }

        self.scene_manager.add_scenes(std::mem::take(&mut self.pending_scenes));
        if let Some(name) = self.default_scene.take() {
            self.scene_manager.set_default(&name);
        }

        debug!(
            "Initialized: {} background, {} foreground, {} scenes",
            self.background.len(),
            self.foreground.len(),
            self.scene_manager.len()
        );
    }

    /// Best-effort preload of the declared assets, then loads the
    /// default scene.
    ///
    /// Preload failures never propagate; with no scenes registered the
    /// default-scene load is skipped with a warning.
    pub fn load_content(&mut self) {
        let textures = std::mem::take(&mut self.preload_textures);
        self.preload(AssetKind::Texture, &textures);

        let fonts = std::mem::take(&mut self.preload_fonts);
        self.preload(AssetKind::Font, &fonts);

        if self.scene_manager.is_empty() {
            warn!("No scenes registered, skipping default scene load");
        } else {
            self.scene_manager.load_default(&mut self.context);
        }
    }

    /// Per-frame update: background layer, then the current scene, then
    /// the foreground layer. Order within a layer is unspecified.
    ///
    /// Any scene switch requested through the context during the pass is
    /// applied here, at the frame boundary.
    pub fn update(&mut self, time: &FrameTime) {
        self.background.update_all(time, &mut self.context);
        self.scene_manager.update(time, &mut self.context);
        self.foreground.update_all(time, &mut self.context);

        if let Some(name) = self.context.take_scene_request() {
            self.scene_manager.load(&name, &mut self.context);
        }
    }

    /// Per-frame draw: clear to the background color, then draw the
    /// background layer, the current scene, and the foreground layer
    /// inside a single batch.
    pub fn draw(&self, time: &FrameTime, batch: &mut dyn SpriteBatch) {
        batch.clear(self.background_color);
        batch.begin();

        self.background.draw_all(time, batch);
        self.scene_manager.draw(time, batch);
        self.foreground.draw_all(time, batch);

        batch.end();
    }

    /// Releases scene resources before teardown.
    pub fn unload_content(&mut self) {
        info!("Unloading content");
        self.scene_manager.unload(&mut self.context);
    }

    //--- Preload ----------------------------------------------------------

    /// Attempts to load each named asset into the content cache.
    ///
    /// Failures are swallowed: a missing or unreadable asset is logged
    /// (only in debug mode) and never surfaces to the caller.
    pub fn preload(&mut self, kind: AssetKind, names: &[String]) {
        for name in names {
            if let Err(e) = self.content.load(kind, name) {
                if self.context.debug_mode {
                    warn!(target: "content", "! Failed to preload {:?}[{}]: {}", kind, name, e);
                }
            }
        }
    }

    //--- Execution --------------------------------------------------------

    /// Hands the engine to the winit platform shell and blocks until the
    /// window closes or exit is requested.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(self, batch: Box<dyn SpriteBatch>) -> Result<(), PlatformError> {
        Platform::new(self, batch).run()
    }

    //--- Accessors --------------------------------------------------------

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Configured back-buffer size.
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Frame clear color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Shared game context.
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Shared game context, mutable (used by the platform shell to feed
    /// input and window events).
    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.context
    }

    /// Background object layer.
    pub fn background_layer(&self) -> &Layer {
        &self.background
    }

    /// Foreground object layer.
    pub fn foreground_layer(&self) -> &Layer {
        &self.foreground
    }

    /// Scene manager.
    pub fn scene_manager(&self) -> &SceneManager {
        &self.scene_manager
    }

    /// Content cache.
    pub fn content(&self) -> &ContentCache {
        &self.content
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
