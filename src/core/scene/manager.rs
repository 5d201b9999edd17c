//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, switching, and lifecycle.
//
// Scenes are stored in a HashMap by name; exactly one scene is current
// at a time. Registered scenes keep their state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::context::GameContext;
use crate::gfx::{FrameTime, SpriteBatch};

//=== Scene Manager =======================================================

/// Manages the set of named scenes and forwards the frame loop to the
/// current one.
///
/// The first scene registered becomes the default unless overridden with
/// [`SceneManager::set_default`]. Switching unloads the outgoing scene
/// before loading the incoming one.
pub struct SceneManager {
    scenes: HashMap<String, Box<dyn Scene>>,
    default: Option<String>,
    current: Option<String>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates a scene manager with no scenes registered.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            default: None,
            current: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a batch of scenes, keyed by their names.
    ///
    /// Registering a name twice logs a warning and replaces the earlier
    /// scene. The first scene ever registered becomes the default.
    pub fn add_scenes(&mut self, scenes: Vec<Box<dyn Scene>>) {
        for scene in scenes {
            self.add_scene(scene);
        }
    }

    /// Registers a single scene.
    pub fn add_scene(&mut self, scene: Box<dyn Scene>) {
        let name = scene.name().to_owned();

        if self.default.is_none() {
            self.default = Some(name.clone());
        }

        debug!(target: "scene", "Registered scene `{}`", name);
        if self.scenes.insert(name.clone(), scene).is_some() {
            warn!(target: "scene", "Scene `{}` was already registered and has been replaced", name);
        }
    }

    /// Overrides which scene `load_default` loads.
    ///
    /// # Panics
    ///
    /// Panics if no scene with that name is registered.
    pub fn set_default(&mut self, name: &str) {
        assert!(
            self.scenes.contains_key(name),
            "cannot set unregistered scene `{}` as default",
            name
        );
        self.default = Some(name.to_owned());
    }

    //--- Loading ----------------------------------------------------------

    /// Loads the default scene.
    ///
    /// # Panics
    ///
    /// Panics if no scenes have been registered.
    pub fn load_default(&mut self, ctx: &mut GameContext) {
        let name = self
            .default
            .clone()
            .unwrap_or_else(|| panic!("no scenes registered, cannot load default scene"));
        self.load(&name, ctx);
    }

    /// Switches to the named scene.
    ///
    /// Unloads the current scene (if any), then runs the new scene's
    /// `load` with a completion callback. The callback is expected to fire
    /// synchronously; a scene that never calls it is logged as a warning.
    ///
    /// # Panics
    ///
    /// Panics if the scene is not registered — a missing scene is a
    /// configuration fault, not a recoverable condition.
    pub fn load(&mut self, name: &str, ctx: &mut GameContext) {
        assert!(
            self.scenes.contains_key(name),
            "scene `{}` is not registered",
            name
        );

        self.unload(ctx);

        debug!(target: "scene", "Loading scene `{}`", name);
        let scene = self
            .scenes
            .get_mut(name)
            .unwrap_or_else(|| unreachable!("presence asserted above"));

        let mut done_called = false;
        scene.load(ctx, &mut || done_called = true);

        if !done_called {
            warn!(target: "scene", "Scene `{}` did not signal load completion", name);
        }

        self.current = Some(name.to_owned());
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the current scene, if any.
    pub fn update(&mut self, time: &FrameTime, ctx: &mut GameContext) {
        if let Some(name) = &self.current {
            if let Some(scene) = self.scenes.get_mut(name) {
                scene.update(time, ctx);
            }
        }
    }

    /// Draws the current scene, if any.
    pub fn draw(&self, time: &FrameTime, batch: &mut dyn SpriteBatch) {
        if let Some(name) = &self.current {
            if let Some(scene) = self.scenes.get(name) {
                scene.draw(time, batch);
            }
        }
    }

    //--- Teardown ---------------------------------------------------------

    /// Unloads the current scene and clears it.
    pub fn unload(&mut self, ctx: &mut GameContext) {
        if let Some(name) = self.current.take() {
            debug!(target: "scene", "Unloading scene `{}`", name);
            if let Some(scene) = self.scenes.get_mut(&name) {
                scene.unload(ctx);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Name of the current scene, if one is loaded.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether any scenes are registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Scene probe recording its lifecycle calls into a shared log.
    struct ProbeScene {
        name: String,
        log: Rc<RefCell<Vec<String>>>,
        call_done: bool,
    }

    impl ProbeScene {
        fn boxed(name: &str, log: Rc<RefCell<Vec<String>>>) -> Box<dyn Scene> {
            Box::new(Self {
                name: name.to_owned(),
                log,
                call_done: true,
            })
        }

        fn boxed_without_done(name: &str, log: Rc<RefCell<Vec<String>>>) -> Box<dyn Scene> {
            Box::new(Self {
                name: name.to_owned(),
                log,
                call_done: false,
            })
        }
    }

    impl Scene for ProbeScene {
        fn name(&self) -> &str {
            &self.name
        }

        fn load(&mut self, _ctx: &mut GameContext, done: &mut dyn FnMut()) {
            self.log.borrow_mut().push(format!("load:{}", self.name));
            if self.call_done {
                done();
            }
        }

        fn unload(&mut self, _ctx: &mut GameContext) {
            self.log.borrow_mut().push(format!("unload:{}", self.name));
        }

        fn update(&mut self, _time: &FrameTime, _ctx: &mut GameContext) {
            self.log.borrow_mut().push(format!("update:{}", self.name));
        }

        fn draw(&self, _time: &FrameTime, _batch: &mut dyn SpriteBatch) {
            self.log.borrow_mut().push(format!("draw:{}", self.name));
        }
    }

    fn ctx() -> GameContext {
        GameContext::new(Vec2::new(800.0, 600.0), false)
    }

    #[test]
    fn first_registered_scene_is_default() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scenes(vec![
            ProbeScene::boxed("intro", log.clone()),
            ProbeScene::boxed("main", log.clone()),
        ]);

        manager.load_default(&mut ctx());
        assert_eq!(manager.current(), Some("intro"));
        assert_eq!(log.borrow().as_slice(), ["load:intro"]);
    }

    #[test]
    fn set_default_overrides_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scenes(vec![
            ProbeScene::boxed("intro", log.clone()),
            ProbeScene::boxed("main", log),
        ]);
        manager.set_default("main");

        manager.load_default(&mut ctx());
        assert_eq!(manager.current(), Some("main"));
    }

    #[test]
    #[should_panic(expected = "scene `missing` is not registered")]
    fn loading_unregistered_scene_panics() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scene(ProbeScene::boxed("main", log));
        manager.load("missing", &mut ctx());
    }

    #[test]
    #[should_panic(expected = "no scenes registered")]
    fn load_default_with_no_scenes_panics() {
        let mut manager = SceneManager::new();
        manager.load_default(&mut ctx());
    }

    #[test]
    fn switch_unloads_previous_scene() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scenes(vec![
            ProbeScene::boxed("main", log.clone()),
            ProbeScene::boxed("game", log.clone()),
        ]);

        let mut ctx = ctx();
        manager.load("main", &mut ctx);
        manager.load("game", &mut ctx);

        assert_eq!(
            log.borrow().as_slice(),
            ["load:main", "unload:main", "load:game"]
        );
        assert_eq!(manager.current(), Some("game"));
    }

    #[test]
    fn update_and_draw_forward_to_current() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scene(ProbeScene::boxed("main", log.clone()));

        let mut ctx = ctx();
        manager.load("main", &mut ctx);
        manager.update(&FrameTime::default(), &mut ctx);
        manager.draw(&FrameTime::default(), &mut crate::gfx::NullBatch::new());

        assert_eq!(
            log.borrow().as_slice(),
            ["load:main", "update:main", "draw:main"]
        );
    }

    #[test]
    fn update_without_current_scene_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scene(ProbeScene::boxed("main", log.clone()));

        manager.update(&FrameTime::default(), &mut ctx());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unload_clears_current() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scene(ProbeScene::boxed("main", log.clone()));

        let mut ctx = ctx();
        manager.load("main", &mut ctx);
        manager.unload(&mut ctx);

        assert_eq!(manager.current(), None);
        assert_eq!(log.borrow().as_slice(), ["load:main", "unload:main"]);
    }

    #[test]
    fn unload_without_current_is_noop() {
        let mut manager = SceneManager::new();
        manager.unload(&mut ctx());
        assert_eq!(manager.current(), None);
    }

    #[test]
    fn scene_skipping_done_still_becomes_current() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scene(ProbeScene::boxed_without_done("lazy", log));

        manager.load("lazy", &mut ctx());
        assert_eq!(manager.current(), Some("lazy"));
    }

    #[test]
    fn duplicate_registration_replaces() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.add_scene(ProbeScene::boxed("main", log.clone()));
        manager.add_scene(ProbeScene::boxed("main", log));

        assert_eq!(manager.len(), 1);
    }
}
