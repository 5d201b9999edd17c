//=========================================================================
// Game Objects and Layers
//=========================================================================
//
// Persistent objects that live outside any scene.
//
// Architecture:
//   Layer
//     └─ objects: HashMap<String, Box<dyn GameObject>>
//
// The engine owns two layers (background, foreground) and iterates them
// around the current scene each frame. Iteration order within a layer is
// unspecified; cross-layer order is fixed by the engine.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::gfx::{FrameTime, SpriteBatch};

//=== GameObject Trait ====================================================

/// An entity participating in the per-frame update/draw cycle.
///
/// Objects are owned exclusively by the layer holding them and are
/// addressed by a name that must be unique within that layer.
pub trait GameObject {
    /// Unique name within the owning layer.
    fn name(&self) -> &str;

    /// Called once per frame before drawing.
    fn update(&mut self, time: &FrameTime, ctx: &mut GameContext);

    /// Called once per frame after all updates.
    fn draw(&self, time: &FrameTime, batch: &mut dyn SpriteBatch);
}

//=== Layer ===============================================================

/// A name-keyed, unordered collection of persistent game objects.
///
/// Names must be unique within a layer; inserting a duplicate is a caller
/// error and panics rather than silently overwriting.
pub struct Layer {
    label: &'static str,
    objects: HashMap<String, Box<dyn GameObject>>,
}

impl Layer {
    /// Creates an empty layer. The label is used only in diagnostics.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            objects: HashMap::new(),
        }
    }

    //--- Population -------------------------------------------------------

    /// Inserts an object, keyed by its name.
    ///
    /// # Panics
    ///
    /// Panics if an object with the same name is already present.
    pub fn insert(&mut self, object: Box<dyn GameObject>) {
        let name = object.name().to_owned();

        if self.objects.contains_key(&name) {
            panic!(
                "duplicate object name `{}` in {} layer",
                name, self.label
            );
        }

        debug!(target: "layer", "Added `{}` to {} layer", name, self.label);
        self.objects.insert(name, object);
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates every object in the layer. Order is unspecified.
    pub fn update_all(&mut self, time: &FrameTime, ctx: &mut GameContext) {
        for object in self.objects.values_mut() {
            object.update(time, ctx);
        }
    }

    /// Draws every object in the layer. Order is unspecified.
    pub fn draw_all(&self, time: &FrameTime, batch: &mut dyn SpriteBatch) {
        for object in self.objects.values() {
            object.draw(time, batch);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Number of objects in the layer.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the layer holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether an object with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
