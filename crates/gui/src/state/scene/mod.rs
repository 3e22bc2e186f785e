//! Scene state management
//!
//! This module provides scene state with objects, display settings, and undo/redo history.

mod display;
mod history;
mod object_ops;
mod persistence;
mod transform_ops;

pub use display::{object_display_name, primitive_icon, short_id};
pub use object_ops::{DUPLICATE_OFFSET, MAX_DIMENSION, MIN_DIMENSION};
pub use persistence::{scene_from_json, scene_to_json};
pub use transform_ops::{MAX_SCALE, MIN_SCALE};

use shared::{SceneDescription, SceneObject};

/// Maximum number of undo snapshots kept
pub const MAX_UNDO: usize = 100;

/// Scene state with objects and undo/redo history
#[derive(Default)]
pub struct SceneState {
    /// Current scene
    pub scene: SceneDescription,
    /// Undo stack - previous object lists
    pub(crate) undo_stack: Vec<Vec<SceneObject>>,
    /// Redo stack - undone object lists
    pub(crate) redo_stack: Vec<Vec<SceneObject>>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get an object by ID
    pub fn get_object(&self, id: &str) -> Option<&SceneObject> {
        self.scene.objects.iter().find(|o| o.id == id)
    }

    /// Get mutable object by ID
    pub fn get_object_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.scene.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_object(id).is_some()
    }

    pub fn object_count(&self) -> usize {
        self.scene.objects.len()
    }

    /// Save current objects to undo stack
    pub(crate) fn save_undo(&mut self) {
        self.undo_stack.push(self.scene.objects.clone());
        if self.undo_stack.len() > MAX_UNDO {
            self.undo_stack.remove(0);
        }
    }

    /// Snapshot before a structural change
    pub(crate) fn checkpoint(&mut self) {
        self.save_undo();
        self.redo_stack.clear();
    }
}
