//! Scene state provider consumed by the toolbar.
//!
//! `SceneStore` is the narrow mutator surface the toolbar handlers need;
//! `EditorContext` is the application's implementation, owning the scene,
//! the single selection and the active transform mode.

use shared::{
    ObjectId, SceneDescription, SceneObject, SceneSettingsPatch, TransformMode,
};

use super::scene::SceneState;
use super::selection::SelectionState;

pub trait SceneStore {
    fn transform_mode(&self) -> TransformMode;
    fn set_transform_mode(&mut self, mode: TransformMode);
    fn selected_object(&self) -> Option<&SceneObject>;
    fn scene(&self) -> &SceneDescription;
    fn update_scene_settings(&mut self, patch: SceneSettingsPatch);
    fn clear_scene(&mut self);
    /// Duplicate the selected object (no-op without selection)
    fn duplicate_object(&mut self);
    fn delete_selected_object(&mut self);
}

/// Scene, selection and active tool
#[derive(Default)]
pub struct EditorContext {
    pub scene: SceneState,
    pub selection: SelectionState,
    transform_mode: TransformMode,
}

impl EditorContext {
    /// Select an object if it exists
    pub fn select(&mut self, id: &str) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.selection.select(id.to_string());
        true
    }

    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.selection.primary()
    }

    pub fn undo(&mut self) {
        if self.scene.undo() {
            self.sync_selection();
        }
    }

    pub fn redo(&mut self) {
        if self.scene.redo() {
            self.sync_selection();
        }
    }

    /// Replace the scene (file open), dropping selection
    pub fn load_scene(&mut self, scene: SceneDescription) {
        self.scene.set_scene(scene);
        self.selection.clear();
    }

    /// Remove an object by ID, clearing selection if it was selected
    pub fn remove_object(&mut self, id: &str) -> bool {
        let removed = self.scene.remove_object(id);
        if removed && self.selection.is_selected(id) {
            self.selection.clear();
        }
        removed
    }

    /// Drop the selection if it no longer references a live object
    pub fn sync_selection(&mut self) {
        let dangling = self
            .selection
            .primary()
            .is_some_and(|id| !self.scene.contains(id));
        if dangling {
            self.selection.clear();
        }
    }
}

impl SceneStore for EditorContext {
    fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    fn set_transform_mode(&mut self, mode: TransformMode) {
        self.transform_mode = mode;
    }

    fn selected_object(&self) -> Option<&SceneObject> {
        self.selection
            .primary()
            .and_then(|id| self.scene.get_object(id))
    }

    fn scene(&self) -> &SceneDescription {
        &self.scene.scene
    }

    fn update_scene_settings(&mut self, patch: SceneSettingsPatch) {
        self.scene.update_settings(&patch);
    }

    fn clear_scene(&mut self) {
        self.scene.clear();
        self.selection.clear();
    }

    fn duplicate_object(&mut self) {
        let Some(id) = self.selection.primary().cloned() else {
            return;
        };
        if let Some(copy) = self.scene.duplicate_object(&id) {
            self.selection.select(copy);
        }
    }

    fn delete_selected_object(&mut self) {
        if let Some(id) = self.selection.take() {
            self.scene.remove_object(&id);
        }
    }
}
