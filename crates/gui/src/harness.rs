//! Headless test harness for programmatic scene manipulation.
//!
//! Wraps `AppState` and a mesh cache so tests can drive the toolbar, keyboard
//! and viewport tools without a window.

use shared::{Primitive, PrimitiveKind, SceneDescription, SceneObject, TransformMode};

use crate::build::MeshCache;
use crate::keymap::{command_for_key, EditorCommand};
use crate::state::scene::{scene_from_json, scene_to_json};
use crate::state::store::SceneStore;
use crate::state::{AppSettings, AppState};
use crate::toolbar::{self, ActionId, StatusReadout, ViewControlId};
use crate::tools::{self, ClickOutcome};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Ray;

/// Headless test harness: manages app state and build cache
pub struct TestHarness {
    pub state: AppState,
    cache: MeshCache,
}

impl TestHarness {
    /// Create a new empty harness with default settings.
    pub fn new() -> Self {
        Self {
            state: AppState::with_settings(AppSettings::default()),
            cache: MeshCache::new(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a primitive with default parameters at the origin
    pub fn add(&mut self, kind: PrimitiveKind) -> String {
        self.state.editor.scene.add_primitive(kind, None)
    }

    pub fn add_at(&mut self, kind: PrimitiveKind, pos: [f64; 3]) -> String {
        self.state.editor.scene.add_primitive(kind, Some(pos))
    }

    pub fn add_object(&mut self, object: SceneObject) -> String {
        self.state.editor.scene.add_object(object)
    }

    pub fn set_primitive(&mut self, id: &str, primitive: Primitive) -> bool {
        self.state.editor.scene.set_primitive(id, primitive)
    }

    /// Load a scene (replaces current)
    pub fn load_scene(&mut self, scene: SceneDescription) {
        self.state.editor.load_scene(scene);
    }

    /// Load a scene from JSON string
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene = scene_from_json(json)?;
        self.load_scene(scene);
        Ok(())
    }

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        scene_to_json(&self.state.editor.scene.scene).unwrap_or_default()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.state.editor.remove_object(id)
    }

    pub fn undo(&mut self) -> bool {
        let can = self.state.editor.scene.can_undo();
        self.state.editor.undo();
        can
    }

    pub fn redo(&mut self) -> bool {
        let can = self.state.editor.scene.can_redo();
        self.state.editor.redo();
        can
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: &str) -> bool {
        self.state.editor.select(id)
    }

    pub fn clear_selection(&mut self) {
        self.state.editor.deselect();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.editor.selected_id().map(String::as_str)
    }

    // ── Visibility ────────────────────────────────────────────

    pub fn hide(&mut self, id: &str) {
        self.state.editor.scene.set_object_visible(id, false);
    }

    pub fn show(&mut self, id: &str) {
        self.state.editor.scene.set_object_visible(id, true);
    }

    // ── Toolbar ───────────────────────────────────────────────

    pub fn click_tool(&mut self, mode: TransformMode) {
        toolbar::handle_tool_click(&mut self.state.editor, mode);
    }

    pub fn click_action(&mut self, action: ActionId) {
        toolbar::handle_action_click(&mut self.state.editor, action);
    }

    pub fn action_enabled(&self, action: ActionId) -> bool {
        toolbar::action_enabled(&self.state.editor, action)
    }

    pub fn click_view_control(&mut self, control: ViewControlId) {
        toolbar::handle_view_control_click(&mut self.state.editor, control);
    }

    /// Press the New button and answer the confirmation prompt
    pub fn click_new_scene(&mut self, accept: bool) -> bool {
        toolbar::handle_new_scene(&mut self.state.editor, || accept)
    }

    pub fn status_readout(&self) -> Option<StatusReadout> {
        toolbar::status_readout(&self.state.editor)
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.state.editor.transform_mode()
    }

    pub fn grid_visible(&self) -> bool {
        self.state.editor.scene().settings.grid_visible
    }

    // ── Keyboard ──────────────────────────────────────────────

    /// Simulate a key press. Returns the resolved command, if any.
    pub fn press(&mut self, key: egui::Key, modifiers: egui::Modifiers) -> Option<EditorCommand> {
        let command = command_for_key(key, modifiers)?;
        self.state.apply_command(command);
        Some(command)
    }

    /// Answer a pending confirmation prompt
    pub fn answer_confirm(&mut self, accept: bool) {
        self.state.resolve_confirm(accept);
    }

    // ── Viewport tools ────────────────────────────────────────

    /// Click in the viewport with a world-space ray (meshes are rebuilt first)
    pub fn click_ray(&mut self, ray: Ray) -> ClickOutcome {
        self.build();
        let grid_cell = self.state.settings.grid.size as f64;
        tools::handle_click(
            &mut self.state.editor,
            &ray,
            self.cache.meshes(),
            self.cache.aabbs(),
            grid_cell,
        )
    }

    /// Drag with the active Rotate/Scale tool by a pixel delta
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !tools::begin_drag(&mut self.state.editor) {
            return;
        }
        match self.state.editor.transform_mode() {
            TransformMode::Rotate => tools::drag_rotate(&mut self.state.editor, dx),
            TransformMode::Scale => tools::drag_scale(&mut self.state.editor, dy),
            _ => {}
        }
    }

    // ── Build + inspection ────────────────────────────────────

    /// Build meshes from the current scene
    pub fn build(&mut self) {
        let tint = self.state.settings.selection_rgb();
        let editor = &self.state.editor;
        self.cache.refresh(
            &editor.scene.scene,
            editor.selected_id().map(String::as_str),
            tint,
            editor.scene.version(),
        );
    }

    pub fn object_count(&self) -> usize {
        self.state.editor.scene.object_count()
    }

    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.state.editor.scene.get_object(id)
    }

    /// Number of meshes after build
    pub fn visible_mesh_count(&self) -> usize {
        self.cache.meshes().len()
    }

    pub fn mesh_of(&self, id: &str) -> Option<&MeshData> {
        self.cache.meshes().get(id)
    }

    /// Create a validator for an object's mesh
    pub fn validate_mesh(&self, id: &str) -> Option<MeshValidator<'_>> {
        self.mesh_of(id).map(MeshValidator::new)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.object_count(), 0);
        assert_eq!(h.transform_mode(), TransformMode::Select);
        assert!(h.grid_visible());
    }

    #[test]
    fn test_build_and_mesh() {
        let mut h = TestHarness::new();
        let id = h.add(PrimitiveKind::Cube);
        h.build();
        assert_eq!(h.visible_mesh_count(), 1);
        assert!(h.mesh_of(&id).is_some());
    }

    #[test]
    fn test_hide_show() {
        let mut h = TestHarness::new();
        let id = h.add(PrimitiveKind::Sphere);

        h.hide(&id);
        h.build();
        assert!(h.mesh_of(&id).is_none());

        h.show(&id);
        h.build();
        assert!(h.mesh_of(&id).is_some());
    }

    #[test]
    fn test_load_export_json() {
        let mut h = TestHarness::new();
        h.add(PrimitiveKind::Octahedron);
        let json = h.export_scene_json();

        let mut h2 = TestHarness::new();
        h2.load_scene_json(&json).unwrap();
        assert_eq!(h2.object_count(), 1);
        assert!(h2.load_scene_json("nope").is_err());
    }
}
