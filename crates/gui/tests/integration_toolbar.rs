//! Toolbar handlers against a recording scene store.
//!
//! The double records every mutator call so each test can assert exactly
//! which store operations a click produced.

use sceneforge_gui_lib::fixtures;
use sceneforge_gui_lib::state::SceneStore;
use sceneforge_gui_lib::toolbar::{self, ActionId, ViewControlId, ACTIONS, TOOLS, VIEW_CONTROLS};
use shared::{PrimitiveKind, SceneDescription, SceneObject, SceneSettingsPatch, TransformMode};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetTransformMode(TransformMode),
    UpdateSceneSettings(SceneSettingsPatch),
    ClearScene,
    DuplicateObject,
    DeleteSelectedObject,
}

struct RecordingStore {
    mode: TransformMode,
    selected: Option<SceneObject>,
    scene: SceneDescription,
    calls: Vec<Call>,
}

impl RecordingStore {
    fn new() -> Self {
        Self {
            mode: TransformMode::Select,
            selected: None,
            scene: SceneDescription::default(),
            calls: Vec::new(),
        }
    }

    fn with_selection(kind: PrimitiveKind) -> Self {
        Self {
            selected: Some(fixtures::object("sel", kind)),
            ..Self::new()
        }
    }
}

impl SceneStore for RecordingStore {
    fn transform_mode(&self) -> TransformMode {
        self.mode
    }

    fn set_transform_mode(&mut self, mode: TransformMode) {
        self.calls.push(Call::SetTransformMode(mode));
        self.mode = mode;
    }

    fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.as_ref()
    }

    fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    fn update_scene_settings(&mut self, patch: SceneSettingsPatch) {
        patch.apply(&mut self.scene.settings);
        self.calls.push(Call::UpdateSceneSettings(patch));
    }

    fn clear_scene(&mut self) {
        self.calls.push(Call::ClearScene);
    }

    fn duplicate_object(&mut self) {
        self.calls.push(Call::DuplicateObject);
    }

    fn delete_selected_object(&mut self) {
        self.calls.push(Call::DeleteSelectedObject);
    }
}

#[test]
fn test_every_tool_sets_its_mode() {
    for tool in &TOOLS {
        let mut store = RecordingStore::new();
        toolbar::handle_tool_click(&mut store, tool.id);
        assert_eq!(store.transform_mode(), tool.id);
        assert_eq!(store.calls, vec![Call::SetTransformMode(tool.id)]);
    }
}

#[test]
fn test_tool_ids_match_mode_strings() {
    let ids: Vec<&str> = TOOLS.iter().map(|t| t.id.id()).collect();
    assert_eq!(ids, ["select", "move", "rotate", "scale", "align"]);
}

#[test]
fn test_actions_disabled_without_selection() {
    let mut store = RecordingStore::new();
    for action in &ACTIONS {
        assert!(!toolbar::action_enabled(&store, action.id));
        toolbar::handle_action_click(&mut store, action.id);
    }
    assert!(store.calls.is_empty());
}

#[test]
fn test_actions_forward_with_selection() {
    let mut store = RecordingStore::with_selection(PrimitiveKind::Cube);
    assert!(toolbar::action_enabled(&store, ActionId::Duplicate));
    assert!(toolbar::action_enabled(&store, ActionId::Delete));

    toolbar::handle_action_click(&mut store, ActionId::Duplicate);
    toolbar::handle_action_click(&mut store, ActionId::Delete);
    assert_eq!(store.calls, vec![Call::DuplicateObject, Call::DeleteSelectedObject]);
}

#[test]
fn test_grid_toggle_flips_once_per_click() {
    let mut store = RecordingStore::new();
    assert!(store.scene.settings.grid_visible);
    assert!(toolbar::view_control_active(&store, ViewControlId::Grid));

    toolbar::handle_view_control_click(&mut store, ViewControlId::Grid);
    assert!(!store.scene.settings.grid_visible);
    assert_eq!(
        store.calls,
        vec![Call::UpdateSceneSettings(SceneSettingsPatch::grid_visible(false))]
    );

    toolbar::handle_view_control_click(&mut store, ViewControlId::Grid);
    assert!(store.scene.settings.grid_visible);
    assert_eq!(store.calls.len(), 2);
    assert_eq!(VIEW_CONTROLS.len(), 1);
}

#[test]
fn test_new_scene_requires_confirmation() {
    let mut store = RecordingStore::new();
    assert!(!toolbar::handle_new_scene(&mut store, || false));
    assert!(store.calls.is_empty());

    assert!(toolbar::handle_new_scene(&mut store, || true));
    assert_eq!(store.calls, vec![Call::ClearScene]);
}

#[test]
fn test_status_readout_only_with_selection() {
    let store = RecordingStore::new();
    assert!(toolbar::status_readout(&store).is_none());

    let mut store = RecordingStore::with_selection(PrimitiveKind::Tetrahedron);
    toolbar::handle_tool_click(&mut store, TransformMode::Rotate);
    let readout = toolbar::status_readout(&store).unwrap();
    assert_eq!(readout.object_type, "tetrahedron");
    assert_eq!(
        readout.to_string(),
        "Selected: Tetrahedron  Mode: Rotate  Press Esc to deselect"
    );
}
