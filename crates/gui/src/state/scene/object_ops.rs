//! Object CRUD operations

use shared::{
    ObjectId, Primitive, PrimitiveKind, SceneDescription, SceneObject, SceneSettingsPatch,
    Transform,
};

use super::SceneState;

/// X offset applied to duplicated objects
pub const DUPLICATE_OFFSET: f64 = 0.5;
/// Smallest size, radius or height accepted from the properties panel
pub const MIN_DIMENSION: f64 = 0.01;
pub const MAX_DIMENSION: f64 = 1000.0;

impl SceneState {
    /// Add an object as-is (a fresh ID is assigned when empty)
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        self.checkpoint();

        if object.id.is_empty() {
            object.id = uuid::Uuid::new_v4().to_string();
        }
        let id = object.id.clone();
        self.scene.objects.push(object);

        self.version += 1;
        id
    }

    /// Add a primitive with default dimensions and color
    pub fn add_primitive(&mut self, kind: PrimitiveKind, position: Option<[f64; 3]>) -> ObjectId {
        let ordinal = self
            .scene
            .objects
            .iter()
            .filter(|o| o.primitive.kind() == kind)
            .count()
            + 1;
        let primitive = Primitive::with_defaults(kind);
        let object = SceneObject {
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("{} {}", kind.display_name(), ordinal),
            color: primitive.default_color(),
            primitive,
            transform: position.map(Transform::at).unwrap_or_default(),
            visible: true,
        };
        self.add_object(object)
    }

    /// Remove an object. Returns false if it does not exist.
    pub fn remove_object(&mut self, id: &str) -> bool {
        let Some(pos) = self.scene.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        self.checkpoint();
        self.scene.objects.remove(pos);
        self.version += 1;
        true
    }

    /// Copy an object next to the original. Returns the new ID.
    pub fn duplicate_object(&mut self, id: &str) -> Option<ObjectId> {
        let source = self.get_object(id)?.clone();
        self.checkpoint();

        let mut copy = source;
        copy.id = uuid::Uuid::new_v4().to_string();
        copy.name = format!("{} Copy", copy.name);
        copy.transform.position[0] += DUPLICATE_OFFSET;

        let new_id = copy.id.clone();
        let insert_at = self
            .scene
            .objects
            .iter()
            .position(|o| o.id == id)
            .map(|p| p + 1)
            .unwrap_or(self.scene.objects.len());
        self.scene.objects.insert(insert_at, copy);

        self.version += 1;
        Some(new_id)
    }

    pub fn rename_object(&mut self, id: &str, name: String) -> bool {
        if self.get_object(id).is_none_or(|o| o.name == name) {
            return false;
        }
        self.checkpoint();
        if let Some(object) = self.get_object_mut(id) {
            object.name = name;
        }
        self.version += 1;
        true
    }

    pub fn set_object_visible(&mut self, id: &str, visible: bool) -> bool {
        if self.get_object(id).is_none_or(|o| o.visible == visible) {
            return false;
        }
        self.checkpoint();
        if let Some(object) = self.get_object_mut(id) {
            object.visible = visible;
        }
        self.version += 1;
        true
    }

    pub fn set_color(&mut self, id: &str, color: u32) -> bool {
        if self.get_object(id).is_none_or(|o| o.color == color) {
            return false;
        }
        self.checkpoint();
        if let Some(object) = self.get_object_mut(id) {
            object.color = color;
        }
        self.version += 1;
        true
    }

    /// Replace primitive parameters (kind may change as well)
    pub fn set_primitive(&mut self, id: &str, primitive: Primitive) -> bool {
        if self.get_object(id).is_none_or(|o| o.primitive == primitive) {
            return false;
        }
        self.checkpoint();
        if let Some(object) = self.get_object_mut(id) {
            object.primitive = primitive;
        }
        self.version += 1;
        true
    }

    /// Apply a partial settings update. Not recorded in undo history.
    pub fn update_settings(&mut self, patch: &SceneSettingsPatch) -> bool {
        let changed = patch.apply(&mut self.scene.settings);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Remove every object, keeping display settings
    pub fn clear(&mut self) {
        self.checkpoint();
        self.scene.objects.clear();
        self.version += 1;
    }

    /// Replace the whole scene (file open). Undo history is reset.
    pub fn set_scene(&mut self, scene: SceneDescription) {
        self.scene = scene;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_primitive_uses_defaults() {
        let mut state = SceneState::default();
        let id = state.add_primitive(PrimitiveKind::Plane, Some([1.0, 0.0, 2.0]));
        let obj = state.get_object(&id).unwrap();
        assert_eq!(obj.name, "Plane 1");
        assert_eq!(obj.color, 0xff00ff);
        assert_eq!(obj.transform.position, [1.0, 0.0, 2.0]);
        assert_eq!(obj.primitive, Primitive::Plane { width: 2.0, height: 2.0 });
        assert_eq!(state.version(), 1);
    }

    #[test]
    fn test_names_count_per_kind() {
        let mut state = SceneState::default();
        state.add_primitive(PrimitiveKind::Cube, None);
        state.add_primitive(PrimitiveKind::Sphere, None);
        let id = state.add_primitive(PrimitiveKind::Cube, None);
        assert_eq!(state.get_object(&id).unwrap().name, "Cube 2");
    }

    #[test]
    fn test_duplicate_offsets_copy() {
        let mut state = SceneState::default();
        let id = state.add_primitive(PrimitiveKind::Cone, Some([1.0, 2.0, 3.0]));
        let copy_id = state.duplicate_object(&id).unwrap();
        assert_ne!(copy_id, id);

        let copy = state.get_object(&copy_id).unwrap();
        assert_eq!(copy.name, "Cone 1 Copy");
        assert_eq!(copy.transform.position, [1.5, 2.0, 3.0]);
        assert_eq!(state.scene.objects[1].id, copy_id);
    }

    #[test]
    fn test_duplicate_missing_is_noop() {
        let mut state = SceneState::default();
        assert!(state.duplicate_object("nope").is_none());
        assert!(!state.can_undo());
    }

    #[test]
    fn test_remove_object() {
        let mut state = SceneState::default();
        let id = state.add_primitive(PrimitiveKind::Sphere, None);
        assert!(state.remove_object(&id));
        assert!(!state.remove_object(&id));
        assert_eq!(state.object_count(), 0);
    }

    #[test]
    fn test_unchanged_edits_skip_history() {
        let mut state = SceneState::default();
        let id = state.add_primitive(PrimitiveKind::Cube, None);
        let version = state.version();
        assert!(!state.rename_object(&id, "Cube 1".into()));
        assert!(!state.set_object_visible(&id, true));
        assert_eq!(state.version(), version);

        assert!(state.set_object_visible(&id, false));
        assert!(!state.get_object(&id).unwrap().visible);
    }

    #[test]
    fn test_update_settings_bumps_version_only_on_change() {
        let mut state = SceneState::default();
        assert!(!state.update_settings(&SceneSettingsPatch::grid_visible(true)));
        assert_eq!(state.version(), 0);
        assert!(state.update_settings(&SceneSettingsPatch::grid_visible(false)));
        assert_eq!(state.version(), 1);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut state = SceneState::default();
        state.add_primitive(PrimitiveKind::Cube, None);
        state.update_settings(&SceneSettingsPatch::grid_visible(false));
        state.clear();
        assert_eq!(state.object_count(), 0);
        assert!(!state.scene.settings.grid_visible);
        assert!(state.can_undo());
    }

    #[test]
    fn test_set_scene_resets_history() {
        let mut state = SceneState::default();
        state.add_primitive(PrimitiveKind::Cube, None);
        state.set_scene(SceneDescription::default());
        assert!(!state.can_undo());
        assert_eq!(state.object_count(), 0);
    }
}
