//! Viewport tool behavior per transform mode.
//!
//! The viewport turns pointer input into rays and pixel deltas; these
//! functions apply them to the editor.

use std::collections::HashMap;

use shared::{ObjectId, TransformMode};

use crate::build::build_object_mesh_data;
use crate::state::store::{EditorContext, SceneStore};
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::{pick_nearest_mesh, ray_ground, Aabb, Ray};

/// Rotate tool: degrees per horizontal pixel
pub const ROTATE_DEGREES_PER_PIXEL: f64 = 0.5;
/// Scale tool: exponential rate per vertical pixel (dragging up grows)
pub const SCALE_RATE_PER_PIXEL: f64 = 0.01;

/// What a viewport click did
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Selected(ObjectId),
    Deselected,
    Placed { x: f64, z: f64 },
    Aligned(ObjectId),
    Nothing,
}

/// Apply a left click according to the active tool
pub fn handle_click(
    editor: &mut EditorContext,
    ray: &Ray,
    meshes: &HashMap<String, MeshData>,
    aabbs: &HashMap<String, Aabb>,
    grid_cell: f64,
) -> ClickOutcome {
    let hit = pick_nearest_mesh(ray, meshes, aabbs);

    match editor.transform_mode() {
        TransformMode::Select | TransformMode::Rotate | TransformMode::Scale => {
            select_or_clear(editor, hit)
        }
        TransformMode::Move => {
            if hit.is_some() {
                return select_or_clear(editor, hit);
            }
            let Some(id) = editor.selected_id().cloned() else {
                return ClickOutcome::Nothing;
            };
            let Some(point) = ray_ground(ray, 0.0) else {
                return ClickOutcome::Nothing;
            };
            let (x, z) = (point.x as f64, point.z as f64);
            editor.scene.place_at(&id, x, z);
            tracing::info!("Placed {} at ({:.2}, {:.2})", id, x, z);
            ClickOutcome::Placed { x, z }
        }
        TransformMode::Align => {
            let Some(id) = hit else {
                editor.deselect();
                return ClickOutcome::Deselected;
            };
            editor.select(&id);
            align_selected(editor, grid_cell);
            ClickOutcome::Aligned(id)
        }
    }
}

fn select_or_clear(editor: &mut EditorContext, hit: Option<ObjectId>) -> ClickOutcome {
    match hit {
        Some(id) => {
            editor.select(&id);
            ClickOutcome::Selected(id)
        }
        None => {
            editor.deselect();
            ClickOutcome::Deselected
        }
    }
}

/// Snap the selected object to the grid and rest it on the ground
pub fn align_selected(editor: &mut EditorContext, grid_cell: f64) -> bool {
    let Some(object) = editor.selected_object() else {
        return false;
    };
    let bottom = Aabb::from_mesh(&build_object_mesh_data(object, None)).min.y as f64;
    let id = object.id.clone();
    let changed = editor.scene.align_to_grid(&id, grid_cell, bottom);
    if changed {
        tracing::info!("Aligned {} to grid", id);
    }
    changed
}

/// Start a drag gesture on the selected object (one undo step)
pub fn begin_drag(editor: &mut EditorContext) -> bool {
    if editor.selected_id().is_none() {
        return false;
    }
    editor.scene.begin_drag();
    true
}

pub fn drag_translate(editor: &mut EditorContext, delta: [f64; 3]) {
    if let Some(id) = editor.selected_id().cloned() {
        editor.scene.translate(&id, delta);
    }
}

/// Rotate tool drag: horizontal pixels to degrees about Y
pub fn drag_rotate(editor: &mut EditorContext, dx_pixels: f32) {
    if let Some(id) = editor.selected_id().cloned() {
        editor
            .scene
            .rotate_y(&id, dx_pixels as f64 * ROTATE_DEGREES_PER_PIXEL);
    }
}

/// Scale tool drag: vertical pixels to a uniform factor
pub fn drag_scale(editor: &mut EditorContext, dy_pixels: f32) {
    if let Some(id) = editor.selected_id().cloned() {
        let factor = (-(dy_pixels as f64) * SCALE_RATE_PER_PIXEL).exp();
        editor.scene.scale_uniform(&id, factor);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use shared::PrimitiveKind;

    use super::*;
    use crate::build::MeshCache;

    fn setup() -> (EditorContext, ObjectId, MeshCache) {
        let mut editor = EditorContext::default();
        let id = editor.scene.add_primitive(PrimitiveKind::Cube, Some([0.0, 0.5, 0.0]));
        let mut cache = MeshCache::new();
        cache.rebuild(&editor.scene.scene, None, [0.0; 3], editor.scene.version());
        (editor, id, cache)
    }

    fn down(x: f32, z: f32) -> Ray {
        Ray { origin: Vec3::new(x, 10.0, z), direction: Vec3::NEG_Y }
    }

    #[test]
    fn test_select_click() {
        let (mut editor, id, cache) = setup();
        let outcome = handle_click(&mut editor, &down(0.1, 0.1), cache.meshes(), cache.aabbs(), 1.0);
        assert_eq!(outcome, ClickOutcome::Selected(id.clone()));
        assert_eq!(editor.selected_id(), Some(&id));

        let outcome = handle_click(&mut editor, &down(5.0, 5.0), cache.meshes(), cache.aabbs(), 1.0);
        assert_eq!(outcome, ClickOutcome::Deselected);
        assert!(editor.selected_id().is_none());
    }

    #[test]
    fn test_move_click_places_on_ground() {
        let (mut editor, id, cache) = setup();
        editor.select(&id);
        editor.set_transform_mode(TransformMode::Move);
        let outcome = handle_click(&mut editor, &down(3.0, -2.0), cache.meshes(), cache.aabbs(), 1.0);
        assert_eq!(outcome, ClickOutcome::Placed { x: 3.0, z: -2.0 });
        assert_eq!(editor.selected_object().unwrap().transform.position, [3.0, 0.5, -2.0]);
    }

    #[test]
    fn test_move_click_without_selection_does_nothing() {
        let (mut editor, _, cache) = setup();
        editor.set_transform_mode(TransformMode::Move);
        let outcome = handle_click(&mut editor, &down(3.0, 3.0), cache.meshes(), cache.aabbs(), 1.0);
        assert_eq!(outcome, ClickOutcome::Nothing);
    }

    #[test]
    fn test_align_click() {
        let (mut editor, id, _) = setup();
        editor.scene.translate(&id, [0.3, 2.0, 0.2]);
        let mut cache = MeshCache::new();
        cache.rebuild(&editor.scene.scene, None, [0.0; 3], editor.scene.version());

        editor.set_transform_mode(TransformMode::Align);
        let outcome = handle_click(&mut editor, &down(0.3, 0.2), cache.meshes(), cache.aabbs(), 1.0);
        assert_eq!(outcome, ClickOutcome::Aligned(id.clone()));
        let pos = editor.scene.get_object(&id).unwrap().transform.position;
        assert!(pos[0].abs() < 1e-9 && pos[2].abs() < 1e-9);
        assert!((pos[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_drag_rotate_and_scale() {
        let (mut editor, id, _) = setup();
        editor.select(&id);
        assert!(begin_drag(&mut editor));
        drag_rotate(&mut editor, 90.0);
        drag_scale(&mut editor, -100.0);

        let transform = &editor.scene.get_object(&id).unwrap().transform;
        assert!((transform.rotation[1] - 45.0).abs() < 1e-9);
        assert!((transform.scale[0] - 1f64.exp()).abs() < 1e-9);

        editor.undo();
        assert_eq!(editor.scene.get_object(&id).unwrap().transform.rotation, [0.0; 3]);
    }

    #[test]
    fn test_drag_without_selection_is_noop() {
        let (mut editor, _, _) = setup();
        assert!(!begin_drag(&mut editor));
        let version = editor.scene.version();
        drag_rotate(&mut editor, 10.0);
        drag_translate(&mut editor, [1.0, 0.0, 0.0]);
        assert_eq!(editor.scene.version(), version);
    }
}
