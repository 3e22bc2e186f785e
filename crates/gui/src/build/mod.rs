//! Scene mesh building.
//!
//! Every visible object goes through the object factory, then gets its color,
//! world transform and selection tint baked into renderable `MeshData`.

mod cache;
mod object_builder;

pub use cache::MeshCache;
pub use object_builder::{
    apply_selection_tint, apply_transform, build_object_mesh_data, transform_matrix,
};

use std::collections::HashMap;

use shared::SceneDescription;

use crate::viewport::mesh::MeshData;

/// Build meshes for all visible objects, keyed by object ID
pub fn build_scene_meshes(
    scene: &SceneDescription,
    selected: Option<&str>,
    selection_tint: [f32; 3],
) -> HashMap<String, MeshData> {
    scene
        .objects
        .iter()
        .filter(|o| o.visible)
        .map(|object| {
            let tint = (selected == Some(object.id.as_str())).then_some(selection_tint);
            (object.id.clone(), build_object_mesh_data(object, tint))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    const TINT: [f32; 3] = [0.0, 0.86, 1.0];

    #[test]
    fn test_build_empty_scene() {
        let meshes = build_scene_meshes(&SceneDescription::default(), None, TINT);
        assert!(meshes.is_empty());
    }

    #[test]
    fn test_build_every_primitive() {
        let scene = fixtures::demo_scene();
        let meshes = build_scene_meshes(&scene, None, TINT);
        assert_eq!(meshes.len(), scene.objects.len());
        assert!(meshes.values().all(|m| m.triangle_count() > 0));
    }

    #[test]
    fn test_hidden_object_excluded() {
        let mut scene = fixtures::demo_scene();
        scene.objects[0].visible = false;
        let meshes = build_scene_meshes(&scene, None, TINT);
        assert!(!meshes.contains_key(&scene.objects[0].id));
    }

    #[test]
    fn test_cache_forces_first_rebuild() {
        let cache = MeshCache::new();
        assert!(!cache.is_valid(0, None, TINT));
    }

    #[test]
    fn test_cache_valid_after_rebuild() {
        let mut cache = MeshCache::new();
        let scene = fixtures::demo_scene();
        cache.rebuild(&scene, None, TINT, 1);
        assert!(cache.is_valid(1, None, TINT));
        assert!(!cache.is_valid(1, Some(&scene.objects[0].id), TINT));
        assert_eq!(cache.aabbs().len(), scene.objects.len());
    }

    #[test]
    fn test_refresh_skips_when_valid() {
        let mut cache = MeshCache::new();
        let scene = fixtures::demo_scene();
        assert!(cache.refresh(&scene, None, TINT, 3));
        assert!(!cache.refresh(&scene, None, TINT, 3));
        assert_eq!(cache.rebuild_count(), 1);
    }
}
