//! Scene mesh cache management

use std::collections::HashMap;

use shared::SceneDescription;

use super::build_scene_meshes;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Cached world-space meshes, rebuilt when the scene or selection changes
pub struct MeshCache {
    meshes: HashMap<String, MeshData>,
    aabbs: HashMap<String, Aabb>,
    version: u64,
    rebuild_count: u64,
    selected_snapshot: Option<String>,
    tint_snapshot: [f32; 3],
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            aabbs: HashMap::new(),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
            selected_snapshot: None,
            tint_snapshot: [0.0; 3],
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, scene_version: u64, selected: Option<&str>, tint: [f32; 3]) -> bool {
        self.version == scene_version
            && self.selected_snapshot.as_deref() == selected
            && self.tint_snapshot == tint
    }

    /// Rebuild cached meshes
    pub fn rebuild(
        &mut self,
        scene: &SceneDescription,
        selected: Option<&str>,
        tint: [f32; 3],
        version: u64,
    ) {
        self.meshes = build_scene_meshes(scene, selected, tint);
        self.aabbs = self
            .meshes
            .iter()
            .map(|(id, mesh)| (id.clone(), Aabb::from_mesh(mesh)))
            .collect();
        self.version = version;
        self.rebuild_count += 1;
        self.selected_snapshot = selected.map(str::to_string);
        self.tint_snapshot = tint;
        tracing::debug!("Mesh cache rebuilt: {} meshes", self.meshes.len());
    }

    /// Rebuild only if stale. Returns whether a rebuild happened.
    pub fn refresh(
        &mut self,
        scene: &SceneDescription,
        selected: Option<&str>,
        tint: [f32; 3],
        version: u64,
    ) -> bool {
        if self.is_valid(version, selected, tint) {
            return false;
        }
        self.rebuild(scene, selected, tint, version);
        true
    }

    pub fn meshes(&self) -> &HashMap<String, MeshData> {
        &self.meshes
    }

    /// Clone the cached mesh map (for passing into PaintCallback)
    pub fn meshes_clone(&self) -> HashMap<String, MeshData> {
        self.meshes.clone()
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Get the cached AABBs
    pub fn aabbs(&self) -> &HashMap<String, Aabb> {
        &self.aabbs
    }

    pub fn aabb(&self, id: &str) -> Option<&Aabb> {
        self.aabbs.get(id)
    }
}
