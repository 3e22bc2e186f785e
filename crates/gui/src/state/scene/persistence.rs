//! Scene files and autosave

use std::path::{Path, PathBuf};

use shared::SceneDescription;

use super::SceneState;

/// Parse a scene from JSON text
pub fn scene_from_json(json: &str) -> Result<SceneDescription, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid scene JSON: {}", e))
}

/// Serialize a scene to pretty JSON
pub fn scene_to_json(scene: &SceneDescription) -> Result<String, String> {
    serde_json::to_string_pretty(scene).map_err(|e| format!("Failed to serialize scene: {}", e))
}

impl SceneState {
    /// Get autosave file path
    fn autosave_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sceneforge", "sceneforge")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save scene to autosave file
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Err(e) = self.save_to_file(&path) {
                tracing::warn!("Autosave failed: {}", e);
            }
        }
    }

    /// Load scene from autosave file
    pub fn load_autosave() -> Option<SceneDescription> {
        let path = Self::autosave_path()?;
        Self::load_from_file(&path).ok()
    }

    /// Write the current scene as JSON
    pub fn save_to_file(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        let json = scene_to_json(&self.scene)?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// Read a scene JSON file
    pub fn load_from_file(path: &Path) -> Result<SceneDescription, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        scene_from_json(&json)
    }
}
