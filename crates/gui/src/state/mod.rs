pub mod confirm;
pub mod scene;
pub mod selection;
pub mod settings;
pub mod store;

pub use confirm::{ConfirmAction, ConfirmDialog};
pub use scene::{object_display_name, primitive_icon, short_id, SceneState};
pub use selection::SelectionState;
pub use settings::{AppSettings, Language};
pub use store::{EditorContext, SceneStore};

use crate::keymap::EditorCommand;
use crate::toolbar;

/// Panel visibility flags
pub struct PanelVisibility {
    pub scene_tree: bool,
    pub properties: bool,
    pub toolbar: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            scene_tree: true,
            properties: true,
            toolbar: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub editor: EditorContext,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Pending confirmation prompt
    pub confirm: ConfirmDialog,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            editor: EditorContext::default(),
            panels: PanelVisibility::default(),
            settings,
            confirm: ConfirmDialog::default(),
            show_settings_window: false,
        }
    }

    /// Route a shortcut or menu command
    pub fn apply_command(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::SetTool(mode) => toolbar::handle_tool_click(&mut self.editor, mode),
            EditorCommand::Action(action) => toolbar::handle_action_click(&mut self.editor, action),
            EditorCommand::ViewControl(control) => {
                toolbar::handle_view_control_click(&mut self.editor, control)
            }
            EditorCommand::NewScene => self.confirm.open(ConfirmAction::NewScene),
            EditorCommand::Deselect => self.editor.deselect(),
            EditorCommand::Undo => self.editor.undo(),
            EditorCommand::Redo => self.editor.redo(),
        }
    }

    /// Resolve the pending confirmation prompt with the user's answer
    pub fn resolve_confirm(&mut self, accepted: bool) {
        if let Some(ConfirmAction::NewScene) = self.confirm.close() {
            toolbar::handle_new_scene(&mut self.editor, || accepted);
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::{PrimitiveKind, TransformMode};

    use super::*;

    fn state() -> AppState {
        AppState::with_settings(AppSettings::default())
    }

    #[test]
    fn test_new_scene_waits_for_confirmation() {
        let mut app = state();
        app.editor.scene.add_primitive(PrimitiveKind::Cube, None);

        app.apply_command(EditorCommand::NewScene);
        assert!(app.confirm.is_open());
        app.resolve_confirm(false);
        assert!(!app.confirm.is_open());
        assert_eq!(app.editor.scene.object_count(), 1);

        app.apply_command(EditorCommand::NewScene);
        app.resolve_confirm(true);
        assert_eq!(app.editor.scene.object_count(), 0);
    }

    #[test]
    fn test_set_tool_command() {
        let mut app = state();
        app.apply_command(EditorCommand::SetTool(TransformMode::Scale));
        assert_eq!(app.editor.transform_mode(), TransformMode::Scale);
    }
}
