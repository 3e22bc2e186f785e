//! Keyboard shortcut table

use egui::{Key, Modifiers};
use shared::TransformMode;

use crate::toolbar::{ActionId, ViewControlId};

/// Editor command triggered by a shortcut or menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    SetTool(TransformMode),
    Action(ActionId),
    ViewControl(ViewControlId),
    NewScene,
    Deselect,
    Undo,
    Redo,
}

/// Resolve a key press. `command` covers Ctrl on Linux/Windows and Cmd on macOS.
pub fn command_for_key(key: Key, modifiers: Modifiers) -> Option<EditorCommand> {
    if modifiers.command {
        return match key {
            Key::D => Some(EditorCommand::Action(ActionId::Duplicate)),
            Key::N => Some(EditorCommand::NewScene),
            Key::Z if modifiers.shift => Some(EditorCommand::Redo),
            Key::Z => Some(EditorCommand::Undo),
            Key::Y => Some(EditorCommand::Redo),
            _ => None,
        };
    }
    if modifiers.alt {
        return None;
    }
    if modifiers.shift {
        return match key {
            Key::G => Some(EditorCommand::ViewControl(ViewControlId::Grid)),
            _ => None,
        };
    }
    match key {
        Key::V => Some(EditorCommand::SetTool(TransformMode::Select)),
        Key::G => Some(EditorCommand::SetTool(TransformMode::Move)),
        Key::R => Some(EditorCommand::SetTool(TransformMode::Rotate)),
        Key::S => Some(EditorCommand::SetTool(TransformMode::Scale)),
        Key::A => Some(EditorCommand::SetTool(TransformMode::Align)),
        Key::Delete => Some(EditorCommand::Action(ActionId::Delete)),
        Key::Escape => Some(EditorCommand::Deselect),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::{ACTIONS, TOOLS, VIEW_CONTROLS};

    /// Parse a shortcut label like "Ctrl+D" or "Shift+G"
    fn parse_label(label: &str) -> (Key, Modifiers) {
        let mut modifiers = Modifiers::NONE;
        let mut key = None;
        for part in label.split('+') {
            match part {
                "Ctrl" => modifiers = modifiers | Modifiers::COMMAND,
                "Shift" => modifiers = modifiers | Modifiers::SHIFT,
                "Del" => key = Some(Key::Delete),
                other => key = Key::from_name(other),
            }
        }
        (key.expect("key in label"), modifiers)
    }

    #[test]
    fn test_every_tool_label_resolves() {
        for tool in &TOOLS {
            let (key, mods) = parse_label(tool.shortcut);
            assert_eq!(command_for_key(key, mods), Some(EditorCommand::SetTool(tool.id)));
        }
    }

    #[test]
    fn test_every_action_label_resolves() {
        for action in &ACTIONS {
            let (key, mods) = parse_label(action.shortcut);
            assert_eq!(command_for_key(key, mods), Some(EditorCommand::Action(action.id)));
        }
        for control in &VIEW_CONTROLS {
            let (key, mods) = parse_label(control.shortcut);
            assert_eq!(command_for_key(key, mods), Some(EditorCommand::ViewControl(control.id)));
        }
    }

    #[test]
    fn test_history_and_escape() {
        assert_eq!(command_for_key(Key::Z, Modifiers::COMMAND), Some(EditorCommand::Undo));
        assert_eq!(
            command_for_key(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT),
            Some(EditorCommand::Redo)
        );
        assert_eq!(command_for_key(Key::Escape, Modifiers::NONE), Some(EditorCommand::Deselect));
        assert_eq!(command_for_key(Key::N, Modifiers::COMMAND), Some(EditorCommand::NewScene));
        assert_eq!(command_for_key(Key::Q, Modifiers::NONE), None);
    }
}
