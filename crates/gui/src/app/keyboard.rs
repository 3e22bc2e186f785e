//! Keyboard shortcut handling

use eframe::egui;

use crate::keymap::command_for_key;
use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused or a prompt is open
    if ctx.memory(|m| m.focused().is_some()) || state.confirm.is_open() {
        return;
    }

    let pressed: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => Some((*key, *modifiers)),
                _ => None,
            })
            .collect()
    });

    for (key, modifiers) in pressed {
        // F: focus camera on selected object
        if key == egui::Key::F && modifiers.is_none() {
            if let Some(id) = state.editor.selected_id() {
                if let Some(center) = viewport.aabb_center(id) {
                    viewport.focus_on(center);
                }
            }
            continue;
        }
        if let Some(command) = command_for_key(key, modifiers) {
            tracing::debug!("Shortcut {:?} -> {:?}", key, command);
            state.apply_command(command);
        }
    }
}
