//! Confirmation prompt rendering. The pending action lives in `state::confirm`.

use crate::i18n::t;
use crate::state::{ConfirmAction, ConfirmDialog};

/// Show the prompt. Returns Some(true) on OK, Some(false) on Cancel/Esc.
pub fn show(ctx: &egui::Context, dialog: &ConfirmDialog) -> Option<bool> {
    let action = dialog.pending()?;
    let mut result = None;

    let message = match action {
        ConfirmAction::NewScene => t("confirm.new_scene"),
    };

    egui::Window::new(t("confirm.title"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.label(message);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(t("confirm.ok")).clicked() {
                    result = Some(true);
                }
                if ui.button(t("confirm.cancel")).clicked() {
                    result = Some(false);
                }
            });
        });

    if result.is_none() {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Enter) {
                result = Some(true);
            } else if i.key_pressed(egui::Key::Escape) {
                result = Some(false);
            }
        });
    }

    result
}
