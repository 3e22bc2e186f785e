use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, SceneStore};

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let editor = &state.editor;
        let object_count = editor.scene.object_count();
        ui.weak(format!("{}: {object_count}", t("status.objects")));

        ui.separator();
        ui.weak(format!("{}: {}", t("status.mode"), editor.transform_mode().label()));

        ui.separator();
        match editor.selected_object() {
            Some(object) => {
                ui.label(format!("{}: {}", t("status.selected"), object.name));
            }
            None => {
                ui.weak(t("status.ready"));
            }
        }

        if !editor.scene().settings.grid_visible {
            ui.separator();
            ui.weak(t("status.grid_hidden"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("SceneForge v", env!("CARGO_PKG_VERSION")));
        });
    });
}
