//! Viewport context menu handling

use egui::Ui;

use crate::i18n::t;
use crate::state::scene::object_display_name;
use crate::state::{AppState, SceneStore};
use crate::toolbar::{self, ActionId};

/// Context menu actions that need the viewport (camera) to apply
#[derive(Default)]
pub struct ContextMenuActions {
    pub focus_request: Option<glam::Vec3>,
}

/// Show context menu for an object
pub fn show_context_menu(
    ui: &mut Ui,
    state: &mut AppState,
    obj_id: &str,
    ctx_center: Option<glam::Vec3>,
) -> ContextMenuActions {
    let mut actions = ContextMenuActions::default();

    let Some(object) = state.editor.scene.get_object(obj_id) else {
        ui.close_menu();
        return actions;
    };
    let visible = object.visible;
    ui.label(egui::RichText::new(object_display_name(object)).strong());
    ui.separator();

    if ui.button(t("ctx.focus")).clicked() {
        actions.focus_request = ctx_center;
        ui.close_menu();
    }

    if visible {
        if ui.button(t("ctx.hide")).clicked() {
            state.editor.scene.set_object_visible(obj_id, false);
            ui.close_menu();
        }
    } else if ui.button(t("ctx.show")).clicked() {
        state.editor.scene.set_object_visible(obj_id, true);
        ui.close_menu();
    }

    // Actions operate on the selection, so select the target first
    if ui.button(t("ctx.duplicate")).clicked() {
        state.editor.select(obj_id);
        toolbar::handle_action_click(&mut state.editor, ActionId::Duplicate);
        ui.close_menu();
    }

    ui.separator();
    if ui
        .button(egui::RichText::new(t("ctx.delete")).color(egui::Color32::from_rgb(220, 80, 80)))
        .clicked()
    {
        state.editor.select(obj_id);
        toolbar::handle_action_click(&mut state.editor, ActionId::Delete);
        ui.close_menu();
    }

    if state.editor.selected_object().is_some_and(|o| o.id == obj_id) {
        ui.separator();
        if ui.button(t("ctx.align")).clicked() {
            let cell = state.settings.grid.size as f64;
            crate::tools::align_selected(&mut state.editor, cell);
            ui.close_menu();
        }
    }

    actions
}
