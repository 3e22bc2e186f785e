//! Scene tree panel - lists scene objects

use egui::{Color32, RichText, Ui};
use shared::{ObjectId, PrimitiveKind};

use crate::i18n::{primitive_name, t};
use crate::state::scene::primitive_icon;
use crate::state::{AppState, SceneStore};

const DELETE_COLOR: Color32 = Color32::from_rgb(220, 80, 80);

/// Row data collected up front to avoid borrowing the scene while mutating it
struct Row {
    id: ObjectId,
    name: String,
    kind: PrimitiveKind,
    visible: bool,
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(t("tree.scene"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("➕", |ui| {
                for kind in PrimitiveKind::ALL {
                    if ui.button(primitive_name(kind)).clicked() {
                        crate::app::create_primitive(state, kind);
                        ui.close_menu();
                    }
                }
            })
            .response
            .on_hover_text(t("tree.add_object"));
            let count = state.editor.scene.object_count();
            ui.weak(format!("({count})"));
        });
    });
    ui.separator();

    if state.editor.scene.object_count() == 0 {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("tree.no_objects"));
            ui.add_space(4.0);
            if ui.button(primitive_name(PrimitiveKind::Cube)).clicked() {
                crate::app::create_primitive(state, PrimitiveKind::Cube);
            }
        });
        return;
    }

    let rows: Vec<Row> = state
        .editor
        .scene()
        .objects
        .iter()
        .map(|o| Row {
            id: o.id.clone(),
            name: o.name.clone(),
            kind: o.primitive.kind(),
            visible: o.visible,
        })
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("scene_tree_scroll")
        .show(ui, |ui| {
            for row in &rows {
                show_row(ui, state, row);
            }
        });
}

fn show_row(ui: &mut Ui, state: &mut AppState, row: &Row) {
    let selected = state.editor.selection.is_selected(&row.id);

    let label_color = if !row.visible {
        Color32::from_rgb(100, 100, 100)
    } else if selected {
        Color32::from_rgb(100, 200, 255)
    } else {
        Color32::from_rgb(200, 200, 200)
    };

    let response = ui
        .horizontal(|ui| {
            let eye = if row.visible { "👁" } else { "—" };
            if ui
                .small_button(eye)
                .on_hover_text(if row.visible { t("tree.hide") } else { t("tree.show") })
                .clicked()
            {
                state.editor.scene.set_object_visible(&row.id, !row.visible);
            }
            ui.add(
                egui::Label::new(
                    RichText::new(format!("{} {}", primitive_icon(row.kind), row.name))
                        .color(label_color),
                )
                .selectable(false)
                .sense(egui::Sense::click()),
            )
        })
        .inner;

    if response.clicked() {
        if selected {
            state.editor.deselect();
        } else {
            state.editor.select(&row.id);
        }
    }

    response.context_menu(|ui| {
        if row.visible {
            if ui.button(t("tree.hide")).clicked() {
                state.editor.scene.set_object_visible(&row.id, false);
                ui.close_menu();
            }
        } else if ui.button(t("tree.show")).clicked() {
            state.editor.scene.set_object_visible(&row.id, true);
            ui.close_menu();
        }

        if ui.button(t("menu.duplicate")).clicked() {
            state.editor.select(&row.id);
            state.editor.duplicate_object();
            ui.close_menu();
        }

        ui.separator();
        if ui
            .button(RichText::new(t("menu.delete")).color(DELETE_COLOR))
            .clicked()
        {
            state.editor.remove_object(&row.id);
            ui.close_menu();
        }
    });
}
