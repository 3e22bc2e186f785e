//! Application menu bar and settings window

use eframe::egui;
use shared::{PrimitiveKind, SceneSettingsPatch};

use crate::i18n::{primitive_name, t};
use crate::keymap::EditorCommand;
use crate::state::scene::SceneState;
use crate::state::settings::{AppSettings, Language};
use crate::state::{AppState, SceneStore};
use crate::toolbar::{self, ActionId, ViewControlId};
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            state.apply_command(EditorCommand::NewScene);
            ui.close_menu();
        }
        if ui.button(t("menu.open")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match SceneState::load_from_file(&path) {
                    Ok(scene) => {
                        state.editor.load_scene(scene);
                        tracing::info!("Loaded scene from {}", path.display());
                    }
                    Err(e) => tracing::error!("{e}"),
                }
            }
        }
        if ui.button(t("menu.save")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.save_title"))
                .add_filter("JSON", &["json"])
                .set_file_name("scene.json")
                .save_file()
            {
                match state.editor.scene.save_to_file(&path) {
                    Ok(()) => tracing::info!("Saved scene to {}", path.display()),
                    Err(e) => tracing::error!("{e}"),
                }
            }
        }
        if ui.button(t("menu.demo")).clicked() {
            state.editor.load_scene(sceneforge_gui_lib::fixtures::demo_scene());
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.edit"), |ui| {
        if ui
            .add_enabled(state.editor.scene.can_undo(), egui::Button::new(t("menu.undo")))
            .clicked()
        {
            state.apply_command(EditorCommand::Undo);
            ui.close_menu();
        }
        if ui
            .add_enabled(state.editor.scene.can_redo(), egui::Button::new(t("menu.redo")))
            .clicked()
        {
            state.apply_command(EditorCommand::Redo);
            ui.close_menu();
        }
        ui.separator();
        for (action, key) in [
            (ActionId::Duplicate, "menu.duplicate"),
            (ActionId::Delete, "menu.delete"),
        ] {
            let enabled = toolbar::action_enabled(&state.editor, action);
            if ui.add_enabled(enabled, egui::Button::new(t(key))).clicked() {
                state.apply_command(EditorCommand::Action(action));
                ui.close_menu();
            }
        }
        ui.separator();
        if ui.button(t("menu.deselect_all")).clicked() {
            state.apply_command(EditorCommand::Deselect);
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.toolbar, t("menu.toolbar"));
        ui.checkbox(&mut state.panels.scene_tree, t("menu.scene_tree"));
        ui.checkbox(&mut state.panels.properties, t("menu.properties"));
        ui.separator();

        let mut grid = toolbar::view_control_active(&state.editor, ViewControlId::Grid);
        if ui.checkbox(&mut grid, t("menu.grid")).changed() {
            state.apply_command(EditorCommand::ViewControl(ViewControlId::Grid));
        }
        let mut axes = state.editor.scene().settings.axes_visible;
        if ui.checkbox(&mut axes, t("menu.axes")).changed() {
            state.editor.update_scene_settings(SceneSettingsPatch {
                axes_visible: Some(axes),
                ..Default::default()
            });
        }
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for &language in Language::all() {
                let selected = state.settings.ui.language == language;
                if ui.selectable_label(selected, language.display_name()).clicked() {
                    state.settings.ui.language = language;
                    ui.close_menu();
                }
            }
        });
    });
}

/// Show the create menu
pub fn create_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.create"), |ui| {
        ui.label(t("menu.primitives"));
        for kind in PrimitiveKind::ALL {
            if ui.button(format!("  {}", primitive_name(kind))).clicked() {
                create_primitive(state, kind);
                ui.close_menu();
            }
        }
    });
}

/// Add a primitive at the origin and select it
pub fn create_primitive(state: &mut AppState, kind: PrimitiveKind) {
    let id = state.editor.scene.add_primitive(kind, None);
    state.editor.select(&id);
    tracing::info!("Created {} {}", kind.tag(), id);
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window &= open;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    let mut visible = state.editor.scene().settings.grid_visible;
    if ui.checkbox(&mut visible, t("settings.grid_visible")).changed() {
        state
            .editor
            .update_scene_settings(SceneSettingsPatch::grid_visible(visible));
    }

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.05)
                .range(0.1..=10.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_range"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));
    ui.checkbox(&mut state.settings.axes.show_labels, t("settings.axes_labels"));

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.1..=10.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_thickness"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.thickness)
                .speed(0.1)
                .range(0.5..=5.0),
        );
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    ui.horizontal(|ui| {
        ui.label(t("settings.bg_color"));
        let [r, g, b] = state.editor.scene().settings.background_color;
        let mut color = egui::Color32::from_rgb(r, g, b);
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.editor.update_scene_settings(SceneSettingsPatch {
                background_color: Some([color.r(), color.g(), color.b()]),
                ..Default::default()
            });
        }
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.sel_color"));
        let [r, g, b] = state.settings.viewport.selection_color;
        let mut color = egui::Color32::from_rgb(r, g, b);
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.viewport.selection_color = [color.r(), color.g(), color.b()];
        }
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.gizmo_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.viewport.gizmo_size)
                .speed(1.0)
                .range(30.0..=200.0)
                .suffix(" px"),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.reset")).clicked() {
            state.settings = AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
