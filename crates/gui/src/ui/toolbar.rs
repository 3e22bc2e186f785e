//! Toolbar rendering
//!
//! Layout: New | Tools | Actions | ... | View. Button descriptors and click
//! handlers come from the `toolbar` model in the library crate.

use egui::{Color32, RichText, Stroke, Ui};

use crate::i18n::t;
use crate::state::{AppState, ConfirmAction, SceneStore};
use crate::toolbar::{
    self, tooltip, Accent, ACTIONS, NEW_SCENE_ICON, NEW_SCENE_SHORTCUT, TOOLS, VIEW_CONTROLS,
};

const BUTTON_SIZE: egui::Vec2 = egui::vec2(30.0, 26.0);
const VIEW_ACTIVE_FILL: Color32 = Color32::from_rgb(34, 197, 94);
const DANGER: Color32 = Color32::from_rgb(239, 68, 68);

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Filled button for an active tool: accent start as fill, accent end as border
fn accent_button(icon: &str, accent: Accent) -> egui::Button<'_> {
    egui::Button::new(RichText::new(icon).color(Color32::WHITE))
        .fill(rgb(accent.from))
        .stroke(Stroke::new(1.0, rgb(accent.to)))
        .min_size(BUTTON_SIZE)
}

fn plain_button(icon: &str) -> egui::Button<'_> {
    egui::Button::new(icon).min_size(BUTTON_SIZE)
}

fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().weak());
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // ── New scene ────────────────────────────────────────
        let new_tip = tooltip(t("toolbar.new_scene"), NEW_SCENE_SHORTCUT);
        if ui
            .add(plain_button(NEW_SCENE_ICON))
            .on_hover_text(new_tip)
            .clicked()
        {
            state.confirm.open(ConfirmAction::NewScene);
        }

        ui.separator();

        // ── Tools ────────────────────────────────────────────
        section_label(ui, t("toolbar.tools"));
        let active = state.editor.transform_mode();
        for tool in &TOOLS {
            let button = match tool.accent {
                Some(accent) if tool.id == active => accent_button(tool.icon, accent),
                _ => plain_button(tool.icon),
            };
            if ui
                .add(button)
                .on_hover_text(tooltip(tool.name, tool.shortcut))
                .clicked()
            {
                toolbar::handle_tool_click(&mut state.editor, tool.id);
            }
        }

        ui.separator();

        // ── Actions ──────────────────────────────────────────
        section_label(ui, t("toolbar.actions"));
        for action in &ACTIONS {
            let enabled = toolbar::action_enabled(&state.editor, action.id);
            let mut button = plain_button(action.icon);
            if enabled && action.id == toolbar::ActionId::Delete {
                button = egui::Button::new(RichText::new(action.icon).color(DANGER))
                    .min_size(BUTTON_SIZE);
            }
            if ui
                .add_enabled(enabled, button)
                .on_hover_text(tooltip(action.name, action.shortcut))
                .on_disabled_hover_text(tooltip(action.name, action.shortcut))
                .clicked()
            {
                toolbar::handle_action_click(&mut state.editor, action.id);
            }
        }

        // ── View controls (right-aligned) ────────────────────
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for control in VIEW_CONTROLS.iter().rev() {
                let on = toolbar::view_control_active(&state.editor, control.id);
                let button = if on {
                    egui::Button::new(RichText::new(control.icon).color(Color32::WHITE))
                        .fill(VIEW_ACTIVE_FILL)
                        .min_size(BUTTON_SIZE)
                } else {
                    plain_button(control.icon)
                };
                if ui
                    .add(button)
                    .on_hover_text(tooltip(control.name, control.shortcut))
                    .clicked()
                {
                    toolbar::handle_view_control_click(&mut state.editor, control.id);
                }
            }
            section_label(ui, t("toolbar.view"));
        });
    });

    // Selection readout
    if let Some(readout) = toolbar::status_readout(&state.editor) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(t("toolbar.selected")).small().weak());
            ui.label(RichText::new(readout.object_label()).small().strong());
            ui.add_space(8.0);
            ui.label(RichText::new(t("toolbar.mode")).small().weak());
            let mode_color = toolbar::tool(readout.mode)
                .accent
                .map(|a| rgb(a.from))
                .unwrap_or(Color32::LIGHT_GRAY);
            ui.label(RichText::new(readout.mode_label()).small().color(mode_color));
            ui.add_space(8.0);
            ui.label(RichText::new(t("toolbar.esc_hint")).small().weak());
        });
    }
}
