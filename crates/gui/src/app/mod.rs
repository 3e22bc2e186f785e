//! Main application module

mod keyboard;
mod menus;
mod styles;

pub use menus::create_primitive;

use eframe::egui;

use crate::i18n;
use crate::state::scene::SceneState;
use crate::state::AppState;
use crate::ui::{confirm_dialog, properties, scene_tree, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct EditorApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved scene version (for autosave)
    last_saved_version: u64,
    /// Settings as last written to disk
    last_saved_settings: crate::state::AppSettings,
}

impl EditorApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_scene: Option<shared::SceneDescription>,
    ) -> Self {
        let mut state = AppState::default();

        // Load initial scene: CLI argument takes priority, then autosave
        if let Some(scene) = initial_scene {
            state.editor.load_scene(scene);
        } else if let Some(autosave) = SceneState::load_autosave() {
            state.editor.load_scene(autosave);
            tracing::info!("Loaded autosave scene");
        }

        i18n::set_language(state.settings.ui.language);

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.editor.scene.version();
        let last_saved_settings = state.settings.clone();

        Self {
            state,
            viewport,
            last_font_size,
            last_saved_version,
            last_saved_settings,
        }
    }

    fn persist(&mut self) {
        let current_version = self.state.editor.scene.version();
        if current_version != self.last_saved_version {
            self.state.editor.scene.autosave();
            self.last_saved_version = current_version;
        }
        if self.state.settings != self.last_saved_settings {
            self.state.settings.save();
            i18n::set_language(self.state.settings.ui.language);
            self.last_saved_settings = self.state.settings.clone();
        }
    }
}

impl eframe::App for EditorApp {
    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        self.persist();
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        self.persist();

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::create_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Confirmation prompt (New scene) ──────────────────
        if let Some(accepted) = confirm_dialog::show(ctx, &self.state.confirm) {
            self.state.resolve_confirm(accepted);
        }

        // ── Toolbar ───────────────────────────────────────────
        if self.state.panels.toolbar {
            egui::TopBottomPanel::top("toolbar")
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 4)),
                )
                .show(ctx, |ui| {
                    toolbar::show(ui, &mut self.state);
                });
        }

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: Scene tree ───────────────────────────
        if self.state.panels.scene_tree {
            egui::SidePanel::left("scene_tree")
                .default_width(210.0)
                .width_range(140.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    scene_tree::show(ui, &mut self.state);
                });
        }

        // ── Right panel: Properties ──────────────────────────
        if self.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(270.0)
                .width_range(200.0..=450.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("props_scroll")
                        .show(ui, |ui| {
                            properties::show(ui, &mut self.state);
                        });
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}
