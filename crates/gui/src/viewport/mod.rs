//! 3D viewport panel with OpenGL rendering

mod camera;
mod context_menu;
mod gizmo;
mod gl_renderer;
pub use sceneforge_gui_lib::viewport::{mesh, picking};
mod overlays;
mod renderer;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;
use shared::TransformMode;

use crate::build::MeshCache;
use crate::state::{AppState, SceneStore};
use crate::tools;
use camera::ArcBallCamera;
use gizmo::{build_gizmo_lines, compute_drag_delta, gizmo_hit_test, DragState, GizmoAxis};
use gl_renderer::GlRenderer;
use mesh::{LineMeshData, MeshData};
use picking::pick_nearest;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    cache: MeshCache,
    drag: DragState,
    /// Object ID picked by right-click (for context menu)
    context_target: Option<String>,
    /// Cache rebuild count last handed to the GL thread
    uploaded_rebuild: Option<u64>,
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            cache: MeshCache::new(),
            drag: DragState::Idle,
            context_target: None,
            uploaded_rebuild: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using wireframe fallback: {e}"),
        }
    }

    /// Release GPU resources
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Focus camera on a specific point
    pub fn focus_on(&mut self, target: glam::Vec3) {
        self.camera.focus(target);
    }

    /// Get the AABB center of a cached object (if available)
    pub fn aabb_center(&self, id: &str) -> Option<glam::Vec3> {
        self.cache.aabb(id).map(|aabb| aabb.center())
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // Picking needs meshes that match the current scene
        self.refresh_cache(state);

        self.handle_drag(&response, ui, rect, state);

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if response.hovered() && scroll.abs() > 0.1 {
            self.camera.zoom(scroll * 0.01);
        }

        self.handle_click(&response, ui, rect, state);
        self.handle_right_click(&response, rect);

        let actions = self.show_context_menu(&response, state);
        if let Some(center) = actions.focus_request {
            self.camera.focus(center);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.refresh_cache(state);
        let gizmo_lines = self.build_gizmo_lines(state, rect);
        self.render(ui, rect, state, gizmo_lines);
        self.draw_overlays(ui, rect, state);
    }

    fn refresh_cache(&mut self, state: &AppState) {
        let editor = &state.editor;
        self.cache.refresh(
            editor.scene(),
            editor.selected_id().map(String::as_str),
            state.settings.selection_rgb(),
            editor.scene.version(),
        );
    }

    /// Gizmo handle length in world units (constant on screen)
    fn gizmo_length(&self, state: &AppState, rect: egui::Rect) -> f32 {
        state.settings.viewport.gizmo_size * self.camera.world_per_pixel(rect.height())
    }

    fn selected_center(&self, state: &AppState) -> Option<glam::Vec3> {
        state.editor.selected_id().and_then(|id| self.aabb_center(id))
    }

    /// Move-tool axis handle under the pointer, if any
    fn gizmo_axis_at(
        &self,
        state: &AppState,
        pos: egui::Pos2,
        rect: egui::Rect,
    ) -> Option<GizmoAxis> {
        if state.editor.transform_mode() != TransformMode::Move {
            return None;
        }
        let center = self.selected_center(state)?;
        let ray = self.camera.screen_ray(pos, rect);
        gizmo_hit_test(&ray, center, self.gizmo_length(state, rect))
    }

    fn handle_drag(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        let alt = ui.input(|i| i.modifiers.alt);
        let delta = response.drag_delta();

        if response.drag_started_by(egui::PointerButton::Primary) && !alt {
            self.drag = self.start_tool_drag(response, rect, state);
        }

        match self.drag {
            DragState::Idle => {
                // Camera controls
                if response.dragged_by(egui::PointerButton::Middle)
                    || response.dragged_by(egui::PointerButton::Primary)
                {
                    self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
                }
                if response.dragged_by(egui::PointerButton::Secondary) {
                    self.camera.pan(-delta.x * 0.01, delta.y * 0.01);
                }
            }
            DragState::Axis(axis) => {
                if let Some(center) = self.selected_center(state) {
                    let world = compute_drag_delta(&self.camera, center, axis, delta, rect);
                    tools::drag_translate(
                        &mut state.editor,
                        [world.x as f64, world.y as f64, world.z as f64],
                    );
                }
            }
            DragState::Rotate => tools::drag_rotate(&mut state.editor, delta.x),
            DragState::Scale => tools::drag_scale(&mut state.editor, delta.y),
        }

        if self.drag.is_active()
            && (response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary))
        {
            tracing::debug!("Drag finished: {:?}", self.drag);
            self.drag = DragState::Idle;
        }
    }

    /// Decide what a primary drag manipulates; Idle means the camera
    fn start_tool_drag(
        &self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
    ) -> DragState {
        if state.editor.selected_id().is_none() {
            return DragState::Idle;
        }
        let drag = match state.editor.transform_mode() {
            TransformMode::Move => response
                .interact_pointer_pos()
                .and_then(|pos| self.gizmo_axis_at(state, pos, rect))
                .map_or(DragState::Idle, DragState::Axis),
            TransformMode::Rotate => DragState::Rotate,
            TransformMode::Scale => DragState::Scale,
            TransformMode::Select | TransformMode::Align => DragState::Idle,
        };
        if drag.is_active() {
            tools::begin_drag(&mut state.editor);
        }
        drag
    }

    fn handle_click(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        if !response.clicked() || ui.input(|i| i.modifiers.alt) || self.drag.is_active() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        // Clicking a gizmo handle must not place or deselect
        if self.gizmo_axis_at(state, pos, rect).is_some() {
            return;
        }

        let ray = self.camera.screen_ray(pos, rect);
        let outcome = tools::handle_click(
            &mut state.editor,
            &ray,
            self.cache.meshes(),
            self.cache.aabbs(),
            state.settings.grid.size as f64,
        );
        tracing::debug!("Viewport click: {:?}", outcome);
    }

    fn handle_right_click(&mut self, response: &egui::Response, rect: egui::Rect) {
        if !response.secondary_clicked() {
            return;
        }
        self.context_target = response.interact_pointer_pos().and_then(|pos| {
            let ray = self.camera.screen_ray(pos, rect);
            pick_nearest(&ray, self.cache.aabbs())
        });
    }

    fn show_context_menu(
        &mut self,
        response: &egui::Response,
        state: &mut AppState,
    ) -> context_menu::ContextMenuActions {
        let mut actions = context_menu::ContextMenuActions::default();

        let Some(id) = self.context_target.clone() else {
            return actions;
        };
        let center = self.aabb_center(&id);

        response.context_menu(|ui| {
            actions = context_menu::show_context_menu(ui, state, &id, center);
        });
        if !state.editor.scene.contains(&id) {
            self.context_target = None;
        }

        actions
    }

    fn build_gizmo_lines(&self, state: &AppState, rect: egui::Rect) -> Option<LineMeshData> {
        let id = state.editor.selected_id()?;
        let aabb = self.cache.aabb(id)?;
        build_gizmo_lines(
            state.editor.transform_mode(),
            aabb.center(),
            self.gizmo_length(state, rect),
            aabb.min.y,
        )
    }

    fn render(
        &mut self,
        ui: &mut Ui,
        rect: egui::Rect,
        state: &AppState,
        gizmo_lines: Option<LineMeshData>,
    ) {
        let Some(gl_renderer) = &self.gl_renderer else {
            renderer::paint_viewport(
                ui,
                rect,
                &self.camera,
                state,
                self.cache.meshes(),
                gizmo_lines.as_ref(),
            );
            return;
        };

        let renderer = gl_renderer.clone();
        let camera = self.camera;

        // Hand meshes over only when the cache actually rebuilt
        let version = self.cache.rebuild_count();
        let meshes: Option<HashMap<String, MeshData>> = if self.uploaded_rebuild != Some(version) {
            self.uploaded_rebuild = Some(version);
            Some(self.cache.meshes_clone())
        } else {
            None
        };

        let scene_settings = state.editor.scene().settings.clone();
        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    if let Some(meshes) = &meshes {
                        r.sync_from_meshes(gl, meshes, version);
                    }
                    r.sync_gizmo(gl, gizmo_lines.as_ref());

                    let params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: scene_settings.grid_visible,
                        axes_visible: scene_settings.axes_visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color: scene_settings.background_color,
                    };
                    r.paint(gl, &camera, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);
        let scene = state.editor.scene();

        if scene.settings.axes_visible && state.settings.axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, &self.camera, &state.settings.axes);
        }
        overlays::draw_camera_info(&painter, rect, &self.camera);

        if scene.objects.is_empty() {
            overlays::draw_empty_hint(&painter, rect);
        } else {
            overlays::draw_tool_hint(
                &painter,
                rect,
                state.editor.transform_mode(),
                state.editor.selected_id().is_some(),
            );
        }
    }
}
