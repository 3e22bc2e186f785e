//! Wireframe fallback rendering when no GL context is available

use std::collections::HashMap;

use egui::{Color32, Rect, Stroke, Ui};

use super::camera::ArcBallCamera;
use super::mesh::{LineMeshData, MeshData};
use crate::state::settings::{AxisSettings, GridSettings};
use crate::state::{AppState, SceneStore};

/// Paint the 3D viewport using egui's painter (wireframe rendering)
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &ArcBallCamera,
    state: &AppState,
    meshes: &HashMap<String, MeshData>,
    gizmo: Option<&LineMeshData>,
) {
    let painter = ui.painter_at(rect);
    let settings = &state.editor.scene().settings;

    let bg = settings.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    if settings.grid_visible {
        draw_grid(&painter, rect, camera, &state.settings.grid);
    }
    if settings.axes_visible {
        draw_axes(&painter, rect, camera, &state.settings.axes);
    }

    for mesh in meshes.values() {
        draw_mesh_wireframe(&painter, rect, camera, mesh);
    }

    if let Some(lines) = gizmo {
        draw_lines(&painter, rect, camera, lines, 2.0);
    }
}

fn draw_grid(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &GridSettings) {
    let alpha = (settings.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(90, 90, 90, alpha));

    let range = settings.range;
    let step = settings.size;
    let extent = range as f32 * step;

    for i in -range..=range {
        let f = i as f32 * step;
        draw_line_3d(painter, rect, camera, [f, 0.0, -extent], [f, 0.0, extent], stroke);
        draw_line_3d(painter, rect, camera, [-extent, 0.0, f], [extent, 0.0, f], stroke);
    }
}

fn draw_axes(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &AxisSettings) {
    let len = settings.length;
    let axes = [
        ([len, 0.0, 0.0], Color32::from_rgb(220, 50, 50)),
        ([0.0, len, 0.0], Color32::from_rgb(50, 200, 50)),
        ([0.0, 0.0, len], Color32::from_rgb(50, 100, 220)),
    ];
    for (tip, color) in axes {
        draw_line_3d(painter, rect, camera, [0.0; 3], tip, Stroke::new(settings.thickness, color));
    }
}

/// Triangle edges, colored by the first vertex color of the mesh
fn draw_mesh_wireframe(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, mesh: &MeshData) {
    if mesh.vertices.len() < 9 {
        return;
    }
    let c = &mesh.vertices[6..9];
    let color = Color32::from_rgb((c[0] * 255.0) as u8, (c[1] * 255.0) as u8, (c[2] * 255.0) as u8);
    let stroke = Stroke::new(1.0, color);

    let screen: Vec<Option<egui::Pos2>> = (0..mesh.vertex_count())
        .map(|i| camera.project(mesh.position(i).to_array(), rect))
        .collect();

    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if let (Some(Some(pa)), Some(Some(pb))) = (screen.get(a as usize), screen.get(b as usize)) {
                painter.line_segment([*pa, *pb], stroke);
            }
        }
    }
}

fn draw_lines(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, lines: &LineMeshData, width: f32) {
    for seg in lines.vertices.chunks_exact(14) {
        let color = Color32::from_rgba_unmultiplied(
            (seg[3] * 255.0) as u8,
            (seg[4] * 255.0) as u8,
            (seg[5] * 255.0) as u8,
            (seg[6] * 255.0) as u8,
        );
        draw_line_3d(
            painter,
            rect,
            camera,
            [seg[0], seg[1], seg[2]],
            [seg[7], seg[8], seg[9]],
            Stroke::new(width, color),
        );
    }
}

fn draw_line_3d(
    painter: &egui::Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    a: [f32; 3],
    b: [f32; 3],
    stroke: Stroke,
) {
    if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
        painter.line_segment([pa, pb], stroke);
    }
}
