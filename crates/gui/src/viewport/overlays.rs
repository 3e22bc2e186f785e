//! Viewport overlay drawing (axis labels, tool hint, camera info)

use egui::{Color32, FontId, Painter};
use shared::TransformMode;

use crate::i18n::t;
use crate::state::settings::AxisSettings;

use super::camera::ArcBallCamera;

/// Draw X/Y/Z labels just past the axis tips
pub fn draw_axis_labels(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    axes: &AxisSettings,
) {
    let d = axes.length + 0.1;
    let labels = [
        ([d, 0.0, 0.0], "X", Color32::from_rgb(220, 70, 70)),
        ([0.0, d, 0.0], "Y", Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, d], "Z", Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in labels {
        if let Some(screen) = camera.project(pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    label,
                    FontId::monospace(12.0),
                    color,
                );
            }
        }
    }
}

fn tool_hint(mode: TransformMode) -> &'static str {
    match mode {
        TransformMode::Select => t("hint.select"),
        TransformMode::Move => t("hint.move"),
        TransformMode::Rotate => t("hint.rotate"),
        TransformMode::Scale => t("hint.scale"),
        TransformMode::Align => t("hint.align"),
    }
}

/// What the active tool does, bottom-left
pub fn draw_tool_hint(painter: &Painter, rect: egui::Rect, mode: TransformMode, has_selection: bool) {
    let text = if has_selection || mode == TransformMode::Select {
        tool_hint(mode)
    } else {
        t("hint.select_first")
    };
    painter.text(
        egui::pos2(rect.left() + 8.0, rect.bottom() - 8.0),
        egui::Align2::LEFT_BOTTOM,
        text,
        FontId::proportional(11.0),
        Color32::from_rgb(140, 140, 155),
    );
}

/// Navigation help, shown only for an empty scene
pub fn draw_empty_hint(painter: &Painter, rect: egui::Rect) {
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        t("status.nav_hint"),
        FontId::proportional(11.0),
        Color32::from_rgb(100, 100, 110),
    );
}

pub fn draw_camera_info(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
        egui::vec2(136.0, 44.0),
    );
    painter.rect_filled(overlay_rect, 4.0, Color32::from_rgba_premultiplied(0, 0, 0, 140));
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
            camera.distance,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
        ),
        FontId::monospace(10.0),
        Color32::from_rgb(160, 160, 170),
    );
}
