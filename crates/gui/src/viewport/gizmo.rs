//! Per-tool gizmo: axis arrows for Move, a ring for Rotate, box handles for
//! Scale and a ground footprint for Align.

use glam::Vec3;
use shared::TransformMode;

use super::camera::ArcBallCamera;
use super::mesh::{push_line_vert, LineMeshData};
use super::picking::Ray;

const RED: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
const GREEN: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
const BLUE: [f32; 4] = [0.2, 0.3, 0.9, 1.0];
const RING_SEGMENTS: u32 = 48;

/// Which axis a gizmo handle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    pub fn direction(&self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }
}

/// Active viewport drag
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Move tool, constrained to one axis
    Axis(GizmoAxis),
    /// Rotate tool, horizontal pixels
    Rotate,
    /// Scale tool, vertical pixels
    Scale,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

/// Test if a ray hits one of the gizmo axes.
/// Returns the axis if the ray passes within `threshold` distance of an axis line.
pub fn gizmo_hit_test(ray: &Ray, center: Vec3, axis_length: f32) -> Option<GizmoAxis> {
    // Pick tolerance grows with the handle so it stays usable when zoomed out
    let threshold = (axis_length * 0.075).max(0.05);
    let mut best: Option<(GizmoAxis, f32)> = None;

    for axis in [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z] {
        let line_end = center + axis.direction() * axis_length;
        let dist = ray_line_distance(ray, center, line_end);

        if dist < threshold && best.as_ref().is_none_or(|(_, d)| dist < *d) {
            best = Some((axis, dist));
        }
    }

    best.map(|(axis, _)| axis)
}

/// Compute the world-space translation delta for a gizmo drag.
/// Projects the screen-space drag delta along the axis direction in screen space.
pub fn compute_drag_delta(
    camera: &ArcBallCamera,
    center: Vec3,
    axis: GizmoAxis,
    screen_delta: egui::Vec2,
    rect: egui::Rect,
) -> Vec3 {
    let axis_dir = axis.direction();

    // Project axis direction to screen space
    let p0 = camera.project(center.to_array(), rect);
    let p1 = camera.project((center + axis_dir).to_array(), rect);

    let (Some(screen_p0), Some(screen_p1)) = (p0, p1) else {
        return Vec3::ZERO;
    };

    let screen_axis = egui::vec2(screen_p1.x - screen_p0.x, screen_p1.y - screen_p0.y);
    let screen_axis_len = screen_axis.length();

    if screen_axis_len < 1.0 {
        return Vec3::ZERO;
    }

    let screen_axis_norm = screen_axis / screen_axis_len;

    // Dot product of screen drag delta with screen axis direction
    let projected = screen_delta.dot(screen_axis_norm);

    // Convert back to world units: 1 world unit = screen_axis_len pixels
    let world_delta = projected / screen_axis_len;

    axis_dir * world_delta
}

/// Gizmo lines for the active tool, centered on the selected object
pub fn build_gizmo_lines(
    mode: TransformMode,
    center: Vec3,
    length: f32,
    bottom: f32,
) -> Option<LineMeshData> {
    let mut vertices = Vec::new();
    match mode {
        TransformMode::Select => return None,
        TransformMode::Move => push_arrows(&mut vertices, center, length),
        TransformMode::Rotate => push_ring(&mut vertices, center, length * 0.8, GREEN),
        TransformMode::Scale => push_scale_handles(&mut vertices, center, length),
        TransformMode::Align => {
            let ground = Vec3::new(center.x, 0.0, center.z);
            push_ring(&mut vertices, ground, length * 0.4, [0.1, 0.75, 0.85, 1.0]);
            // Drop line from the object's bottom to the ground
            push_line_vert(&mut vertices, center.x, bottom, center.z, [0.6, 0.6, 0.6, 1.0]);
            push_line_vert(&mut vertices, center.x, 0.0, center.z, [0.6, 0.6, 0.6, 1.0]);
        }
    }
    Some(LineMeshData { vertices })
}

fn push_arrows(v: &mut Vec<f32>, c: Vec3, length: f32) {
    let arrow = length * 0.15;
    for (axis, color) in [(GizmoAxis::X, RED), (GizmoAxis::Y, GREEN), (GizmoAxis::Z, BLUE)] {
        let dir = axis.direction();
        let tip = c + dir * length;
        // Any axis perpendicular to `dir` works for the arrowhead fins
        let side = if axis == GizmoAxis::Y { Vec3::X } else { Vec3::Y };
        push_segment(v, c, tip, color);
        push_segment(v, tip, tip - dir * arrow + side * arrow * 0.5, color);
        push_segment(v, tip, tip - dir * arrow - side * arrow * 0.5, color);
    }
}

/// Horizontal circle (around Y)
fn push_ring(v: &mut Vec<f32>, c: Vec3, radius: f32, color: [f32; 4]) {
    let point = |i: u32| {
        let a = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
        c + Vec3::new(a.cos() * radius, 0.0, a.sin() * radius)
    };
    for i in 0..RING_SEGMENTS {
        push_segment(v, point(i), point(i + 1), color);
    }
}

fn push_scale_handles(v: &mut Vec<f32>, c: Vec3, length: f32) {
    let h = length * 0.06;
    for (axis, color) in [(GizmoAxis::X, RED), (GizmoAxis::Y, GREEN), (GizmoAxis::Z, BLUE)] {
        let tip = c + axis.direction() * length;
        push_segment(v, c, tip, color);
        push_box(v, tip, h, color);
    }
}

/// Wireframe cube of half-size `h`
fn push_box(v: &mut Vec<f32>, c: Vec3, h: f32, color: [f32; 4]) {
    let corner = |i: usize| {
        c + Vec3::new(
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        )
    };
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                push_segment(v, corner(i), corner(i | bit), color);
            }
        }
    }
}

fn push_segment(v: &mut Vec<f32>, a: Vec3, b: Vec3, color: [f32; 4]) {
    push_line_vert(v, a.x, a.y, a.z, color);
    push_line_vert(v, b.x, b.y, b.z, color);
}

/// Minimum distance between a ray and a line segment.
fn ray_line_distance(ray: &Ray, line_start: Vec3, line_end: Vec3) -> f32 {
    let u = ray.direction;
    let v = line_end - line_start;
    let w = ray.origin - line_start;

    let a = u.dot(u); // always >= 0
    let b = u.dot(v);
    let c = v.dot(v); // always >= 0
    let d = u.dot(w);
    let e = v.dot(w);

    let denom = a * c - b * b;

    let (sc, tc);

    if denom < 1e-7 {
        // Nearly parallel
        sc = 0.0;
        tc = if b > c { d / b } else { e / c };
    } else {
        sc = (b * e - c * d) / denom;
        tc = (a * e - b * d) / denom;
    }

    // Clamp tc to [0,1] (line segment)
    let tc = tc.clamp(0.0, 1.0);
    // Only consider positive ray parameter
    let sc = sc.max(0.0);

    let closest_ray = ray.origin + u * sc;
    let closest_line = line_start + v * tc;

    (closest_ray - closest_line).length()
}
