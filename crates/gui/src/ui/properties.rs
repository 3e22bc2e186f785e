//! Properties panel for the selected object

use egui::Ui;
use shared::{Primitive, SceneObject, Transform};

use crate::i18n::{primitive_name, t};
use crate::state::scene::{short_id, MAX_DIMENSION, MAX_SCALE, MIN_DIMENSION, MIN_SCALE};
use crate::state::{AppState, SceneStore};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("prop.title"));
    ui.separator();

    let Some(object) = state.editor.selected_object().cloned() else {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("prop.select_object"));
            ui.weak(t("prop.to_view"));
        });
        return;
    };

    show_header(ui, state, &object);
    ui.add_space(4.0);
    show_transform(ui, state, &object);
    ui.add_space(8.0);
    show_parameters(ui, state, &object);
}

/// Route a widget edit into the scene: a drag or text focus opens one undo
/// step, a discrete change is recorded on its own.
fn commit(
    state: &mut AppState,
    id: &str,
    response: &egui::Response,
    edit: impl FnOnce(&mut SceneObject),
) {
    if response.drag_started() || response.gained_focus() {
        state.editor.scene.begin_drag();
    }
    if !response.changed() {
        return;
    }
    if response.dragged() || response.has_focus() {
        state.editor.scene.edit_object(id, edit);
    } else if let Some(mut object) = state.editor.scene.get_object(id).cloned() {
        edit(&mut object);
        state.editor.scene.set_transform(id, object.transform);
        state.editor.scene.set_primitive(id, object.primitive);
    }
}

fn show_header(ui: &mut Ui, state: &mut AppState, object: &SceneObject) {
    egui::Grid::new("object_props")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(format!("{}:", t("prop.name")));
            let mut name = object.name.clone();
            let response = ui.text_edit_singleline(&mut name);
            commit(state, &object.id, &response, |o| o.name = name);
            ui.end_row();

            ui.label(format!("{}:", t("prop.type")));
            ui.label(primitive_name(object.primitive.kind()));
            ui.end_row();

            ui.label("ID:");
            ui.monospace(short_id(&object.id));
            ui.end_row();

            ui.label(format!("{}:", t("prop.color")));
            let mut rgb = [
                (object.color >> 16) as u8,
                (object.color >> 8) as u8,
                object.color as u8,
            ];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                let color = (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32;
                state.editor.scene.set_color(&object.id, color);
            }
            ui.end_row();

            ui.label(format!("{}:", t("prop.visible")));
            let mut visible = object.visible;
            if ui.checkbox(&mut visible, "").changed() {
                state.editor.scene.set_object_visible(&object.id, visible);
            }
            ui.end_row();
        });
}

fn vec3_row(
    ui: &mut Ui,
    state: &mut AppState,
    object: &SceneObject,
    label: &str,
    pick: fn(&mut Transform) -> &mut [f64; 3],
    speed: f64,
    range: std::ops::RangeInclusive<f64>,
) {
    ui.label(label);
    let mut values = *pick(&mut object.transform.clone());
    for axis in 0..3 {
        let response = ui.add(
            egui::DragValue::new(&mut values[axis])
                .speed(speed)
                .range(range.clone())
                .max_decimals(3)
                .prefix(["x ", "y ", "z "][axis]),
        );
        let v = values[axis];
        commit(state, &object.id, &response, |o| pick(&mut o.transform)[axis] = v);
    }
    ui.end_row();
}

fn show_transform(ui: &mut Ui, state: &mut AppState, object: &SceneObject) {
    egui::CollapsingHeader::new(t("prop.transform"))
        .id_salt("object_transform")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("transform_grid")
                .num_columns(4)
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    let unbounded = f64::NEG_INFINITY..=f64::INFINITY;
                    vec3_row(ui, state, object, t("prop.position"), |tr| &mut tr.position, 0.05, unbounded.clone());
                    vec3_row(ui, state, object, t("prop.rotation"), |tr| &mut tr.rotation, 1.0, -180.0..=180.0);
                    vec3_row(ui, state, object, t("prop.scale"), |tr| &mut tr.scale, 0.01, MIN_SCALE..=MAX_SCALE);
                });
            if ui.small_button(t("prop.reset_transform")).clicked() {
                state.editor.scene.set_transform(&object.id, Transform::new());
            }
        });
}

/// Editable (label key, value) pairs of a primitive, in a fixed order
fn parameters(primitive: &Primitive) -> Vec<(&'static str, f64)> {
    match *primitive {
        Primitive::Cube { size } | Primitive::Pyramid { size } => vec![("prop.size", size)],
        Primitive::Sphere { radius }
        | Primitive::Octahedron { radius }
        | Primitive::Tetrahedron { radius } => vec![("prop.radius", radius)],
        Primitive::Cylinder { radius_top, radius_bottom, height } => vec![
            ("prop.radius_top", radius_top),
            ("prop.radius_bottom", radius_bottom),
            ("prop.height", height),
        ],
        Primitive::Cone { radius, height } => {
            vec![("prop.radius", radius), ("prop.height", height)]
        }
        Primitive::Plane { width, height } => {
            vec![("prop.width", width), ("prop.height", height)]
        }
    }
}

/// Lower bound of a parameter field. Only cylinder radii may reach zero (the cap is dropped).
fn parameter_min(key: &str) -> f64 {
    match key {
        "prop.radius_top" | "prop.radius_bottom" => 0.0,
        _ => MIN_DIMENSION,
    }
}

/// Write the i-th parameter back, same order as [`parameters`]
fn set_parameter(primitive: &mut Primitive, index: usize, value: f64) {
    match primitive {
        Primitive::Cube { size } | Primitive::Pyramid { size } => *size = value,
        Primitive::Sphere { radius }
        | Primitive::Octahedron { radius }
        | Primitive::Tetrahedron { radius } => *radius = value,
        Primitive::Cylinder { radius_top, radius_bottom, height } => match index {
            0 => *radius_top = value,
            1 => *radius_bottom = value,
            _ => *height = value,
        },
        Primitive::Cone { radius, height } => match index {
            0 => *radius = value,
            _ => *height = value,
        },
        Primitive::Plane { width, height } => match index {
            0 => *width = value,
            _ => *height = value,
        },
    }
}

fn show_parameters(ui: &mut Ui, state: &mut AppState, object: &SceneObject) {
    egui::CollapsingHeader::new(t("prop.parameters"))
        .id_salt("object_parameters")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("parameters_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (index, (key, mut value)) in
                        parameters(&object.primitive).into_iter().enumerate()
                    {
                        ui.label(t(key));
                        let response = ui.add(
                            egui::DragValue::new(&mut value)
                                .speed(0.01)
                                .range(parameter_min(key)..=MAX_DIMENSION)
                                .max_decimals(3),
                        );
                        commit(state, &object.id, &response, |o| {
                            set_parameter(&mut o.primitive, index, value)
                        });
                        ui.end_row();
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PrimitiveKind;

    #[test]
    fn test_parameter_order_roundtrips() {
        for kind in PrimitiveKind::ALL {
            let mut primitive = Primitive::with_defaults(kind);
            let count = parameters(&primitive).len();
            for i in 0..count {
                set_parameter(&mut primitive, i, 2.0 + i as f64);
            }
            let values: Vec<f64> = parameters(&primitive).into_iter().map(|(_, v)| v).collect();
            let expected: Vec<f64> = (0..count).map(|i| 2.0 + i as f64).collect();
            assert_eq!(values, expected, "{kind:?}");
        }
    }

    #[test]
    fn test_heights_and_sizes_stay_positive() {
        for kind in PrimitiveKind::ALL {
            for (key, _) in parameters(&Primitive::with_defaults(kind)) {
                let min = parameter_min(key);
                if key.starts_with("prop.radius_") {
                    assert_eq!(min, 0.0);
                } else {
                    assert!(min > 0.0, "{key}");
                }
            }
        }
    }
}
