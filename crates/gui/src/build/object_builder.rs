//! Object mesh building: factory mesh + object color + world transform

use glam::{DMat4, DQuat, DVec3, EulerRot};
use shared::{SceneObject, Transform};

use crate::factory::create_from_primitive;
use crate::graphics::CpuGraphics;
use crate::viewport::mesh::MeshData;

/// Share of the selection tint mixed into a selected object's color
pub const SELECTION_MIX: f32 = 0.45;

/// Model matrix (scale, then XYZ rotation in degrees, then translation)
pub fn transform_matrix(transform: &Transform) -> DMat4 {
    let [rx, ry, rz] = transform.rotation;
    let rotation = DQuat::from_euler(
        EulerRot::XYZ,
        rx.to_radians(),
        ry.to_radians(),
        rz.to_radians(),
    );
    DMat4::from_scale_rotation_translation(
        DVec3::from_array(transform.scale),
        rotation,
        DVec3::from_array(transform.position),
    )
}

/// Transform positions and normals in place
pub fn apply_transform(mesh: &mut MeshData, transform: &Transform) {
    let model = transform_matrix(transform);
    let normal_matrix = model.inverse().transpose();

    for vertex in mesh.vertices.chunks_exact_mut(9) {
        let p = model.transform_point3(DVec3::new(
            vertex[0] as f64,
            vertex[1] as f64,
            vertex[2] as f64,
        ));
        let n = normal_matrix
            .transform_vector3(DVec3::new(
                vertex[3] as f64,
                vertex[4] as f64,
                vertex[5] as f64,
            ))
            .normalize_or_zero();
        vertex[0] = p.x as f32;
        vertex[1] = p.y as f32;
        vertex[2] = p.z as f32;
        vertex[3] = n.x as f32;
        vertex[4] = n.y as f32;
        vertex[5] = n.z as f32;
    }
}

/// Blend every vertex color toward `tint`
pub fn apply_selection_tint(mesh: &mut MeshData, tint: [f32; 3]) {
    for vertex in mesh.vertices.chunks_exact_mut(9) {
        for (c, t) in vertex[6..9].iter_mut().zip(tint) {
            *c = *c * (1.0 - SELECTION_MIX) + t * SELECTION_MIX;
        }
    }
}

/// Build world-space MeshData for one object
pub fn build_object_mesh_data(object: &SceneObject, selection_tint: Option<[f32; 3]>) -> MeshData {
    let mut mesh = create_from_primitive(&CpuGraphics, &object.primitive);
    mesh.material.color = object.color;

    let mut data = mesh.to_mesh_data();
    apply_transform(&mut data, &object.transform);
    if let Some(tint) = selection_tint {
        apply_selection_tint(&mut data, tint);
    }
    data
}

#[cfg(test)]
mod tests {
    use shared::{Primitive, PrimitiveKind};

    use super::*;
    use crate::viewport::picking::Aabb;

    fn object(kind: PrimitiveKind, transform: Transform) -> SceneObject {
        let primitive = Primitive::with_defaults(kind);
        SceneObject {
            id: "obj".into(),
            name: "obj".into(),
            color: primitive.default_color(),
            primitive,
            transform,
            visible: true,
        }
    }

    #[test]
    fn test_translation_moves_bounds() {
        let data = build_object_mesh_data(
            &object(PrimitiveKind::Cube, Transform::at([2.0, 0.0, -1.0])),
            None,
        );
        let aabb = Aabb::from_mesh(&data);
        assert!((aabb.center().x - 2.0).abs() < 1e-5);
        assert!((aabb.center().z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_about_x_lays_plane_flat() {
        let mut transform = Transform::new();
        transform.rotation = [-90.0, 0.0, 0.0];
        let data = build_object_mesh_data(&object(PrimitiveKind::Plane, transform), None);
        let aabb = Aabb::from_mesh(&data);
        assert!(aabb.size().y < 1e-5);
        assert!((aabb.size().z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_nonuniform_scale_keeps_unit_normals() {
        let mut transform = Transform::new();
        transform.scale = [3.0, 1.0, 0.5];
        let data = build_object_mesh_data(&object(PrimitiveKind::Sphere, transform), None);
        for i in 0..data.vertex_count() {
            assert!((data.normal(i).length() - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_selection_tint_changes_color() {
        let obj = object(PrimitiveKind::Cube, Transform::new());
        let plain = build_object_mesh_data(&obj, None);
        let tinted = build_object_mesh_data(&obj, Some([0.0, 0.0, 1.0]));
        assert_eq!(&plain.vertices[6..9], &[0.0, 1.0, 0.0]);
        assert!(tinted.vertices[8] > 0.4);
        assert!(tinted.vertices[7] < 1.0);
    }

    #[test]
    fn test_object_color_overrides_default() {
        let mut obj = object(PrimitiveKind::Cube, Transform::new());
        obj.color = 0xff0000;
        let data = build_object_mesh_data(&obj, None);
        assert_eq!(&data.vertices[6..9], &[1.0, 0.0, 0.0]);
    }
}
