//! Factory functions for creating test and demo data.
//!
//! Provides helpers to construct `SceneObject` and `SceneDescription` values
//! without going through `SceneState`, plus the demo scene offered in the File menu.

use shared::*;

/// Create an object of `kind` with default dimensions and color.
pub fn object(id: &str, kind: PrimitiveKind) -> SceneObject {
    let primitive = Primitive::with_defaults(kind);
    SceneObject {
        id: id.to_string(),
        name: kind.display_name().to_string(),
        color: primitive.default_color(),
        primitive,
        transform: Transform::new(),
        visible: true,
    }
}

/// Create an object at a specific position.
pub fn object_at(id: &str, kind: PrimitiveKind, pos: [f64; 3]) -> SceneObject {
    SceneObject {
        transform: Transform::at(pos),
        ..object(id, kind)
    }
}

/// Create a cube with an explicit edge length.
pub fn cube(id: &str, size: f64) -> SceneObject {
    SceneObject {
        primitive: Primitive::Cube { size },
        ..object(id, PrimitiveKind::Cube)
    }
}

/// Create a scene from a list of objects.
pub fn scene(objects: Vec<SceneObject>) -> SceneDescription {
    SceneDescription {
        objects,
        ..SceneDescription::default()
    }
}

/// Scene containing a single unit cube with ID "cube".
pub fn scene_single_cube() -> SceneDescription {
    scene(vec![object("cube", PrimitiveKind::Cube)])
}

/// Every primitive kind in a row along X, resting on the ground.
pub fn demo_scene() -> SceneDescription {
    let objects = PrimitiveKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let x = (i as f64 - 3.5) * 2.5;
            let mut obj = object_at(kind.tag(), kind, [x, resting_height(kind), 0.0]);
            if kind == PrimitiveKind::Plane {
                // lay the plane flat
                obj.transform.rotation = [-90.0, 0.0, 0.0];
            }
            obj
        })
        .collect();
    scene(objects)
}

/// Height that puts a default primitive on the ground plane
fn resting_height(kind: PrimitiveKind) -> f64 {
    match Primitive::with_defaults(kind) {
        Primitive::Cube { size } => size / 2.0,
        Primitive::Sphere { radius } => radius,
        Primitive::Cylinder { height, .. } => height / 2.0,
        Primitive::Cone { height, .. } => height / 2.0,
        Primitive::Plane { .. } => 0.0,
        Primitive::Pyramid { size } => size * 0.75,
        Primitive::Octahedron { radius } => radius,
        Primitive::Tetrahedron { radius } => radius / 3f64.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_object_mesh_data;
    use crate::viewport::picking::Aabb;

    #[test]
    fn test_demo_scene_has_every_kind() {
        let scene = demo_scene();
        let kinds: Vec<_> = scene.objects.iter().map(|o| o.primitive.kind()).collect();
        assert_eq!(kinds, PrimitiveKind::ALL.to_vec());
    }

    #[test]
    fn test_demo_objects_rest_on_ground() {
        for obj in demo_scene().objects {
            let aabb = Aabb::from_mesh(&build_object_mesh_data(&obj, None));
            assert!(aabb.min.y.abs() < 1e-3, "{} bottom at {}", obj.name, aabb.min.y);
        }
    }
}
