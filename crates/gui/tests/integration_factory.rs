//! Object factory against the CPU backend and a recording backend.

use std::cell::RefCell;

use sceneforge_gui_lib::factory::{self, DEFAULT_SEGMENTS};
use sceneforge_gui_lib::graphics::{CpuGraphics, GeometryKind, Graphics, MaterialParams, Side};
use sceneforge_gui_lib::validation::MeshValidator;
use shared::{Primitive, PrimitiveKind};

#[test]
fn test_defaults_use_expected_geometry_classes() {
    let gfx = CpuGraphics;
    let cases = [
        (factory::create_cube(&gfx, None), "BoxGeometry", 0x00ff00),
        (factory::create_sphere(&gfx, None), "SphereGeometry", 0x0000ff),
        (factory::create_cylinder(&gfx, None, None, None), "CylinderGeometry", 0xff0000),
        (factory::create_cone(&gfx, None, None), "ConeGeometry", 0xffff00),
        (factory::create_plane(&gfx, None, None), "PlaneGeometry", 0xff00ff),
        (factory::create_pyramid(&gfx, None), "ConeGeometry", 0xff8800),
        (factory::create_octahedron(&gfx, None), "OctahedronGeometry", 0x00ffff),
        (factory::create_tetrahedron(&gfx, None), "TetrahedronGeometry", 0x8800ff),
    ];
    for (mesh, class, color) in cases {
        assert_eq!(mesh.geometry.kind.class_name(), class);
        assert_eq!(mesh.material.color, color, "{class}");
    }
}

#[test]
fn test_default_parameters() {
    let gfx = CpuGraphics;
    assert_eq!(
        factory::create_cube(&gfx, None).geometry.kind,
        GeometryKind::Box { width: 1.0, height: 1.0, depth: 1.0 }
    );
    assert_eq!(
        factory::create_sphere(&gfx, None).geometry.kind,
        GeometryKind::Sphere {
            radius: 1.0,
            width_segments: DEFAULT_SEGMENTS,
            height_segments: DEFAULT_SEGMENTS,
        }
    );
    assert_eq!(
        factory::create_cylinder(&gfx, None, None, None).geometry.kind,
        GeometryKind::Cylinder {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 2.0,
            radial_segments: DEFAULT_SEGMENTS,
        }
    );
    assert_eq!(
        factory::create_pyramid(&gfx, None).geometry.kind,
        GeometryKind::Cone { radius: 1.0, height: 1.5, radial_segments: 4 }
    );
    assert_eq!(
        factory::create_plane(&gfx, None, None).geometry.kind,
        GeometryKind::Plane { width: 2.0, height: 2.0 }
    );
}

#[test]
fn test_explicit_dimensions_win() {
    let gfx = CpuGraphics;
    assert_eq!(
        factory::create_cone(&gfx, Some(0.5), None).geometry.kind,
        GeometryKind::Cone { radius: 0.5, height: 2.0, radial_segments: DEFAULT_SEGMENTS }
    );
    assert_eq!(
        factory::create_pyramid(&gfx, Some(2.0)).geometry.kind,
        GeometryKind::Cone { radius: 2.0, height: 3.0, radial_segments: 4 }
    );
    let cube = factory::create_cube(&gfx, Some(3.0)).to_mesh_data();
    assert!(MeshValidator::new(&cube).dimensions_approx([3.0; 3], 1e-4));
}

#[test]
fn test_only_plane_is_double_sided() {
    let gfx = CpuGraphics;
    for kind in PrimitiveKind::ALL {
        let mesh = factory::create_from_primitive(&gfx, &Primitive::with_defaults(kind));
        let expected = if kind == PrimitiveKind::Plane { Side::Double } else { Side::Front };
        assert_eq!(mesh.material.side, expected, "{}", kind.tag());
    }
}

#[test]
fn test_double_sided_plane_doubles_triangles() {
    let gfx = CpuGraphics;
    let plane = factory::create_plane(&gfx, None, None);
    let single = MeshValidator::new(&plane.geometry.data).triangle_count();
    let baked = plane.to_mesh_data();
    let v = MeshValidator::new(&baked);
    assert_eq!(v.triangle_count(), single * 2);
    assert!(v.has_uniform_color([1.0, 0.0, 1.0]));
    assert!(v.dimensions_approx([2.0, 2.0, 0.0], 1e-4));
}

#[test]
fn test_tetrahedron_bounds() {
    let gfx = CpuGraphics;
    let data = factory::create_tetrahedron(&gfx, None).to_mesh_data();
    let aabb = MeshValidator::new(&data).aabb();
    assert!((aabb.min.y + 1.0 / 3f32.sqrt()).abs() < 1e-4);
    assert!(aabb.max.y <= 1.0 + 1e-4);
}

/// Backend that only records which constructors were called
#[derive(Default)]
struct RecordingGraphics {
    calls: RefCell<Vec<String>>,
}

impl RecordingGraphics {
    fn log(&self, entry: String) -> String {
        self.calls.borrow_mut().push(entry.clone());
        entry
    }
}

impl Graphics for RecordingGraphics {
    type Geometry = String;
    type Material = MaterialParams;
    type Mesh = (String, MaterialParams);

    fn box_geometry(&self, width: f32, height: f32, depth: f32) -> String {
        self.log(format!("box {width} {height} {depth}"))
    }

    fn sphere_geometry(&self, radius: f32, width_segments: u32, height_segments: u32) -> String {
        self.log(format!("sphere {radius} {width_segments} {height_segments}"))
    }

    fn cylinder_geometry(
        &self,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    ) -> String {
        self.log(format!("cylinder {radius_top} {radius_bottom} {height} {radial_segments}"))
    }

    fn cone_geometry(&self, radius: f32, height: f32, radial_segments: u32) -> String {
        self.log(format!("cone {radius} {height} {radial_segments}"))
    }

    fn plane_geometry(&self, width: f32, height: f32) -> String {
        self.log(format!("plane {width} {height}"))
    }

    fn octahedron_geometry(&self, radius: f32) -> String {
        self.log(format!("octahedron {radius}"))
    }

    fn tetrahedron_geometry(&self, radius: f32) -> String {
        self.log(format!("tetrahedron {radius}"))
    }

    fn standard_material(&self, params: MaterialParams) -> MaterialParams {
        self.log("material".to_string());
        params
    }

    fn mesh(&self, geometry: String, material: MaterialParams) -> (String, MaterialParams) {
        self.log("mesh".to_string());
        (geometry, material)
    }
}

#[test]
fn test_factory_builds_one_geometry_material_and_mesh() {
    let gfx = RecordingGraphics::default();
    let (geometry, material) = factory::create_cylinder(&gfx, Some(0.5), None, Some(3.0));
    assert_eq!(geometry, "cylinder 0.5 1 3 32");
    assert_eq!(material, MaterialParams::color(0xff0000));
    assert_eq!(
        *gfx.calls.borrow(),
        vec!["cylinder 0.5 1 3 32".to_string(), "material".into(), "mesh".into()]
    );
}

#[test]
fn test_stored_primitives_map_to_factory_calls() {
    let gfx = RecordingGraphics::default();
    let (geometry, material) =
        factory::create_from_primitive(&gfx, &Primitive::Plane { width: 4.0, height: 1.0 });
    assert_eq!(geometry, "plane 4 1");
    assert_eq!(material.side, Side::Double);

    let (geometry, _) = factory::create_from_primitive(&gfx, &Primitive::Pyramid { size: 2.0 });
    assert_eq!(geometry, "cone 2 3 4");
}

#[test]
fn test_zero_height_shapes_stay_finite() {
    let gfx = CpuGraphics;
    let meshes = [
        factory::create_cylinder(&gfx, None, None, Some(0.0)),
        factory::create_cone(&gfx, None, Some(0.0)),
        factory::create_pyramid(&gfx, Some(0.0)),
    ];
    for mesh in meshes {
        let data = mesh.to_mesh_data();
        let v = MeshValidator::new(&data);
        assert!(v.are_values_finite(), "{}", mesh.geometry.kind.class_name());
        assert!(v.are_normals_normalized(0.1), "{}", mesh.geometry.kind.class_name());
    }
}
