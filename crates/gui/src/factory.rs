//! Primitive object factory.
//!
//! One constructor per primitive. Each takes optional dimensions (falling back
//! to fixed defaults) and pairs a library geometry with a fixed-color standard
//! material.

use shared::{default_color, Primitive, PrimitiveKind};

use crate::graphics::{Graphics, MaterialParams};

/// Radial / sector segments for round shapes
pub const DEFAULT_SEGMENTS: u32 = 32;
/// A pyramid is a four-sided cone
pub const PYRAMID_SIDES: u32 = 4;
/// Pyramid height relative to its base radius
pub const PYRAMID_HEIGHT_RATIO: f32 = 1.5;

fn standard<G: Graphics>(gfx: &G, kind: PrimitiveKind) -> G::Material {
    gfx.standard_material(MaterialParams::color(default_color(kind)))
}

pub fn create_cube<G: Graphics>(gfx: &G, size: Option<f32>) -> G::Mesh {
    let size = size.unwrap_or(1.0);
    let geometry = gfx.box_geometry(size, size, size);
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Cube))
}

pub fn create_sphere<G: Graphics>(gfx: &G, radius: Option<f32>) -> G::Mesh {
    let geometry = gfx.sphere_geometry(radius.unwrap_or(1.0), DEFAULT_SEGMENTS, DEFAULT_SEGMENTS);
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Sphere))
}

pub fn create_cylinder<G: Graphics>(
    gfx: &G,
    radius_top: Option<f32>,
    radius_bottom: Option<f32>,
    height: Option<f32>,
) -> G::Mesh {
    let geometry = gfx.cylinder_geometry(
        radius_top.unwrap_or(1.0),
        radius_bottom.unwrap_or(1.0),
        height.unwrap_or(2.0),
        DEFAULT_SEGMENTS,
    );
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Cylinder))
}

pub fn create_cone<G: Graphics>(gfx: &G, radius: Option<f32>, height: Option<f32>) -> G::Mesh {
    let geometry = gfx.cone_geometry(radius.unwrap_or(1.0), height.unwrap_or(2.0), DEFAULT_SEGMENTS);
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Cone))
}

pub fn create_plane<G: Graphics>(gfx: &G, width: Option<f32>, height: Option<f32>) -> G::Mesh {
    let geometry = gfx.plane_geometry(width.unwrap_or(2.0), height.unwrap_or(2.0));
    let material = gfx.standard_material(
        MaterialParams::color(default_color(PrimitiveKind::Plane)).double_sided(),
    );
    gfx.mesh(geometry, material)
}

pub fn create_pyramid<G: Graphics>(gfx: &G, size: Option<f32>) -> G::Mesh {
    let size = size.unwrap_or(1.0);
    let geometry = gfx.cone_geometry(size, size * PYRAMID_HEIGHT_RATIO, PYRAMID_SIDES);
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Pyramid))
}

pub fn create_octahedron<G: Graphics>(gfx: &G, radius: Option<f32>) -> G::Mesh {
    let geometry = gfx.octahedron_geometry(radius.unwrap_or(1.0));
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Octahedron))
}

pub fn create_tetrahedron<G: Graphics>(gfx: &G, radius: Option<f32>) -> G::Mesh {
    let geometry = gfx.tetrahedron_geometry(radius.unwrap_or(1.0));
    gfx.mesh(geometry, standard(gfx, PrimitiveKind::Tetrahedron))
}

/// Build the mesh for a stored primitive description
pub fn create_from_primitive<G: Graphics>(gfx: &G, primitive: &Primitive) -> G::Mesh {
    match *primitive {
        Primitive::Cube { size } => create_cube(gfx, Some(size as f32)),
        Primitive::Sphere { radius } => create_sphere(gfx, Some(radius as f32)),
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => create_cylinder(
            gfx,
            Some(radius_top as f32),
            Some(radius_bottom as f32),
            Some(height as f32),
        ),
        Primitive::Cone { radius, height } => {
            create_cone(gfx, Some(radius as f32), Some(height as f32))
        }
        Primitive::Plane { width, height } => {
            create_plane(gfx, Some(width as f32), Some(height as f32))
        }
        Primitive::Pyramid { size } => create_pyramid(gfx, Some(size as f32)),
        Primitive::Octahedron { radius } => create_octahedron(gfx, Some(radius as f32)),
        Primitive::Tetrahedron { radius } => create_tetrahedron(gfx, Some(radius as f32)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{CpuGraphics, GeometryKind, Side};
    use crate::viewport::picking::Aabb;

    const GFX: CpuGraphics = CpuGraphics;

    #[test]
    fn test_cube_defaults() {
        let mesh = create_cube(&GFX, None);
        assert_eq!(
            mesh.geometry.kind,
            GeometryKind::Box { width: 1.0, height: 1.0, depth: 1.0 }
        );
        assert_eq!(mesh.material.color, 0x00ff00);
        assert_eq!(mesh.material.side, Side::Front);
    }

    #[test]
    fn test_sphere_defaults() {
        let mesh = create_sphere(&GFX, None);
        assert_eq!(
            mesh.geometry.kind,
            GeometryKind::Sphere { radius: 1.0, width_segments: 32, height_segments: 32 }
        );
        assert_eq!(mesh.material.color, 0x0000ff);
    }

    #[test]
    fn test_cylinder_defaults() {
        let mesh = create_cylinder(&GFX, None, None, None);
        assert_eq!(
            mesh.geometry.kind,
            GeometryKind::Cylinder {
                radius_top: 1.0,
                radius_bottom: 1.0,
                height: 2.0,
                radial_segments: 32
            }
        );
        assert_eq!(mesh.material.color, 0xff0000);
    }

    #[test]
    fn test_cone_defaults() {
        let mesh = create_cone(&GFX, None, None);
        assert_eq!(
            mesh.geometry.kind,
            GeometryKind::Cone { radius: 1.0, height: 2.0, radial_segments: 32 }
        );
        assert_eq!(mesh.material.color, 0xffff00);
    }

    #[test]
    fn test_plane_is_double_sided() {
        let mesh = create_plane(&GFX, None, None);
        assert_eq!(mesh.geometry.kind, GeometryKind::Plane { width: 2.0, height: 2.0 });
        assert_eq!(mesh.material.color, 0xff00ff);
        assert_eq!(mesh.material.side, Side::Double);
    }

    #[test]
    fn test_pyramid_is_four_sided_cone() {
        let mesh = create_pyramid(&GFX, Some(2.0));
        assert_eq!(
            mesh.geometry.kind,
            GeometryKind::Cone { radius: 2.0, height: 3.0, radial_segments: 4 }
        );
        assert_eq!(mesh.material.color, 0xff8800);
    }

    #[test]
    fn test_polyhedra_defaults() {
        let octa = create_octahedron(&GFX, None);
        assert_eq!(octa.geometry.kind, GeometryKind::Octahedron { radius: 1.0 });
        assert_eq!(octa.material.color, 0x00ffff);

        let tetra = create_tetrahedron(&GFX, None);
        assert_eq!(tetra.geometry.kind, GeometryKind::Tetrahedron { radius: 1.0 });
        assert_eq!(tetra.material.color, 0x8800ff);
    }

    #[test]
    fn test_explicit_size_overrides_default() {
        let mesh = create_cube(&GFX, Some(3.0));
        let aabb = Aabb::from_mesh(&mesh.geometry.data);
        assert!((aabb.size().x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_primitive_matches_direct_call() {
        for kind in PrimitiveKind::ALL {
            let primitive = Primitive::with_defaults(kind);
            let mesh = create_from_primitive(&GFX, &primitive);
            assert_eq!(mesh.material.color, default_color(kind), "{:?}", kind);
        }
        let cyl = create_from_primitive(
            &GFX,
            &Primitive::Cylinder { radius_top: 0.5, radius_bottom: 1.0, height: 3.0 },
        );
        assert_eq!(cyl.geometry.kind, create_cylinder(&GFX, Some(0.5), Some(1.0), Some(3.0)).geometry.kind);
    }
}
