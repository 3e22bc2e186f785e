//! Graphics layer consumed by the object factory.
//!
//! `Graphics` is the constructor surface a renderer exposes (geometry classes,
//! a standard material, a mesh). `CpuGraphics` is the built-in implementation:
//! it tessellates on the CPU into `MeshData` that the GL renderer uploads as-is.

use crate::viewport::mesh::{self, hex_to_rgb, MeshData};

/// Which faces a material renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// Parameters of a standard (lit) material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialParams {
    /// 0xRRGGBB
    pub color: u32,
    pub side: Side,
}

impl MaterialParams {
    pub fn color(color: u32) -> Self {
        Self {
            color,
            side: Side::Front,
        }
    }

    pub fn double_sided(mut self) -> Self {
        self.side = Side::Double;
        self
    }
}

/// Geometry, material and mesh constructors of a rendering backend
pub trait Graphics {
    type Geometry;
    type Material;
    type Mesh;

    fn box_geometry(&self, width: f32, height: f32, depth: f32) -> Self::Geometry;
    fn sphere_geometry(&self, radius: f32, width_segments: u32, height_segments: u32) -> Self::Geometry;
    fn cylinder_geometry(
        &self,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    ) -> Self::Geometry;
    fn cone_geometry(&self, radius: f32, height: f32, radial_segments: u32) -> Self::Geometry;
    fn plane_geometry(&self, width: f32, height: f32) -> Self::Geometry;
    fn octahedron_geometry(&self, radius: f32) -> Self::Geometry;
    fn tetrahedron_geometry(&self, radius: f32) -> Self::Geometry;

    fn standard_material(&self, params: MaterialParams) -> Self::Material;
    fn mesh(&self, geometry: Self::Geometry, material: Self::Material) -> Self::Mesh;
}

/// Geometry class and the parameters it was built with
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryKind {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Octahedron {
        radius: f32,
    },
    Tetrahedron {
        radius: f32,
    },
}

impl GeometryKind {
    /// Class name of the geometry ("BoxGeometry", ...)
    pub fn class_name(&self) -> &'static str {
        match self {
            GeometryKind::Box { .. } => "BoxGeometry",
            GeometryKind::Sphere { .. } => "SphereGeometry",
            GeometryKind::Cylinder { .. } => "CylinderGeometry",
            GeometryKind::Cone { .. } => "ConeGeometry",
            GeometryKind::Plane { .. } => "PlaneGeometry",
            GeometryKind::Octahedron { .. } => "OctahedronGeometry",
            GeometryKind::Tetrahedron { .. } => "TetrahedronGeometry",
        }
    }
}

/// Tessellated geometry (white vertices; color comes from the material)
#[derive(Debug, Clone)]
pub struct Geometry {
    pub kind: GeometryKind,
    pub data: MeshData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardMaterial {
    pub color: u32,
    pub side: Side,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: StandardMaterial,
}

impl Mesh {
    /// Bake the material into renderable vertex data
    pub fn to_mesh_data(&self) -> MeshData {
        let mut data = self.geometry.data.clone();
        data.set_color(hex_to_rgb(self.material.color));
        if self.material.side == Side::Double {
            data.add_back_faces();
        }
        data
    }
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// CPU tessellation backend
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuGraphics;

impl Graphics for CpuGraphics {
    type Geometry = Geometry;
    type Material = StandardMaterial;
    type Mesh = Mesh;

    fn box_geometry(&self, width: f32, height: f32, depth: f32) -> Geometry {
        Geometry {
            kind: GeometryKind::Box { width, height, depth },
            data: mesh::cube(width, height, depth, WHITE),
        }
    }

    fn sphere_geometry(&self, radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
        Geometry {
            kind: GeometryKind::Sphere {
                radius,
                width_segments,
                height_segments,
            },
            data: mesh::sphere(radius, width_segments, height_segments, WHITE),
        }
    }

    fn cylinder_geometry(
        &self,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    ) -> Geometry {
        Geometry {
            kind: GeometryKind::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            },
            data: mesh::cylinder(radius_top, radius_bottom, height, radial_segments, WHITE),
        }
    }

    fn cone_geometry(&self, radius: f32, height: f32, radial_segments: u32) -> Geometry {
        Geometry {
            kind: GeometryKind::Cone {
                radius,
                height,
                radial_segments,
            },
            data: mesh::cone(radius, height, radial_segments, WHITE),
        }
    }

    fn plane_geometry(&self, width: f32, height: f32) -> Geometry {
        Geometry {
            kind: GeometryKind::Plane { width, height },
            data: mesh::plane(width, height, WHITE),
        }
    }

    fn octahedron_geometry(&self, radius: f32) -> Geometry {
        Geometry {
            kind: GeometryKind::Octahedron { radius },
            data: mesh::octahedron(radius, WHITE),
        }
    }

    fn tetrahedron_geometry(&self, radius: f32) -> Geometry {
        Geometry {
            kind: GeometryKind::Tetrahedron { radius },
            data: mesh::tetrahedron(radius, WHITE),
        }
    }

    fn standard_material(&self, params: MaterialParams) -> StandardMaterial {
        StandardMaterial {
            color: params.color,
            side: params.side,
        }
    }

    fn mesh(&self, geometry: Geometry, material: StandardMaterial) -> Mesh {
        Mesh { geometry, material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_color_is_baked() {
        let gfx = CpuGraphics;
        let geometry = gfx.box_geometry(1.0, 1.0, 1.0);
        let material = gfx.standard_material(MaterialParams::color(0xff0000));
        let data = gfx.mesh(geometry, material).to_mesh_data();
        assert_eq!(&data.vertices[6..9], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_double_sided_adds_back_faces() {
        let gfx = CpuGraphics;
        let single = gfx
            .mesh(gfx.plane_geometry(1.0, 1.0), gfx.standard_material(MaterialParams::color(0)))
            .to_mesh_data();
        let double = gfx
            .mesh(
                gfx.plane_geometry(1.0, 1.0),
                gfx.standard_material(MaterialParams::color(0).double_sided()),
            )
            .to_mesh_data();
        assert_eq!(double.triangle_count(), single.triangle_count() * 2);
    }

    #[test]
    fn test_geometry_class_names() {
        let gfx = CpuGraphics;
        assert_eq!(gfx.cone_geometry(1.0, 2.0, 32).kind.class_name(), "ConeGeometry");
        assert_eq!(gfx.tetrahedron_geometry(1.0).kind.class_name(), "TetrahedronGeometry");
    }
}
