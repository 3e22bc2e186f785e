//! Mesh validation utilities.
//!
//! `MeshValidator` checks mesh data integrity: stride, in-range indices,
//! finite positions, unit normals, bounding-box dimensions and vertex color.

use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// Floats per vertex: position, normal, color
const STRIDE: usize = 9;

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// No NaN or infinite component anywhere in the buffer
    pub fn are_values_finite(&self) -> bool {
        self.mesh.vertices.iter().all(|v| v.is_finite())
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        self.mesh
            .vertices
            .chunks_exact(STRIDE)
            .all(|v| {
                let len = (v[3] * v[3] + v[4] * v[4] + v[5] * v[5]).sqrt();
                (len - 1.0).abs() <= epsilon
            })
    }

    /// Triangles whose area is effectively zero
    pub fn degenerate_triangle_count(&self) -> usize {
        self.mesh
            .indices
            .chunks_exact(3)
            .filter(|tri| {
                let a = self.mesh.position(tri[0] as usize);
                let b = self.mesh.position(tri[1] as usize);
                let c = self.mesh.position(tri[2] as usize);
                (b - a).cross(c - a).length() < 1e-9
            })
            .count()
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Bounding box extent (width, height, depth)
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    /// Check that the AABB dimensions are approximately equal to `expected`.
    pub fn dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        self.dimensions()
            .iter()
            .zip(expected)
            .all(|(d, e)| (d - e).abs() < tolerance)
    }

    /// Check that every vertex carries `rgb` (within 0.01)
    pub fn has_uniform_color(&self, rgb: [f32; 3]) -> bool {
        self.vertex_count() > 0
            && self.mesh.vertices.chunks_exact(STRIDE).all(|v| {
                v[6..9]
                    .iter()
                    .zip(rgb)
                    .all(|(c, e)| (c - e).abs() < 0.01)
            })
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {}",
                self.mesh.vertices.len(),
                STRIDE
            ));
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={}): {:?}",
                max_idx, out_of_range
            ));
            // positions of bad indices can't be inspected below
            return errors;
        }

        if !self.are_values_finite() {
            errors.push("Vertex buffer contains NaN or infinite values".to_string());
        }

        if !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        let degenerate = self.degenerate_triangle_count();
        if degenerate > 0 {
            errors.push(format!("{} degenerate triangles", degenerate));
        }

        errors
    }
}
