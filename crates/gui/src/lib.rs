// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod build;
pub mod factory;
pub mod fixtures;
pub mod graphics;
pub mod harness;
pub mod keymap;
pub mod state;
pub mod toolbar;
pub mod tools;
pub mod validation;

/// Subset of viewport types needed by build/tools (MeshData, Aabb, Ray, picking).
/// The full viewport (camera, renderer, GL) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
