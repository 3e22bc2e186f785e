//! Display helper functions for scene objects

use shared::{PrimitiveKind, SceneObject};

/// Get display name for an object
pub fn object_display_name(object: &SceneObject) -> String {
    format!("{} ({})", object.name, short_id(&object.id))
}

/// Get icon for a primitive kind
pub fn primitive_icon(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Cube => "[C]",
        PrimitiveKind::Sphere => "[S]",
        PrimitiveKind::Cylinder => "[Y]",
        PrimitiveKind::Cone => "[K]",
        PrimitiveKind::Plane => "[P]",
        PrimitiveKind::Pyramid => "[A]",
        PrimitiveKind::Octahedron => "[O]",
        PrimitiveKind::Tetrahedron => "[T]",
    }
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }
}
