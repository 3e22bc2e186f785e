//! Transform/drag operations
//!
//! Drag-style edits (`translate`, `rotate_y`, `scale_uniform`, `edit_object`)
//! do not snapshot on their own: call `begin_drag` once when the gesture starts.

use shared::{SceneObject, Transform};

use super::SceneState;

pub const MIN_SCALE: f64 = 0.05;
pub const MAX_SCALE: f64 = 100.0;

impl SceneState {
    /// Save undo state once at the beginning of a drag operation
    pub fn begin_drag(&mut self) {
        self.checkpoint();
        self.version += 1;
    }

    /// Replace an object's transform (undoable)
    pub fn set_transform(&mut self, id: &str, transform: Transform) -> bool {
        if self.get_object(id).is_none_or(|o| o.transform == transform) {
            return false;
        }
        self.checkpoint();
        if let Some(object) = self.get_object_mut(id) {
            object.transform = transform;
        }
        self.version += 1;
        true
    }

    /// Mutate an object in place without saving undo
    pub fn edit_object(&mut self, id: &str, edit: impl FnOnce(&mut SceneObject)) -> bool {
        let Some(object) = self.get_object_mut(id) else {
            return false;
        };
        edit(object);
        self.version += 1;
        true
    }

    /// Apply a translation delta
    pub fn translate(&mut self, id: &str, delta: [f64; 3]) {
        self.edit_object(id, |o| {
            for (p, d) in o.transform.position.iter_mut().zip(delta) {
                *p += d;
            }
        });
    }

    /// Move an object to a ground point, keeping its height (undoable)
    pub fn place_at(&mut self, id: &str, x: f64, z: f64) -> bool {
        let Some(object) = self.get_object(id) else {
            return false;
        };
        let mut transform = object.transform.clone();
        transform.position[0] = x;
        transform.position[2] = z;
        self.set_transform(id, transform)
    }

    /// Rotate about the vertical axis, keeping the angle in [-180, 180)
    pub fn rotate_y(&mut self, id: &str, degrees: f64) {
        self.edit_object(id, |o| {
            let angle = o.transform.rotation[1] + degrees;
            o.transform.rotation[1] = (angle + 180.0).rem_euclid(360.0) - 180.0;
        });
    }

    /// Multiply every scale component by `factor`, clamped to [MIN_SCALE, MAX_SCALE]
    pub fn scale_uniform(&mut self, id: &str, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.edit_object(id, |o| {
            for s in &mut o.transform.scale {
                *s = (*s * factor).clamp(MIN_SCALE, MAX_SCALE);
            }
        });
    }

    /// Snap X/Z to the nearest grid node and rest the object on the ground.
    ///
    /// `min_y` is the current world-space bottom of the object (from its mesh bounds).
    pub fn align_to_grid(&mut self, id: &str, cell: f64, min_y: f64) -> bool {
        let Some(object) = self.get_object(id) else {
            return false;
        };
        let mut transform = object.transform.clone();
        if cell > 0.0 {
            transform.position[0] = snap(transform.position[0], cell);
            transform.position[2] = snap(transform.position[2], cell);
        }
        transform.position[1] -= min_y;
        self.set_transform(id, transform)
    }
}

fn snap(value: f64, cell: f64) -> f64 {
    let snapped = (value / cell).round() * cell;
    // avoid -0.0 in saved files
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}
