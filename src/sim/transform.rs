//! Transforms for renderable entities
//!
//! Each entity (two paddles, one ball) is a unit quad placed in the court
//! by a world matrix derived from its position and scale.

use glam::{Mat4, Quat, Vec3};

/// Position and scale for a renderable entity.
///
/// Rotation is fixed at identity; nothing in this game rotates. The world
/// matrix is derived on demand, so it always reflects the latest mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }

    /// Compose scale then translation into a world matrix.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::IDENTITY, self.position)
    }
}
