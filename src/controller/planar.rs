//! Direct axis-to-position mapping.

use glam::{Vec2, Vec3};

/// Moves a point in the XY plane by the raw input axis each frame.
///
/// The axis is applied unscaled, once per call, so speed depends on the
/// host's frame rate.
#[derive(Clone, Debug, Default)]
pub struct PlanarInputMapper {
    position: Vec3,
}

impl PlanarInputMapper {
    /// Create a mapper starting at `position`.
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Add `(axis.x, axis.y, 0)` to the position and return the new position.
    pub fn apply(&mut self, axis: Vec2) -> Vec3 {
        log::trace!("planar move input: {axis}");
        self.position += axis.extend(0.0);
        self.position
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
