//! Orbit orientation and horizon ramps for the sun and moon.
//!
//! A body's orbit angle runs 0..360 over one revolution. The light is pitched
//! by `angle - 90` around its local X axis inside an orbit plane turned
//! `yaw` degrees about world up, so 90 and 270 sit on the horizon, 180
//! shines straight down and 0 straight up.

use glam::{EulerRot, Quat, Vec3};

use crate::math::inverse_lerp;

/// Orientation of a directional light at `angle_deg` along an orbit whose
/// plane is turned `yaw_deg` about world up.
///
/// Rotation order is yaw (Y), then pitch (X), then roll (Z, always zero).
pub fn orbit_rotation(angle_deg: f32, yaw_deg: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw_deg.to_radians(),
        (angle_deg - 90.0).to_radians(),
        0.0,
    )
}

/// Direction a light with the given orientation shines along.
#[inline]
pub fn light_direction(rotation: Quat) -> Vec3 {
    (rotation * Vec3::Z).normalize()
}

/// Horizon ramp: 0 at or below `start_deg`, 1 at or above `full_deg`,
/// linear between. `angle_deg` is used as-is, without re-centering.
#[inline]
pub fn horizon_factor(angle_deg: f32, start_deg: f32, full_deg: f32) -> f32 {
    inverse_lerp(start_deg, full_deg, angle_deg)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps
    }

    #[test]
    fn test_overhead_shines_down() {
        let dir = light_direction(orbit_rotation(180.0, 170.0));
        assert!(vec3_approx_eq(dir, Vec3::NEG_Y, 1e-5), "dir = {dir:?}");
    }

    #[test]
    fn test_underfoot_shines_up() {
        let dir = light_direction(orbit_rotation(0.0, 170.0));
        assert!(vec3_approx_eq(dir, Vec3::Y, 1e-5), "dir = {dir:?}");
    }

    #[test]
    fn test_horizon_angles_are_level() {
        for angle in [90.0, 270.0] {
            let dir = light_direction(orbit_rotation(angle, 170.0));
            assert!(dir.y.abs() < 1e-5, "angle {angle}: dir.y = {}", dir.y);
        }
    }

    #[test]
    fn test_yaw_turns_heading() {
        // At the horizon the light points along the yawed forward axis
        let dir = light_direction(orbit_rotation(90.0, 170.0));
        let yaw = 170.0_f32.to_radians();
        let expected = Vec3::new(yaw.sin(), 0.0, yaw.cos());
        assert!(vec3_approx_eq(dir, expected, 1e-5), "dir = {dir:?}");
    }

    #[test]
    fn test_rotation_is_normalized() {
        for step in 0..36 {
            let q = orbit_rotation(step as f32 * 10.0, 170.0);
            assert!((q.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_horizon_factor_ramp() {
        assert_eq!(horizon_factor(-20.0, -20.0, 60.0), 0.0);
        assert_eq!(horizon_factor(60.0, -20.0, 60.0), 1.0);
        assert!((horizon_factor(20.0, -20.0, 60.0) - 0.5).abs() < 1e-6);
        assert_eq!(horizon_factor(200.0, -20.0, 60.0), 1.0);
    }
}
