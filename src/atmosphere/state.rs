//! Celestial cycle runtime state, per-tick outputs and GPU uniform.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

use crate::core::Rgb;

// ---------------------------------------------------------------------------
// Cycle state
// ---------------------------------------------------------------------------

/// The two orbit angles, in degrees, each kept in `[0.0, 360.0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleState {
    pub sun_angle_deg: f32,
    pub moon_angle_deg: f32,
}

impl Default for CycleState {
    fn default() -> Self {
        Self {
            sun_angle_deg: 0.0,
            moon_angle_deg: 180.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-tick outputs
// ---------------------------------------------------------------------------

/// Everything a host directional light needs for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightOutput {
    /// World orientation of the light.
    pub rotation: Quat,
    /// Direction the light shines (rotated +Z), normalized.
    pub direction: Vec3,
    /// Intensity in `[0.0, peak_intensity]`.
    pub intensity: f32,
    /// Derived from intensity; does not gate the intensity itself.
    pub enabled: bool,
}

/// Full output of one cycle tick, computed by [`super::CelestialCycle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialFrame {
    pub state: CycleState,
    pub sun: LightOutput,
    pub moon: LightOutput,
    /// Skybox tint, each channel in `[0.0, 1.0]`.
    pub sky_tint: Rgb,
    /// Global ambient light. The caller owns applying it to its render context.
    pub ambient_color: Rgb,
}

// ---------------------------------------------------------------------------
// GPU uniform
// ---------------------------------------------------------------------------

/// GPU-ready sky uniform buffer.
///
/// All `vec3` fields are padded to 16-byte alignment for WGSL compatibility.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CycleUniform {
    // -- Sun (16 bytes) --
    pub sun_direction: [f32; 3],
    pub sun_intensity: f32,

    // -- Moon (16 bytes) --
    pub moon_direction: [f32; 3],
    pub moon_intensity: f32,

    // -- Sky (16 + 16 = 32 bytes) --
    pub sky_tint: [f32; 3],
    pub sun_angle_deg: f32,
    pub ambient_color: [f32; 3],
    pub moon_angle_deg: f32,

    // -- Flags (16 bytes) --
    pub sun_enabled: u32,
    pub moon_enabled: u32,
    pub _pad: [u32; 2],
}

impl From<&CelestialFrame> for CycleUniform {
    fn from(f: &CelestialFrame) -> Self {
        Self {
            sun_direction: f.sun.direction.to_array(),
            sun_intensity: f.sun.intensity,
            moon_direction: f.moon.direction.to_array(),
            moon_intensity: f.moon.intensity,
            sky_tint: f.sky_tint,
            sun_angle_deg: f.state.sun_angle_deg,
            ambient_color: f.ambient_color,
            moon_angle_deg: f.state.moon_angle_deg,
            sun_enabled: f.sun.enabled as u32,
            moon_enabled: f.moon.enabled as u32,
            _pad: [0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> CelestialFrame {
        let light = |intensity: f32, enabled: bool| LightOutput {
            rotation: Quat::IDENTITY,
            direction: Vec3::Z,
            intensity,
            enabled,
        };
        CelestialFrame {
            state: CycleState::default(),
            sun: light(1.2, true),
            moon: light(0.0, false),
            sky_tint: [0.5, 0.7, 1.0],
            ambient_color: [0.5, 0.7, 1.0],
        }
    }

    #[test]
    fn test_default_state_starts_opposed() {
        let s = CycleState::default();
        assert_eq!(s.sun_angle_deg, 0.0);
        assert_eq!(s.moon_angle_deg, 180.0);
    }

    #[test]
    fn test_uniform_size_alignment() {
        // Must be a multiple of 16 bytes for GPU buffer alignment
        let size = std::mem::size_of::<CycleUniform>();
        assert_eq!(size % 16, 0, "CycleUniform size {size} is not 16-byte aligned");
    }

    #[test]
    fn test_uniform_from_frame() {
        let frame = sample_frame();
        let u = CycleUniform::from(&frame);
        assert_eq!(u.sun_intensity, 1.2);
        assert_eq!(u.sun_enabled, 1);
        assert_eq!(u.moon_enabled, 0);
        assert_eq!(u.sky_tint, frame.sky_tint);
        assert_eq!(u.moon_angle_deg, 180.0);

        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), std::mem::size_of::<CycleUniform>());
    }
}
