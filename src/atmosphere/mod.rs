//! Day/night celestial cycle.
//!
//! Drives a sun and a moon around independent orbits, derives each light's
//! orientation and intensity from its orbit angle, and blends a sky tint
//! between night and day colors from whichever body sits higher. The main
//! entry point is [`CelestialCycle`], advanced once per host tick; its
//! [`CelestialFrame`] output is pushed into host objects through the
//! [`LightSink`] and [`TintSink`] traits.

pub mod config;
pub mod orbit;
pub mod sink;
pub mod state;

// Re-exports
pub use config::CycleConfig;
pub use sink::{LightSink, TintSink};
pub use state::{CelestialFrame, CycleState, CycleUniform, LightOutput};

use crate::core::{Result, Rgb};
use crate::math::{Lerp, clamp_rgb, wrap_degrees};
use orbit::{horizon_factor, light_direction, orbit_rotation};

// ---------------------------------------------------------------------------
// CelestialCycle
// ---------------------------------------------------------------------------

/// Sun/moon cycle. Call [`advance`](Self::advance) each tick, then read the
/// [`frame`](Self::frame), or do both with [`tick`](Self::tick).
#[derive(Clone, Debug)]
pub struct CelestialCycle {
    config: CycleConfig,
    state: CycleState,
}

impl CelestialCycle {
    /// Create a cycle at the configured start angles.
    ///
    /// Fails with [`crate::core::Error::InvalidConfig`] when the config breaks
    /// a precondition (see [`CycleConfig::validate`]).
    pub fn new(config: CycleConfig) -> Result<Self> {
        config.validate()?;
        let state = CycleState {
            sun_angle_deg: wrap_degrees(config.initial_sun_angle_deg),
            moon_angle_deg: wrap_degrees(config.initial_moon_angle_deg),
        };
        log::debug!(
            "CelestialCycle: day={}s moon_factor={} sun={}° moon={}°",
            config.day_duration_seconds,
            config.moon_angular_speed_factor,
            state.sun_angle_deg,
            state.moon_angle_deg
        );
        Ok(Self { config, state })
    }

    /// Advance both orbits by `dt` real seconds.
    ///
    /// `dt` is expected to be non-negative; a negative value rotates both
    /// bodies backward and is left to the caller. A non-finite `dt` is
    /// dropped and leaves the state untouched.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() {
            log::warn!("CelestialCycle: ignoring non-finite dt {dt}");
            return;
        }
        let delta_angle = (dt / self.config.day_duration_seconds) * 360.0;

        self.state.sun_angle_deg = wrap_degrees(self.state.sun_angle_deg + delta_angle);
        self.state.moon_angle_deg = wrap_degrees(
            self.state.moon_angle_deg + delta_angle * self.config.moon_angular_speed_factor,
        );

        log::trace!(
            "advance dt={dt}: sun={:.3}° moon={:.3}°",
            self.state.sun_angle_deg,
            self.state.moon_angle_deg
        );
    }

    /// Advance by `dt` and return the resulting frame.
    pub fn tick(&mut self, dt: f32) -> CelestialFrame {
        self.advance(dt);
        self.frame()
    }

    /// Light intensity for a body at `angle_deg`: zero up to the horizon rise
    /// angle, [`CycleConfig::peak_intensity`] from the full angle on, linear
    /// in between.
    pub fn intensity_of(&self, angle_deg: f32) -> f32 {
        horizon_factor(angle_deg, self.config.horizon_rise_deg, self.config.horizon_full_deg)
            * self.config.peak_intensity
    }

    /// Sky tint for the current angles.
    ///
    /// The blend weight is the larger of the sun and moon sky factors, so two
    /// bodies near the horizon never brighten the sky more than one.
    pub fn sky_color(&self) -> Rgb {
        let start = self.config.sky_ramp_start_deg;
        let full = self.config.sky_ramp_full_deg;
        let sun_factor = horizon_factor(self.state.sun_angle_deg, start, full);
        let moon_factor = horizon_factor(self.state.moon_angle_deg, start, full);
        let blend = sun_factor.max(moon_factor);

        clamp_rgb(self.config.night_color.lerp(&self.config.day_color, blend))
    }

    /// Compute every output for the current angles.
    pub fn frame(&self) -> CelestialFrame {
        let sky = self.sky_color();
        CelestialFrame {
            state: self.state,
            sun: self.light_output(self.state.sun_angle_deg),
            moon: self.light_output(self.state.moon_angle_deg),
            sky_tint: sky,
            ambient_color: sky,
        }
    }

    /// Build a GPU-ready uniform from the current frame.
    pub fn uniform(&self) -> CycleUniform {
        CycleUniform::from(&self.frame())
    }

    /// Current orbit angles.
    #[inline]
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Replace the orbit angles, wrapping them into `[0, 360)`.
    pub fn set_state(&mut self, state: CycleState) {
        self.state = CycleState {
            sun_angle_deg: wrap_degrees(state.sun_angle_deg),
            moon_angle_deg: wrap_degrees(state.moon_angle_deg),
        };
    }

    /// Immutable reference to the configuration.
    #[inline]
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn light_output(&self, angle_deg: f32) -> LightOutput {
        let rotation = orbit_rotation(angle_deg, self.config.orbit_yaw_deg);
        let intensity = self.intensity_of(angle_deg);
        LightOutput {
            rotation,
            direction: light_direction(rotation),
            intensity,
            enabled: intensity > self.config.light_enable_threshold,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
