//! Boundary traits for pushing cycle output into host objects.
//!
//! The host engine owns its lights and sky material; these traits only
//! describe the values the cycle hands over each tick.

use glam::Quat;

use crate::atmosphere::state::{CelestialFrame, LightOutput};
use crate::core::Rgb;

/// A directional light in the host scene.
pub trait LightSink {
    fn set_rotation(&mut self, rotation: Quat);
    fn set_intensity(&mut self, intensity: f32);
    fn set_enabled(&mut self, enabled: bool);
}

/// A sky material that accepts a tint color.
pub trait TintSink {
    fn set_tint(&mut self, color: Rgb);
}

impl LightOutput {
    /// Push this light's values into a host light.
    pub fn apply(&self, sink: &mut impl LightSink) {
        sink.set_rotation(self.rotation);
        sink.set_intensity(self.intensity);
        sink.set_enabled(self.enabled);
    }
}

impl CelestialFrame {
    /// Push the frame into the host's sun, moon and skybox, returning the
    /// ambient color for the caller to apply to its global render settings.
    pub fn apply(
        &self,
        sun: &mut impl LightSink,
        moon: &mut impl LightSink,
        skybox: &mut impl TintSink,
    ) -> Rgb {
        self.sun.apply(sun);
        self.moon.apply(moon);
        skybox.set_tint(self.sky_tint);
        self.ambient_color
    }
}
