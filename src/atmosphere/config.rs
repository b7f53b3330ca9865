//! Celestial cycle configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result, Rgb};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Configuration for [`super::CelestialCycle`]. Immutable once the cycle is
/// constructed. All angles are in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Real-world seconds for one full sun orbit (day + night). Must be > 0.
    pub day_duration_seconds: f32,
    /// Moon angular speed relative to the sun. Values below 1.0 make the
    /// moon drift against the sun from one day to the next.
    pub moon_angular_speed_factor: f32,

    // -- Sky colors --------------------------------------------------------

    /// Sky tint when either body is fully up.
    pub day_color: Rgb,
    /// Sky tint when both bodies are down.
    pub night_color: Rgb,

    // -- Ramps -------------------------------------------------------------

    /// Orbit angle where a light starts to brighten.
    pub horizon_rise_deg: f32,
    /// Orbit angle where a light reaches peak intensity.
    pub horizon_full_deg: f32,
    /// Orbit angle where a body starts to lighten the sky.
    pub sky_ramp_start_deg: f32,
    /// Orbit angle where a body fully drives the sky to `day_color`.
    pub sky_ramp_full_deg: f32,

    // -- Lights ------------------------------------------------------------

    /// Light intensity at or above `horizon_full_deg`.
    pub peak_intensity: f32,
    /// A light reports `enabled` only while its intensity exceeds this.
    pub light_enable_threshold: f32,
    /// Fixed heading of the orbit plane (rotation about world up).
    pub orbit_yaw_deg: f32,

    // -- Start state -------------------------------------------------------

    pub initial_sun_angle_deg: f32,
    pub initial_moon_angle_deg: f32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            day_duration_seconds: 120.0,
            moon_angular_speed_factor: 0.8,
            day_color: [0.5, 0.7, 1.0],    // light blue
            night_color: [0.02, 0.02, 0.1], // near-black blue
            horizon_rise_deg: -10.0,
            horizon_full_deg: 50.0,
            sky_ramp_start_deg: -20.0,
            sky_ramp_full_deg: 60.0,
            peak_intensity: 1.2,
            light_enable_threshold: 0.05,
            orbit_yaw_deg: 170.0,
            initial_sun_angle_deg: 0.0,
            initial_moon_angle_deg: 180.0,
        }
    }
}

impl CycleConfig {
    /// Check the preconditions the cycle math relies on.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("day_duration_seconds", self.day_duration_seconds),
            ("moon_angular_speed_factor", self.moon_angular_speed_factor),
            ("horizon_rise_deg", self.horizon_rise_deg),
            ("horizon_full_deg", self.horizon_full_deg),
            ("sky_ramp_start_deg", self.sky_ramp_start_deg),
            ("sky_ramp_full_deg", self.sky_ramp_full_deg),
            ("peak_intensity", self.peak_intensity),
            ("light_enable_threshold", self.light_enable_threshold),
            ("orbit_yaw_deg", self.orbit_yaw_deg),
            ("initial_sun_angle_deg", self.initial_sun_angle_deg),
            ("initial_moon_angle_deg", self.initial_moon_angle_deg),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Error::invalid(format!("{name} must be finite, got {value}")));
            }
        }
        for (name, color) in [("day_color", self.day_color), ("night_color", self.night_color)] {
            if color.iter().any(|c| !c.is_finite()) {
                return Err(Error::invalid(format!("{name} must be finite, got {color:?}")));
            }
        }

        if self.day_duration_seconds <= 0.0 {
            return Err(Error::invalid(format!(
                "day_duration_seconds must be > 0, got {}",
                self.day_duration_seconds
            )));
        }
        if self.horizon_full_deg <= self.horizon_rise_deg {
            return Err(Error::invalid(format!(
                "horizon_full_deg ({}) must be greater than horizon_rise_deg ({})",
                self.horizon_full_deg, self.horizon_rise_deg
            )));
        }
        if self.sky_ramp_full_deg <= self.sky_ramp_start_deg {
            return Err(Error::invalid(format!(
                "sky_ramp_full_deg ({}) must be greater than sky_ramp_start_deg ({})",
                self.sky_ramp_full_deg, self.sky_ramp_start_deg
            )));
        }
        if self.peak_intensity < 0.0 {
            return Err(Error::invalid(format!(
                "peak_intensity must be >= 0, got {}",
                self.peak_intensity
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    ///
    /// Fields missing from the file take their [`Default`] values.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!("Loaded cycle config from {}", path.display());
        Ok(config)
    }

    /// Save to a JSON file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CycleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_day_duration() {
        for bad in [0.0, -5.0] {
            let config = CycleConfig {
                day_duration_seconds: bad,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "got {err:?}");
        }
    }

    #[test]
    fn test_rejects_nan() {
        let config = CycleConfig {
            moon_angular_speed_factor: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CycleConfig {
            day_color: [0.5, f32::INFINITY, 1.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_ramps() {
        let config = CycleConfig {
            horizon_rise_deg: 50.0,
            horizon_full_deg: -10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CycleConfig {
            sky_ramp_start_deg: 60.0,
            sky_ramp_full_deg: 60.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CycleConfig =
            serde_json::from_str(r#"{ "day_duration_seconds": 600.0 }"#).unwrap();
        assert_eq!(config.day_duration_seconds, 600.0);
        assert_eq!(config.moon_angular_speed_factor, 0.8);
        assert_eq!(config.horizon_full_deg, 50.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cycle.json");

        let config = CycleConfig {
            day_duration_seconds: 300.0,
            night_color: [0.0, 0.0, 0.05],
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = CycleConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "day_duration_seconds": 0.0 }"#).unwrap();

        let err = CycleConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "got {err:?}");
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CycleConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)), "got {err:?}");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CycleConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err:?}");
    }
}
