//! First-person movement controller

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::math::wrap_degrees;

/// Tunables for [`FirstPersonController`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Planar movement speed in units per second
    pub move_speed: f32,
    /// Vertical acceleration in units per second squared (negative = down)
    pub gravity: f32,
    /// Apex height of a jump
    pub jump_height: f32,
    /// Degrees of rotation per unit of look input
    pub mouse_sensitivity: f32,
    /// Camera pitch limit in degrees, applied symmetrically
    pub max_pitch_deg: f32,
    /// Vertical velocity held while standing on ground
    pub grounded_velocity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            gravity: -9.81,
            jump_height: 1.5,
            mouse_sensitivity: 2.0,
            max_pitch_deg: 90.0,
            grounded_velocity: -2.0,
        }
    }
}

impl MovementConfig {
    /// Check the preconditions the controller math relies on.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("move_speed", self.move_speed),
            ("gravity", self.gravity),
            ("jump_height", self.jump_height),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("max_pitch_deg", self.max_pitch_deg),
            ("grounded_velocity", self.grounded_velocity),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::invalid(format!("{name} must be finite, got {value}")));
        }
        if self.gravity >= 0.0 {
            return Err(Error::invalid(format!("gravity must be negative, got {}", self.gravity)));
        }
        if self.jump_height < 0.0 {
            return Err(Error::invalid(format!(
                "jump_height must be >= 0, got {}",
                self.jump_height
            )));
        }
        if !(self.max_pitch_deg > 0.0 && self.max_pitch_deg <= 90.0) {
            return Err(Error::invalid(format!(
                "max_pitch_deg must be in (0, 90], got {}",
                self.max_pitch_deg
            )));
        }
        Ok(())
    }
}

/// Input sampled by the host for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    /// x = strafe right, y = forward; each nominally in `[-1, 1]`
    pub move_axis: Vec2,
    /// Look input this tick (x = turn right, y = look up)
    pub look_delta: Vec2,
    /// Jump button went down this tick
    pub jump_pressed: bool,
}

/// Motion for the host to apply after one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutput {
    /// World-space displacement request; the host resolves collisions
    pub displacement: Vec3,
    /// Body orientation (yaw about world up)
    pub body_rotation: Quat,
    /// Camera orientation relative to the body (pitch about local X)
    pub camera_rotation: Quat,
    /// Vertical velocity after this tick
    pub vertical_velocity: f32,
}

/// First-person controller: planar movement in the body's heading, mouse
/// look with clamped pitch, and gravity with a grounded jump.
#[derive(Clone, Debug)]
pub struct FirstPersonController {
    config: MovementConfig,
    /// Current yaw in degrees, `[0, 360)`
    yaw: f32,
    /// Current camera pitch in degrees
    pitch: f32,
    velocity_y: f32,
}

impl FirstPersonController {
    /// Create new controller facing +Z
    pub fn new(config: MovementConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "FirstPersonController: speed={} gravity={} jump={}",
            config.move_speed,
            config.gravity,
            config.jump_height
        );
        Ok(Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            velocity_y: 0.0,
        })
    }

    /// Step the controller by `dt` seconds.
    ///
    /// `grounded` is the host's ground contact from the previous move.
    pub fn update(&mut self, input: &MoveInput, grounded: bool, dt: f32) -> MoveOutput {
        // Planar movement uses the heading from before this tick's look input
        let heading = self.body_rotation();
        let right = heading * Vec3::X;
        let forward = heading * Vec3::Z;
        let planar = (right * input.move_axis.x + forward * input.move_axis.y)
            * self.config.move_speed
            * dt;

        // Mouse look
        let sensitivity = self.config.mouse_sensitivity;
        let max_pitch = self.config.max_pitch_deg;
        self.pitch = (self.pitch - input.look_delta.y * sensitivity).clamp(-max_pitch, max_pitch);
        self.yaw = wrap_degrees(self.yaw + input.look_delta.x * sensitivity);

        // Gravity and jump
        if grounded && self.velocity_y < 0.0 {
            self.velocity_y = self.config.grounded_velocity;
        }
        if grounded && input.jump_pressed {
            self.velocity_y = self.jump_velocity();
            log::trace!("jump: vy={:.3}", self.velocity_y);
        }
        self.velocity_y += self.config.gravity * dt;

        MoveOutput {
            displacement: planar + Vec3::Y * (self.velocity_y * dt),
            body_rotation: self.body_rotation(),
            camera_rotation: self.camera_rotation(),
            vertical_velocity: self.velocity_y,
        }
    }

    /// Launch speed that peaks at `jump_height` under `gravity`.
    pub fn jump_velocity(&self) -> f32 {
        (self.config.jump_height * -2.0 * self.config.gravity).sqrt()
    }

    /// Set orientation from angles (in degrees). Pitch is clamped.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = wrap_degrees(yaw);
        self.pitch = pitch.clamp(-self.config.max_pitch_deg, self.config.max_pitch_deg);
    }

    /// Get current yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Get current pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Get current vertical velocity
    pub fn vertical_velocity(&self) -> f32 {
        self.velocity_y
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch.to_radians())
    }
}
