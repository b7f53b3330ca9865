//! Core type aliases and re-exports

pub use glam::{Quat, Vec2, Vec3};

/// Linear RGB color, each channel nominally in `[0.0, 1.0]`.
pub type Rgb = [f32; 3];

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
