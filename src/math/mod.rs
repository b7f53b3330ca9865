//! Mathematical utilities

pub mod angle;
pub mod interp;

pub use angle::wrap_degrees;
pub use interp::{Lerp, clamp_rgb, inverse_lerp};
