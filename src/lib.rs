//! Daycycle - day/night lighting and first-person movement math for a host game engine

pub mod core;
pub mod math;
pub mod atmosphere;
pub mod controller;

pub use atmosphere::{CelestialCycle, CelestialFrame, CycleConfig, CycleState};
pub use controller::{FirstPersonController, MovementConfig, PlanarInputMapper};
