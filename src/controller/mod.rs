//! Per-frame player movement math.
//!
//! Both controllers consume input axes already polled by the host and return
//! the motion to apply; collision and transform ownership stay with the host.

pub mod first_person;
pub mod planar;

pub use first_person::{FirstPersonController, MoveInput, MoveOutput, MovementConfig};
pub use planar::PlanarInputMapper;
