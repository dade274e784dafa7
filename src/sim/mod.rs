//! Deterministic throw-and-settle simulation
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod faces;
pub mod state;
pub mod throw;
pub mod tick;
pub mod tray;
pub mod world;

pub use faces::{FACE_COUNT, PIPS_BY_FACE, pip_value, top_face_index};
pub use state::{DiceSim, RollState, RollStatus};
pub use throw::{Launch, sample_disk_point, sample_launch};
pub use tick::MotionSample;
pub use world::DiceWorld;
