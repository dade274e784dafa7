//! Dice Tray - throw-and-settle simulation for a single die
//!
//! Core modules:
//! - `sim`: deterministic simulation (tray geometry, rigid-body stepping,
//!   launch generation, settle detection, face-up resolution)
//! - `config`: tunable geometry/physics parameters with stock defaults
//!
//! The crate contains no rendering, input, or UI code. A frontend owns a
//! [`sim::DiceSim`], calls [`sim::DiceSim::request_throw`] when the player
//! rolls, drives [`sim::DiceSim::tick`] once per display frame with the
//! elapsed real time, and reads [`sim::DiceSim::die_pose`] back to draw the
//! die. The returned [`sim::RollStatus`] carries the `{rolling, value}` pair
//! a HUD needs.

pub mod config;
pub mod sim;

pub use config::SimConfig;
pub use sim::{DiceSim, RollStatus};

/// Simulation constants
pub mod consts {
    /// Fixed physics timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Fixed timestep as f64, the accumulator's unit
    pub const SIM_DT_F64: f64 = 1.0 / 60.0;
    /// Cap on per-frame elapsed time to avoid spiral-of-death on stalls
    pub const MAX_FRAME_DT: f64 = 0.05;
}
