//! Simulation context and per-throw roll state

use nalgebra::{UnitQuaternion, Vector3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::world::DiceWorld;
use crate::config::SimConfig;

/// Transient per-throw settle tracking, reset at the start of each throw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollState {
    /// Throw in flight, outcome not yet resolved
    pub rolling: bool,
    /// Consecutive nearly-stopped ticks observed so far
    pub stable_ticks: u32,
    /// Top face seen on the previous qualifying tick (debounces flicker
    /// between two near-tied faces during micro-settling)
    pub last_top_face: Option<usize>,
}

/// Status snapshot reported to the caller each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollStatus {
    /// A throw is in flight
    pub rolling: bool,
    /// Resolved pip value; `None` while rolling or before the first throw
    pub value: Option<u8>,
}

/// One die-in-a-tray simulation.
///
/// Owns the physics world, the seeded RNG, and the roll state; there are no
/// ambient globals, so multiple independent simulations can coexist. Callers
/// drive it through [`DiceSim::request_throw`] and [`DiceSim::tick`].
pub struct DiceSim {
    pub(crate) config: SimConfig,
    pub(crate) world: DiceWorld,
    pub(crate) rng: Pcg32,
    pub(crate) roll: RollState,
    pub(crate) value: Option<u8>,
    pub(crate) accumulator: f64,
    pub(crate) time_ticks: u64,
}

impl DiceSim {
    /// Build a simulation from a config and an RNG seed. The die starts at
    /// rest above the felt with no throw in flight.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let world = DiceWorld::new(&config);
        Self {
            config,
            world,
            rng: Pcg32::seed_from_u64(seed),
            roll: RollState::default(),
            value: None,
            accumulator: 0.0,
            time_ticks: 0,
        }
    }

    /// Convenience constructor with the stock configuration.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SimConfig::default(), seed)
    }

    /// Current `{rolling, value}` snapshot.
    pub fn status(&self) -> RollStatus {
        RollStatus {
            rolling: self.roll.rolling,
            value: self.value,
        }
    }

    /// World-space die pose for a renderer to mirror.
    pub fn die_pose(&self) -> (Vector3<f32>, UnitQuaternion<f32>) {
        let iso = self.world.die().position();
        (iso.translation.vector, iso.rotation)
    }

    /// Total fixed steps taken since construction.
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
