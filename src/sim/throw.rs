//! Launch generation
//!
//! A throw respawns the die at a random point above the felt, gives it a
//! random orientation, and applies an upward-biased impulse plus a random
//! tumble. All sampling is generic over `rand::Rng` so tests can inject
//! fixed seeds and assert exact launch parameters.

use std::f32::consts::{PI, TAU};

use nalgebra::{UnitQuaternion, Vector3};
use rand::Rng;

use super::state::{DiceSim, RollState};
use crate::config::{DieConfig, SimConfig, ThrowConfig, TrayConfig};

/// Randomized launch parameters for one throw.
#[derive(Debug, Clone)]
pub struct Launch {
    pub position: Vector3<f32>,
    pub orientation: UnitQuaternion<f32>,
    pub impulse: Vector3<f32>,
    pub spin: Vector3<f32>,
}

/// Uniform-area random point in a disk of the given radius, on the y = 0
/// plane. The square root on the radial draw keeps density uniform over
/// area rather than over radius.
pub fn sample_disk_point<R: Rng>(rng: &mut R, radius: f32) -> (f32, f32) {
    let theta = rng.random_range(0.0..TAU);
    let rho = rng.random::<f32>().sqrt() * radius;
    (rho * theta.cos(), rho * theta.sin())
}

/// Spawn disk radius: a fraction of the die's clearance from the wall,
/// never below the configured minimum.
pub fn spawn_disk_radius(tray: &TrayConfig, die: &DieConfig, throw: &ThrowConfig) -> f32 {
    let margin = tray.inner_radius - die.size * 0.9;
    (margin * throw.spawn_margin_factor).max(throw.min_spawn_radius)
}

/// Draw one full set of launch parameters.
pub fn sample_launch<R: Rng>(rng: &mut R, config: &SimConfig) -> Launch {
    let radius = spawn_disk_radius(&config.tray, &config.die, &config.throw);
    let (x, z) = sample_disk_point(rng, radius);
    let position = Vector3::new(x, config.tray.elevation + config.throw.spawn_height, z);

    let orientation = UnitQuaternion::from_euler_angles(
        rng.random_range(0.0..PI),
        rng.random_range(0.0..PI),
        rng.random_range(0.0..PI),
    );

    let lateral = config.throw.lateral_impulse;
    let impulse = Vector3::new(
        rng.random_range(-lateral..lateral),
        rng.random_range(config.throw.vertical_impulse_min..config.throw.vertical_impulse_max),
        rng.random_range(-lateral..lateral),
    );

    let max_spin = config.throw.max_spin;
    let spin = Vector3::new(
        rng.random_range(-max_spin..max_spin),
        rng.random_range(-max_spin..max_spin),
        rng.random_range(-max_spin..max_spin),
    );

    Launch {
        position,
        orientation,
        impulse,
        spin,
    }
}

impl DiceSim {
    /// Reset the die and launch a fresh throw.
    ///
    /// Returns immediately; the outcome becomes available through
    /// [`DiceSim::tick`] once the die settles. A request made while a throw
    /// is still in flight discards it and restarts, carrying nothing over.
    pub fn request_throw(&mut self) {
        let launch = sample_launch(&mut self.rng, &self.config);
        log::debug!(
            "throw: spawn=({:.2}, {:.2}, {:.2}) impulse=({:.2}, {:.2}, {:.2}) spin=({:.1}, {:.1}, {:.1})",
            launch.position.x,
            launch.position.y,
            launch.position.z,
            launch.impulse.x,
            launch.impulse.y,
            launch.impulse.z,
            launch.spin.x,
            launch.spin.y,
            launch.spin.z,
        );

        self.world.reset_die(launch.position, launch.orientation);
        let die = self.world.die_mut();
        die.apply_impulse(launch.impulse, true);
        die.set_angvel(launch.spin, true);

        self.roll = RollState {
            rolling: true,
            stable_ticks: 0,
            last_top_face: None,
        };
        self.value = None;
    }
}
