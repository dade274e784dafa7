//! Simulation tuning parameters
//!
//! Every knob of the simulation lives here with its stock default: tray
//! geometry, die body, launch randomization ranges, settle thresholds, and
//! the shared contact material. Callers that want the stock felt tray just
//! use [`SimConfig::default`].

use serde::{Deserialize, Serialize};

/// Static tray geometry: a flat floor plus a segmented circular wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Inner radius of the felt area
    pub inner_radius: f32,
    /// Radial thickness of the wall
    pub wall_thickness: f32,
    /// Height of the wall above the felt surface
    pub wall_height: f32,
    /// Thickness of the floor slab below the felt surface
    pub floor_thickness: f32,
    /// Elevation of the felt surface (top of the floor slab)
    pub elevation: f32,
    /// Number of flat plates approximating the circular wall (min 3)
    pub segments: u32,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            inner_radius: 2.6,
            wall_thickness: 0.28,
            wall_height: 0.75,
            floor_thickness: 0.22,
            elevation: 1.05,
            segments: 64,
        }
    }
}

impl TrayConfig {
    /// Outer radius of the tray including the wall
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.inner_radius + self.wall_thickness
    }

    /// Elevation of the top of the wall rim
    #[inline]
    pub fn rim_top(&self) -> f32 {
        self.elevation + self.wall_height
    }
}

/// Die body parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieConfig {
    /// Edge length of the cube
    pub size: f32,
    /// Body mass
    pub mass: f32,
    /// Linear velocity damping per second
    pub linear_damping: f32,
    /// Angular velocity damping per second
    pub angular_damping: f32,
}

impl Default for DieConfig {
    fn default() -> Self {
        Self {
            size: 0.65,
            mass: 1.0,
            linear_damping: 0.25,
            angular_damping: 0.25,
        }
    }
}

impl DieConfig {
    /// Cuboid half-extent along each axis
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }
}

/// Launch randomization ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowConfig {
    /// Spawn height above the felt surface
    pub spawn_height: f32,
    /// Fraction of the wall-clearance margin used as the spawn disk radius
    pub spawn_margin_factor: f32,
    /// Lower bound on the spawn disk radius
    pub min_spawn_radius: f32,
    /// Horizontal impulse components drawn from +/- this bound
    pub lateral_impulse: f32,
    /// Vertical impulse lower bound (biased upward to clear the rim)
    pub vertical_impulse_min: f32,
    /// Vertical impulse upper bound
    pub vertical_impulse_max: f32,
    /// Angular velocity components drawn from +/- this bound (rad/s)
    pub max_spin: f32,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            spawn_height: 2.2,
            spawn_margin_factor: 0.75,
            min_spawn_radius: 0.2,
            lateral_impulse: 1.2,
            vertical_impulse_min: 5.5,
            vertical_impulse_max: 7.0,
            max_spin: 10.0,
        }
    }
}

/// Rest-detection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleConfig {
    /// Linear speed below which the die counts as nearly stopped
    pub linear_speed_epsilon: f32,
    /// Angular speed below which the die counts as nearly stopped
    pub angular_speed_epsilon: f32,
    /// Allowed height above the rim top (rejects airborne false settles)
    pub height_slack: f32,
    /// Consecutive qualifying ticks required before the outcome is final
    pub stable_ticks: u32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            linear_speed_epsilon: 0.10,
            angular_speed_epsilon: 0.10,
            height_slack: 0.9,
            stable_ticks: 18,
        }
    }
}

/// Contact material shared by the die and every tray collider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        // Tuned so throws settle within a few seconds without excessive
        // bouncing or sticking.
        Self {
            friction: 0.32,
            restitution: 0.18,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub tray: TrayConfig,
    pub die: DieConfig,
    pub throw: ThrowConfig,
    pub settle: SettleConfig,
    pub material: MaterialConfig,
    /// Vertical gravity component (negative = down)
    pub gravity_y: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tray: TrayConfig::default(),
            die: DieConfig::default(),
            throw: ThrowConfig::default(),
            settle: SettleConfig::default(),
            material: MaterialConfig::default(),
            gravity_y: -9.82,
        }
    }
}
