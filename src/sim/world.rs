//! Rigid-body world owning the tray and the single die
//!
//! Thin wrapper over the rapier pipeline: one fixed tray body, one dynamic
//! cuboid die, stepped in fixed increments. The die is never destroyed; a
//! throw resets its pose and velocities in place.

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use rapier3d::prelude::*;

use super::tray;
use crate::config::SimConfig;
use crate::consts::SIM_DT;

/// Physics world with one fixed tray and one dynamic die.
pub struct DiceWorld {
    gravity: Vector3<f32>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    die: RigidBodyHandle,
}

impl DiceWorld {
    /// Build the tray and spawn the die resting pose above the felt.
    pub fn new(config: &SimConfig) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        tray::spawn_tray(&config.tray, &config.material, &mut bodies, &mut colliders);

        let half = config.die.half_extent();
        let die = bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![0.0, config.tray.elevation + 2.0, 0.0])
                .linear_damping(config.die.linear_damping)
                .angular_damping(config.die.angular_damping)
                .build(),
        );
        colliders.insert_with_parent(
            ColliderBuilder::cuboid(half, half, half)
                .mass(config.die.mass)
                .friction(config.material.friction)
                .restitution(config.material.restitution)
                .build(),
            die,
            &mut bodies,
        );

        let mut params = IntegrationParameters::default();
        params.dt = SIM_DT;

        Self {
            gravity: vector![0.0, config.gravity_y, 0.0],
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            die,
        }
    }

    /// Advance the world by one fixed timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    /// The die body
    pub fn die(&self) -> &RigidBody {
        &self.bodies[self.die]
    }

    /// The die body, mutable
    pub fn die_mut(&mut self) -> &mut RigidBody {
        &mut self.bodies[self.die]
    }

    /// Zero the die's velocities and teleport it to the given pose.
    pub fn reset_die(&mut self, position: Vector3<f32>, orientation: UnitQuaternion<f32>) {
        let die = self.die_mut();
        die.set_linvel(Vector3::zeros(), true);
        die.set_angvel(Vector3::zeros(), true);
        die.set_position(
            Isometry3::from_parts(Translation3::from(position), orientation),
            true,
        );
    }
}
