//! Tray boundary construction
//!
//! The tray is one fixed rigid body carrying a compound collider: a flat
//! floor slab plus N rectangular plates arranged as a regular N-gon
//! approximating a cylindrical wall. Each plate's in-plane half-width is half
//! the chord subtended by one angular segment at the wall's mid-radius, so
//! adjacent plates meet edge to edge. Built once at setup, never mutated.

use std::f32::consts::TAU;

use rapier3d::prelude::*;

use crate::config::{MaterialConfig, TrayConfig};

/// Insert the static tray body with its colliders and return its handle.
pub fn spawn_tray(
    config: &TrayConfig,
    material: &MaterialConfig,
    bodies: &mut RigidBodySet,
    colliders: &mut ColliderSet,
) -> RigidBodyHandle {
    let tray = bodies.insert(RigidBodyBuilder::fixed().build());
    for collider in tray_colliders(config, material) {
        colliders.insert_with_parent(collider, tray, bodies);
    }
    tray
}

/// Produce the floor slab plus one plate per wall segment.
pub fn tray_colliders(config: &TrayConfig, material: &MaterialConfig) -> Vec<Collider> {
    let n = config.segments.max(3);
    let mut out = Vec::with_capacity(n as usize + 1);
    let outer = config.outer_radius();

    // Floor slab spans the full outer radius in both horizontal axes, with
    // its top at the felt elevation.
    out.push(
        ColliderBuilder::cuboid(outer, config.floor_thickness / 2.0, outer)
            .translation(vector![
                0.0,
                config.elevation - config.floor_thickness / 2.0,
                0.0
            ])
            .friction(material.friction)
            .restitution(material.restitution)
            .build(),
    );

    // Wall plates sit at the wall mid-radius, yawed so each faces the axis.
    let wall_radius = config.inner_radius + config.wall_thickness / 2.0;
    let arc = TAU / n as f32;
    let chord = 2.0 * wall_radius * (arc / 2.0).sin();

    let half_w = chord / 2.0;
    let half_h = config.wall_height / 2.0;
    let half_t = config.wall_thickness / 2.0;

    for i in 0..n {
        let ang = i as f32 * arc;
        let x = wall_radius * ang.cos();
        let z = wall_radius * ang.sin();

        out.push(
            ColliderBuilder::cuboid(half_w, half_h, half_t)
                .translation(vector![x, config.elevation + half_h, z])
                .rotation(vector![0.0, -ang, 0.0])
                .friction(material.friction)
                .restitution(material.restitution)
                .build(),
        );
    }

    out
}
