//! Fixed-step frame driver and settle detection
//!
//! `tick` is called once per display frame with the elapsed real time. It
//! caps the frame interval, drains the accumulator in fixed physics steps,
//! then runs the settle check once. Physics therefore behaves identically
//! regardless of rendering cadence.

use nalgebra::UnitQuaternion;

use super::faces::{pip_value, top_face_index};
use super::state::{DiceSim, RollState, RollStatus};
use crate::config::{SettleConfig, TrayConfig};
use crate::consts::{MAX_FRAME_DT, SIM_DT_F64};

/// Per-tick motion snapshot fed to the settle check.
#[derive(Debug, Clone)]
pub struct MotionSample {
    pub linear_speed: f32,
    pub angular_speed: f32,
    pub height: f32,
    pub orientation: UnitQuaternion<f32>,
}

impl DiceSim {
    /// Advance the simulation by one display frame's worth of real time and
    /// report the current roll status.
    pub fn tick(&mut self, frame_dt: f64) -> RollStatus {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        while self.accumulator >= SIM_DT_F64 {
            self.world.step();
            self.accumulator -= SIM_DT_F64;
            self.time_ticks += 1;
        }

        if self.roll.rolling {
            let die = self.world.die();
            let sample = MotionSample {
                linear_speed: die.linvel().norm(),
                angular_speed: die.angvel().norm(),
                height: die.translation().y,
                orientation: *die.rotation(),
            };
            if let Some(face) =
                update_settle(&mut self.roll, &sample, &self.config.settle, &self.config.tray)
            {
                let value = pip_value(face);
                self.value = Some(value);
                log::info!("die settled on {value}");
            }
        }

        self.status()
    }
}

/// Nearly-stopped predicate: slow in both senses and low enough to be
/// resting inside the tray rather than airborne or balanced on the rim.
fn nearly_stopped(sample: &MotionSample, settle: &SettleConfig, tray: &TrayConfig) -> bool {
    sample.linear_speed < settle.linear_speed_epsilon
        && sample.angular_speed < settle.angular_speed_epsilon
        && sample.height < tray.rim_top() + settle.height_slack
}

/// Advance the settle debounce by one tick.
///
/// Any motion invalidates accumulated stability. While nearly stopped, the
/// observed top face must hold for more than `stable_ticks` consecutive
/// ticks before the roll resolves; a face change restarts the count at 1.
/// Returns the stable face index on the resolving tick.
pub(crate) fn update_settle(
    roll: &mut RollState,
    sample: &MotionSample,
    settle: &SettleConfig,
    tray: &TrayConfig,
) -> Option<usize> {
    if !nearly_stopped(sample, settle, tray) {
        roll.stable_ticks = 0;
        roll.last_top_face = None;
        return None;
    }

    roll.stable_ticks += 1;
    let top = top_face_index(&sample.orientation);
    if roll.last_top_face != Some(top) {
        roll.last_top_face = Some(top);
        roll.stable_ticks = 1;
    }

    if roll.stable_ticks > settle.stable_ticks {
        roll.rolling = false;
        Some(top)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use nalgebra::Vector3;
    use std::f32::consts::FRAC_PI_2;

    fn rolling_state() -> RollState {
        RollState {
            rolling: true,
            stable_ticks: 0,
            last_top_face: None,
        }
    }

    fn still_sample(orientation: UnitQuaternion<f32>) -> MotionSample {
        MotionSample {
            linear_speed: 0.01,
            angular_speed: 0.01,
            height: 1.4,
            orientation,
        }
    }

    #[test]
    fn test_settle_requires_nineteen_quiet_ticks() {
        let config = SimConfig::default();
        let mut roll = rolling_state();
        let sample = still_sample(UnitQuaternion::identity());

        for i in 1..=18 {
            let resolved = update_settle(&mut roll, &sample, &config.settle, &config.tray);
            assert_eq!(resolved, None, "resolved early at tick {i}");
            assert!(roll.rolling);
        }
        let resolved = update_settle(&mut roll, &sample, &config.settle, &config.tray);
        assert_eq!(resolved, Some(2));
        assert!(!roll.rolling);
    }

    #[test]
    fn test_never_resolves_while_moving() {
        let config = SimConfig::default();
        let mut roll = rolling_state();

        let fast_samples = [
            MotionSample {
                linear_speed: 0.10,
                angular_speed: 0.0,
                height: 1.4,
                orientation: UnitQuaternion::identity(),
            },
            MotionSample {
                linear_speed: 0.0,
                angular_speed: 0.10,
                height: 1.4,
                orientation: UnitQuaternion::identity(),
            },
            MotionSample {
                linear_speed: 3.0,
                angular_speed: 8.0,
                height: 2.5,
                orientation: UnitQuaternion::identity(),
            },
        ];

        for _ in 0..100 {
            for sample in &fast_samples {
                let resolved = update_settle(&mut roll, sample, &config.settle, &config.tray);
                assert_eq!(resolved, None);
                assert_eq!(roll.stable_ticks, 0);
                assert_eq!(roll.last_top_face, None);
                assert!(roll.rolling);
            }
        }
    }

    #[test]
    fn test_airborne_die_never_settles() {
        let config = SimConfig::default();
        let mut roll = rolling_state();

        // Slow at the top of an arc, but well above the rim.
        let apex = MotionSample {
            linear_speed: 0.05,
            angular_speed: 0.05,
            height: config.tray.rim_top() + config.settle.height_slack + 0.1,
            orientation: UnitQuaternion::identity(),
        };
        for _ in 0..50 {
            assert_eq!(
                update_settle(&mut roll, &apex, &config.settle, &config.tray),
                None
            );
        }
        assert!(roll.rolling);
    }

    #[test]
    fn test_face_flicker_restarts_debounce() {
        let config = SimConfig::default();
        let mut roll = rolling_state();

        let face_y = still_sample(UnitQuaternion::identity());
        let face_z = still_sample(UnitQuaternion::from_axis_angle(
            &Vector3::x_axis(),
            -FRAC_PI_2,
        ));

        for _ in 0..10 {
            update_settle(&mut roll, &face_y, &config.settle, &config.tray);
        }
        assert_eq!(roll.stable_ticks, 10);

        // A flicker to another face restarts the count at 1, not 0.
        update_settle(&mut roll, &face_z, &config.settle, &config.tray);
        assert_eq!(roll.stable_ticks, 1);
        assert_eq!(roll.last_top_face, Some(4));

        // Any motion clears the count entirely.
        let moving = MotionSample {
            linear_speed: 1.0,
            angular_speed: 0.0,
            height: 1.4,
            orientation: UnitQuaternion::identity(),
        };
        update_settle(&mut roll, &moving, &config.settle, &config.tray);
        assert_eq!(roll.stable_ticks, 0);
        assert_eq!(roll.last_top_face, None);
    }

    #[test]
    fn test_accumulator_is_chunking_independent() {
        // Frame sequences summing to one second must always drain exactly
        // sixty fixed steps, no matter how they are chunked.
        let chunkings: &[Vec<f64>] = &[
            vec![SIM_DT_F64; 60],
            vec![2.0 * SIM_DT_F64; 30],
            {
                let mut mixed = vec![SIM_DT_F64; 30];
                mixed.extend(vec![2.0 * SIM_DT_F64; 15]);
                mixed
            },
        ];

        for frames in chunkings {
            let mut sim = DiceSim::from_seed(11);
            for &dt in frames {
                sim.tick(dt);
            }
            assert_eq!(sim.time_ticks(), 60, "chunking {:?}", frames.len());
        }
    }

    #[test]
    fn test_frame_cap_limits_catch_up() {
        let mut sim = DiceSim::from_seed(11);
        // A five-second stall is capped at 0.05s of catch-up: three steps.
        sim.tick(5.0);
        assert_eq!(sim.time_ticks(), 3);
    }

    #[test]
    fn test_resting_z_up_die_resolves_two() {
        let mut sim = DiceSim::from_seed(1);
        let half = sim.config().die.half_extent();
        let elevation = sim.config().tray.elevation;

        // Park the die on the felt with local +Z facing up and mark the
        // roll in flight; no physics noise, pure projection and lookup.
        sim.world.reset_die(
            Vector3::new(0.0, elevation + half, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
        );
        sim.roll = RollState {
            rolling: true,
            stable_ticks: 0,
            last_top_face: None,
        };

        let mut status = sim.status();
        for _ in 0..600 {
            status = sim.tick(SIM_DT_F64);
            if !status.rolling {
                break;
            }
        }
        assert!(!status.rolling, "die never settled");
        assert_eq!(status.value, Some(2));
    }

    #[test]
    fn test_full_throw_settles_to_valid_value() {
        let mut sim = DiceSim::from_seed(42);
        sim.request_throw();

        let mut status = sim.status();
        assert!(status.rolling);

        // Sixty simulated seconds of 60 Hz frames; throws settle in a few.
        for _ in 0..(60 * 60) {
            status = sim.tick(SIM_DT_F64);
            if !status.rolling {
                break;
            }
        }
        assert!(!status.rolling, "throw never settled");
        let value = status.value.unwrap();
        assert!((1..=6).contains(&value));

        // The die ended up inside the tray, at rest.
        let (pos, _) = sim.die_pose();
        let radial = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!(radial < sim.config().tray.outer_radius());
        assert!(pos.y < sim.config().tray.rim_top());
    }
}
