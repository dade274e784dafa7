//! Headless demo: throw one die and print the settled value.
//!
//! Usage: dice-tray [SEED] [--config PATH]
//!
//! SEED defaults to entropy from the system clock. --config points at a
//! JSON file with `SimConfig` overrides. The binary applies a watchdog the
//! library deliberately does not have: a throw that never settles within
//! sixty simulated seconds exits nonzero.

use std::env;
use std::error::Error;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use dice_tray::consts::SIM_DT_F64;
use dice_tray::{DiceSim, SimConfig};

/// Watchdog budget in 60 Hz frames (sixty simulated seconds)
const MAX_FRAMES: u32 = 60 * 60;

fn parse_args() -> Result<(u64, SimConfig), Box<dyn Error>> {
    let mut seed: Option<u64> = None;
    let mut config = SimConfig::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or("--config requires a path")?;
            config = serde_json::from_str(&fs::read_to_string(&path)?)?;
            log::info!("loaded config overrides from {path}");
        } else {
            seed = Some(arg.parse()?);
        }
    }

    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0xD1CE)
    });
    Ok((seed, config))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (seed, config) = parse_args()?;
    log::info!("rolling with seed {seed}");

    let mut sim = DiceSim::new(config, seed);
    sim.request_throw();

    // Pretend display frames at a steady 60 Hz.
    for _ in 0..MAX_FRAMES {
        let status = sim.tick(SIM_DT_F64);
        if let Some(value) = status.value {
            println!("{value}");
            return Ok(());
        }
    }

    log::warn!("die never settled within the watchdog budget");
    Err("throw did not settle".into())
}
