//! Circle Arena headless runner
//!
//! Drives the simulation on a fixed 60 Hz timeline and logs what happens.
//! Drawing is left to an external renderer consuming `Simulation::instances`.
//!
//! Usage: `circle-arena [config.json] [frames]`

use std::path::Path;

use circle_arena::sim::FrameClock;
use circle_arena::{SimConfig, Simulation, StepReport};

const FRAME_RATE: f64 = 60.0;
const DEFAULT_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(Path::new(&path)),
        None => SimConfig::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid frame count: {e}; running {DEFAULT_FRAMES} frames");
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    log::info!(
        "Circle Arena starting ({} impulses, {} step order)",
        config.impulse_model.as_str(),
        config.step_order.as_str()
    );

    let mut clock = FrameClock::new(config.max_frame_dt);
    let mut sim = Simulation::new(config);
    let mut totals = StepReport::default();
    let energy_start = sim.kinetic_energy();

    for frame in 0..frames {
        let dt = clock.tick(frame as f64 / FRAME_RATE);
        let report = sim.step(dt);
        totals += report;

        if frame > 0 && frame % FRAME_RATE as u64 == 0 {
            log::debug!(
                "frame {frame}: {} overlapping pairs, energy {:.5}",
                report.overlapping_pairs,
                sim.kinetic_energy()
            );
        }
    }

    let escaped = sim
        .circles()
        .iter()
        .filter(|c| c.center.abs().max_element() > 1.0)
        .count();

    println!("circles:      {}", sim.len());
    println!("seed:         {}", sim.seed());
    println!("frames:       {frames}");
    println!("wall flips:   {}", totals.wall_flips);
    println!("impulses:     {}", totals.impulses);
    println!(
        "energy:       {:.5} -> {:.5}",
        energy_start,
        sim.kinetic_energy()
    );
    println!("outside:      {escaped}");
}
