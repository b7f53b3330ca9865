//! Headless cycle driver — steps a celestial cycle at a fixed tick and logs
//! the light and sky values a host renderer would receive.
//!
//! Usage: cargo run --bin simulate_cycle -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>     JSON cycle config (default: built-in defaults)
//!   --seconds <SECS>    Simulated time to run (default: one full day)
//!   --step <SECS>       Tick length (default: 1.0)
//!   --every <N>         Log every Nth tick (default: 10)

use std::path::PathBuf;

use daycycle::atmosphere::{CelestialCycle, CycleConfig};
use daycycle::core::logging;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_str_arg(&args, "--config").map(PathBuf::from);
    let step = parse_f32_arg(&args, "--step").unwrap_or(1.0);
    let every = parse_usize_arg(&args, "--every").unwrap_or(10).max(1);

    let config = match &config_path {
        Some(path) => match CycleConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => CycleConfig::default(),
    };
    let seconds = parse_f32_arg(&args, "--seconds").unwrap_or(config.day_duration_seconds);

    if !(step > 0.0) {
        log::error!("--step must be > 0, got {step}");
        std::process::exit(1);
    }

    let mut cycle = match CelestialCycle::new(config) {
        Ok(cycle) => cycle,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let ticks = (seconds / step).ceil() as usize;
    log::info!("Simulating {seconds}s in {ticks} ticks of {step}s");

    for i in 0..ticks {
        let frame = cycle.tick(step);
        if i % every != 0 && i + 1 != ticks {
            continue;
        }
        let s = frame.state;
        log::info!(
            "t={:>8.2}s sun={:>6.2}° i={:.2}{} moon={:>6.2}° i={:.2}{} sky=[{:.3}, {:.3}, {:.3}]",
            (i + 1) as f32 * step,
            s.sun_angle_deg,
            frame.sun.intensity,
            if frame.sun.enabled { "" } else { " (off)" },
            s.moon_angle_deg,
            frame.moon.intensity,
            if frame.moon.enabled { "" } else { " (off)" },
            frame.sky_tint[0],
            frame.sky_tint[1],
            frame.sky_tint[2],
        );
    }
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    parse_str_arg(args, flag).and_then(|v| v.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    parse_str_arg(args, flag).and_then(|v| v.parse().ok())
}
