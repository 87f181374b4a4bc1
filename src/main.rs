use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use horizon_engine::{ArchiveLoreSource, EngineConfig, InputState, Simulation};

/// Headless demo: walk the observer through the world for a few simulated
/// minutes, scanning any landmark that comes into range.
fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => EngineConfig::default(),
    };

    let mut sim = Simulation::new(&config, Arc::new(ArchiveLoreSource));

    let dt = 1.0 / 60.0;
    let ticks = 60 * 120; // two simulated minutes
    let mut walk = InputState::new();
    walk.forward = true;

    for tick in 0..ticks {
        // Sweep the heading slowly and sprint in bursts
        sim.player_mut().set_look((tick as f32 / 600.0).sin() * 0.8, 0.0);
        walk.boost = (tick / 300) % 2 == 0;
        walk.jump = tick % 240 < 10;

        let stats = sim.tick(dt, &walk);

        if stats.poi_nearby && !sim.scanning() && sim.scan() {
            log::info!("scanning landmark near {:?}", stats.position);
        }
        if let Some(lore) = sim.poll_lore() {
            log::info!("{}: {}", lore.title, lore.content);
        }

        if tick % 60 == 0 {
            log::info!(
                "t={:>3}s pos=({:>7.1}, {:>5.1}, {:>7.1}) biome={:<12} stamina={:>5.1} {} {}",
                tick / 60,
                stats.position.x,
                stats.position.y,
                stats.position.z,
                stats.biome.name(),
                stats.stamina,
                if stats.flying { "[flying]" } else { "" },
                if stats.poi_nearby { "[landmark]" } else { "" },
            );
        }
    }

    // Drain a scan that may still be in flight
    if sim.scanning() {
        std::thread::sleep(std::time::Duration::from_millis(200));
        if let Some(lore) = sim.poll_lore() {
            log::info!("{}: {}", lore.title, lore.content);
        }
    }

    log::info!(
        "walk complete: {} chunks resident, clock at {:.2}",
        sim.terrain().loaded_count(),
        sim.clock().time_of_day()
    );
    Ok(())
}
