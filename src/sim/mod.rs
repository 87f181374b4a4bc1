use std::sync::Arc;

use cgmath::Point3;

use crate::biome::Biome;
use crate::config::EngineConfig;
use crate::constants::core::{CHUNK_SIZE, SURFACE_RESOLUTION};
use crate::constants::physics_constants::{EYE_HEIGHT, SPAWN_CLEARANCE};
use crate::input::InputState;
use crate::lore::{Lore, LoreRequest, LoreSource, Scanner};
use crate::physics::{self, PlayerState};
use crate::time::WorldClock;
use crate::world::{ChunkGenerator, ChunkManager};

/// Per-tick outbound state for the UI collaborator.
///
/// Replaces ad-hoc callbacks: every tick returns one snapshot, and the
/// consumer decides what to do with it.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub position: Point3<f32>,
    pub stamina: f32,
    pub flying: bool,
    pub biome: Biome,
    pub time_of_day: f32,
    pub poi_nearby: bool,
}

/// The whole simulation: terrain streaming, observer physics, day cycle
/// and the lore scan slot, advanced synchronously one tick at a time.
pub struct Simulation {
    terrain: ChunkManager,
    player: PlayerState,
    clock: WorldClock,
    scanner: Scanner,
}

impl Simulation {
    pub fn new(config: &EngineConfig, lore: Arc<dyn LoreSource>) -> Self {
        let generator = ChunkGenerator::new(config.seed, CHUNK_SIZE, SURFACE_RESOLUTION);
        let spawn_ground = generator.field().elevation(0.0, 0.0);
        let spawn = Point3::new(0.0, spawn_ground + EYE_HEIGHT + SPAWN_CLEARANCE, 0.0);

        let mut terrain = ChunkManager::new(generator, config.render_distance);
        // Prime the window so the first physics step sees loaded terrain
        terrain.update(spawn);

        log::info!(
            "simulation ready: seed {}, spawn at {:.1}, {} chunks loaded",
            config.seed,
            spawn.y,
            terrain.loaded_count()
        );

        Self {
            terrain,
            player: PlayerState::new(spawn),
            clock: WorldClock::new(config.day_length),
            scanner: Scanner::new(lore),
        }
    }

    /// Advance one tick: physics, then streaming, then the clock.
    pub fn tick(&mut self, dt: f32, input: &InputState) -> StatsSnapshot {
        physics::step(&mut self.player, &self.terrain, input, dt);
        let poi_nearby = self.terrain.update(self.player.position);
        self.clock.advance(dt);

        let position = self.player.position;
        StatsSnapshot {
            position,
            stamina: self.player.stamina,
            flying: self.player.flying,
            biome: self.terrain.generator().field().biome_at(position.x, position.z),
            time_of_day: self.clock.time_of_day(),
            poi_nearby,
        }
    }

    /// Trigger a lore scan of the nearby landmark.
    ///
    /// Returns false when nothing is in range or a scan is already
    /// pending - the busy flag lives in the scanner.
    pub fn scan(&mut self) -> bool {
        let poi = match self.terrain.nearby_poi() {
            Some(poi) => poi.clone(),
            None => return false,
        };
        self.scanner.begin(LoreRequest {
            biome: poi.biome,
            time_label: self.clock.phase().label(),
            landmark: "Monolith".to_string(),
        })
    }

    /// Completed lore from an earlier scan, if any arrived.
    pub fn poll_lore(&mut self) -> Option<Lore> {
        self.scanner.poll()
    }

    pub fn scanning(&self) -> bool {
        self.scanner.is_busy()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn terrain(&self) -> &ChunkManager {
        &self.terrain
    }

    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::stamina::STAMINA_MAX;
    use anyhow::anyhow;

    struct UnreachableSource;

    impl LoreSource for UnreachableSource {
        fn generate_lore(&self, _request: &LoreRequest) -> anyhow::Result<Lore> {
            Err(anyhow!("no transport"))
        }
    }

    fn small_sim() -> Simulation {
        let config = EngineConfig {
            render_distance: 1,
            ..EngineConfig::default()
        };
        Simulation::new(&config, Arc::new(UnreachableSource))
    }

    #[test]
    fn test_window_tracks_player() {
        let mut sim = small_sim();
        assert_eq!(sim.terrain().loaded_count(), 9);

        let input = InputState::new();
        for _ in 0..10 {
            let stats = sim.tick(1.0 / 60.0, &input);
            assert_eq!(sim.terrain().loaded_count(), 9);
            assert!((0.0..=STAMINA_MAX).contains(&stats.stamina));
        }
    }

    #[test]
    fn test_idle_observer_settles_on_ground() {
        let mut sim = small_sim();
        let input = InputState::new();
        for _ in 0..120 {
            sim.tick(1.0 / 60.0, &input);
        }

        let player = sim.player().clone();
        assert!(player.grounded);
        let ground = sim
            .terrain()
            .surface_height(player.position.x, player.position.z)
            .expect("ground under the observer");
        assert!((player.position.y - (ground + EYE_HEIGHT)).abs() < 1e-3);
    }

    #[test]
    fn test_clock_advances_with_ticks() {
        let mut sim = small_sim();
        let before = sim.clock().time_of_day();
        sim.tick(1.0, &InputState::new());
        assert!(sim.clock().time_of_day() != before);
    }

    #[test]
    fn test_scan_without_landmark_refuses() {
        let mut sim = small_sim();
        sim.tick(1.0 / 60.0, &InputState::new());
        if sim.terrain().nearby_poi().is_none() {
            assert!(!sim.scan());
            assert!(!sim.scanning());
        }
    }
}
