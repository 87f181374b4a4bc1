use cgmath::Point3;
use rustc_hash::FxHashMap;

use crate::constants::poi::NEARBY_RADIUS;

use super::{Chunk, ChunkGenerator, ChunkPos, Obstacle, PointOfInterest};

/// Keeps the square window of chunks around the observer loaded.
///
/// The chunk table owns every chunk outright: eviction is a map removal
/// that drops the surface, props and obstacles in one step, and a chunk is
/// never visible to callers in a partially-built state. Memory is bounded
/// by `(2 * render_distance + 1)^2` chunks.
pub struct ChunkManager {
    chunks: FxHashMap<ChunkPos, Chunk>,
    generator: ChunkGenerator,
    render_distance: i32,
    nearby_poi: Option<PointOfInterest>,
}

impl ChunkManager {
    pub fn new(generator: ChunkGenerator, render_distance: i32) -> Self {
        Self {
            chunks: FxHashMap::default(),
            generator,
            render_distance,
            nearby_poi: None,
        }
    }

    pub fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    pub fn render_distance(&self) -> i32 {
        self.render_distance
    }

    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn get(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Landmark within scan range after the latest update, if any.
    pub fn nearby_poi(&self) -> Option<&PointOfInterest> {
        self.nearby_poi.as_ref()
    }

    /// Stream chunks around the observer. Returns whether a landmark is
    /// within scan range.
    ///
    /// Runs eviction first, then fills the window, then rescans landmark
    /// proximity. When several landmarks are in range at once the last one
    /// in scan order wins.
    pub fn update(&mut self, observer: Point3<f32>) -> bool {
        let chunk_size = self.generator.chunk_size();
        let center = ChunkPos::from_world(observer.x, observer.z, chunk_size);
        let radius = self.render_distance;

        let before = self.chunks.len();
        self.chunks
            .retain(|pos, _| pos.window_distance(center) <= radius);
        let evicted = before - self.chunks.len();

        let mut loaded = 0;
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                let pos = center.offset(dx, dz);
                if !self.chunks.contains_key(&pos) {
                    self.chunks.insert(pos, self.generator.generate(pos));
                    loaded += 1;
                }
            }
        }

        if loaded > 0 || evicted > 0 {
            log::debug!(
                "streamed chunks around ({}, {}): +{} -{}, {} loaded",
                center.x,
                center.z,
                loaded,
                evicted,
                self.chunks.len()
            );
        }

        self.nearby_poi = None;
        for chunk in self.chunks.values() {
            if let Some(poi) = &chunk.poi {
                let dx = poi.position.x - observer.x;
                let dz = poi.position.z - observer.z;
                if (dx * dx + dz * dz).sqrt() <= NEARBY_RADIUS {
                    self.nearby_poi = Some(poi.clone());
                }
            }
        }
        self.nearby_poi.is_some()
    }

    /// Terrain height under a world position, from the loaded surface grid.
    ///
    /// `None` when no chunk is loaded there - free-fall, not an error.
    pub fn surface_height(&self, x: f32, z: f32) -> Option<f32> {
        let pos = ChunkPos::from_world(x, z, self.generator.chunk_size());
        self.chunks.get(&pos)?.surface.sample(x, z)
    }

    /// Obstacles in the 3x3 chunk neighborhood around a world position.
    pub fn obstacles_near(&self, x: f32, z: f32) -> impl Iterator<Item = &Obstacle> + '_ {
        let center = ChunkPos::from_world(x, z, self.generator.chunk_size());
        let chunks = &self.chunks;
        (-1..=1)
            .flat_map(move |dx| {
                (-1..=1).filter_map(move |dz| chunks.get(&center.offset(dx, dz)))
            })
            .flat_map(|chunk| chunk.obstacles.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::core::CHUNK_SIZE;

    fn manager(render_distance: i32) -> ChunkManager {
        // Small grid keeps the streaming tests quick
        let generator = ChunkGenerator::new(1337, CHUNK_SIZE, 9);
        ChunkManager::new(generator, render_distance)
    }

    #[test]
    fn test_window_is_exact_after_update() {
        let mut manager = manager(1);
        manager.update(Point3::new(0.0, 0.0, 0.0));

        assert_eq!(manager.loaded_count(), 9);
        for dx in -1..=1 {
            for dz in -1..=1 {
                assert!(manager.get(ChunkPos::new(dx, dz)).is_some());
            }
        }
        assert!(manager.get(ChunkPos::new(2, 0)).is_none());
    }

    #[test]
    fn test_eviction_on_movement() {
        let mut manager = manager(1);
        manager.update(Point3::new(0.0, 0.0, 0.0));
        manager.update(Point3::new(10.0 * CHUNK_SIZE, 0.0, 0.0));

        assert_eq!(manager.loaded_count(), 9);
        assert!(manager.get(ChunkPos::new(0, 0)).is_none());
        for dx in 9..=11 {
            for dz in -1..=1 {
                assert!(manager.get(ChunkPos::new(dx, dz)).is_some());
            }
        }
    }

    #[test]
    fn test_update_is_stable_in_place() {
        let mut manager = manager(2);
        manager.update(Point3::new(5.0, 0.0, 5.0));
        let count = manager.loaded_count();
        manager.update(Point3::new(6.0, 0.0, 5.0));
        assert_eq!(manager.loaded_count(), count);
    }

    #[test]
    fn test_surface_height_inside_and_outside() {
        let mut manager = manager(1);
        manager.update(Point3::new(0.0, 0.0, 0.0));

        let inside = manager.surface_height(10.0, 10.0);
        assert!(inside.is_some());
        let expected = manager.generator().field().elevation(0.0, 0.0);
        let sampled = manager.surface_height(0.0, 0.0).unwrap();
        assert!((sampled - expected).abs() < 1e-4);

        assert!(manager.surface_height(50.0 * CHUNK_SIZE, 0.0).is_none());
    }

    #[test]
    fn test_landmark_proximity() {
        // Locate a landmark chunk, stand on it, and expect a nearby report
        let probe = manager(1);
        let mut found = None;
        'search: for cx in -25..25 {
            for cz in -25..25 {
                let pos = ChunkPos::new(cx, cz);
                let (ox, oz) = pos.origin(CHUNK_SIZE);
                let roll = crate::utils::hash01(pos.landmark_seed() as u64);
                if roll > crate::constants::scatter::LANDMARK_THRESHOLD
                    && probe.generator().field().elevation(ox, oz)
                        > crate::constants::core::WATER_LEVEL + 2.0
                {
                    found = Some((ox, oz));
                    break 'search;
                }
            }
        }
        let (ox, oz) = found.expect("no landmark chunk in the search area");

        let mut manager = manager(1);
        let nearby = manager.update(Point3::new(ox, 0.0, oz));
        assert!(nearby);
        assert!(manager.nearby_poi().is_some());

        // Far away again: the landmark drops out of range
        let nearby = manager.update(Point3::new(ox + 40.0 * CHUNK_SIZE, 0.0, oz));
        assert!(!nearby);
        assert!(manager.nearby_poi().is_none());
    }
}
