use serde::{Deserialize, Serialize};

/// Position of a chunk in the world (chunk coordinates on the ground plane)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing a world position
    pub fn from_world(x: f32, z: f32, chunk_size: f32) -> Self {
        Self {
            x: (x / chunk_size).floor() as i32,
            z: (z / chunk_size).floor() as i32,
        }
    }

    /// World coordinates of this chunk's minimum corner
    pub fn origin(&self, chunk_size: f32) -> (f32, f32) {
        (self.x as f32 * chunk_size, self.z as f32 * chunk_size)
    }

    /// Create a new chunk position offset by the given amounts
    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.z + dz)
    }

    /// Per-axis (Chebyshev) distance, matching the square streaming window
    pub fn window_distance(&self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Stable per-chunk seed for reproducible draws
    pub fn landmark_seed(&self) -> i64 {
        use crate::constants::scatter::{LANDMARK_SEED_X, LANDMARK_SEED_Z};
        (self.x as i64)
            .wrapping_mul(LANDMARK_SEED_X)
            .wrapping_add((self.z as i64).wrapping_mul(LANDMARK_SEED_Z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_floors_negative() {
        assert_eq!(ChunkPos::from_world(10.0, 10.0, 64.0), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::from_world(-0.5, 0.0, 64.0), ChunkPos::new(-1, 0));
        assert_eq!(ChunkPos::from_world(64.0, -64.0, 64.0), ChunkPos::new(1, -1));
        assert_eq!(
            ChunkPos::from_world(-128.1, 200.0, 64.0),
            ChunkPos::new(-3, 3)
        );
    }

    #[test]
    fn test_origin_round_trip() {
        let pos = ChunkPos::new(-2, 5);
        let (ox, oz) = pos.origin(64.0);
        assert_eq!(ChunkPos::from_world(ox, oz, 64.0), pos);
        assert_eq!(ChunkPos::from_world(ox + 63.9, oz + 63.9, 64.0), pos);
    }

    #[test]
    fn test_window_distance() {
        let a = ChunkPos::new(0, 0);
        assert_eq!(a.window_distance(ChunkPos::new(3, -1)), 3);
        assert_eq!(a.window_distance(ChunkPos::new(-2, -2)), 2);
        assert_eq!(a.window_distance(a), 0);
    }

    #[test]
    fn test_landmark_seed_is_positional() {
        let a = ChunkPos::new(1, 2).landmark_seed();
        let b = ChunkPos::new(2, 1).landmark_seed();
        assert_ne!(a, b);
        assert_eq!(a, ChunkPos::new(1, 2).landmark_seed());
    }
}
