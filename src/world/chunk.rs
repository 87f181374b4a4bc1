use cgmath::Point3;

use crate::biome::Biome;
use crate::constants::scatter::MONOLITH_RADIUS;

use super::ChunkPos;

/// Static circular collider in world space.
///
/// Owned by its chunk; dropped with it on eviction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
}

/// Scatter object kinds placed across a chunk surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Pebble,
    Boulder,
    Oak,
    Pine,
    Sakura,
    Cactus,
    TallGrass,
    Petals,
    Monolith,
}

impl PropKind {
    /// Collision radius, if this kind registers an obstacle.
    ///
    /// Trees and cacti collide at a fixed radius independent of their
    /// visual scale; boulders scale with it.
    pub fn collision_radius(&self, scale: f32) -> Option<f32> {
        match self {
            PropKind::Pebble | PropKind::TallGrass | PropKind::Petals => None,
            PropKind::Boulder => Some(0.8 * scale),
            PropKind::Oak => Some(0.6),
            PropKind::Pine => Some(0.5),
            PropKind::Sakura => Some(0.5),
            PropKind::Cactus => Some(0.4),
            PropKind::Monolith => Some(MONOLITH_RADIUS),
        }
    }
}

/// A placed scatter object: decorative mesh anchor plus optional collider.
#[derive(Debug, Clone)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Point3<f32>,
    pub scale: f32,
}

/// Rare landmark the observer can scan for lore.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub position: Point3<f32>,
    pub biome: Biome,
}

/// Per-vertex heightfield surface of one chunk.
///
/// A `resolution x resolution` grid spanning the chunk footprint, row-major
/// with x varying fastest. Heights are bilinear-sampled for ground queries
/// so physics sees exactly the rendered surface.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    origin: (f32, f32),
    resolution: usize,
    spacing: f32,
    heights: Vec<f32>,
    colors: Vec<[f32; 3]>,
}

impl SurfaceGrid {
    pub fn new(origin: (f32, f32), resolution: usize, spacing: f32) -> Self {
        assert!(resolution >= 2);
        Self {
            origin,
            resolution,
            spacing,
            heights: vec![0.0; resolution * resolution],
            colors: vec![[0.0; 3]; resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// World position of a grid vertex
    pub fn vertex_world(&self, ix: usize, iz: usize) -> (f32, f32) {
        (
            self.origin.0 + ix as f32 * self.spacing,
            self.origin.1 + iz as f32 * self.spacing,
        )
    }

    pub fn set(&mut self, ix: usize, iz: usize, height: f32, color: [f32; 3]) {
        let i = iz * self.resolution + ix;
        self.heights[i] = height;
        self.colors[i] = color;
    }

    pub fn height(&self, ix: usize, iz: usize) -> f32 {
        self.heights[iz * self.resolution + ix]
    }

    /// Bilinear height sample at a world position.
    ///
    /// Returns `None` outside the chunk footprint.
    pub fn sample(&self, x: f32, z: f32) -> Option<f32> {
        let gx = (x - self.origin.0) / self.spacing;
        let gz = (z - self.origin.1) / self.spacing;
        let max = (self.resolution - 1) as f32;
        if gx < 0.0 || gz < 0.0 || gx > max || gz > max {
            return None;
        }

        let ix = (gx.floor() as usize).min(self.resolution - 2);
        let iz = (gz.floor() as usize).min(self.resolution - 2);
        let fx = gx - ix as f32;
        let fz = gz - iz as f32;

        let h00 = self.height(ix, iz);
        let h10 = self.height(ix + 1, iz);
        let h01 = self.height(ix, iz + 1);
        let h11 = self.height(ix + 1, iz + 1);

        let h0 = h00 + (h10 - h00) * fx;
        let h1 = h01 + (h11 - h01) * fx;
        Some(h0 + (h1 - h0) * fz)
    }
}

/// One streamed terrain tile.
///
/// Created atomically by the generator; the streaming manager's table owns
/// it outright, so eviction is a plain map removal that frees the surface,
/// props and obstacles together.
pub struct Chunk {
    pub pos: ChunkPos,
    pub surface: SurfaceGrid,
    pub props: Vec<Prop>,
    pub obstacles: Vec<Obstacle>,
    pub poi: Option<PointOfInterest>,
}
