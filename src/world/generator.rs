use cgmath::Point3;
use noise::{NoiseFn, Perlin};
use rand::Rng;

use crate::biome::{Biome, TerrainField};
use crate::constants::core::WATER_LEVEL;
use crate::constants::palette;
use crate::constants::scatter::*;
use crate::utils::hash01;

use super::{Chunk, ChunkPos, Obstacle, PointOfInterest, Prop, PropKind, SurfaceGrid};

fn lerp_color(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Builds chunks from the terrain field.
///
/// Heights, vertex colors and landmark placement are deterministic from the
/// field seed and chunk coordinate. Scatter jitter and species choice draw
/// from `thread_rng` - cosmetic variation only, the obstacle set stays
/// statistically stable (see DESIGN.md).
pub struct ChunkGenerator {
    field: TerrainField,
    color_noise: Perlin,
    cover_noise: Perlin,
    chunk_size: f32,
    resolution: usize,
}

impl ChunkGenerator {
    pub fn new(seed: u32, chunk_size: f32, resolution: usize) -> Self {
        Self {
            field: TerrainField::new(seed),
            color_noise: Perlin::new(seed.wrapping_add(10)),
            cover_noise: Perlin::new(seed.wrapping_add(11)),
            chunk_size,
            resolution,
        }
    }

    pub fn field(&self) -> &TerrainField {
        &self.field
    }

    pub fn chunk_size(&self) -> f32 {
        self.chunk_size
    }

    /// Generate the chunk at the given coordinate.
    pub fn generate(&self, pos: ChunkPos) -> Chunk {
        let mut chunk = Chunk {
            pos,
            surface: self.build_surface(pos),
            props: Vec::new(),
            obstacles: Vec::new(),
            poi: None,
        };

        self.scatter_objects(&mut chunk);
        self.scatter_ground_cover(&mut chunk);
        self.place_landmark(&mut chunk);

        chunk
    }

    fn build_surface(&self, pos: ChunkPos) -> SurfaceGrid {
        let spacing = self.chunk_size / (self.resolution - 1) as f32;
        let origin = pos.origin(self.chunk_size);
        let mut surface = SurfaceGrid::new(origin, self.resolution, spacing);

        for iz in 0..self.resolution {
            for ix in 0..self.resolution {
                let (wx, wz) = surface.vertex_world(ix, iz);
                let height = self.field.elevation(wx, wz);
                let biome = self.field.classify(wx, wz, height);
                surface.set(ix, iz, height, self.vertex_color(wx, wz, height, biome));
            }
        }

        surface
    }

    fn vertex_color(&self, wx: f32, wz: f32, height: f32, biome: Biome) -> [f32; 3] {
        let mut color = biome.base_color();

        // Small lightness perturbation breaks up flat fields of one biome
        let tint = self.color_noise.get([wx as f64 * 0.15, wz as f64 * 0.15]) as f32 * 0.06;
        for channel in &mut color {
            *channel = (*channel + tint).clamp(0.0, 1.0);
        }

        let beach = (1.0 - (height - WATER_LEVEL) / palette::SAND_BAND).clamp(0.0, 1.0);
        if beach > 0.0 {
            color = lerp_color(color, palette::SAND, beach);
        }

        let snow = ((height - crate::constants::terrain::MOUNTAIN_HEIGHT) / palette::SNOW_FADE)
            .clamp(0.0, 1.0);
        if snow > 0.0 {
            color = lerp_color(color, palette::SNOW, snow);
        }

        color
    }

    /// Coarse scatter pass: pebbles and biome-gated flora.
    fn scatter_objects(&self, chunk: &mut Chunk) {
        let mut rng = rand::thread_rng();
        let (ox, oz) = chunk.pos.origin(self.chunk_size);
        let cells = (self.chunk_size / SPACING) as i32;

        for i in 0..cells {
            for j in 0..cells {
                let wx = ox + i as f32 * SPACING + rng.gen_range(-JITTER..JITTER);
                let wz = oz + j as f32 * SPACING + rng.gen_range(-JITTER..JITTER);
                let height = self.field.elevation(wx, wz);
                if height <= WATER_LEVEL + 0.5 {
                    continue;
                }

                let r: f32 = rng.gen();

                // First matching band wins. The pebble band shadows the
                // boulder band entirely (0.03 < 0.15) - see DESIGN.md.
                if r < 0.15 {
                    let scale = rng.gen_range(0.2..0.5);
                    self.place_prop(chunk, PropKind::Pebble, wx, height, wz, scale);
                    continue;
                }
                if r < 0.03 {
                    let scale = rng.gen_range(0.8..1.6);
                    self.place_prop(chunk, PropKind::Boulder, wx, height, wz, scale);
                    continue;
                }

                let kind = match self.field.classify(wx, wz, height) {
                    Biome::Forest if r > 0.75 => Some(PropKind::Pine),
                    Biome::Forest if r > 0.4 => Some(PropKind::Oak),
                    Biome::SakuraGrove if r > 0.65 => Some(PropKind::Sakura),
                    Biome::Plains if r > 0.97 => Some(PropKind::Oak),
                    Biome::Desert if r > 0.96 => Some(PropKind::Cactus),
                    _ => None,
                };
                if let Some(kind) = kind {
                    let scale = rng.gen_range(0.8..1.3);
                    self.place_prop(chunk, kind, wx, height, wz, scale);
                }
            }
        }
    }

    /// Finer decorative pass: tall grass and fallen petals, no colliders.
    fn scatter_ground_cover(&self, chunk: &mut Chunk) {
        let mut rng = rand::thread_rng();
        let (ox, oz) = chunk.pos.origin(self.chunk_size);
        let cells = (self.chunk_size / COVER_SPACING) as i32;

        for i in 0..cells {
            for j in 0..cells {
                let wx = ox + i as f32 * COVER_SPACING + rng.gen_range(-0.8..0.8);
                let wz = oz + j as f32 * COVER_SPACING + rng.gen_range(-0.8..0.8);
                let height = self.field.elevation(wx, wz);
                if height <= WATER_LEVEL + 2.0 || height >= COVER_CEILING {
                    continue;
                }

                let gate = self.cover_noise.get([wx as f64 * COVER_SCALE, wz as f64 * COVER_SCALE]);
                let kind = match self.field.classify(wx, wz, height) {
                    Biome::Plains | Biome::Forest if gate > GRASS_THRESHOLD => {
                        Some(PropKind::TallGrass)
                    }
                    Biome::SakuraGrove if gate > PETAL_THRESHOLD => Some(PropKind::Petals),
                    _ => None,
                };
                if let Some(kind) = kind {
                    let scale = rng.gen_range(0.6..1.1);
                    self.place_prop(chunk, kind, wx, height, wz, scale);
                }
            }
        }
    }

    /// At most one monolith per chunk, from the reproducible chunk seed.
    fn place_landmark(&self, chunk: &mut Chunk) {
        let roll = hash01(chunk.pos.landmark_seed() as u64);
        if roll <= LANDMARK_THRESHOLD {
            return;
        }

        let (ox, oz) = chunk.pos.origin(self.chunk_size);
        let height = self.field.elevation(ox, oz);
        if height <= WATER_LEVEL + 2.0 {
            return;
        }

        self.place_prop(chunk, PropKind::Monolith, ox, height, oz, 1.0);
        chunk.poi = Some(PointOfInterest {
            position: Point3::new(ox, height, oz),
            biome: self.field.classify(ox, oz, height),
        });
        log::debug!(
            "landmark placed in chunk ({}, {}) at height {:.1}",
            chunk.pos.x,
            chunk.pos.z,
            height
        );
    }

    fn place_prop(&self, chunk: &mut Chunk, kind: PropKind, x: f32, y: f32, z: f32, scale: f32) {
        if let Some(radius) = kind.collision_radius(scale) {
            chunk.obstacles.push(Obstacle { x, z, radius });
        }
        chunk.props.push(Prop {
            kind,
            position: Point3::new(x, y, z),
            scale,
        });
    }
}
