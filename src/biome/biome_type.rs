use serde::{Deserialize, Serialize};

/// Terrain/vegetation class at a world position.
///
/// Drives surface coloring and the scatter rules; derived from height and
/// temperature by [`super::TerrainField::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Plains,
    Forest,
    Desert,
    Snow,
    Ocean,
    Mountain,
    SakuraGrove,
}

impl Biome {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Plains => "Plains",
            Biome::Forest => "Forest",
            Biome::Desert => "Desert",
            Biome::Snow => "Snow",
            Biome::Ocean => "Ocean",
            Biome::Mountain => "Mountain",
            Biome::SakuraGrove => "Sakura Grove",
        }
    }

    /// Base surface color before lightness perturbation and blending
    pub fn base_color(&self) -> [f32; 3] {
        match self {
            Biome::Plains => [0.45, 0.62, 0.28],
            Biome::Forest => [0.24, 0.45, 0.20],
            Biome::Desert => [0.85, 0.73, 0.46],
            Biome::Snow => [0.88, 0.90, 0.94],
            Biome::Ocean => [0.30, 0.42, 0.45],
            Biome::Mountain => [0.48, 0.47, 0.50],
            Biome::SakuraGrove => [0.52, 0.64, 0.40],
        }
    }

    /// Whether this biome sits below the waterline
    pub fn is_water(&self) -> bool {
        matches!(self, Biome::Ocean)
    }
}
