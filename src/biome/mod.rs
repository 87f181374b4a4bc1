pub mod biome_type;
pub mod field;

pub use biome_type::Biome;
pub use field::TerrainField;
