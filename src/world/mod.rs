pub mod chunk;
pub mod generator;
pub mod position;
pub mod streaming;

pub use chunk::{Chunk, Obstacle, PointOfInterest, Prop, PropKind, SurfaceGrid};
pub use generator::ChunkGenerator;
pub use position::ChunkPos;
pub use streaming::ChunkManager;
