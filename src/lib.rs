//! Horizon Engine - a headless exploration-world core.
//!
//! Generates biome-varied heightfield terrain in fixed-size chunks, streams
//! a square window of chunks around a moving observer, and resolves the
//! observer's movement (gravity, ground contact, circular obstacle
//! avoidance, stamina-limited boost and flight) against that terrain every
//! tick. Rendering, input capture and UI are external collaborators; the
//! narrative lore generator is consumed behind [`lore::LoreSource`].

pub mod biome;
pub mod config;
pub mod constants;
pub mod input;
pub mod lore;
pub mod physics;
pub mod sim;
pub mod time;
pub mod utils;
pub mod world;

pub use biome::{Biome, TerrainField};
pub use config::{ConfigError, EngineConfig};
pub use input::InputState;
pub use lore::{ArchiveLoreSource, Lore, LoreRequest, LoreSource, Scanner};
pub use physics::PlayerState;
pub use sim::{Simulation, StatsSnapshot};
pub use time::{DayPhase, WorldClock};
pub use world::{
    Chunk, ChunkGenerator, ChunkManager, ChunkPos, Obstacle, PointOfInterest, Prop, PropKind,
    SurfaceGrid,
};
