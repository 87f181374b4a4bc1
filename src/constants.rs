// Horizon Engine Constants - SINGLE SOURCE OF TRUTH
//
// This file contains ALL tuning constants used throughout the engine.
// Configuration (src/config.rs) may override a small subset at startup;
// everything else is fixed for the lifetime of the process.

/// Core world constants
pub mod core {
    /// Side length of a chunk in world units
    pub const CHUNK_SIZE: f32 = 64.0;

    /// Vertices per side of a chunk surface grid (33x33 -> 32x32 quads)
    pub const SURFACE_RESOLUTION: usize = 33;

    /// Streaming window radius in chunks (square window, not circular)
    pub const RENDER_DISTANCE: i32 = 3;

    /// Global water plane height
    pub const WATER_LEVEL: f32 = 0.0;
}

/// Terrain field shaping
pub mod terrain {
    /// Continent noise frequency (very low - landmass scale)
    pub const CONTINENT_SCALE: f64 = 0.0045;
    /// Upward bias so land is more common than ocean
    pub const CONTINENT_BIAS: f64 = 0.22;
    /// Land height multiplier on the continent value
    pub const CONTINENT_HEIGHT: f64 = 15.0;
    /// Ocean depth multiplier on the (negative) continent value
    pub const OCEAN_DEPTH: f64 = 20.0;
    /// Deepest allowed ocean floor
    pub const ABYSS_FLOOR: f64 = -15.0;

    /// Ridge noise frequency (mountain ranges)
    pub const RIDGE_SCALE: f64 = 0.018;
    /// Ridged term amplitude
    pub const RIDGE_HEIGHT: f64 = 45.0;

    /// High-frequency roughness
    pub const ROUGHNESS_SCALE: f64 = 0.09;
    pub const ROUGHNESS_HEIGHT: f64 = 1.5;

    /// Temperature noise frequency (biome bands)
    pub const TEMPERATURE_SCALE: f64 = 0.008;

    /// Heights above this are always Mountain
    pub const MOUNTAIN_HEIGHT: f32 = 45.0;
    /// Heights above this (up to the mountain line) may be Snow
    pub const SNOW_LINE: f32 = 30.0;

    /// Fraction blended toward the waterline inside the coastal band
    pub const COAST_BLEND: f64 = 0.4;
}

/// Object scatter tuning
pub mod scatter {
    /// Coarse scatter grid spacing in world units
    pub const SPACING: f32 = 4.0;
    /// Per-cell jitter half-range
    pub const JITTER: f32 = 1.5;

    /// Ground cover grid spacing
    pub const COVER_SPACING: f32 = 2.0;
    /// Ground cover noise frequency
    pub const COVER_SCALE: f64 = 0.1;
    /// Gate threshold for grass in Plains/Forest
    pub const GRASS_THRESHOLD: f64 = 0.2;
    /// Gate threshold for petals in SakuraGrove
    pub const PETAL_THRESHOLD: f64 = 0.45;
    /// Ground cover only grows below this height
    pub const COVER_CEILING: f32 = 40.0;

    /// Chunk seed multipliers for the landmark roll
    pub const LANDMARK_SEED_X: i64 = 49297;
    pub const LANDMARK_SEED_Z: i64 = 92713;
    /// Landmark roll must exceed this (~3% of chunks)
    pub const LANDMARK_THRESHOLD: f64 = 0.97;
    /// Monolith collider radius
    pub const MONOLITH_RADIUS: f32 = 4.0;
}

/// Physics constants
pub mod physics_constants {
    /// Downward acceleration (world units/s^2)
    pub const GRAVITY: f32 = 50.0;

    /// Exponential horizontal damping factor
    pub const HORIZONTAL_DAMPING: f32 = 10.0;

    /// Acceleration impulse scale applied to the move direction
    pub const ACCEL_SCALE: f32 = 20.0;

    /// Base movement speed
    pub const WALK_SPEED: f32 = 6.0;
    /// Speed multiplier while boosting with stamina available
    pub const RUN_MULTIPLIER: f32 = 1.8;

    /// Instant vertical velocity on a grounded jump
    pub const JUMP_VELOCITY: f32 = 18.0;
    /// Sustained lift acceleration while flying
    pub const FLIGHT_LIFT: f32 = 70.0;

    /// Observer collision radius against circular obstacles
    pub const PLAYER_RADIUS: f32 = 0.7;
    /// Eye height above the ground surface
    pub const EYE_HEIGHT: f32 = 1.6;

    /// Heights below this trigger the respawn safety net
    pub const KILL_PLANE: f32 = -50.0;
    /// Respawn height after falling through the world
    pub const RESPAWN_HEIGHT: f32 = 100.0;
    /// Ground height sentinel when no terrain is loaded underfoot
    pub const NO_GROUND: f32 = -10_000.0;

    /// Vertical clearance added above terrain when spawning
    pub const SPAWN_CLEARANCE: f32 = 8.0;
}

/// Stamina resource tuning
pub mod stamina {
    pub const STAMINA_MAX: f32 = 100.0;
    /// Boost drain rate; applied as RUN_DRAIN * 0.4 * dt while held
    pub const RUN_DRAIN: f32 = 30.0;
    /// Flight drain rate per second of sustained lift
    pub const FLIGHT_DRAIN: f32 = 25.0;
    /// Regeneration rate per second when not draining
    pub const REGEN: f32 = 15.0;
    /// Minimum stamina required to sustain flight
    pub const FLIGHT_MIN: f32 = 5.0;
}

/// Day cycle constants
pub mod time_constants {
    /// Real seconds for one full day cycle
    pub const DAY_LENGTH_SECONDS: f32 = 600.0;
    /// Normalized time of day at process start (mid-morning)
    pub const TIME_START: f32 = 10.0 / 24.0;
}

/// Point-of-interest tracking
pub mod poi {
    /// World-unit radius within which a landmark counts as "nearby"
    pub const NEARBY_RADIUS: f32 = 25.0;
}

/// Shared blend colors for surface tinting
pub mod palette {
    /// Beach/ocean-floor sand
    pub const SAND: [f32; 3] = [0.82, 0.74, 0.55];
    /// High-altitude snow cap
    pub const SNOW: [f32; 3] = [0.93, 0.94, 0.97];
    /// Width of the sand blend band above the waterline
    pub const SAND_BAND: f32 = 4.0;
    /// Height range over which peaks fade to snow
    pub const SNOW_FADE: f32 = 25.0;
}
