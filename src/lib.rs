//! Laser Duel - a vertical arena shooter between a player ship and an AI ship
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, AI, collisions, match state)
//! - `renderer`: Frame building and presentation sinks
//! - `platform`: Input sources and frame pacing
//! - `settings`: Startup configuration
//! - `runner`: The frame-stepped match loop driver

pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use settings::{GameConfig, PolicyKind};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Target frame rate; one simulation tick per frame
    pub const TICK_RATE: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 50.0;
    /// Horizontal pixels per tick
    pub const SHIP_SPEED: f32 = 5.0;
    /// Distance of each ship's center from its own arena edge
    pub const SHIP_EDGE_OFFSET: f32 = 50.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PLAYER_PROJECTILE_SPEED: f32 = 7.0;
    pub const AI_PROJECTILE_SPEED: f32 = 5.0;

    /// AI fires once more than this many ticks have passed since its last shot
    pub const AI_FIRE_INTERVAL: u64 = 175;
    /// Heuristic chase only reacts inside this horizontal distance
    pub const AI_REACTION_DISTANCE: f32 = 150.0;
    pub const AI_HEURISTIC_DIVISOR: f32 = 10.0;
    pub const AI_HEURISTIC_MAX_SPEED: f32 = 10.0;
    /// Predicted impacts closer than this trigger a dodge
    pub const AI_DODGE_THRESHOLD: f32 = 100.0;
    pub const AI_DODGE_MIN_SPEED: f32 = 5.0;
    /// Fuzzy controller output universe is [-range, range]
    pub const AI_FUZZY_OUTPUT_RANGE: f32 = 5.0;
}

/// Clamp a horizontal center so a box of `width` stays inside [0, arena_width].
/// A box at least as wide as the arena is pinned to the arena center.
#[inline]
pub fn clamp_center_x(x: f32, width: f32, arena_width: f32) -> f32 {
    let half = width / 2.0;
    // Inverted clamp bounds would panic
    if arena_width <= width {
        return arena_width / 2.0;
    }
    x.clamp(half, arena_width - half)
}
