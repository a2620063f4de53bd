//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - No clocks, RNG or I/O
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod ai;
pub mod body;
pub mod collision;
pub mod fuzzy;
pub mod player;
pub mod projectiles;
pub mod state;
pub mod tick;

pub use ai::{AiController, FireCadence, MovementPolicy, Observation, predict_impact};
pub use body::{Aabb, Body};
pub use collision::resolve_collisions;
pub use projectiles::{Heading, Projectile, ProjectileSet};
pub use state::{
    Faction, GameEvent, GamePhase, MatchSnapshot, MatchState, Pilot, Ship, Tally, Winner,
};
pub use tick::{TickInput, tick};
