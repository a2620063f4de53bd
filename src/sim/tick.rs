//! Fixed timestep simulation tick
//!
//! Advances the match by one frame: pilots, projectiles, collisions.

use glam::Vec2;

use super::ai::Observation;
use super::collision::resolve_collisions;
use super::player;
use super::projectiles::{Heading, ProjectileSet};
use super::state::{Faction, GameEvent, MatchState, Pilot, Ship};
use crate::settings::GameConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Fire key went down this tick
    pub fire: bool,
    /// Restart key went down this tick
    pub restart: bool,
    /// Window closed / quit requested
    pub quit: bool,
}

/// Advance the match by one tick
pub fn tick(state: &mut MatchState, input: &TickInput, config: &GameConfig) {
    if !state.is_running() {
        if input.restart {
            state.restart();
            log::info!(
                "Match restarted (player {} - {} AI)",
                state.tally.player_wins,
                state.tally.ai_wins
            );
        }
        return;
    }

    state.tick += 1;
    let arena = config.arena;

    let player_fire = steer_ship(
        &mut state.player,
        input,
        state.ai.body.pos.x,
        &state.ai_shots,
        state.tick,
        arena.width,
    );
    if let Some(pos) = player_fire {
        fire(state, Faction::Player, pos, config);
    }

    let ai_fire = steer_ship(
        &mut state.ai,
        input,
        state.player.body.pos.x,
        &state.player_shots,
        state.tick,
        arena.width,
    );
    if let Some(pos) = ai_fire {
        fire(state, Faction::Ai, pos, config);
    }

    for (faction, shots) in [
        (Faction::Player, &mut state.player_shots),
        (Faction::Ai, &mut state.ai_shots),
    ] {
        let count = shots.advance(arena.height);
        if count > 0 {
            log::debug!("{} {} laser(s) left the arena", count, faction.as_str());
            state.events.push(GameEvent::Expired { faction, count });
        }
    }

    resolve_collisions(state);
}

/// Move one ship according to its pilot. Returns a laser spawn point if the
/// pilot fired this tick.
fn steer_ship(
    ship: &mut Ship,
    input: &TickInput,
    opponent_x: f32,
    incoming: &ProjectileSet,
    tick: u64,
    arena_width: f32,
) -> Option<Vec2> {
    let Pilot::Ai(ai) = &mut ship.pilot else {
        return player::apply_input(ship, input, arena_width);
    };

    let obs = Observation {
        player_x: opponent_x,
        ai: &ship.body,
        incoming,
    };
    ship.velocity = ai.policy.compute_velocity(&obs);
    ship.body.shift_x_clamped(ship.velocity, arena_width);

    if ai.cadence.try_fire(tick) {
        Some(ship.body.bottom_center())
    } else {
        None
    }
}

fn fire(state: &mut MatchState, faction: Faction, pos: Vec2, config: &GameConfig) {
    let id = match faction {
        Faction::Player => {
            state
                .player_shots
                .spawn(pos, config.projectile.player_speed, Heading::Up, faction)
        }
        Faction::Ai => state
            .ai_shots
            .spawn(pos, config.projectile.ai_speed, Heading::Down, faction),
    };
    log::debug!("{} fired laser {} on tick {}", faction.as_str(), id, state.tick);
    state.events.push(GameEvent::Fired { faction, id });
}
