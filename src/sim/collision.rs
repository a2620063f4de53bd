//! Projectile-vs-ship collision and match outcome
//!
//! A projectile only threatens the opposing ship. Player lasers are checked
//! first, so a tick where both ships are hit goes to the player.

use super::state::{Faction, GameEvent, MatchState, Winner};

/// Check both factions' lasers against the opposing ship.
///
/// On a hit the projectile is removed, the match turns terminal and the
/// winner is returned. Does nothing once the match is terminal.
pub fn resolve_collisions(state: &mut MatchState) -> Option<Winner> {
    if !state.is_running() {
        return None;
    }

    let ai_box = state.ai.body.aabb();
    let player_box = state.player.body.aabb();

    let hit = if let Some(id) = state.player_shots.first_overlapping(&ai_box) {
        state.player_shots.remove(id);
        Some((Faction::Player, id))
    } else if let Some(id) = state.ai_shots.first_overlapping(&player_box) {
        state.ai_shots.remove(id);
        Some((Faction::Ai, id))
    } else {
        None
    };

    let (winner, projectile) = hit?;
    state.finish(winner);
    state.events.push(GameEvent::Hit { winner, projectile });
    log::info!("{} wins on tick {}", winner.as_str(), state.tick);
    Some(winner)
}
