//! Match state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ai::AiController;
use super::body::Body;
use super::projectiles::ProjectileSet;
use crate::settings::GameConfig;

/// Ownership tag used to route collision checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Ai,
}

impl Faction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Player => "Player",
            Faction::Ai => "AI",
        }
    }
}

/// Winner of a finished match
pub type Winner = Faction;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ships move, fire and can be hit
    Running,
    /// Someone was hit; frozen until restart
    Terminal(Winner),
}

impl GamePhase {
    pub fn winner(&self) -> Option<Winner> {
        match self {
            GamePhase::Running => None,
            GamePhase::Terminal(winner) => Some(*winner),
        }
    }
}

/// Who steers a ship
#[derive(Debug, Clone)]
pub enum Pilot {
    Human,
    Ai(AiController),
}

/// A ship; the pilot decides how it moves
#[derive(Debug, Clone)]
pub struct Ship {
    pub faction: Faction,
    pub body: Body,
    /// Fixed horizontal speed for human pilots (pixels per tick)
    pub speed: f32,
    /// Velocity applied on the last running tick
    pub velocity: f32,
    pub start: Vec2,
    pub pilot: Pilot,
}

impl Ship {
    pub fn player(config: &GameConfig) -> Self {
        Self::new(Faction::Player, config.ship.player_start, Pilot::Human, config)
    }

    pub fn ai(config: &GameConfig) -> Self {
        Self::new(
            Faction::Ai,
            config.ship.ai_start,
            Pilot::Ai(AiController::new(config)),
            config,
        )
    }

    fn new(faction: Faction, start: Vec2, pilot: Pilot, config: &GameConfig) -> Self {
        let size = Vec2::new(config.ship.width, config.ship.height);
        let mut body = Body::new(start, size);
        body.shift_x_clamped(0.0, config.arena.width);
        Self {
            faction,
            body,
            speed: config.ship.speed,
            velocity: 0.0,
            start: body.pos,
            pilot,
        }
    }

    /// Back to the start position, pilot state cleared
    pub fn reset(&mut self) {
        self.body.pos = self.start;
        self.velocity = 0.0;
        if let Pilot::Ai(ai) = &mut self.pilot {
            ai.cadence.reset();
        }
    }
}

/// Something that happened during a tick, drained by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { faction: Faction, id: u32 },
    Expired { faction: Faction, count: usize },
    Hit { winner: Winner, projectile: u32 },
    Restarted,
}

/// Wins across restarts within one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: u32,
    pub ai_wins: u32,
}

impl Tally {
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Faction::Player => self.player_wins += 1,
            Faction::Ai => self.ai_wins += 1,
        }
    }
}

/// Complete match state, owned by the match loop
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Ticks since match start (or last restart)
    pub tick: u64,
    pub phase: GamePhase,
    pub player: Ship,
    pub ai: Ship,
    /// Upward lasers fired by the player
    pub player_shots: ProjectileSet,
    /// Downward lasers fired by the AI
    pub ai_shots: ProjectileSet,
    pub tally: Tally,
    pub events: Vec<GameEvent>,
}

impl MatchState {
    pub fn new(config: &GameConfig) -> Self {
        let laser = Vec2::new(config.projectile.width, config.projectile.height);
        Self {
            tick: 0,
            phase: GamePhase::Running,
            player: Ship::player(config),
            ai: Ship::ai(config),
            player_shots: ProjectileSet::new(laser),
            ai_shots: ProjectileSet::new(laser),
            tally: Tally::default(),
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn winner(&self) -> Option<Winner> {
        self.phase.winner()
    }

    /// Enter the terminal phase (no-op if already terminal)
    pub fn finish(&mut self, winner: Winner) {
        if self.is_running() {
            self.phase = GamePhase::Terminal(winner);
            self.tally.record(winner);
        }
    }

    /// Reset ships and projectiles for a new round, keeping the tally
    pub fn restart(&mut self) {
        self.tick = 0;
        self.phase = GamePhase::Running;
        self.player.reset();
        self.ai.reset();
        self.player_shots.clear();
        self.ai_shots.clear();
        self.events.push(GameEvent::Restarted);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            tick: self.tick,
            phase: self.phase,
            player: self.player.body.pos,
            ai: self.ai.body.pos,
            player_shots: self.player_shots.iter().map(|p| p.body.pos).collect(),
            ai_shots: self.ai_shots.iter().map(|p| p.body.pos).collect(),
            tally: self.tally,
        }
    }
}

/// Serializable view of a match for logs and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub player: Vec2,
    pub ai: Vec2,
    pub player_shots: Vec<Vec2>,
    pub ai_shots: Vec<Vec2>,
    pub tally: Tally,
}
