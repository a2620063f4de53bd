//! Startup configuration
//!
//! Read once before the match starts and passed by reference into the loop.
//! Every field has a default, so a config file only needs the overrides.

use std::path::Path;

use anyhow::{Context, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "LASER_DUEL_CONFIG";

/// Which AI movement policy drives the AI ship.
///
/// Config files accept the same names and aliases as [`PolicyKind::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PolicyKind {
    /// Triangular fuzzy inference over the horizontal distance
    Fuzzy,
    /// Linear chase inside the reaction distance, idle outside
    Heuristic,
    /// Fuzzy chase with trajectory-prediction dodging
    #[default]
    Predictive,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fuzzy => "Fuzzy",
            PolicyKind::Heuristic => "Heuristic",
            PolicyKind::Predictive => "Predictive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fuzzy" => Some(PolicyKind::Fuzzy),
            "heuristic" | "clamped" => Some(PolicyKind::Heuristic),
            "predictive" | "dodge" => Some(PolicyKind::Predictive),
            _ => None,
        }
    }
}

impl TryFrom<String> for PolicyKind {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_str(&name).ok_or_else(|| format!("unknown AI policy {:?}", name))
    }
}

/// Arena dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Ship geometry, speed and start positions (centers)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub width: f32,
    pub height: f32,
    /// Player pixels per tick
    pub speed: f32,
    pub player_start: Vec2,
    pub ai_start: Vec2,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            speed: SHIP_SPEED,
            player_start: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - SHIP_EDGE_OFFSET),
            ai_start: Vec2::new(ARENA_WIDTH / 2.0, SHIP_EDGE_OFFSET),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub width: f32,
    pub height: f32,
    pub player_speed: f32,
    pub ai_speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            player_speed: PLAYER_PROJECTILE_SPEED,
            ai_speed: AI_PROJECTILE_SPEED,
        }
    }
}

/// AI tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub policy: PolicyKind,
    /// Minimum ticks between shots (exclusive)
    pub fire_interval: u64,
    pub reaction_distance: f32,
    pub heuristic_divisor: f32,
    pub heuristic_max_speed: f32,
    pub dodge_threshold: f32,
    /// Dodge speed used when the chase velocity is slower than this
    pub dodge_min_speed: f32,
    pub fuzzy_output_range: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            fire_interval: AI_FIRE_INTERVAL,
            reaction_distance: AI_REACTION_DISTANCE,
            heuristic_divisor: AI_HEURISTIC_DIVISOR,
            heuristic_max_speed: AI_HEURISTIC_MAX_SPEED,
            dodge_threshold: AI_DODGE_THRESHOLD,
            dodge_min_speed: AI_DODGE_MIN_SPEED,
            fuzzy_output_range: AI_FUZZY_OUTPUT_RANGE,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub ship: ShipConfig,
    pub projectile: ProjectileConfig,
    pub ai: AiConfig,
    /// Frames (and ticks) per second
    pub tick_rate: u32,
    /// Stop the headless run after this many frames
    pub max_frames: Option<u64>,
    /// Seed for the autopilot input source
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            ship: ShipConfig::default(),
            projectile: ProjectileConfig::default(),
            ai: AiConfig::default(),
            tick_rate: TICK_RATE,
            max_frames: None,
            seed: 0x5eed,
        }
    }
}

impl GameConfig {
    /// Default config with a different AI policy
    pub fn with_policy(policy: PolicyKind) -> Self {
        let mut config = Self::default();
        config.ai.policy = policy;
        config
    }

    /// Read and validate a JSON config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `LASER_DUEL_CONFIG`, or use defaults
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.arena.width > 0.0 && self.arena.height > 0.0,
            "arena must have positive dimensions"
        );
        ensure!(
            self.ship.width > 0.0 && self.ship.height > 0.0,
            "ship must have positive dimensions"
        );
        ensure!(
            self.ship.width <= self.arena.width,
            "ship is wider than the arena"
        );
        ensure!(self.ship.speed >= 0.0, "ship speed must not be negative");
        ensure!(
            self.projectile.width > 0.0 && self.projectile.height > 0.0,
            "projectile must have positive dimensions"
        );
        ensure!(
            self.projectile.player_speed > 0.0 && self.projectile.ai_speed > 0.0,
            "projectile speeds must be positive"
        );
        for (name, start) in [
            ("player_start", self.ship.player_start),
            ("ai_start", self.ship.ai_start),
        ] {
            ensure!(
                (0.0..=self.arena.width).contains(&start.x)
                    && (0.0..=self.arena.height).contains(&start.y),
                "{} {:?} lies outside the arena",
                name,
                start
            );
        }
        ensure!(
            self.ai.heuristic_divisor > 0.0,
            "heuristic divisor must be positive"
        );
        for (name, value) in [
            ("heuristic_max_speed", self.ai.heuristic_max_speed),
            ("reaction_distance", self.ai.reaction_distance),
            ("dodge_threshold", self.ai.dodge_threshold),
            ("dodge_min_speed", self.ai.dodge_min_speed),
        ] {
            ensure!(value >= 0.0, "{} must not be negative", name);
        }
        ensure!(
            self.ai.fuzzy_output_range > 0.0,
            "fuzzy output range must be positive"
        );
        ensure!(self.tick_rate > 0, "tick rate must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_arena_layout() {
        let config = GameConfig::default();
        assert_eq!(config.arena.width, 800.0);
        assert_eq!(config.ship.player_start, Vec2::new(400.0, 550.0));
        assert_eq!(config.ship.ai_start, Vec2::new(400.0, 50.0));
        assert_eq!(config.ai.policy, PolicyKind::Predictive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(PolicyKind::from_str("FUZZY"), Some(PolicyKind::Fuzzy));
        assert_eq!(PolicyKind::from_str("clamped"), Some(PolicyKind::Heuristic));
        assert_eq!(PolicyKind::from_str("dodge"), Some(PolicyKind::Predictive));
        assert_eq!(PolicyKind::from_str("random"), None);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "ai": {{ "policy": "heuristic", "fire_interval": 200 }}, "max_frames": 10 }}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.ai.policy, PolicyKind::Heuristic);
        assert_eq!(config.ai.fire_interval, 200);
        assert_eq!(config.ai.dodge_threshold, AI_DODGE_THRESHOLD);
        assert_eq!(config.max_frames, Some(10));
        assert_eq!(config.arena, ArenaConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tick_rate": 0 }}"#).unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("tick rate"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing config file"));
    }

    #[test]
    fn test_negative_ai_tuning_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "ai": {{ "policy": "heuristic", "heuristic_max_speed": -10 }} }}"#
        )
        .unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("heuristic_max_speed"));

        let mut config = GameConfig::default();
        config.ai.heuristic_divisor = -10.0;
        assert!(config.validate().is_err());

        let cases: [fn(&mut GameConfig); 3] = [
            |c| c.ai.reaction_distance = -1.0,
            |c| c.ai.dodge_threshold = -1.0,
            |c| c.ai.dodge_min_speed = -1.0,
        ];
        for field in cases {
            let mut config = GameConfig::default();
            field(&mut config);
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_policy_aliases_in_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ai": {{ "policy": "Dodge" }} }}"#).unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.ai.policy, PolicyKind::Predictive);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ai": {{ "policy": "clamped" }} }}"#).unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.ai.policy, PolicyKind::Heuristic);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ai": {{ "policy": "random" }} }}"#).unwrap();
        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown AI policy"));
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        let json = serde_json::to_string(&PolicyKind::Heuristic).unwrap();
        assert_eq!(json, r#""heuristic""#);
    }

    #[test]
    fn test_start_outside_arena_rejected() {
        let mut config = GameConfig::default();
        config.ship.ai_start = Vec2::new(900.0, 50.0);
        assert!(config.validate().is_err());
    }
}
