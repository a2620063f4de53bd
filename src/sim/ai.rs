//! AI ship controller
//!
//! Maps the horizontal distance to the player (and, for the predictive
//! policy, incoming player lasers) to a velocity, and fires on a fixed cadence.

use super::body::Body;
use super::fuzzy::{InferenceSystem, Rule, Triangle};
use super::projectiles::{Projectile, ProjectileSet};
use crate::settings::{GameConfig, PolicyKind};

/// Output grid resolution on each side of zero
const FUZZY_HALF_SAMPLES: u32 = 100;

// Input terms
const CLOSE: usize = 0;
const MEDIUM: usize = 1;
const FAR: usize = 2;
// Output terms
const MOVE_LEFT: usize = 0;
const NO_MOVE: usize = 1;
const MOVE_RIGHT: usize = 2;

/// What the AI sees each tick
#[derive(Debug, Clone, Copy)]
pub struct Observation<'a> {
    pub player_x: f32,
    pub ai: &'a Body,
    /// Player-owned projectiles
    pub incoming: &'a ProjectileSet,
}

impl Observation<'_> {
    /// Signed horizontal distance, positive when the player is to the right
    pub fn distance(&self) -> f32 {
        self.player_x - self.ai.pos.x
    }
}

/// Fuzzy chase over the signed distance.
///
/// `close` covers the player being to the left, `medium` the aligned band and
/// `far` the player being to the right; the rules steer toward the player.
/// The move terms are shoulders at the range edge, so a fully saturated input
/// settles at `11/15` of the output range.
#[derive(Debug, Clone)]
pub struct FuzzyChase {
    system: InferenceSystem,
}

impl FuzzyChase {
    pub fn new(arena_width: f32, output_range: f32) -> Self {
        let half = arena_width / 2.0;
        let r = output_range;
        let inputs = vec![
            Triangle::new(-half, -half, 0.0),
            Triangle::new(-half, 0.0, half),
            Triangle::new(0.0, half, half),
        ];
        let outputs = vec![
            Triangle::new(-r, -r, -0.2 * r),
            Triangle::new(-0.2 * r, 0.0, 0.2 * r),
            Triangle::new(0.2 * r, r, r),
        ];
        let rules = vec![
            Rule { input: CLOSE, output: MOVE_LEFT },
            Rule { input: MEDIUM, output: NO_MOVE },
            Rule { input: FAR, output: MOVE_RIGHT },
        ];
        Self {
            system: InferenceSystem::new(
                (-half, half),
                inputs,
                r,
                outputs,
                rules,
                FUZZY_HALF_SAMPLES,
            ),
        }
    }

    pub fn velocity(&self, distance: f32) -> f32 {
        self.system.evaluate(distance)
    }
}

/// Linear chase inside the reaction distance, idle outside it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicChase {
    pub reaction_distance: f32,
    pub divisor: f32,
    pub max_speed: f32,
}

impl HeuristicChase {
    pub fn velocity(&self, distance: f32) -> f32 {
        if distance.abs() < self.reaction_distance {
            (distance / self.divisor).clamp(-self.max_speed, self.max_speed)
        } else {
            0.0
        }
    }
}

/// Predicted crossing of a projectile with the AI ship's bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Ticks until the projectile's top reaches the ship's bottom
    pub ticks: f32,
    pub x: f32,
}

/// Linear extrapolation of a projectile to the AI's bottom edge.
///
/// `None` for projectiles that are not moving toward the ship or have
/// already passed it.
pub fn predict_impact(projectile: &Projectile, ai: &Body) -> Option<Impact> {
    let closing_speed = -projectile.vel.y;
    if closing_speed <= 0.0 {
        return None;
    }
    let gap = projectile.aabb().top() - ai.aabb().bottom();
    let ticks = gap / closing_speed;
    if ticks < 0.0 {
        return None;
    }
    Some(Impact {
        ticks,
        x: projectile.body.pos.x + projectile.vel.x * ticks,
    })
}

/// Evasion layered over a chase velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryDodge {
    pub threshold: f32,
    pub min_speed: f32,
}

impl TrajectoryDodge {
    /// Replace `chase` with a move away from the most imminent threatening
    /// impact, if any
    pub fn adjust(&self, chase: f32, obs: &Observation<'_>) -> f32 {
        let ai_x = obs.ai.pos.x;
        let threat = obs
            .incoming
            .iter()
            .filter_map(|p| predict_impact(p, obs.ai))
            .filter(|impact| (impact.x - ai_x).abs() < self.threshold)
            .min_by(|a, b| {
                a.ticks
                    .partial_cmp(&b.ticks)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        match threat {
            Some(impact) => {
                let away = if impact.x < ai_x { 1.0 } else { -1.0 };
                away * chase.abs().max(self.min_speed)
            }
            None => chase,
        }
    }
}

/// Movement policy selected at construction
#[derive(Debug, Clone)]
pub enum MovementPolicy {
    Fuzzy(FuzzyChase),
    Heuristic(HeuristicChase),
    Predictive {
        chase: FuzzyChase,
        dodge: TrajectoryDodge,
    },
}

impl MovementPolicy {
    pub fn from_config(config: &GameConfig) -> Self {
        let ai = &config.ai;
        let fuzzy = || FuzzyChase::new(config.arena.width, ai.fuzzy_output_range);
        match ai.policy {
            PolicyKind::Fuzzy => MovementPolicy::Fuzzy(fuzzy()),
            PolicyKind::Heuristic => MovementPolicy::Heuristic(HeuristicChase {
                reaction_distance: ai.reaction_distance,
                divisor: ai.heuristic_divisor,
                max_speed: ai.heuristic_max_speed,
            }),
            PolicyKind::Predictive => MovementPolicy::Predictive {
                chase: fuzzy(),
                dodge: TrajectoryDodge {
                    threshold: ai.dodge_threshold,
                    min_speed: ai.dodge_min_speed,
                },
            },
        }
    }

    /// Horizontal velocity in pixels per tick
    pub fn compute_velocity(&self, obs: &Observation<'_>) -> f32 {
        let d = obs.distance();
        match self {
            MovementPolicy::Fuzzy(chase) => chase.velocity(d),
            MovementPolicy::Heuristic(chase) => chase.velocity(d),
            MovementPolicy::Predictive { chase, dodge } => dodge.adjust(chase.velocity(d), obs),
        }
    }
}

/// Fixed-interval trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireCadence {
    pub interval: u64,
    pub last_fire_tick: u64,
}

impl FireCadence {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            last_fire_tick: 0,
        }
    }

    /// Fires (and records the tick) once more than `interval` ticks passed
    pub fn try_fire(&mut self, tick: u64) -> bool {
        if tick.saturating_sub(self.last_fire_tick) > self.interval {
            self.last_fire_tick = tick;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.last_fire_tick = 0;
    }
}

/// Decision state for the AI ship
#[derive(Debug, Clone)]
pub struct AiController {
    pub policy: MovementPolicy,
    pub cadence: FireCadence,
}

impl AiController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            policy: MovementPolicy::from_config(config),
            cadence: FireCadence::new(config.ai.fire_interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Faction;
    use crate::sim::projectiles::Heading;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ai_body() -> Body {
        Body::new(Vec2::new(400.0, 50.0), Vec2::new(50.0, 50.0))
    }

    fn heuristic() -> HeuristicChase {
        HeuristicChase {
            reaction_distance: 150.0,
            divisor: 10.0,
            max_speed: 10.0,
        }
    }

    #[test]
    fn test_heuristic_band() {
        let h = heuristic();
        assert_eq!(h.velocity(0.0), 0.0);
        assert_eq!(h.velocity(50.0), 5.0);
        assert_eq!(h.velocity(-120.0), -10.0);
        assert_eq!(h.velocity(149.0), 10.0);
        assert_eq!(h.velocity(150.0), 0.0);
        assert_eq!(h.velocity(-400.0), 0.0);
    }

    #[test]
    fn test_fuzzy_centered_is_still() {
        let fuzzy = FuzzyChase::new(800.0, 5.0);
        assert!(fuzzy.velocity(0.0).abs() < 1e-4);
    }

    #[test]
    fn test_fuzzy_saturates() {
        let fuzzy = FuzzyChase::new(800.0, 5.0);
        let left = fuzzy.velocity(-400.0);
        let right = fuzzy.velocity(400.0);
        // Centroid of the shoulder tri(0.2R, R, R) is 11R/15
        let ceiling = 5.0 * 11.0 / 15.0;
        assert!((right - ceiling).abs() < 0.05, "right = {}", right);
        assert!((left + ceiling).abs() < 0.05, "left = {}", left);
        assert!(right <= 5.0 && left >= -5.0);
        assert!((left + right).abs() < 1e-3);
        // Beyond the universe the input clamps
        assert!((fuzzy.velocity(-1000.0) - left).abs() < 1e-6);
    }

    #[test]
    fn test_fire_cadence() {
        let mut cadence = FireCadence::new(175);
        assert!(!cadence.try_fire(175));
        assert!(cadence.try_fire(176));
        assert!(!cadence.try_fire(351));
        assert!(cadence.try_fire(352));
        assert_eq!(cadence.last_fire_tick, 352);
        cadence.reset();
        assert_eq!(cadence.last_fire_tick, 0);
    }

    #[test]
    fn test_predict_ignores_passed_and_outgoing() {
        let ai = ai_body();
        let mut lasers = ProjectileSet::new(Vec2::new(5.0, 20.0));
        // Top at 290, AI bottom at 75, 7 px/tick
        lasers.spawn(Vec2::new(420.0, 300.0), 7.0, Heading::Up, Faction::Player);
        // Already above the AI's bottom edge
        lasers.spawn(Vec2::new(420.0, 20.0), 7.0, Heading::Up, Faction::Player);
        // Moving away
        lasers.spawn(Vec2::new(420.0, 300.0), 5.0, Heading::Down, Faction::Ai);

        let impacts: Vec<_> = lasers.iter().map(|p| predict_impact(p, &ai)).collect();
        let first = impacts[0].expect("incoming laser should be predicted");
        assert!((first.ticks - 215.0 / 7.0).abs() < 1e-4);
        assert_eq!(first.x, 420.0);
        assert_eq!(impacts[1], None);
        assert_eq!(impacts[2], None);
    }

    #[test]
    fn test_dodge_moves_away_from_threat() {
        let ai = ai_body();
        let dodge = TrajectoryDodge {
            threshold: 100.0,
            min_speed: 5.0,
        };
        let mut lasers = ProjectileSet::new(Vec2::new(5.0, 20.0));

        let obs = Observation {
            player_x: 400.0,
            ai: &ai,
            incoming: &lasers,
        };
        assert_eq!(dodge.adjust(1.5, &obs), 1.5);

        lasers.spawn(Vec2::new(380.0, 400.0), 7.0, Heading::Up, Faction::Player);
        let obs = Observation {
            player_x: 400.0,
            ai: &ai,
            incoming: &lasers,
        };
        // Threat to the left: move right at least at the floor speed
        assert_eq!(dodge.adjust(0.0, &obs), 5.0);
        assert_eq!(dodge.adjust(-8.0, &obs), 8.0);
    }

    #[test]
    fn test_dodge_picks_most_imminent() {
        let ai = ai_body();
        let dodge = TrajectoryDodge {
            threshold: 100.0,
            min_speed: 5.0,
        };
        let mut lasers = ProjectileSet::new(Vec2::new(5.0, 20.0));
        lasers.spawn(Vec2::new(350.0, 500.0), 7.0, Heading::Up, Faction::Player);
        lasers.spawn(Vec2::new(450.0, 200.0), 7.0, Heading::Up, Faction::Player);
        // Far-off laser outside the threshold is ignored
        lasers.spawn(Vec2::new(100.0, 100.0), 7.0, Heading::Up, Faction::Player);

        let obs = Observation {
            player_x: 400.0,
            ai: &ai,
            incoming: &lasers,
        };
        assert_eq!(dodge.adjust(0.0, &obs), -5.0);
    }

    #[test]
    fn test_dodge_tie_moves_left() {
        let ai = ai_body();
        let dodge = TrajectoryDodge {
            threshold: 100.0,
            min_speed: 5.0,
        };
        let mut lasers = ProjectileSet::new(Vec2::new(5.0, 20.0));
        lasers.spawn(Vec2::new(400.0, 300.0), 7.0, Heading::Up, Faction::Player);
        let obs = Observation {
            player_x: 400.0,
            ai: &ai,
            incoming: &lasers,
        };
        assert_eq!(dodge.adjust(0.0, &obs), -5.0);
    }

    #[test]
    fn test_policy_selection() {
        let config = GameConfig::with_policy(PolicyKind::Heuristic);
        assert!(matches!(
            MovementPolicy::from_config(&config),
            MovementPolicy::Heuristic(_)
        ));
        let config = GameConfig::default();
        assert!(matches!(
            AiController::new(&config).policy,
            MovementPolicy::Predictive { .. }
        ));
    }

    proptest! {
        #[test]
        fn heuristic_is_zero_outside_band(d in 150.0f32..2000.0, negative in any::<bool>()) {
            let d = if negative { -d } else { d };
            prop_assert_eq!(heuristic().velocity(d), 0.0);
        }

        #[test]
        fn heuristic_monotone_inside_band(a in -149.9f32..149.9, b in -149.9f32..149.9) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let h = heuristic();
            prop_assert!(h.velocity(lo) <= h.velocity(hi));
            prop_assert!(h.velocity(lo).abs() <= 10.0);
        }

        #[test]
        fn fuzzy_bounded_and_chases(d in -2000.0f32..2000.0) {
            let fuzzy = FuzzyChase::new(800.0, 5.0);
            let v = fuzzy.velocity(d);
            prop_assert!(v.abs() <= 5.0);
            if d >= 1.0 {
                prop_assert!(v > 0.0);
            } else if d <= -1.0 {
                prop_assert!(v < 0.0);
            }
        }
    }
}
