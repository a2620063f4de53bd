//! Input sources
//!
//! The simulation wants edges for fire/restart and levels for movement.
//! Backends that only report held keys go through a [`KeyLatch`].

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::TickInput;

/// Polled once at the start of every tick, never blocks
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Raw key levels as a keyboard backend reports them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
    pub quit: bool,
}

/// Turns held fire/restart keys into single-tick presses
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLatch {
    fire_down: bool,
    restart_down: bool,
}

impl KeyLatch {
    pub fn latch(&mut self, held: HeldKeys) -> TickInput {
        let input = TickInput {
            left: held.left,
            right: held.right,
            fire: held.fire && !self.fire_down,
            restart: held.restart && !self.restart_down,
            quit: held.quit,
        };
        self.fire_down = held.fire;
        self.restart_down = held.restart;
        input
    }
}

/// Replays a fixed list of inputs, then idles (or quits)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// Request quit once the script runs out
    pub fn then_quit(mut self) -> Self {
        self.quit_when_done = true;
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.frames.pop_front().unwrap_or(TickInput {
            quit: self.quit_when_done,
            ..Default::default()
        })
    }
}

/// Seeded stand-in player for demo runs: wanders, taps fire, and restarts
/// finished matches
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    latch: KeyLatch,
    steer: i8,
}

impl Autopilot {
    /// Chance per tick of picking a new steering direction
    const TURN_CHANCE: f64 = 0.04;
    /// Chance per tick of holding the fire key
    const FIRE_CHANCE: f64 = 0.03;
    /// Chance per tick of holding the restart key
    const RESTART_CHANCE: f64 = 0.01;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            latch: KeyLatch::default(),
            steer: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> TickInput {
        if self.rng.random_bool(Self::TURN_CHANCE) {
            self.steer = self.rng.random_range(-1..=1);
        }
        let held = HeldKeys {
            left: self.steer < 0,
            right: self.steer > 0,
            fire: self.rng.random_bool(Self::FIRE_CHANCE),
            restart: self.rng.random_bool(Self::RESTART_CHANCE),
            quit: false,
        };
        self.latch.latch(held)
    }
}
