//! Per-tick draw list built from the match state

use serde::Serialize;

use super::instance::{RectInstance, colors};
use crate::settings::GameConfig;
use crate::sim::{Aabb, Faction, MatchState};

/// One filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub rect: Aabb,
    pub color: [f32; 4],
}

/// Centered overlay text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayText {
    pub text: String,
    /// Baseline y in arena pixels
    pub y: f32,
    /// Nominal font size in pixels
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything the presentation sink needs for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub clear_color: [f32; 4],
    /// Drawn in order
    pub commands: Vec<DrawCommand>,
    pub overlay: Vec<OverlayText>,
}

impl Frame {
    /// Draw commands packed for upload
    pub fn instances(&self) -> Vec<RectInstance> {
        self.commands
            .iter()
            .map(|c| RectInstance::new(&c.rect, c.color))
            .collect()
    }

    /// Raw instance bytes, `size_of::<RectInstance>()` per command
    pub fn instance_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.instances()).to_vec()
    }
}

pub fn winner_banner(winner: Faction) -> String {
    format!("Game Over: {} Wins!", winner.as_str())
}

pub const RESTART_PROMPT: &str = "Press ENTER to restart";

/// Build the frame for the current state.
///
/// Ships and lasers are drawn while running; a finished match shows only the
/// winner banner and restart prompt.
pub fn build_frame(state: &MatchState, config: &GameConfig) -> Frame {
    let mut frame = Frame {
        tick: state.tick,
        clear_color: colors::BACKGROUND,
        ..Default::default()
    };

    match state.winner() {
        None => {
            frame.commands.push(DrawCommand {
                rect: state.player.body.aabb(),
                color: colors::PLAYER_SHIP,
            });
            frame.commands.push(DrawCommand {
                rect: state.ai.body.aabb(),
                color: colors::AI_SHIP,
            });
            frame.commands.extend(
                state
                    .player_shots
                    .iter()
                    .chain(state.ai_shots.iter())
                    .map(|laser| DrawCommand {
                        rect: laser.aabb(),
                        color: colors::LASER,
                    }),
            );
        }
        Some(winner) => {
            let mid = config.arena.height / 2.0;
            frame.overlay.push(OverlayText {
                text: winner_banner(winner),
                y: mid,
                size: 74.0,
                color: colors::TEXT,
            });
            frame.overlay.push(OverlayText {
                text: RESTART_PROMPT.to_string(),
                y: mid + 50.0,
                size: 36.0,
                color: colors::TEXT,
            });
        }
    }

    frame
}
