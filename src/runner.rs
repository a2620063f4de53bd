//! Frame-stepped match loop
//!
//! One iteration per frame: poll input, tick the simulation, present, pace.

use anyhow::Context;
use serde::Serialize;

use crate::platform::{FrameClock, InputSource};
use crate::renderer::{PresentationSink, build_frame};
use crate::settings::GameConfig;
use crate::sim::{GameEvent, MatchSnapshot, MatchState, Tally, tick};

/// What happened over a whole run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub rounds_finished: u32,
    pub restarts: u32,
    pub tally: Tally,
    /// Ended by a quit request rather than the frame limit
    pub quit: bool,
    pub final_state: MatchSnapshot,
}

/// Drive a match until quit (or `config.max_frames`).
///
/// Owns the match state for the whole run; components only borrow it within
/// a tick.
pub fn run_match_loop<I, C, S>(
    config: &GameConfig,
    input: &mut I,
    clock: &mut C,
    sink: &mut S,
) -> anyhow::Result<RunSummary>
where
    I: InputSource,
    C: FrameClock,
    S: PresentationSink,
{
    let mut state = MatchState::new(config);
    let mut frames = 0u64;
    let mut rounds_finished = 0u32;
    let mut restarts = 0u32;
    let mut quit = false;

    log::info!(
        "Match started: {} AI, {}x{} arena at {} Hz",
        config.ai.policy.as_str(),
        config.arena.width,
        config.arena.height,
        config.tick_rate
    );

    loop {
        if config.max_frames.is_some_and(|max| frames >= max) {
            break;
        }

        let commands = input.poll();
        if commands.quit {
            log::info!("Quit requested after {} frames", frames);
            quit = true;
            break;
        }

        tick(&mut state, &commands, config);
        for event in state.drain_events() {
            match event {
                GameEvent::Hit { .. } => rounds_finished += 1,
                GameEvent::Restarted => restarts += 1,
                _ => {}
            }
        }

        let frame = build_frame(&state, config);
        sink.present(&frame)
            .with_context(|| format!("presenting frame {}", frames))?;

        frames += 1;
        clock.wait_for_next_frame();
    }

    let summary = RunSummary {
        frames,
        rounds_finished,
        restarts,
        tally: state.tally,
        quit,
        final_state: state.snapshot(),
    };
    log::info!(
        "Run finished: {} frames, player {} - {} AI",
        summary.frames,
        summary.tally.player_wins,
        summary.tally.ai_wins
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, ScriptedInput};
    use crate::renderer::{Frame, NullSink, RecordingSink};
    use crate::sim::TickInput;

    struct FailingSink;

    impl PresentationSink for FailingSink {
        fn present(&mut self, _frame: &Frame) -> anyhow::Result<()> {
            anyhow::bail!("display lost")
        }
    }

    #[test]
    fn test_quit_stops_immediately() {
        let config = GameConfig::default();
        let mut input = ScriptedInput::new([TickInput::default(); 3]).then_quit();
        let mut clock = ManualClock::default();
        let mut sink = RecordingSink::default();

        let summary = run_match_loop(&config, &mut input, &mut clock, &mut sink).unwrap();
        assert!(summary.quit);
        assert_eq!(summary.frames, 3);
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(clock.now_ticks(), 3);
    }

    #[test]
    fn test_frame_limit() {
        let config = GameConfig {
            max_frames: Some(10),
            ..Default::default()
        };
        let mut input = ScriptedInput::new([]);
        let summary =
            run_match_loop(&config, &mut input, &mut ManualClock::default(), &mut NullSink)
                .unwrap();
        assert!(!summary.quit);
        assert_eq!(summary.frames, 10);
        assert_eq!(summary.final_state.tick, 10);
    }

    #[test]
    fn test_sink_error_propagates() {
        let config = GameConfig::default();
        let mut input = ScriptedInput::new([]);
        let err = run_match_loop(
            &config,
            &mut input,
            &mut ManualClock::default(),
            &mut FailingSink,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("display lost"));
    }
}
