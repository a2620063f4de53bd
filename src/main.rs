//! Laser Duel entry point
//!
//! Runs a headless demo match: the seeded autopilot flies the player ship and
//! frames go to the log. A real window/keyboard backend plugs in through the
//! `platform` and `renderer` traits.

use std::process::ExitCode;

use laser_duel::GameConfig;
use laser_duel::platform::{Autopilot, FixedRateClock};
use laser_duel::renderer::LogSink;
use laser_duel::runner::run_match_loop;

fn run() -> anyhow::Result<()> {
    let config = GameConfig::from_env()?;
    log::info!(
        "Laser Duel starting (AI policy: {}, seed: {})",
        config.ai.policy.as_str(),
        config.seed
    );

    let mut input = Autopilot::new(config.seed);
    let mut clock = FixedRateClock::new(config.tick_rate);
    let mut sink = LogSink::default();

    let summary = run_match_loop(&config, &mut input, &mut clock, &mut sink)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
