mod config;
mod demo;
mod summary;

use color_eyre::eyre::{Result, WrapErr};
use config::SimulationConfig;
use demo::{AutoScout, WorldGenerator};
use env_logger::Env;
use log::{debug, info};
use scout_core::pipeline::{WeeklyProcessor, SEASON_WEEKS};
use scout_core::SimRng;
use std::time::Instant;
use summary::CareerSummary;

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = SimulationConfig::load().wrap_err("failed to load simulation config")?;

    info!(
        "seed {}, {} seasons, {} clubs, {} board",
        config.seed, config.seasons, config.clubs, config.board
    );

    let mut rng = SimRng::seeded(config.seed);
    let mut state = WorldGenerator::new(&config).generate(&mut rng)?;
    let autopilot = AutoScout::new(config.reports_per_week);

    info!("world generated: {} clubs, {} players", state.clubs.len(), state.players.len());

    let started = Instant::now();
    let total_weeks = config.seasons * SEASON_WEEKS;
    let mut notifications = 0;

    for _ in 0..total_weeks {
        let actions = autopilot.plan_week(&state, &mut rng);
        let outcome = WeeklyProcessor::process_week(&state, &actions, &mut rng);

        for notification in &outcome.notifications {
            debug!(
                "[s{} w{}] {}: {}",
                notification.season, notification.week, notification.title, notification.body
            );
        }

        notifications += outcome.notifications.len();
        state = outcome.state;
    }

    info!("simulated {} weeks in {} ms", total_weeks, started.elapsed().as_millis());

    let summary = CareerSummary::from_state(&state, config.seed, notifications);
    let json = serde_json::to_string_pretty(&summary).wrap_err("failed to serialize career summary")?;
    println!("{json}");

    Ok(())
}
