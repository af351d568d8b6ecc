//! # holibotd — holibot daemon
//!
//! Composition root that wires the adapters together and drives the
//! daily scheduling loop.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize tracing
//! - Poll the daily schedule and, once per day inside the window, run
//!   one full decision cycle (fresh hub session each time)
//! - Send the optional monitoring heartbeat
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod heartbeat;
mod schedule;

use std::time::Duration;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use holibot_adapter_holiday_http::HolidayApi;
use holibot_adapter_hub_ws::HubSession;
use holibot_app::oracle::HolidayOracle;
use holibot_app::runner::DailyDecisionRunner;

use crate::config::Config;
use crate::heartbeat::Heartbeat;
use crate::schedule::DailySchedule;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let (window_start, window_end) = config.schedule.window()?;
    let mut schedule = DailySchedule::new(window_start, window_end);
    let heartbeat = config.heartbeat.url.clone().map(Heartbeat::new);

    tracing::info!(
        window_start = %config.schedule.window_start,
        window_end = %config.schedule.window_end,
        "holibotd started"
    );

    let mut ticker = tokio::time::interval(Duration::from_secs(config.schedule.poll_secs));
    loop {
        ticker.tick().await;

        if schedule.try_claim(Local::now()) {
            // A failed run must never take down the loop; the next
            // window gets a fresh attempt.
            if let Err(err) = run_once(&config).await {
                tracing::error!(%err, "daily run failed");
            }
        }

        if let Some(heartbeat) = &heartbeat {
            heartbeat.send().await;
        }
    }
}

/// One full decision cycle: fresh session, one runner pass, full
/// teardown.
async fn run_once(config: &Config) -> anyhow::Result<()> {
    tracing::info!("running daily decision cycle");

    let session = HubSession::new(config.hub.clone());
    let io = session.start();

    let oracle = HolidayOracle::new(
        HolidayApi::new(config.holiday.base_url.clone()),
        config.holiday.region.clone(),
        config.holiday.country.clone(),
    );
    let runner = DailyDecisionRunner::new(
        oracle,
        config.programs.normal_matcher(),
        config.programs.vacation_matcher(),
    );

    let decision = runner.run(&session, holibot_domain::time::today()).await?;
    tracing::info!(kind = ?decision.kind, "daily decision cycle finished");

    io.await?;
    Ok(())
}
