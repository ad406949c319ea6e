use std::env;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};

use crate::fake_feed;
use crate::fixture_fetch::{fetch_fixtures_for_date, fetch_live_fixtures};
use crate::registry::Registry;
use crate::state::{Delta, MatchStatus};

/// Spawns the background provider: one refresh cycle immediately, then one
/// per poll interval. Cycles are strictly serialized on this thread; readers
/// only ever see the snapshots it publishes.
pub fn spawn_provider(tx: Sender<Delta>) {
    thread::spawn(move || {
        let api_key = opt_env("FOOTBALL_API_KEY");
        let interval = Duration::from_secs(
            env::var("REFRESH_POLL_SECS")
                .ok()
                .and_then(|val| val.parse::<u64>().ok())
                .unwrap_or(90)
                .max(30),
        );
        if api_key.is_none() {
            let _ = tx.send(Delta::Log(
                "[INFO] FOOTBALL_API_KEY not set, serving offline sample feed".to_string(),
            ));
        }

        let mut registry = Registry::new();
        loop {
            let started = Instant::now();
            run_refresh_cycle(&mut registry, api_key.as_deref(), &tx);
            if tx.send(snapshot(&registry)).is_err() {
                return; // front-end gone
            }
            thread::sleep(interval.saturating_sub(started.elapsed()));
        }
    });
}

/// One full refresh: clear, ingest the live batch, ingest today's batch,
/// rebuild predictions. Fetch errors are logged and the cycle continues with
/// whatever batches succeeded; the core never fails outright.
pub fn run_refresh_cycle(registry: &mut Registry, api_key: Option<&str>, tx: &Sender<Delta>) {
    registry.reset();

    match api_key {
        Some(key) => {
            match fetch_live_fixtures(key) {
                Ok(rows) => registry.ingest(rows, MatchStatus::Live),
                Err(err) => {
                    let _ = tx.send(Delta::Log(format!("[WARN] Live fetch error: {err}")));
                }
            }
            match fetch_fixtures_for_date(key, fixture_date()) {
                Ok(rows) => registry.ingest(rows, MatchStatus::Scheduled),
                Err(err) => {
                    let _ = tx.send(Delta::Log(format!("[WARN] Date fetch error: {err}")));
                }
            }
        }
        None => registry.ingest(fake_feed::sample_fixtures(), MatchStatus::Scheduled),
    }

    registry.rebuild_predictions();
    let summary = registry.summary();
    let _ = tx.send(Delta::Log(format!(
        "[INFO] Live: {} | Predictions: {}",
        summary.live_matches, summary.predictions
    )));
}

fn snapshot(registry: &Registry) -> Delta {
    Delta::Snapshot {
        matches: registry.matches().to_vec(),
        predictions: registry.predictions().to_vec(),
        summary: registry.summary(),
    }
}

fn fixture_date() -> NaiveDate {
    opt_env("FIXTURE_DATE")
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|val| {
        if val.trim().is_empty() {
            None
        } else {
            Some(val)
        }
    })
}
