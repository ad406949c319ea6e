use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::http_cache::{fetch_json, fetch_json_cached};
use crate::http_client::http_client;
use crate::state::MatchStats;
use crate::stats::extract_statistics;

const FIXTURES_URL: &str = "https://v3.football.api-sports.io/fixtures";
const API_HOST: &str = "v3.football.api-sports.io";

/// One raw fixture, normalized from the provider payload. Statistics are
/// already reduced to the canonical counters at this boundary.
#[derive(Debug, Clone)]
pub struct FixtureRow {
    pub id: u64,
    pub league_name: String,
    pub league_country: String,
    pub home: String,
    pub away: String,
    pub status_code: Option<String>,
    pub minute: u16,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub kickoff_local: String,
    pub statistics: MatchStats,
}

/// Live batch. Never served from cache; the whole point is the current minute.
pub fn fetch_live_fixtures(api_key: &str) -> Result<Vec<FixtureRow>> {
    let client = http_client()?;
    let url = format!("{FIXTURES_URL}?live=all");
    let body = fetch_json(client, &url, &api_headers(api_key)).context("live fixtures request")?;
    parse_fixtures_json(&body)
}

/// Date-scoped batch; conditional-request cached since the schedule part of
/// the response moves slowly.
pub fn fetch_fixtures_for_date(api_key: &str, date: NaiveDate) -> Result<Vec<FixtureRow>> {
    let client = http_client()?;
    let url = format!("{FIXTURES_URL}?date={}", date.format("%Y-%m-%d"));
    let body =
        fetch_json_cached(client, &url, &api_headers(api_key)).context("date fixtures request")?;
    parse_fixtures_json(&body)
}

fn api_headers(api_key: &str) -> [(&'static str, String); 2] {
    [
        ("x-rapidapi-key", api_key.to_string()),
        ("x-rapidapi-host", API_HOST.to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    response: Vec<ApiFixture>,
}

#[derive(Debug, Deserialize)]
struct ApiFixture {
    fixture: ApiFixtureMeta,
    league: ApiLeague,
    teams: ApiTeams,
    #[serde(default)]
    goals: Option<ApiGoals>,
    // The statistics payload shape varies between feed variants; it is probed
    // loosely rather than deserialized into a fixed struct.
    #[serde(default)]
    statistics: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ApiFixtureMeta {
    id: u64,
    #[serde(default)]
    date: String,
    #[serde(default)]
    status: ApiStatus,
}

#[derive(Debug, Deserialize, Default)]
struct ApiStatus {
    #[serde(default)]
    short: Option<String>,
    #[serde(default)]
    elapsed: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct ApiLeague {
    #[serde(default)]
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiTeams {
    home: ApiTeam,
    away: ApiTeam,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiGoals {
    #[serde(default)]
    home: Option<u8>,
    #[serde(default)]
    away: Option<u8>,
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<FixtureRow>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let data: ApiResponse = serde_json::from_str(trimmed).context("invalid fixtures json")?;

    let rows = data
        .response
        .into_iter()
        .map(|entry| {
            let statistics = extract_statistics(entry.statistics.as_ref());
            let (home_score, away_score) = match entry.goals {
                Some(goals) => (goals.home, goals.away),
                None => (None, None),
            };
            FixtureRow {
                id: entry.fixture.id,
                league_name: entry.league.name,
                league_country: entry.league.country,
                home: entry.teams.home.name,
                away: entry.teams.away.name,
                status_code: entry.fixture.status.short,
                minute: entry.fixture.status.elapsed.unwrap_or(0),
                home_score,
                away_score,
                kickoff_local: format_kickoff_local(&entry.fixture.date),
                statistics,
            }
        })
        .collect();

    Ok(rows)
}

/// Renders the provider's UTC kickoff timestamp as `YYYY-MM-DD HH:MM` in a
/// fixed local offset (default UTC+5, override via KICKOFF_TZ_OFFSET_HOURS).
pub fn format_kickoff_local(utc: &str) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(utc.trim()) else {
        return String::new();
    };
    let offset = FixedOffset::east_opt(kickoff_offset_hours() * 3600).unwrap_or_else(|| Utc.fix());
    parsed.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string()
}

fn kickoff_offset_hours() -> i32 {
    std::env::var("KICKOFF_TZ_OFFSET_HOURS")
        .ok()
        .and_then(|val| val.parse::<i32>().ok())
        .unwrap_or(5)
        .clamp(-12, 14)
}
