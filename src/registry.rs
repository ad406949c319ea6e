use std::collections::HashSet;

use crate::fixture_fetch::FixtureRow;
use crate::league::{clean_league_name, country_flag};
use crate::predict;
use crate::state::{FeedSummary, MatchRecord, MatchStatus, Prediction};

/// Ordered, deduplicated collection of match records plus the prediction set
/// derived from them. Owned by the refresh cycle: cleared at the start of
/// each cycle, repopulated from the raw batches, then read by the serving
/// layer until the next cycle completes.
#[derive(Debug, Default)]
pub struct Registry {
    matches: Vec<MatchRecord>,
    seen: HashSet<u64>,
    predictions: Vec<Prediction>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all match and prediction state.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.seen.clear();
        self.predictions.clear();
    }

    /// Maps a raw fixture batch into match records, appending each only if
    /// its id has not been seen this cycle. First writer wins: the live
    /// batch is ingested before the date-scoped batches, so a live fixture's
    /// richer status is never clobbered by a same-day duplicate.
    pub fn ingest(&mut self, rows: Vec<FixtureRow>, default_status: MatchStatus) {
        for row in rows {
            if !self.seen.insert(row.id) {
                continue;
            }
            let status = row
                .status_code
                .as_deref()
                .map(MatchStatus::from_code)
                .unwrap_or_else(|| default_status.clone());

            self.matches.push(MatchRecord {
                match_id: row.id,
                league: format!("{} {}", country_flag(&row.league_country), row.league_name),
                league_name: clean_league_name(&row.league_name),
                home_team: row.home,
                away_team: row.away,
                status,
                home_score: row.home_score,
                away_score: row.away_score,
                minute: row.minute.min(90) as u8,
                kickoff_local: row.kickoff_local,
                statistics: row.statistics,
            });
        }
    }

    /// Regenerates the prediction set from the current matches, scoring only
    /// the in-play ones.
    pub fn rebuild_predictions(&mut self) {
        self.predictions = self.matches.iter().filter_map(predict::predict).collect();
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn summary(&self) -> FeedSummary {
        FeedSummary {
            total_matches: self.matches.len(),
            live_matches: self.matches.iter().filter(|m| m.status.is_live()).count(),
            predictions: self.predictions.len(),
            high_confidence: self
                .predictions
                .iter()
                .filter(|p| p.confidence >= 80.0)
                .count(),
        }
    }
}
