use serde::{Serialize, Serializer};

/// Provider short status codes, kept verbatim so unknown codes survive a
/// round trip through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    FirstHalf,
    SecondHalf,
    HalfTime,
    ExtraTime,
    Live,
    Scheduled,
    Finished,
    Other(String),
}

impl MatchStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1H" => MatchStatus::FirstHalf,
            "2H" => MatchStatus::SecondHalf,
            "HT" => MatchStatus::HalfTime,
            "ET" => MatchStatus::ExtraTime,
            "LIVE" => MatchStatus::Live,
            "NS" => MatchStatus::Scheduled,
            "FT" => MatchStatus::Finished,
            other => MatchStatus::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            MatchStatus::FirstHalf => "1H",
            MatchStatus::SecondHalf => "2H",
            MatchStatus::HalfTime => "HT",
            MatchStatus::ExtraTime => "ET",
            MatchStatus::Live => "LIVE",
            MatchStatus::Scheduled => "NS",
            MatchStatus::Finished => "FT",
            MatchStatus::Other(code) => code,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(
            self,
            MatchStatus::FirstHalf
                | MatchStatus::SecondHalf
                | MatchStatus::HalfTime
                | MatchStatus::ExtraTime
                | MatchStatus::Live
        )
    }
}

impl Serialize for MatchStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Canonical per-match counters extracted from the raw statistics payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    pub shots_on_goal: u32,
    pub shots_inside_box: u32,
    pub corners: u32,
    pub red_cards: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub match_id: u64,
    /// Display string: country flag + league name.
    pub league: String,
    /// ASCII-letters-and-spaces-only name, used for the weight lookup.
    pub league_name: String,
    pub home_team: String,
    pub away_team: String,
    pub status: MatchStatus,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    /// Elapsed minute, clamped to 0..=90.
    pub minute: u8,
    pub kickoff_local: String,
    pub statistics: MatchStats,
}

/// One prediction per in-play match, regenerated on every refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub match_id: u64,
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub minute: u8,
    pub status: MatchStatus,
    pub league: String,

    pub intensity: u8,
    pub xg_proxy: f64,
    pub draw_pressure: u8,
    pub league_factor: i32,

    pub over_05: f64,
    pub over_15: f64,
    pub over_25: f64,
    pub over_35: f64,
    pub over_45: f64,
    pub over_55: f64,

    pub btts: f64,
    pub next_goal: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    pub total_matches: usize,
    pub live_matches: usize,
    pub predictions: usize,
    pub high_confidence: usize,
}

/// Messages the provider thread publishes to the front-end.
#[derive(Debug, Clone)]
pub enum Delta {
    Snapshot {
        matches: Vec<MatchRecord>,
        predictions: Vec<Prediction>,
        summary: FeedSummary,
    },
    Log(String),
}
