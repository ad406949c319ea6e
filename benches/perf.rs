use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use pitchpulse::predict::predict;
use pitchpulse::state::{MatchRecord, MatchStats, MatchStatus};
use pitchpulse::stats::extract_statistics;

const STATS_JSON: &str = r#"[
  {"team": {"name": "Home"}, "statistics": [
    {"type": "Shots on Target", "value": 6},
    {"type": "Shots insidebox", "value": 9},
    {"type": "Total Shots", "value": 14},
    {"type": "Corner Kicks", "value": 7},
    {"type": "Ball Possession", "value": "58%"},
    {"type": "Red Cards", "value": null}
  ]},
  {"team": {"name": "Away"}, "statistics": [
    {"type": "Shots on Target", "value": 3},
    {"type": "Shots insidebox", "value": 4},
    {"type": "Total Shots", "value": 8},
    {"type": "Corner Kicks", "value": 2},
    {"type": "Ball Possession", "value": "42%"},
    {"type": "Red Cards", "value": 1}
  ]}
]"#;

fn sample_match() -> MatchRecord {
    MatchRecord {
        match_id: 7,
        league: "\u{26BD} Premier League".to_string(),
        league_name: "Premier League".to_string(),
        home_team: "Arsenal".to_string(),
        away_team: "Chelsea".to_string(),
        status: MatchStatus::SecondHalf,
        home_score: Some(1),
        away_score: Some(1),
        minute: 72,
        kickoff_local: "2026-08-24 19:00".to_string(),
        statistics: MatchStats {
            shots_on_goal: 9,
            shots_inside_box: 13,
            corners: 9,
            red_cards: 1,
        },
    }
}

fn bench_extract_statistics(c: &mut Criterion) {
    let payload: serde_json::Value = serde_json::from_str(STATS_JSON).expect("valid bench json");
    c.bench_function("extract_statistics", |b| {
        b.iter(|| {
            let stats = extract_statistics(black_box(Some(&payload)));
            black_box(stats.shots_on_goal);
        })
    });
}

fn bench_predict(c: &mut Criterion) {
    let m = sample_match();
    c.bench_function("predict_in_play_match", |b| {
        b.iter(|| {
            let p = predict(black_box(&m)).expect("live match scores");
            black_box(p.over_25);
        })
    });
}

criterion_group!(benches, bench_extract_statistics, bench_predict);
criterion_main!(benches);
