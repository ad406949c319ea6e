use std::sync::mpsc;

use pitchpulse::feed;
use pitchpulse::state::{Delta, FeedSummary, Prediction};

fn main() {
    dotenvy::dotenv().ok();

    let (tx, rx) = mpsc::channel();
    feed::spawn_provider(tx);

    while let Ok(delta) = rx.recv() {
        match delta {
            Delta::Log(line) => println!("{line}"),
            Delta::Snapshot {
                predictions,
                summary,
                ..
            } => print_snapshot(&predictions, summary),
        }
    }
}

fn print_snapshot(predictions: &[Prediction], summary: FeedSummary) {
    println!(
        "[INFO] Matches: {} | Live: {} | Predictions: {} | High confidence: {}",
        summary.total_matches, summary.live_matches, summary.predictions, summary.high_confidence
    );

    let mut ranked: Vec<&Prediction> = predictions.iter().collect();
    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for p in ranked.iter().take(10) {
        println!(
            "  {} {} {} vs {} {}' | O2.5 {:.0}% | BTTS {:.0}% | next goal {:.0}% | conf {:.0}",
            p.league,
            p.score,
            p.home_team,
            p.away_team,
            p.minute,
            p.over_25,
            p.btts,
            p.next_goal,
            p.confidence
        );
    }
}
