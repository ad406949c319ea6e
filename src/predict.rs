use crate::league::league_weight;
use crate::state::{MatchRecord, Prediction};

// All outcome probabilities live on a percent-like scale and are clamped to
// this band: the model never claims near-certainty or near-impossibility.
const PROB_FLOOR: f64 = 5.0;
const PROB_CEIL: f64 = 92.0;

const CONF_FLOOR: f64 = 55.0;
const CONF_CEIL: f64 = 85.0;

// Intensity deduction when a side is down to ten men; a sent-off side plays
// more defensively.
const RED_CARD_PENALTY: f64 = 10.0;

// Late-game urgency bonus in a tied match (minute > 80).
const DRAW_PRESSURE_BONUS: f64 = 6.0;

/// Scores one registered match. Returns `None` unless the match is in play;
/// the formulas are undefined for pre/post-match states.
///
/// The coefficients and breakpoints here are hand-tuned heuristics, not a
/// calibrated model. They are a frozen contract: outputs are meant to be
/// monotonic, bounded, and explainable, not statistically optimal.
pub fn predict(m: &MatchRecord) -> Option<Prediction> {
    if !m.status.is_live() {
        return None;
    }

    let home_score = m.home_score.unwrap_or(0) as u32;
    let away_score = m.away_score.unwrap_or(0) as u32;
    let total_goals = home_score + away_score;
    let minute = (m.minute.min(90)) as f64;

    let shots_on_goal = m.statistics.shots_on_goal as f64;
    let shots_inside_box = m.statistics.shots_inside_box as f64;
    let corners = m.statistics.corners as f64;
    let red_cards = m.statistics.red_cards;

    // Square root compresses high raw event counts so intensity saturates
    // instead of growing linearly; the first twenty minutes are dampened
    // because a short match cannot yet show full tempo.
    let intensity_raw = shots_on_goal * 6.0 + corners * 2.5 + shots_inside_box * 4.0;
    let intensity = if minute < 20.0 {
        (intensity_raw.sqrt() * 4.0).min(40.0)
    } else {
        let penalty = if red_cards > 0 { RED_CARD_PENALTY } else { 0.0 };
        (intensity_raw.sqrt() * 6.0 - penalty).min(100.0)
    };

    let xg_proxy = (shots_on_goal * 0.12 + shots_inside_box * 0.18).max(0.0);
    let league_factor = league_weight(&m.league_name);
    let draw_pressure = if minute > 80.0 && home_score == away_score {
        DRAW_PRESSURE_BONUS
    } else {
        0.0
    };

    // Goals already on the board short-circuit toward the ceiling; otherwise
    // the estimate rises with intensity and decays with the clock.
    let mut over_05 = if total_goals >= 1 {
        (90.0 - (minute - 60.0).max(0.0) * 1.5).min(PROB_CEIL)
    } else {
        (85.0 - minute * 0.3 + intensity * 0.1).min(PROB_CEIL)
    };
    let mut over_15 = if total_goals >= 2 {
        (88.0 - (minute - 60.0).max(0.0) * 1.8).min(PROB_CEIL)
    } else {
        (75.0 - minute * 0.4 + intensity * 0.08).min(PROB_CEIL)
    };

    // A scoreless match deep into the second half is unlikely to open up.
    if minute > 80.0 && total_goals == 0 {
        over_05 = over_05.min(65.0);
        over_15 = over_15.min(45.0);
    }

    let over_05 = clamp_prob(over_05);
    let over_15 = clamp_prob(over_15);

    let over_25 = over_25_probability(
        total_goals,
        minute,
        intensity,
        red_cards,
        league_factor,
        draw_pressure,
    );

    // High thresholds are rarely displaced by stoppage-time swings, so a
    // plain linear shape is enough.
    let over_35 = clamp_prob(45.0 + total_goals as f64 * 3.0 - minute * 0.5 + xg_proxy * 20.0);
    let over_45 = clamp_prob(30.0 + total_goals as f64 * 2.5 - minute * 0.6);
    let over_55 = clamp_prob(20.0 + total_goals as f64 * 2.0 - minute * 0.7);

    let btts = if home_score > 0 && away_score > 0 {
        85.0
    } else if minute > 75.0 && total_goals == 1 {
        45.0
    } else if total_goals >= 1 {
        (58.0 + intensity * 0.15).min(78.0)
    } else {
        35.0
    };

    let next_goal = if minute > 85.0 && home_score == away_score {
        (60.0 + intensity * 0.25).min(82.0)
    } else if minute > 80.0 {
        (55.0 + intensity * 0.15).min(75.0)
    } else if minute < 75.0 {
        (70.0 + (90.0 - minute) * 0.3 + intensity * 0.1).min(PROB_CEIL)
    } else {
        50.0
    };

    let confidence = confidence_score(total_goals, minute, intensity, league_factor, draw_pressure);

    Some(Prediction {
        match_id: m.match_id,
        home_team: m.home_team.clone(),
        away_team: m.away_team.clone(),
        score: format!("{home_score}-{away_score}"),
        minute: m.minute.min(90),
        status: m.status.clone(),
        league: m.league.clone(),
        intensity: intensity.round().clamp(0.0, 100.0) as u8,
        xg_proxy: (xg_proxy * 100.0).round() / 100.0,
        draw_pressure: draw_pressure as u8,
        league_factor,
        over_05,
        over_15,
        over_25,
        over_35,
        over_45,
        over_55,
        btts,
        next_goal,
        confidence,
    })
}

/// The 2.5-goal threshold is the only one using the full feature set:
/// league weight, draw pressure, red cards, and minute-banded caps.
pub fn over_25_probability(
    total_goals: u32,
    minute: f64,
    intensity: f64,
    red_cards: u32,
    league_factor: i32,
    draw_pressure: f64,
) -> f64 {
    let mut prob = 50.0 + intensity * 0.15 + league_factor as f64 + draw_pressure;

    if total_goals >= 3 {
        return PROB_CEIL;
    }
    if total_goals == 2 {
        prob += 25.0;
    }
    if total_goals == 1 {
        prob += 10.0;
    }

    // Early-scoreless dampening in increasingly strict bands.
    if minute < 30.0 && total_goals == 0 {
        prob -= 10.0;
    }
    if minute < 20.0 && total_goals == 0 {
        prob = prob.min(40.0);
    }
    if minute < 25.0 && total_goals == 0 {
        prob = prob.min(45.0);
    }
    if minute < 30.0 && total_goals < 2 {
        prob = prob.min(55.0);
    }

    // Late-game boost, counterbalanced by late single-goal and two-goal caps.
    if minute > 75.0 {
        prob += 20.0;
    }
    if minute > 80.0 && total_goals == 1 {
        prob -= 25.0;
    }
    if minute > 55.0 && total_goals == 0 {
        prob = prob.min(35.0);
    }
    if minute > 80.0 && total_goals == 2 {
        prob = prob.min(70.0);
    }
    if red_cards > 0 && total_goals < 3 {
        prob += 5.0;
    }

    clamp_prob(prob)
}

/// Bounded confidence in the current prediction set; never near-certainty,
/// never near-guesswork.
pub fn confidence_score(
    total_goals: u32,
    minute: f64,
    intensity: f64,
    league_factor: i32,
    draw_pressure: f64,
) -> f64 {
    let mut conf = 60.0 + (league_factor as f64 * 0.5).abs() + draw_pressure * 0.5;

    if total_goals >= 2 {
        conf += 15.0;
    }
    conf += minute * 0.25;

    if minute < 25.0 {
        conf -= 8.0;
    }
    if minute > 75.0 {
        conf += 10.0;
    }
    if minute < 20.0 {
        conf -= 15.0;
    }
    if minute < 30.0 && total_goals == 0 {
        conf = conf.min(68.0);
    }
    if minute < 20.0 {
        conf = conf.min(65.0);
    }

    conf += intensity * 0.1;
    conf.clamp(CONF_FLOOR, CONF_CEIL)
}

fn clamp_prob(v: f64) -> f64 {
    v.clamp(PROB_FLOOR, PROB_CEIL)
}
