use serde_json::Value;

use crate::state::MatchStats;

/// Normalizes the raw per-match statistics payload into the four canonical
/// counters. Absent, null, or mis-shaped payloads yield the zero stats rather
/// than an error; the feed regularly omits statistics before kickoff.
///
/// Two payload shapes are tolerated: a bare two-bucket array of `{type, value}`
/// entries, and an array of `{statistics: [...]}` wrapper objects. Keyword
/// classification is substring-based and deliberately non-exclusive, so one
/// entry may feed several counters.
pub fn extract_statistics(payload: Option<&Value>) -> MatchStats {
    let mut shots_on_goal = 0u32;
    let mut shots_inside_box = 0u32;
    let mut corners = 0u32;
    let mut red_cards = 0u32;

    for entry in leaf_entries(payload) {
        let kind = entry
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_lowercase();
        let value = stat_value(entry.get("value"));

        if kind.contains("shots on target") || kind.contains("shot on") {
            shots_on_goal += value;
        }
        if kind.contains("total shots")
            || kind.contains("shot inside")
            || kind.contains("shots inside")
        {
            shots_inside_box += value;
        }
        if kind.contains("corner") {
            corners += value;
        }
        if kind.contains("red card") || kind.contains("redcard") || kind.contains("red") {
            red_cards += value;
        }
    }

    // No direct inside-box metric in the payload: estimate it from shots on
    // goal (conservative 1.2x). Applied after summation, never per entry.
    if shots_inside_box == 0 {
        shots_inside_box = (shots_on_goal as f64 * 1.2).round() as u32;
    }

    MatchStats {
        shots_on_goal,
        shots_inside_box,
        corners,
        red_cards,
    }
}

/// Flattens both known nesting shapes into one iterable of leaf entries.
fn leaf_entries(payload: Option<&Value>) -> Vec<&Value> {
    let mut out = Vec::new();
    let Some(buckets) = payload.and_then(Value::as_array) else {
        return out;
    };
    for bucket in buckets {
        match bucket {
            Value::Array(entries) => out.extend(entries.iter()),
            Value::Object(_) => {
                if let Some(entries) = bucket.get("statistics").and_then(Value::as_array) {
                    out.extend(entries.iter());
                }
            }
            _ => {}
        }
    }
    out
}

/// Coerces a raw stat value to a non-negative integer. Missing or
/// unparseable values count as 0; negatives clamp to 0, oversized values
/// saturate.
fn stat_value(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f.trunc() as i64),
        Some(Value::String(s)) => parse_leading_int(s),
        _ => None,
    };
    parsed.unwrap_or(0).clamp(0, u32::MAX as i64) as u32
}

// Leading-integer parse in the spirit of parseInt: "55%" -> 55, "-3" -> -3.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let mut digits = String::new();
    for (i, ch) in trimmed.chars().enumerate() {
        if i == 0 && (ch == '-' || ch == '+') {
            digits.push(ch);
        } else if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            break;
        }
    }
    digits.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_payload_is_all_zero() {
        let stats = extract_statistics(None);
        assert_eq!(stats, MatchStats::default());

        let null = json!(null);
        let stats = extract_statistics(Some(&null));
        // Fallback must not fire when shots_on_goal is 0.
        assert_eq!(stats.shots_inside_box, 0);
        assert_eq!(stats, MatchStats::default());
    }

    #[test]
    fn two_bucket_array_shape() {
        let payload = json!([
            [
                {"type": "Shots on Target", "value": 4},
                {"type": "Corner Kicks", "value": 3},
                {"type": "Shots insidebox", "value": 6}
            ],
            [
                {"type": "Shots on Target", "value": 2},
                {"type": "Red Cards", "value": 1}
            ]
        ]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.shots_on_goal, 6);
        assert_eq!(stats.shots_inside_box, 6);
        assert_eq!(stats.corners, 3);
        assert_eq!(stats.red_cards, 1);
    }

    #[test]
    fn wrapper_object_shape() {
        let payload = json!([
            {"team": {"name": "Home"}, "statistics": [
                {"type": "Shots on Target", "value": 5},
                {"type": "Corner Kicks", "value": "7"}
            ]},
            {"team": {"name": "Away"}, "statistics": [
                {"type": "Shots on Target", "value": null}
            ]}
        ]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.shots_on_goal, 5);
        assert_eq!(stats.corners, 7);
    }

    #[test]
    fn keyword_set_is_exact_not_fuzzy() {
        // "Shots on Goal" is not in the frozen keyword set ("shots on
        // target" / "shot on"); the interior s breaks the substring. Such
        // entries must count nothing, and the inside-box fallback stays off
        // a zero shots-on-goal total.
        let payload = json!([[{"type": "Shots on Goal", "value": 5}]]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.shots_on_goal, 0);
        assert_eq!(stats.shots_inside_box, 0);
    }

    #[test]
    fn one_entry_can_feed_multiple_counters() {
        let payload = json!([[{"type": "Total shots on target", "value": 7}]]);
        let stats = extract_statistics(Some(&payload));
        // "shots on target" and "total shots" both match.
        assert_eq!(stats.shots_on_goal, 7);
        assert_eq!(stats.shots_inside_box, 7);
    }

    #[test]
    fn inside_box_fallback_from_shots_on_goal() {
        let payload = json!([[{"type": "Shots on Target", "value": 5}]]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.shots_on_goal, 5);
        assert_eq!(stats.shots_inside_box, 6); // round(5 * 1.2)
    }

    #[test]
    fn values_coerce_to_non_negative_integers() {
        let payload = json!([[
            {"type": "Corner Kicks", "value": -2},
            {"type": "Shots on Target", "value": "55%"},
            {"type": "Red Cards", "value": "n/a"}
        ]]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.corners, 0);
        assert_eq!(stats.shots_on_goal, 55);
        assert_eq!(stats.red_cards, 0);
    }

    #[test]
    fn oversized_values_saturate() {
        let payload = json!([[{"type": "Corner Kicks", "value": 10_000_000_000i64}]]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.corners, u32::MAX);
    }

    #[test]
    fn mis_shaped_buckets_are_skipped() {
        let payload = json!([42, "noise", {"statistics": "not-an-array"}, [
            {"type": "Corner Kicks", "value": 2}
        ]]);
        let stats = extract_statistics(Some(&payload));
        assert_eq!(stats.corners, 2);
    }
}
