/// Fixed per-league bias used by the scoring formulas. Exact-string lookup
/// only; abbreviations are registered as additional keys. Values rank the
/// five major leagues by historical average goals per match, so the
/// highest-scoring league carries the largest weight.
pub fn league_weight(league_name: &str) -> i32 {
    match league_name {
        "Premier League" | "EPL" | "PL" => 4,          // 2.9 goals/match
        "Bundesliga" | "BL1" => 6,                     // 3.1 goals/match
        "Serie A" | "SERIE_A" => 1,                    // 2.6 goals/match
        "Ligue 1" | "FL1" => 2,                        // 2.7 goals/match
        "La Liga" | "Primera Division" => 3,           // 2.8 goals/match
        _ => 0,
    }
}

pub fn country_flag(country: &str) -> &'static str {
    match country {
        "England" => "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}",
        "Spain" => "\u{1F1EA}\u{1F1F8}",
        "Italy" => "\u{1F1EE}\u{1F1F9}",
        "Germany" => "\u{1F1E9}\u{1F1EA}",
        "France" => "\u{1F1EB}\u{1F1F7}",
        _ => "\u{26BD}",
    }
}

/// Strips everything except ASCII letters and spaces from a league display
/// name, producing the key used for the weight lookup.
pub fn clean_league_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_leagues_and_aliases() {
        assert_eq!(league_weight("Premier League"), 4);
        assert_eq!(league_weight("EPL"), 4);
        assert_eq!(league_weight("Bundesliga"), 6);
        assert_eq!(league_weight("Serie A"), 1);
        assert_eq!(league_weight("Ligue 1"), 2);
        assert_eq!(league_weight("La Liga"), 3);
    }

    #[test]
    fn unknown_league_is_neutral() {
        assert_eq!(league_weight("Eredivisie"), 0);
        assert_eq!(league_weight(""), 0);
        // No fuzzy matching.
        assert_eq!(league_weight("premier league"), 0);
    }

    #[test]
    fn cleaning_keeps_letters_and_interior_spaces() {
        assert_eq!(clean_league_name("Serie A"), "Serie A");
        assert_eq!(clean_league_name("Ligue 1"), "Ligue");
        assert_eq!(clean_league_name(" La Liga (2026) "), "La Liga");
    }

    #[test]
    fn unknown_country_falls_back_to_ball() {
        assert_eq!(country_flag("Peru"), "\u{26BD}");
    }
}
