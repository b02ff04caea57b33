use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Title-case a name the way the results scraper writes team names: every
/// letter following a non-letter is upper-cased, every other letter is
/// lower-cased ("st. john's" -> "St. John'S").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Arithmetic mean, summing in slice order. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Parse a numeric CSV cell; blanks and non-finite values are rejected.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a score cell: a non-negative whole number, possibly written as "81.0".
pub fn parse_score(raw: Option<&str>) -> Option<u32> {
    let value = parse_number(raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// Parse the calendar dates the scraper and spreadsheets produce.
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    DateTime::parse_from_rfc3339(trimmed).ok().map(|d| d.date_naive())
}

/// Format a bookmaker line, keeping one decimal for whole numbers ("220.0").
pub fn format_line(line: f64) -> String {
    if line.fract() == 0.0 {
        format!("{:.1}", line)
    } else {
        format!("{}", line)
    }
}

/// "basketball_ncaab" -> "NCAAB"
pub fn league_code(sport_key: &str) -> String {
    sport_key.replace("basketball_", "").to_uppercase()
}

/// Validate team name format
pub fn validate_team_name(name: &str) -> bool {
    !name.trim().is_empty() && name.len() <= 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ohio st buckeyes"), "Ohio St Buckeyes");
        assert_eq!(title_case("ST. JOHN'S RED STORM"), "St. John'S Red Storm");
        assert_eq!(title_case("philadelphia 76ers"), "Philadelphia 76Ers");
        assert_eq!(title_case("UConn Huskies"), "Uconn Huskies");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert!((mean(&[0.0, 1.0, 1.0]) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_number_and_score() {
        assert_eq!(parse_number(Some(" 145.5 ")), Some(145.5));
        assert_eq!(parse_number(Some("N/A")), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(Some("NaN")), None);
        assert_eq!(parse_number(None), None);

        assert_eq!(parse_score(Some("81")), Some(81));
        assert_eq!(parse_score(Some("81.0")), Some(81));
        assert_eq!(parse_score(Some("81.5")), None);
        assert_eq!(parse_score(Some("-3")), None);
    }

    #[test]
    fn test_parse_game_date() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(parse_game_date("2023-03-01"), Some(expected));
        assert_eq!(parse_game_date("03/01/2023"), Some(expected));
        assert_eq!(parse_game_date("2023-03-01 00:00:00"), Some(expected));
        assert_eq!(parse_game_date("2023-03-01T19:30:00Z"), Some(expected));
        assert_eq!(parse_game_date("yesterday"), None);
    }

    #[test]
    fn test_format_line_and_league_code() {
        assert_eq!(format_line(145.5), "145.5");
        assert_eq!(format_line(220.0), "220.0");
        assert_eq!(league_code("basketball_ncaab"), "NCAAB");
        assert_eq!(league_code("basketball_wnba"), "WNBA");
    }

    #[test]
    fn test_validate_team_name() {
        assert!(validate_team_name("Duke"));
        assert!(!validate_team_name("   "));
    }
}
