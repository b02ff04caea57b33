//! Fetches upcoming games with bookmaker quotes from The Odds API and picks
//! the over/under line for each.
//!
//! ## Line selection
//! Bookmakers are tried in the configured priority order, never in the order
//! the feed lists them. The first priority bookmaker publishing a `totals`
//! market supplies the line (its first outcome's point). Bookmakers outside
//! the list are ignored, so an event without a ranked totals quote has no line.

use anyhow::{anyhow, Result};
use reqwest::Client;

use crate::models::OddsEvent;

/// League code -> Odds API sport key
pub const AVAILABLE_LEAGUES: [(&str, &str); 3] = [
    ("NCAAB", "basketball_ncaab"),
    ("NBA", "basketball_nba"),
    ("WNBA", "basketball_wnba"),
];

pub const DEFAULT_BOOKMAKER_PRIORITY: [&str; 5] =
    ["draftkings", "fanduel", "betmgm", "betonlineag", "bovada"];

const ODDS_API_BASE: &str = "https://api.the-odds-api.com/v4/sports";

/// The over/under line chosen for an event and who quoted it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLine {
    pub bookmaker: String,
    pub point: f64,
}

pub fn select_total_line(event: &OddsEvent, priority: &[String]) -> Option<SelectedLine> {
    for pref in priority {
        let Some(bk) = event.bookmakers.iter().find(|b| b.key == *pref) else {
            continue;
        };
        let point = bk
            .markets
            .iter()
            .filter(|m| m.key == "totals")
            .find_map(|m| m.outcomes.first().and_then(|o| o.point));
        if let Some(point) = point {
            return Some(SelectedLine {
                bookmaker: bk.key.clone(),
                point,
            });
        }
    }
    None
}

pub struct OddsClient {
    client: Client,
    api_key: String,
}

impl OddsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Upcoming events with h2h and totals markets for one sport key.
    pub async fn get_upcoming_games(&self, sport_key: &str) -> Result<Vec<OddsEvent>> {
        let url = format!(
            "{}/{}/odds/?apiKey={}&regions=us&markets=h2h,totals&oddsFormat=decimal",
            ODDS_API_BASE, sport_key, self.api_key
        );

        tracing::info!("Fetching upcoming games from The Odds API for sport: {}", sport_key);

        let resp = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(30))
            .send()
            .await?;

        let status = resp.status();
        if status == 401 {
            return Err(anyhow!("Odds API: invalid API key (401)"));
        }
        if status == 422 {
            return Err(anyhow!("Odds API: sport {} not in subscription (422)", sport_key));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Odds API HTTP {}: {}", status, body));
        }

        if let Some(remaining) = resp.headers().get("x-requests-remaining") {
            tracing::debug!("Odds API requests remaining: {:?}", remaining);
        }

        let events: Vec<OddsEvent> = resp.json().await?;
        if events.is_empty() {
            tracing::warn!("No upcoming games found for {}", sport_key);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bookmaker, Market, Outcome};

    fn totals(point: f64) -> Market {
        Market {
            key: "totals".to_string(),
            outcomes: vec![
                Outcome { name: "Over".to_string(), price: 1.91, point: Some(point) },
                Outcome { name: "Under".to_string(), price: 1.91, point: Some(point) },
            ],
        }
    }

    fn h2h() -> Market {
        Market {
            key: "h2h".to_string(),
            outcomes: vec![Outcome { name: "Duke".to_string(), price: 1.5, point: None }],
        }
    }

    fn book(key: &str, markets: Vec<Market>) -> Bookmaker {
        Bookmaker { key: key.to_string(), title: key.to_string(), markets }
    }

    fn event(bookmakers: Vec<Bookmaker>) -> OddsEvent {
        OddsEvent {
            id: "evt".to_string(),
            commence_time: None,
            home_team: "Duke Blue Devils".to_string(),
            away_team: "Kansas Jayhawks".to_string(),
            bookmakers,
        }
    }

    fn priority(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_priority_order_not_input_order() {
        let ev = event(vec![
            book("fanduel", vec![h2h()]),
            book("draftkings", vec![h2h(), totals(145.5)]),
        ]);
        let line = select_total_line(&ev, &priority(&["draftkings", "fanduel"])).unwrap();
        assert_eq!(line.point, 145.5);
        assert_eq!(line.bookmaker, "draftkings");
    }

    #[test]
    fn test_higher_priority_wins_when_both_quote() {
        let ev = event(vec![
            book("fanduel", vec![totals(150.0)]),
            book("draftkings", vec![totals(148.5)]),
        ]);
        let line = select_total_line(&ev, &priority(&["draftkings", "fanduel"])).unwrap();
        assert_eq!(line.point, 148.5);
    }

    #[test]
    fn test_falls_through_to_next_priority() {
        let ev = event(vec![
            book("draftkings", vec![h2h()]),
            book("fanduel", vec![totals(139.0)]),
        ]);
        let line = select_total_line(&ev, &priority(&["draftkings", "fanduel"])).unwrap();
        assert_eq!(line.bookmaker, "fanduel");
        assert_eq!(line.point, 139.0);
    }

    #[test]
    fn test_unranked_bookmaker_is_never_used() {
        let ev = event(vec![book("pinnacle", vec![totals(141.5)])]);
        let default_priority: Vec<String> =
            DEFAULT_BOOKMAKER_PRIORITY.iter().map(|k| k.to_string()).collect();
        assert!(select_total_line(&ev, &default_priority).is_none());
    }

    #[test]
    fn test_empty_totals_market_skipped() {
        let empty = Market { key: "totals".to_string(), outcomes: vec![] };
        let ev = event(vec![
            book("draftkings", vec![empty]),
            book("fanduel", vec![totals(150.5)]),
        ]);
        let line = select_total_line(&ev, &priority(&["draftkings", "fanduel"])).unwrap();
        assert_eq!(line.bookmaker, "fanduel");
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"[{
            "id": "abc",
            "sport_key": "basketball_nba",
            "commence_time": "2024-03-01T00:10:00Z",
            "home_team": "Boston Celtics",
            "away_team": "Miami Heat",
            "bookmakers": [{
                "key": "draftkings",
                "title": "DraftKings",
                "last_update": "2024-02-29T20:00:00Z",
                "markets": [
                    {"key": "h2h", "outcomes": [{"name": "Boston Celtics", "price": 1.3}]},
                    {"key": "totals", "outcomes": [
                        {"name": "Over", "price": 1.91, "point": 218.0},
                        {"name": "Under", "price": 1.91, "point": 218.0}
                    ]}
                ]
            }]
        }]"#;
        let events: Vec<OddsEvent> = serde_json::from_str(json).unwrap();
        let line = select_total_line(&events[0], &priority(&DEFAULT_BOOKMAKER_PRIORITY)).unwrap();
        assert_eq!(line.point, 218.0);
    }
}
