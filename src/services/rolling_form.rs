//! Rolling team form over the most recent games.
//!
//! Two paths share one averaging routine:
//! - batch: a chronological walk with per-team append-only buffers, where a
//!   window shorter than W is undefined;
//! - live: the newest games found in the ledger for a lookup key, where any
//!   number of games (including zero) is accepted.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{GameRecord, TeamFormWindow};
use crate::services::Ledger;
use crate::utils::mean;

pub const DEFAULT_WINDOW: usize = 10;

/// Which side a team takes in the matchup being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

/// One game seen from one team's side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOutcome {
    pub margin: f64,
    pub points_for: f64,
    pub points_against: f64,
    pub ou_hit: bool,
}

impl GameOutcome {
    pub fn for_home(game: &GameRecord) -> Self {
        Self::oriented(game, true)
    }

    pub fn for_away(game: &GameRecord) -> Self {
        Self::oriented(game, false)
    }

    fn oriented(game: &GameRecord, is_home: bool) -> Self {
        let (own, opp) = if is_home {
            (game.home_score, game.away_score)
        } else {
            (game.away_score, game.home_score)
        };
        Self {
            margin: f64::from(own) - f64::from(opp),
            points_for: f64::from(own),
            points_against: f64::from(opp),
            ou_hit: game.total_points() as f64 > game.effective_line(),
        }
    }

    /// Orient a game found by substring lookup. An exact key match decides
    /// first; otherwise the side the team takes in the upcoming matchup is
    /// tested first, so "kansas" away is not credited with a "kansas state"
    /// home result.
    pub fn for_lookup_key(game: &GameRecord, key: &str, preferred: Venue) -> Self {
        if game.home_key == key {
            return Self::for_home(game);
        }
        if game.away_key == key {
            return Self::for_away(game);
        }
        let is_home = match preferred {
            Venue::Home => game.home_key.contains(key),
            Venue::Away => !game.away_key.contains(key),
        };
        Self::oriented(game, is_home)
    }
}

/// Average a run of outcomes, oldest first. Both paths call this so equal
/// inputs give bit-identical windows.
pub fn average_outcomes(outcomes: &[GameOutcome]) -> TeamFormWindow {
    let margins: Vec<f64> = outcomes.iter().map(|o| o.margin).collect();
    let points_for: Vec<f64> = outcomes.iter().map(|o| o.points_for).collect();
    let points_against: Vec<f64> = outcomes.iter().map(|o| o.points_against).collect();
    let hits: Vec<f64> = outcomes
        .iter()
        .map(|o| if o.ou_hit { 1.0 } else { 0.0 })
        .collect();

    TeamFormWindow {
        margin_of_victory: mean(&margins),
        points_for: mean(&points_for),
        points_against: mean(&points_against),
        ou_hit_rate: mean(&hits),
        games: outcomes.len(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RollingFormCalculator {
    window: usize,
}

impl RollingFormCalculator {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Batch-mode window over the tail of a history buffer (oldest first).
    /// `None` until the buffer holds a full window.
    pub fn full_window(&self, history: &[GameOutcome]) -> Option<TeamFormWindow> {
        if history.len() < self.window {
            return None;
        }
        Some(average_outcomes(&history[history.len() - self.window..]))
    }

    /// Batch-mode window for `team_key` as of `as_of`, using only games dated
    /// strictly before it. Keys are matched exactly, as in the batch pass.
    pub fn window_as_of(
        &self,
        ledger: &Ledger,
        team_key: &str,
        as_of: NaiveDate,
    ) -> Option<TeamFormWindow> {
        let history: Vec<GameOutcome> = ledger
            .games()
            .iter()
            .take_while(|g| g.date < as_of)
            .filter_map(|g| {
                if g.home_key == team_key {
                    Some(GameOutcome::for_home(g))
                } else if g.away_key == team_key {
                    Some(GameOutcome::for_away(g))
                } else {
                    None
                }
            })
            .collect();
        self.full_window(&history)
    }

    /// Live-mode window: up to W of the newest ledger games for `team_key`,
    /// averaged over however many exist. No history gives all zeros.
    pub fn live_window(&self, ledger: &Ledger, team_key: &str, venue: Venue) -> TeamFormWindow {
        let mut outcomes: Vec<GameOutcome> = ledger
            .find_by_team(team_key)
            .into_iter()
            .take(self.window)
            .map(|g| GameOutcome::for_lookup_key(g, team_key, venue))
            .collect();
        // find_by_team is newest first; average oldest first like the batch path
        outcomes.reverse();
        average_outcomes(&outcomes)
    }
}

impl Default for RollingFormCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

/// Per-team append-only history used during the chronological batch walk.
#[derive(Debug, Default)]
pub struct TeamHistoryBook {
    histories: HashMap<String, Vec<GameOutcome>>,
}

impl TeamHistoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self, team_key: &str) -> &[GameOutcome] {
        self.histories
            .get(team_key)
            .map(|h| h.as_slice())
            .unwrap_or(&[])
    }

    /// Append a finished game to both teams' buffers.
    pub fn record(&mut self, game: &GameRecord) {
        self.histories
            .entry(game.home_key.clone())
            .or_default()
            .push(GameOutcome::for_home(game));
        self.histories
            .entry(game.away_key.clone())
            .or_default()
            .push(GameOutcome::for_away(game));
    }

    pub fn team_count(&self) -> usize {
        self.histories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawGameRow;

    fn row(date: &str, home: &str, away: &str, hs: u32, aws: u32, line: f64) -> RawGameRow {
        RawGameRow {
            date: date.to_string(),
            league: None,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: Some(hs.to_string()),
            away_score: Some(aws.to_string()),
            ou_line: Some(line.to_string()),
        }
    }

    #[test]
    fn test_outcome_orientation() {
        let ledger = Ledger::load(vec![row("2024-01-01", "Duke", "Kansas", 80, 70, 145.5)]);
        let game = &ledger.games()[0];

        let home = GameOutcome::for_home(game);
        assert_eq!(home.margin, 10.0);
        assert_eq!(home.points_for, 80.0);
        assert_eq!(home.points_against, 70.0);
        assert!(home.ou_hit);

        let away = GameOutcome::for_away(game);
        assert_eq!(away.margin, -10.0);
        assert_eq!(away.points_for, 70.0);
        assert_eq!(away.points_against, 80.0);
        assert!(away.ou_hit);

        assert_eq!(GameOutcome::for_lookup_key(game, "kansas", Venue::Home), away);
    }

    #[test]
    fn test_full_window_undefined_until_w_games() {
        let calc = RollingFormCalculator::new(3);
        let outcome = GameOutcome {
            margin: 2.0,
            points_for: 60.0,
            points_against: 58.0,
            ou_hit: false,
        };
        assert!(calc.full_window(&[outcome, outcome]).is_none());
        let w = calc.full_window(&[outcome, outcome, outcome]).unwrap();
        assert_eq!(w.margin_of_victory, 2.0);
        assert_eq!(w.ou_hit_rate, 0.0);
        assert_eq!(w.games, 3);
    }

    #[test]
    fn test_full_window_uses_most_recent_entries() {
        let calc = RollingFormCalculator::new(2);
        let mk = |m: f64| GameOutcome {
            margin: m,
            points_for: 0.0,
            points_against: 0.0,
            ou_hit: m > 0.0,
        };
        let w = calc.full_window(&[mk(100.0), mk(2.0), mk(4.0)]).unwrap();
        assert_eq!(w.margin_of_victory, 3.0);
        assert_eq!(w.ou_hit_rate, 1.0);
    }

    #[test]
    fn test_live_window_partial_and_empty() {
        let ledger = Ledger::load(vec![
            row("2024-01-01", "Duke", "Kansas", 80, 70, 160.0),
            row("2024-01-03", "Kansas", "Duke", 75, 65, 130.0),
        ]);
        let calc = RollingFormCalculator::new(10);

        let duke = calc.live_window(&ledger, "duke", Venue::Home);
        assert_eq!(duke.games, 2);
        assert_eq!(duke.margin_of_victory, 0.0); // +10 then -10
        assert_eq!(duke.points_for, 72.5);
        assert_eq!(duke.points_against, 72.5);
        assert_eq!(duke.ou_hit_rate, 0.5);

        let nobody = calc.live_window(&ledger, "gonzaga", Venue::Home);
        assert_eq!(nobody, TeamFormWindow::default());
    }

    #[test]
    fn test_live_window_takes_newest_w() {
        let ledger = Ledger::load(vec![
            row("2024-01-01", "Duke", "Kansas", 100, 50, 140.0),
            row("2024-01-02", "Duke", "Kansas", 70, 70, 140.0),
            row("2024-01-03", "Duke", "Kansas", 72, 70, 140.0),
        ]);
        let calc = RollingFormCalculator::new(2);
        let w = calc.live_window(&ledger, "duke", Venue::Home);
        assert_eq!(w.games, 2);
        assert_eq!(w.margin_of_victory, 1.0);
        assert_eq!(w.ou_hit_rate, 0.5);
    }

    #[test]
    fn test_overlapping_names_keep_their_own_side() {
        let ledger = Ledger::load(vec![
            row("2024-01-01", "Kansas State", "Kansas", 80, 60, 150.0),
            row("2024-01-02", "Ohio State", "Ohio", 70, 75, 150.0),
        ]);
        let calc = RollingFormCalculator::new(10);

        // exact key beats containment whichever side is preferred
        for venue in [Venue::Home, Venue::Away] {
            let kansas = calc.live_window(&ledger, "kansas", venue);
            assert_eq!(kansas.margin_of_victory, -20.0);
            assert_eq!(kansas.points_for, 60.0);
            assert_eq!(kansas.points_against, 80.0);
        }

        // substring-only match tests the upcoming side first
        let game = &ledger.games()[1];
        assert_eq!(GameOutcome::for_lookup_key(game, "ohi", Venue::Away), GameOutcome::for_away(game));
        assert_eq!(GameOutcome::for_lookup_key(game, "ohi", Venue::Home), GameOutcome::for_home(game));
    }

    #[test]
    fn test_window_as_of_excludes_reference_date() {
        let ledger = Ledger::load(vec![
            row("2024-01-01", "Duke", "Kansas", 80, 70, 150.0),
            row("2024-01-02", "Kansas", "Duke", 60, 90, 150.0),
            row("2024-01-03", "Duke", "Kansas", 50, 100, 150.0),
        ]);
        let calc = RollingFormCalculator::new(2);
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let w = calc.window_as_of(&ledger, "duke", as_of).unwrap();
        assert_eq!(w.margin_of_victory, 20.0); // +10 and +30, not the -50 on the 3rd
        assert!(calc
            .window_as_of(&ledger, "duke", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .is_none());
    }

    #[test]
    fn test_history_book_records_both_sides() {
        let ledger = Ledger::load(vec![row("2024-01-01", "Duke", "Kansas", 80, 70, 145.5)]);
        let mut book = TeamHistoryBook::new();
        book.record(&ledger.games()[0]);
        assert_eq!(book.team_count(), 2);
        assert_eq!(book.history("duke")[0].margin, 10.0);
        assert_eq!(book.history("kansas")[0].margin, -10.0);
        assert!(book.history("gonzaga").is_empty());
    }
}
