//! Historical ledger of completed games.
//!
//! The ledger is rebuilt wholesale from the scraped results on every load and
//! never patched in place. Malformed rows are routine upstream and are dropped
//! at ingestion rather than treated as errors.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;
use strsim::jaro_winkler;

use crate::models::{GameRecord, RawGameRow};
use crate::utils::{parse_game_date, parse_number, parse_score};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Ascending by date; same-day games keep their input order
    games: Vec<GameRecord>,
}

impl Ledger {
    pub fn load<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawGameRow>,
    {
        let mut games = Vec::new();
        let mut dropped = 0usize;

        for row in rows {
            match validate_row(row) {
                Some(game) => games.push(game),
                None => dropped += 1,
            }
        }

        // stable: same-day games stay in scrape order
        games.sort_by_key(|g| g.date);

        if dropped > 0 {
            tracing::debug!("Ledger: dropped {} unusable rows", dropped);
        }
        tracing::info!("Ledger loaded with {} games", games.len());

        Self { games }
    }

    /// Read the scraper's CSV output.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("opening ledger {}", path.display()))?;

        let mut rows = Vec::new();
        for (i, row) in reader.deserialize::<RawGameRow>().enumerate() {
            match row {
                Ok(r) => rows.push(r),
                Err(e) => tracing::debug!("Ledger: skipping unreadable line {}: {}", i + 2, e),
            }
        }

        Ok(Self::load(rows))
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Games involving `team_key`, newest first.
    ///
    /// Matching is substring containment of the key in the lower-cased ledger
    /// names, so a lookup key that drifted slightly from the ledger's spelling
    /// still finds the team. An empty key matches nothing.
    pub fn find_by_team(&self, team_key: &str) -> Vec<&GameRecord> {
        let key = team_key.trim();
        if key.is_empty() {
            return Vec::new();
        }
        self.games
            .iter()
            .rev()
            .filter(|g| g.home_key.contains(key) || g.away_key.contains(key))
            .collect()
    }

    /// Distinct team names as they appear in the ledger.
    pub fn team_names(&self) -> BTreeSet<&str> {
        self.games
            .iter()
            .flat_map(|g| [g.home_team.as_str(), g.away_team.as_str()])
            .collect()
    }

    /// Ledger team names closest to `query`, best first.
    pub fn suggest_teams(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .team_names()
            .into_iter()
            .map(|name| (jaro_winkler(&query, &name.to_lowercase()), name))
            .filter(|(score, _)| *score > 0.7)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

fn validate_row(row: RawGameRow) -> Option<GameRecord> {
    let home_score = parse_score(row.home_score.as_deref())?;
    let away_score = parse_score(row.away_score.as_deref())?;
    let total_line = parse_number(row.ou_line.as_deref())?;
    let date = parse_game_date(&row.date)?;

    let home_team = row.home_team.trim().to_string();
    let away_team = row.away_team.trim().to_string();
    if home_team.is_empty() || away_team.is_empty() {
        return None;
    }

    Some(GameRecord {
        date,
        league: row.league.filter(|l| !l.trim().is_empty()),
        home_key: home_team.to_lowercase(),
        away_key: away_team.to_lowercase(),
        home_team,
        away_team,
        home_score,
        away_score,
        total_line,
    })
}
