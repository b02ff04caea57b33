//! Training-table and live feature construction.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{FeatureRow, FeatureVector, TeamFormWindow};
use crate::services::{Ledger, RollingFormCalculator, TeamHistoryBook, TeamNameNormalizer, Venue};

/// Walk the ledger once in date order and emit one row per game where both
/// teams already have a full window.
///
/// Windows for every game on a date are computed before any game from that
/// date is appended, so features only ever see strictly earlier games.
pub fn build_training_table(ledger: &Ledger, calculator: &RollingFormCalculator) -> Vec<FeatureRow> {
    let games = ledger.games();
    let mut book = TeamHistoryBook::new();
    let mut rows = Vec::new();

    let mut start = 0;
    while start < games.len() {
        let date = games[start].date;
        let end = start + games[start..].iter().take_while(|g| g.date == date).count();
        let day = &games[start..end];

        for game in day {
            let home = calculator.full_window(book.history(&game.home_key));
            let away = calculator.full_window(book.history(&game.away_key));
            if let (Some(home), Some(away)) = (home, away) {
                rows.push(FeatureRow {
                    game: game.clone(),
                    result: game.result(),
                    features: FeatureVector::from_windows(&home, &away),
                });
            }
        }

        for game in day {
            book.record(game);
        }

        start = end;
    }

    tracing::info!(
        "Built {} training rows from {} games ({} teams, window {})",
        rows.len(),
        games.len(),
        book.team_count(),
        calculator.window()
    );
    rows
}

/// Write the training table, game identity columns first.
pub fn write_training_table(rows: &[FeatureRow], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating feature table {}", path.display()))?;
    writer.write_record(FeatureRow::csv_header())?;
    for row in rows {
        writer.write_record(row.to_csv_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Features for an upcoming matchup, with how much history backs each side.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveFeatures {
    pub home_key: String,
    pub away_key: String,
    pub home_window: TeamFormWindow,
    pub away_window: TeamFormWindow,
    pub features: FeatureVector,
}

/// Reconstruct the training feature vector for an unplayed matchup.
///
/// Returns `None` only when neither team has any ledger history; one-sided
/// history still yields a vector with the missing side at zero.
pub fn build_live_features(
    home_team: &str,
    away_team: &str,
    ledger: &Ledger,
    normalizer: &TeamNameNormalizer,
    calculator: &RollingFormCalculator,
) -> Option<LiveFeatures> {
    let home = normalizer.resolve(home_team);
    let away = normalizer.resolve(away_team);
    for (raw, res) in [(home_team, &home), (away_team, &away)] {
        if res.is_guess() {
            tracing::debug!("No alias or suffix for '{}', guessing key '{}'", raw, res.key());
        }
    }

    let home_window = calculator.live_window(ledger, home.key(), Venue::Home);
    let away_window = calculator.live_window(ledger, away.key(), Venue::Away);

    if home_window.games == 0 && away_window.games == 0 {
        return None;
    }

    Some(LiveFeatures {
        features: FeatureVector::from_windows(&home_window, &away_window),
        home_key: home.into_key(),
        away_key: away.into_key(),
        home_window,
        away_window,
    })
}
