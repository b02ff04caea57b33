use chrono::{DateTime, NaiveDate, Utc};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{
    FeatureVector, OddsEvent, OverUnder, PredictionRecord, TeamFormReport, FEATURE_COLUMNS,
};
use crate::services::odds_fetcher::{select_total_line, OddsClient, AVAILABLE_LEAGUES};
use crate::services::{
    build_live_features, Ledger, RollingFormCalculator, TeamNameNormalizer, Venue,
};
use crate::utils::{format_line, league_code};

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing {what} at {}", path.display())]
    MissingArtifact { what: &'static str, path: PathBuf },

    #[error("Odds API error: {0}")]
    OddsApi(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can score a feature vector. The prediction pipeline only
/// depends on this contract, not on a particular algorithm.
pub trait OverUnderClassifier {
    /// Probability that the game goes over its line.
    fn prob_over(&self, features: &FeatureVector) -> f64;
}

/// Standardised logistic regression over the twelve feature columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub model_version: String,
    pub feature_columns: Vec<String>,
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub rolling_window: usize,
    pub trained_at: DateTime<Utc>,
}

impl LogisticModel {
    pub fn standardize(&self, raw: &[f64]) -> DVector<f64> {
        DVector::from_iterator(
            raw.len(),
            raw.iter()
                .zip(self.means.iter().zip(&self.stds))
                .map(|(x, (m, s))| if *s > 0.0 { (x - m) / s } else { 0.0 }),
        )
    }

    /// P(over) for an unstandardised row in column order.
    pub fn prob_over_raw(&self, raw: &[f64]) -> f64 {
        let x = self.standardize(raw);
        let w = DVector::from_column_slice(&self.weights);
        sigmoid(w.dot(&x) + self.bias)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PredictionError::MissingArtifact {
                what: "model",
                path: path.to_path_buf(),
            });
        }
        let model: LogisticModel = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        model.validate()?;
        Ok(model)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PredictionError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The artifact must have been trained on exactly our feature contract.
    fn validate(&self) -> Result<(), PredictionError> {
        if self.feature_columns != FEATURE_COLUMNS {
            return Err(PredictionError::Config(format!(
                "model feature columns {:?} do not match {:?}",
                self.feature_columns, FEATURE_COLUMNS
            )));
        }
        let n = FeatureVector::LEN;
        if self.means.len() != n || self.stds.len() != n || self.weights.len() != n {
            return Err(PredictionError::Config(format!(
                "model parameters must have {} entries each",
                n
            )));
        }
        Ok(())
    }
}

impl OverUnderClassifier for LogisticModel {
    fn prob_over(&self, features: &FeatureVector) -> f64 {
        self.prob_over_raw(&features.to_array())
    }
}

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Pick a side from P(over): Over only when it is strictly more likely.
pub fn predicted_side(prob_over: f64) -> (OverUnder, f64) {
    if prob_over > 0.5 {
        (OverUnder::Over, prob_over)
    } else {
        (OverUnder::Under, 1.0 - prob_over)
    }
}

pub struct PredictionEngine {
    normalizer: TeamNameNormalizer,
    calculator: RollingFormCalculator,
    bookmaker_priority: Vec<String>,
}

impl PredictionEngine {
    pub fn new(window: usize, bookmaker_priority: Vec<String>) -> Self {
        Self {
            normalizer: TeamNameNormalizer::default(),
            calculator: RollingFormCalculator::new(window),
            bookmaker_priority,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.rolling_window, config.bookmaker_priority.clone())
    }

    pub fn calculator(&self) -> &RollingFormCalculator {
        &self.calculator
    }

    /// Live-path form for one team name plus its newest ledger games.
    pub fn team_form(
        &self,
        ledger: &Ledger,
        team_name: &str,
        as_of: NaiveDate,
        recent: usize,
    ) -> TeamFormReport {
        let resolution = self.normalizer.resolve(team_name);
        let window = self.calculator.live_window(ledger, resolution.key(), Venue::Home);
        let full_window = self.calculator.window_as_of(ledger, resolution.key(), as_of);
        let recent_games = ledger
            .find_by_team(resolution.key())
            .into_iter()
            .take(recent)
            .cloned()
            .collect();
        TeamFormReport {
            query: team_name.to_string(),
            guessed: resolution.is_guess(),
            team_key: resolution.into_key(),
            window,
            full_window,
            as_of,
            recent_games,
        }
    }

    /// Score a batch of upcoming events for one league. Events without a
    /// priority-bookmaker line, or with no history for either team, are
    /// skipped with a warning.
    pub fn predict_games(
        &self,
        sport_key: &str,
        events: &[OddsEvent],
        ledger: &Ledger,
        model: &dyn OverUnderClassifier,
    ) -> Vec<PredictionRecord> {
        let league = league_code(sport_key);
        let mut predictions = Vec::new();

        for event in events {
            let Some(line) = select_total_line(event, &self.bookmaker_priority) else {
                tracing::warn!(
                    "Skipping {} vs {}: No OU_Line found from preferred bookmakers.",
                    event.home_team,
                    event.away_team
                );
                continue;
            };

            let Some(live) = build_live_features(
                &event.home_team,
                &event.away_team,
                ledger,
                &self.normalizer,
                &self.calculator,
            ) else {
                tracing::warn!(
                    "Skipping {} vs {}: No historical data for either team.",
                    event.home_team,
                    event.away_team
                );
                continue;
            };

            let (side, probability) = predicted_side(model.prob_over(&live.features));

            tracing::debug!(
                "{} at {}: {} {} ({:.1}%, {} via {}, history {}/{})",
                event.away_team,
                event.home_team,
                side,
                line.point,
                probability * 100.0,
                league,
                line.bookmaker,
                live.home_window.games,
                live.away_window.games
            );

            predictions.push(PredictionRecord {
                league: league.clone(),
                matchup: format!("{} at {}", event.away_team, event.home_team),
                prediction: format!("{} {}", side, format_line(line.point)),
                probability,
            });
        }

        predictions
    }

    /// Load artifacts, fetch upcoming games and predict one league.
    pub async fn generate_predictions(
        &self,
        config: &AppConfig,
        sport_key: &str,
    ) -> Result<Vec<PredictionRecord>, PredictionError> {
        tracing::info!("Generating predictions for {}...", sport_key);

        let model = LogisticModel::load(&config.model_path)?;
        if !config.ledger_path.exists() {
            return Err(PredictionError::MissingArtifact {
                what: "ledger",
                path: config.ledger_path.clone(),
            });
        }
        let ledger = Ledger::from_csv_path(&config.ledger_path)
            .map_err(|e| PredictionError::Config(format!("{:#}", e)))?;

        let client = OddsClient::new(config.odds_api_key()?);
        let events = client
            .get_upcoming_games(sport_key)
            .await
            .map_err(odds_api_error)?;

        if events.is_empty() {
            tracing::warn!("No upcoming games to predict for {}.", sport_key);
            return Ok(Vec::new());
        }

        let predictions = self.predict_games(sport_key, &events, &ledger, &model);
        tracing::info!(
            "Successfully generated {} predictions for {}.",
            predictions.len(),
            sport_key
        );
        Ok(predictions)
    }

    /// Run every league; a failing league is logged and the rest still run.
    pub async fn predict_all_leagues(&self, config: &AppConfig) -> Vec<PredictionRecord> {
        let mut all = Vec::new();
        for (code, sport_key) in AVAILABLE_LEAGUES {
            match self.generate_predictions(config, sport_key).await {
                Ok(preds) => all.extend(preds),
                Err(e) => tracing::error!("Prediction run for {} failed: {}", code, e),
            }
        }
        all
    }
}

/// Keep the whole anyhow context chain, not just the outermost message.
fn odds_api_error(e: anyhow::Error) -> PredictionError {
    PredictionError::OddsApi(format!("{:#}", e))
}

/// Dashboard ordering options for a prediction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilitySort {
    #[default]
    HighestFirst,
    LowestFirst,
    Unsorted,
}

/// Keep one league ("All" or empty keeps everything) and order by probability.
pub fn filter_and_sort(
    predictions: Vec<PredictionRecord>,
    league: Option<&str>,
    sort: ProbabilitySort,
) -> Vec<PredictionRecord> {
    let mut out: Vec<PredictionRecord> = match league.map(str::trim) {
        Some(l) if !l.is_empty() && !l.eq_ignore_ascii_case("all") => predictions
            .into_iter()
            .filter(|p| p.league.eq_ignore_ascii_case(l))
            .collect(),
        _ => predictions,
    };

    match sort {
        ProbabilitySort::HighestFirst => out.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        ProbabilitySort::LowestFirst => out.sort_by(|a, b| {
            a.probability
                .partial_cmp(&b.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        ProbabilitySort::Unsorted => {}
    }
    out
}
