use std::env;
use std::path::PathBuf;

use crate::services::odds_fetcher::DEFAULT_BOOKMAKER_PRIORITY;
use crate::services::rolling_form::DEFAULT_WINDOW;
use crate::services::PredictionError;

/// Runtime settings, read from the environment (and `.env`) once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ledger_path: PathBuf,
    pub features_path: PathBuf,
    pub model_path: PathBuf,
    pub odds_api_key: Option<String>,
    pub rolling_window: usize,
    pub bookmaker_priority: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from("data/raw/historical_basketball_data.csv"),
            features_path: PathBuf::from("data/processed/featured_basketball_data.csv"),
            model_path: PathBuf::from("models/ou_logistic_model.json"),
            odds_api_key: None,
            rolling_window: DEFAULT_WINDOW,
            bookmaker_priority: DEFAULT_BOOKMAKER_PRIORITY.iter().map(|b| b.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, PredictionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PredictionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(p) = lookup("LEDGER_PATH") {
            config.ledger_path = PathBuf::from(p);
        }
        if let Some(p) = lookup("FEATURES_PATH") {
            config.features_path = PathBuf::from(p);
        }
        if let Some(p) = lookup("MODEL_PATH") {
            config.model_path = PathBuf::from(p);
        }

        // the sample .env placeholder counts as unset
        config.odds_api_key = lookup("ODDS_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != "YOUR_API_KEY_HERE");

        if let Some(w) = lookup("ROLLING_WINDOW") {
            config.rolling_window = parse_window(&w)?;
        }

        if let Some(list) = lookup("PREFERRED_BOOKMAKERS") {
            let books: Vec<String> = list
                .split(',')
                .map(|b| b.trim().to_lowercase())
                .filter(|b| !b.is_empty())
                .collect();
            if books.is_empty() {
                return Err(PredictionError::Config(
                    "PREFERRED_BOOKMAKERS must list at least one bookmaker".to_string(),
                ));
            }
            config.bookmaker_priority = books;
        }

        Ok(config)
    }

    pub fn odds_api_key(&self) -> Result<&str, PredictionError> {
        self.odds_api_key.as_deref().ok_or_else(|| {
            PredictionError::Config("ODDS_API_KEY not set (add it to .env)".to_string())
        })
    }
}

pub fn parse_window(raw: &str) -> Result<usize, PredictionError> {
    match raw.trim().parse::<usize>() {
        Ok(w) if w >= 1 => Ok(w),
        _ => Err(PredictionError::Config(format!(
            "ROLLING_WINDOW must be a positive integer, got '{}'",
            raw
        ))),
    }
}
