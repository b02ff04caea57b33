use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the classifier input, in contract order.
pub const FEATURE_COLUMNS: [&str; FeatureVector::LEN] = [
    "Home_Avg_MOV",
    "Home_Avg_Pts_For",
    "Home_Avg_Pts_Against",
    "Home_Avg_OU_Hit_Rate",
    "Away_Avg_MOV",
    "Away_Avg_Pts_For",
    "Away_Avg_Pts_Against",
    "Away_Avg_OU_Hit_Rate",
    "Avg_MOV_Diff",
    "Avg_Pts_For_Diff",
    "Avg_Pts_Against_Diff",
    "Avg_OU_Hit_Rate_Diff",
];

/// One row of the scraped results CSV, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGameRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "League", default)]
    pub league: Option<String>,
    #[serde(rename = "HomeTeam")]
    pub home_team: String,
    #[serde(rename = "AwayTeam")]
    pub away_team: String,
    #[serde(rename = "HomeScore", default)]
    pub home_score: Option<String>,
    #[serde(rename = "AwayScore", default)]
    pub away_score: Option<String>,
    #[serde(rename = "OU_Line", default)]
    pub ou_line: Option<String>,
}

/// A completed, validated game in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub league: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub home_key: String,
    pub away_key: String,
    pub home_score: u32,
    pub away_score: u32,
    pub total_line: f64,
}

impl GameRecord {
    pub fn total_points(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// The line used for hit-rate purposes; a non-finite line counts as 0.
    pub fn effective_line(&self) -> f64 {
        if self.total_line.is_finite() {
            self.total_line
        } else {
            0.0
        }
    }

    pub fn result(&self) -> OverUnder {
        if self.total_points() as f64 > self.effective_line() {
            OverUnder::Over
        } else {
            OverUnder::Under
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverUnder {
    Over,
    Under,
}

impl OverUnder {
    /// Binary training label: 1 for Over, 0 for Under.
    pub fn label(&self) -> u8 {
        match self {
            OverUnder::Over => 1,
            OverUnder::Under => 0,
        }
    }
}

impl fmt::Display for OverUnder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverUnder::Over => write!(f, "Over"),
            OverUnder::Under => write!(f, "Under"),
        }
    }
}

/// Trailing-window form for one team as of a reference point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamFormWindow {
    pub margin_of_victory: f64,
    pub points_for: f64,
    pub points_against: f64,
    pub ou_hit_rate: f64,
    /// Number of games the averages were taken over
    pub games: usize,
}

/// The twelve-dimensional classifier input for one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "Home_Avg_MOV")]
    pub home_avg_mov: f64,
    #[serde(rename = "Home_Avg_Pts_For")]
    pub home_avg_pts_for: f64,
    #[serde(rename = "Home_Avg_Pts_Against")]
    pub home_avg_pts_against: f64,
    #[serde(rename = "Home_Avg_OU_Hit_Rate")]
    pub home_avg_ou_hit_rate: f64,
    #[serde(rename = "Away_Avg_MOV")]
    pub away_avg_mov: f64,
    #[serde(rename = "Away_Avg_Pts_For")]
    pub away_avg_pts_for: f64,
    #[serde(rename = "Away_Avg_Pts_Against")]
    pub away_avg_pts_against: f64,
    #[serde(rename = "Away_Avg_OU_Hit_Rate")]
    pub away_avg_ou_hit_rate: f64,
    #[serde(rename = "Avg_MOV_Diff")]
    pub avg_mov_diff: f64,
    #[serde(rename = "Avg_Pts_For_Diff")]
    pub avg_pts_for_diff: f64,
    #[serde(rename = "Avg_Pts_Against_Diff")]
    pub avg_pts_against_diff: f64,
    #[serde(rename = "Avg_OU_Hit_Rate_Diff")]
    pub avg_ou_hit_rate_diff: f64,
}

impl FeatureVector {
    pub const LEN: usize = 12;

    /// The only constructor: both feature builders go through here so the
    /// field order cannot drift between training and inference.
    pub fn from_windows(home: &TeamFormWindow, away: &TeamFormWindow) -> Self {
        Self {
            home_avg_mov: home.margin_of_victory,
            home_avg_pts_for: home.points_for,
            home_avg_pts_against: home.points_against,
            home_avg_ou_hit_rate: home.ou_hit_rate,
            away_avg_mov: away.margin_of_victory,
            away_avg_pts_for: away.points_for,
            away_avg_pts_against: away.points_against,
            away_avg_ou_hit_rate: away.ou_hit_rate,
            avg_mov_diff: home.margin_of_victory - away.margin_of_victory,
            avg_pts_for_diff: home.points_for - away.points_for,
            avg_pts_against_diff: home.points_against - away.points_against,
            avg_ou_hit_rate_diff: home.ou_hit_rate - away.ou_hit_rate,
        }
    }

    /// Values in `FEATURE_COLUMNS` order.
    pub fn to_array(&self) -> [f64; Self::LEN] {
        [
            self.home_avg_mov,
            self.home_avg_pts_for,
            self.home_avg_pts_against,
            self.home_avg_ou_hit_rate,
            self.away_avg_mov,
            self.away_avg_pts_for,
            self.away_avg_pts_against,
            self.away_avg_ou_hit_rate,
            self.avg_mov_diff,
            self.avg_pts_for_diff,
            self.avg_pts_against_diff,
            self.avg_ou_hit_rate_diff,
        ]
    }
}

/// One training example produced by the batch pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub game: GameRecord,
    pub result: OverUnder,
    pub features: FeatureVector,
}

/// Game identity columns written ahead of the features in the training table.
pub const GAME_COLUMNS: [&str; 9] = [
    "Date",
    "League",
    "HomeTeam",
    "AwayTeam",
    "HomeScore",
    "AwayScore",
    "OU_Line",
    "TotalPoints",
    "OU_Result",
];

impl FeatureRow {
    pub fn csv_header() -> Vec<&'static str> {
        GAME_COLUMNS.iter().chain(FEATURE_COLUMNS.iter()).copied().collect()
    }

    pub fn to_csv_record(&self) -> Vec<String> {
        let mut record = vec![
            self.game.date.format("%Y-%m-%d").to_string(),
            self.game.league.clone().unwrap_or_default(),
            self.game.home_team.clone(),
            self.game.away_team.clone(),
            self.game.home_score.to_string(),
            self.game.away_score.to_string(),
            self.game.total_line.to_string(),
            self.game.total_points().to_string(),
            self.result.label().to_string(),
        ];
        record.extend(self.features.to_array().iter().map(|v| v.to_string()));
        record
    }
}

/// Output of a prediction run, one per upcoming matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "League")]
    pub league: String,
    #[serde(rename = "Match")]
    pub matchup: String,
    #[serde(rename = "Prediction")]
    pub prediction: String,
    #[serde(rename = "Probability")]
    pub probability: f64,
}

/// Recent form of one team as seen by the live path.
#[derive(Debug, Clone, Serialize)]
pub struct TeamFormReport {
    pub query: String,
    pub team_key: String,
    /// True when the key came from the first-token fallback
    pub guessed: bool,
    pub window: TeamFormWindow,
    /// Full window a training row dated `as_of` would use; None if too few games
    pub full_window: Option<TeamFormWindow>,
    pub as_of: NaiveDate,
    pub recent_games: Vec<GameRecord>,
}

// The Odds API event shape

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bookmaker {
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Market {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Outcome {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub point: Option<f64>,
}

// API Response types
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: Utc::now(),
        }
    }
}
