pub mod feature_builder;
pub mod ledger;
pub mod name_normalizer;
pub mod odds_fetcher;
pub mod predictor;
pub mod rolling_form;
pub mod team_aliases;
pub mod trainer;

pub use feature_builder::*;
pub use ledger::*;
pub use name_normalizer::*;
pub use odds_fetcher::{OddsClient, AVAILABLE_LEAGUES};
pub use predictor::*;
pub use rolling_form::*;
pub use trainer::*;
