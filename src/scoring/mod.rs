pub mod config;
pub mod engine;
pub mod error;
pub mod records;
pub mod scorer;
pub mod token;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::{ScoringRules, TokenRules};
pub use engine::{ScoreMap, TeamScore};
pub use error::{ErrorCode, InvalidScoresheet, UnknownZone};
pub use records::{normalize_tokens, TeamRecord, ZoneId, ZoneRecord};
pub use scorer::Scorer;
pub use token::{count_tokens, Token, TokenCounts};
