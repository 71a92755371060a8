use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

use super::records::ZoneId;

/// Stable failure category of a rejected scoresheet. The string form
/// (e.g. `too_few_tokens`) is what callers branch on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidToken,
    TooFewTokens,
    TooManyTokens,
    TooManyTokensBetweenRobotsAndZones,
    MissingButMoving,
    MissingButHasTokens,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A scoresheet describing a token distribution that cannot physically
/// happen. Raised by validation on the first violated check.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct InvalidScoresheet {
    pub code: ErrorCode,
    pub message: String,
}

impl InvalidScoresheet {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A team assigned to a zone that has no arena record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Team {tla} is assigned to zone {zone}, which has no arena zone record")]
pub struct UnknownZone {
    pub tla: String,
    pub zone: ZoneId,
}
