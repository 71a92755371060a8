use serde::{Deserialize, Serialize};

/// Arena zone identifier. Each team starts in one zone.
pub type ZoneId = u32;

fn default_present() -> bool {
    true
}

/// One team's observations for a round.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamRecord {
    /// The zone this team scores from
    pub zone: ZoneId,

    /// Token characters seen inside the robot at the end of the round
    #[serde(default)]
    pub robot_tokens: String,

    /// Whether the robot left its starting zone (default: false)
    #[serde(default)]
    pub left_scoring_zone: bool,

    /// Whether the team's robot took part at all (default: true)
    #[serde(default = "default_present")]
    pub present: bool,
}

impl TeamRecord {
    /// A present team with an empty robot that stayed in its zone
    pub fn new(zone: ZoneId) -> Self {
        Self {
            zone,
            robot_tokens: String::new(),
            left_scoring_zone: false,
            present: true,
        }
    }
}

/// Token characters seen lying in one arena zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneRecord {
    #[serde(default)]
    pub tokens: String,
}

impl ZoneRecord {
    pub fn new(tokens: impl Into<String>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

/// Strip spaces from a raw token string. Nothing else is touched: tabs and
/// other characters stay and fail validation, and lower-case letters stay
/// invalid.
pub fn normalize_tokens(raw: &str) -> String {
    raw.chars().filter(|&c| c != ' ').collect()
}
