use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::{Scorer, ScoringRules, TeamRecord, UnknownZone, ZoneId, ZoneRecord};

/// A scoresheet as stored on disk or produced from a scoring form.
///
/// Token strings are kept exactly as entered; they are normalized when a
/// [`Scorer`] is built from the document.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ScoresheetDocument {
    pub teams: BTreeMap<String, TeamRecord>,

    #[serde(default)]
    pub arena_zones: BTreeMap<ZoneId, ZoneRecord>,

    /// Free-form extra data, handed to validation untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<serde_json::Value>,
}

impl ScoresheetDocument {
    pub fn scorer<'r>(&self, rules: &'r ScoringRules) -> Result<Scorer<'r>, UnknownZone> {
        Scorer::new(self.teams.clone(), self.arena_zones.clone(), rules)
    }
}
