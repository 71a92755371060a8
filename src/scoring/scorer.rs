use std::collections::BTreeMap;

use log::debug;

use super::config::ScoringRules;
use super::error::UnknownZone;
use super::records::{normalize_tokens, TeamRecord, ZoneId, ZoneRecord};

/// One scoresheet, ready to be validated and scored.
///
/// Token strings are normalized once, here; nothing is mutated afterwards.
/// Call [`Scorer::validate`] before trusting [`Scorer::calculate_scores`].
#[derive(Debug, Clone)]
pub struct Scorer<'r> {
    teams: BTreeMap<String, TeamRecord>,
    arena_zones: BTreeMap<ZoneId, ZoneRecord>,
    rules: &'r ScoringRules,
}

impl<'r> Scorer<'r> {
    pub fn new(
        mut teams: BTreeMap<String, TeamRecord>,
        mut arena_zones: BTreeMap<ZoneId, ZoneRecord>,
        rules: &'r ScoringRules,
    ) -> Result<Self, UnknownZone> {
        for team in teams.values_mut() {
            team.robot_tokens = normalize_tokens(&team.robot_tokens);
        }
        for zone in arena_zones.values_mut() {
            zone.tokens = normalize_tokens(&zone.tokens);
        }

        if let Some((tla, team)) = teams
            .iter()
            .find(|(_, team)| !arena_zones.contains_key(&team.zone))
        {
            return Err(UnknownZone {
                tla: tla.clone(),
                zone: team.zone,
            });
        }

        debug!(
            "Loaded scoresheet with {} teams and {} arena zones",
            teams.len(),
            arena_zones.len()
        );

        Ok(Self {
            teams,
            arena_zones,
            rules,
        })
    }

    pub fn teams(&self) -> &BTreeMap<String, TeamRecord> {
        &self.teams
    }

    pub fn arena_zones(&self) -> &BTreeMap<ZoneId, ZoneRecord> {
        &self.arena_zones
    }

    pub fn rules(&self) -> &ScoringRules {
        self.rules
    }

    /// Normalized tokens lying in a team's zone
    pub(super) fn zone_tokens(&self, team: &TeamRecord) -> &str {
        // Presence of every team's zone is checked in `new`
        self.arena_zones
            .get(&team.zone)
            .map_or("", |zone| zone.tokens.as_str())
    }
}
