//! Shared scoresheet used by the validation and engine tests: two teams in
//! zones 0 and 1, and four zones each holding 5 Bronze, 3 Silver, 1 Gold.

use std::collections::BTreeMap;

use super::config::ScoringRules;
use super::records::{TeamRecord, ZoneId, ZoneRecord};
use super::scorer::Scorer;

pub(crate) struct Fixture {
    pub teams: BTreeMap<String, TeamRecord>,
    pub zone_tokens: BTreeMap<ZoneId, String>,
}

impl Fixture {
    pub fn new() -> Self {
        let mut teams = BTreeMap::new();
        teams.insert("ABC".to_string(), TeamRecord::new(0));
        teams.insert("DEF".to_string(), TeamRecord::new(1));

        // Same tokens in every zone, in a different order each time
        let zone_tokens = [
            (0, "BBSBGSBSB"),
            (1, "GBSBBSBSB"),
            (2, "SSSBBBBBG"),
            (3, "BSBSBSBGB"),
        ]
        .into_iter()
        .map(|(id, tokens)| (id, tokens.to_string()))
        .collect();

        Self { teams, zone_tokens }
    }

    pub fn team_mut(&mut self, tla: &str) -> &mut TeamRecord {
        self.teams.get_mut(tla).expect("fixture team exists")
    }

    pub fn zone_mut(&mut self, zone: ZoneId) -> &mut String {
        self.zone_tokens.get_mut(&zone).expect("fixture zone exists")
    }

    /// Build a scorer, giving robots the listed contents and leaving all
    /// other robots empty.
    pub fn scorer<'r>(&self, robot_tokens: &[(&str, &str)], rules: &'r ScoringRules) -> Scorer<'r> {
        let teams = self
            .teams
            .iter()
            .map(|(tla, team)| {
                let contents = robot_tokens
                    .iter()
                    .find(|(robot, _)| *robot == tla.as_str())
                    .map_or("", |(_, tokens)| *tokens);
                let record = TeamRecord {
                    robot_tokens: contents.to_string(),
                    ..team.clone()
                };
                (tla.clone(), record)
            })
            .collect();
        let arena_zones = self
            .zone_tokens
            .iter()
            .map(|(id, tokens)| (*id, ZoneRecord::new(tokens.as_str())))
            .collect();

        Scorer::new(teams, arena_zones, rules).expect("fixture zones exist")
    }
}
