use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::error::{ErrorCode, InvalidScoresheet};
use super::records::{TeamRecord, ZoneId, ZoneRecord};
use super::scorer::Scorer;
use super::token::{count_tokens, legal_symbols, Token, TokenCounts};

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn robot_token_strings(teams: &BTreeMap<String, TeamRecord>) -> impl Iterator<Item = &str> {
    teams.values().map(|team| team.robot_tokens.as_str())
}

fn zone_token_strings(zones: &BTreeMap<ZoneId, ZoneRecord>) -> impl Iterator<Item = &str> {
    zones.values().map(|zone| zone.tokens.as_str())
}

/// Per-type maximum count over several token strings
fn max_counts<'a>(sources: impl Iterator<Item = &'a str>) -> TokenCounts {
    let mut maxima = TokenCounts::default();
    for tokens in sources {
        for (token, count) in count_tokens(tokens) {
            maxima[token] = maxima[token].max(count);
        }
    }
    maxima
}

impl Scorer<'_> {
    /// Check that the observed token distribution is physically possible.
    ///
    /// Checks run in a fixed order and the first failure is returned, so
    /// the same scoresheet always yields the same error code. `_other` is
    /// the free-form section of the scoresheet; no rule reads it yet.
    pub fn validate(&self, _other: Option<&serde_json::Value>) -> Result<(), InvalidScoresheet> {
        let result = self
            .check_token_symbols()
            .and_then(|()| self.check_minimum_counts())
            .and_then(|()| self.check_source_maximums())
            .and_then(|()| self.check_robot_zone_overlap())
            .and_then(|()| self.check_absent_not_moving())
            .and_then(|()| self.check_absent_hold_nothing());

        match &result {
            Ok(()) => debug!("Scoresheet passed validation"),
            Err(e) => debug!("Scoresheet rejected ({}): {}", e.code, e.message),
        }
        result
    }

    /// Every robot and zone token string
    fn token_strings(&self) -> impl Iterator<Item = &str> {
        robot_token_strings(self.teams()).chain(zone_token_strings(self.arena_zones()))
    }

    fn check_token_symbols(&self) -> Result<(), InvalidScoresheet> {
        let seen: BTreeSet<char> = self.token_strings().flat_map(str::chars).collect();
        let invalid: Vec<char> = seen
            .into_iter()
            .filter(|c| Token::from_char(*c).is_none())
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }
        Err(InvalidScoresheet::new(
            ErrorCode::InvalidToken,
            format!(
                "Invalid tokens {{{}}} (must be a selection of {{{}}})",
                join(invalid),
                join(legal_symbols())
            ),
        ))
    }

    fn check_minimum_counts(&self) -> Result<(), InvalidScoresheet> {
        // A token seen in several places counts each time, so this is only a
        // lower bound. Losing a token from view is rarer than a typo.
        let mut totals = TokenCounts::default();
        for tokens in self.token_strings() {
            for (token, count) in count_tokens(tokens) {
                totals[token] += count;
            }
        }

        for (token, rules) in &self.rules().tokens {
            if totals[token] < rules.min_count {
                let mut message = format!(
                    "Too few {} tokens seen: {} < {}",
                    token.name(),
                    totals[token],
                    rules.min_count
                );
                if rules.min_count == rules.max_count {
                    message.push_str(" (all tokens must be accounted for)");
                }
                return Err(InvalidScoresheet::new(ErrorCode::TooFewTokens, message));
            }
        }
        Ok(())
    }

    fn check_source_maximums(&self) -> Result<(), InvalidScoresheet> {
        let robots = self
            .teams()
            .iter()
            .map(|(tla, team)| (format!("Robot {}", tla), team.robot_tokens.as_str()));
        let zones = self
            .arena_zones()
            .iter()
            .map(|(id, zone)| (format!("Zone {}", id), zone.tokens.as_str()));

        for (label, tokens) in robots.chain(zones) {
            let counts = count_tokens(tokens);
            for (token, rules) in &self.rules().tokens {
                if counts[token] > rules.max_count {
                    return Err(InvalidScoresheet::new(
                        ErrorCode::TooManyTokens,
                        format!(
                            "{} contains too many {} tokens: {} > {}",
                            label,
                            token.name(),
                            counts[token],
                            rules.max_count
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    fn check_robot_zone_overlap(&self) -> Result<(), InvalidScoresheet> {
        // Two robots (or two zones) may describe the same physical token, so
        // only the largest single count on each side is known to be distinct.
        // A token in a robot is never also in a zone, so those two maxima add.
        let in_robot = max_counts(robot_token_strings(self.teams()));
        let in_zone = max_counts(zone_token_strings(self.arena_zones()));

        for (token, rules) in &self.rules().tokens {
            let combined = in_robot[token] + in_zone[token];
            if combined > rules.max_count {
                return Err(InvalidScoresheet::new(
                    ErrorCode::TooManyTokensBetweenRobotsAndZones,
                    format!(
                        "Too many {} tokens between robots and zones: {} in a robot + {} in a zone > {}",
                        token.name(),
                        in_robot[token],
                        in_zone[token],
                        rules.max_count
                    ),
                ));
            }
        }
        Ok(())
    }

    fn check_absent_not_moving(&self) -> Result<(), InvalidScoresheet> {
        let moving: Vec<&str> = self
            .teams()
            .iter()
            .filter(|(_, team)| !team.present && team.left_scoring_zone)
            .map(|(tla, _)| tla.as_str())
            .collect();

        if moving.is_empty() {
            return Ok(());
        }
        Err(InvalidScoresheet::new(
            ErrorCode::MissingButMoving,
            format!(
                "Teams {} are marked as absent but also as having left their scoring zone",
                join(moving)
            ),
        ))
    }

    fn check_absent_hold_nothing(&self) -> Result<(), InvalidScoresheet> {
        let holding: Vec<&str> = self
            .teams()
            .iter()
            .filter(|(_, team)| !team.present && !team.robot_tokens.is_empty())
            .map(|(tla, _)| tla.as_str())
            .collect();

        if holding.is_empty() {
            return Ok(());
        }
        Err(InvalidScoresheet::new(
            ErrorCode::MissingButHasTokens,
            format!(
                "Teams {} are marked as absent but their robots hold tokens",
                join(holding)
            ),
        ))
    }
}
