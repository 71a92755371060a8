use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::records::TeamRecord;
use super::scorer::Scorer;
use super::token::Token;

/// Team TLA to total points
pub type ScoreMap = BTreeMap<String, f64>;

/// Points for one team, split by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamScore {
    pub zone_points: f64,  // Tokens lying in the team's zone
    pub robot_points: f64, // Tokens held by the team's robot
    pub exit_bonus: f64,   // Robot left its scoring zone
    pub total: f64,
}

impl Scorer<'_> {
    /// Total points per team. Does not validate: call `validate` first.
    pub fn calculate_scores(&self) -> ScoreMap {
        self.calculate_breakdown()
            .into_iter()
            .map(|(tla, score)| (tla, score.total))
            .collect()
    }

    /// Points per team, split by where they came from.
    pub fn calculate_breakdown(&self) -> BTreeMap<String, TeamScore> {
        self.teams()
            .iter()
            .map(|(tla, team)| {
                let score = self.score_team(team);
                debug!(
                    "{}: {} zone + {} robot + {} exit = {}",
                    tla, score.zone_points, score.robot_points, score.exit_bonus, score.total
                );
                (tla.clone(), score)
            })
            .collect()
    }

    fn score_team(&self, team: &TeamRecord) -> TeamScore {
        let rules = self.rules();

        let zone_points = sum_points(self.zone_tokens(team), |token| {
            rules.tokens[token].arena_points
        });
        let robot_points = sum_points(&team.robot_tokens, |token| {
            rules.tokens[token].robot_points
        });
        let exit_bonus = if team.left_scoring_zone {
            rules.exit_bonus
        } else {
            0.0
        };

        TeamScore {
            zone_points,
            robot_points,
            exit_bonus,
            total: zone_points + robot_points + exit_bonus,
        }
    }
}

fn sum_points(tokens: &str, points: impl Fn(Token) -> f64) -> f64 {
    tokens
        .chars()
        .filter_map(Token::from_char)
        .fold(0.0, |total, token| total + points(token))
}
