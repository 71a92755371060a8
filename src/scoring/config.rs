use enum_map::{enum_map, EnumMap};
use serde::{Deserialize, Serialize};

use super::token::Token;

/// Robot-held tokens are worth a third of what they earn in a zone.
const ROBOT_POINTS_DIVISOR: f64 = 3.0;

/// Finite and not negative. NaN fails both.
fn is_valid_points(points: f64) -> bool {
    points.is_finite() && points >= 0.0
}

fn default_exit_bonus() -> f64 {
    1.0
}

/// Scoring rules for a round.
///
/// The point and count tables are keyed by [`Token`], so every token type
/// always has an entry in each of them.
///
/// Example YAML:
/// ```yaml
/// exit_bonus: 1
/// tokens:
///   B: { arena_points: 3, robot_points: 1, max_count: 20, min_count: 20 }
///   S: { arena_points: 12, robot_points: 4, max_count: 12, min_count: 12 }
///   G: { arena_points: 30, robot_points: 10, max_count: 4, min_count: 4 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringRules {
    /// Per-token point values and count limits
    pub tokens: EnumMap<Token, TokenRules>,

    /// Awarded to a team whose robot left its scoring zone (default: 1)
    #[serde(default = "default_exit_bonus")]
    pub exit_bonus: f64,
}

/// Point values and count limits for one token type.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TokenRules {
    /// Points for each token of this type lying in a team's zone
    pub arena_points: f64,

    /// Points for each token of this type held by a team's robot
    pub robot_points: f64,

    /// Most tokens of this type that exist in the arena
    pub max_count: usize,

    /// Fewest tokens of this type that must be seen somewhere in the round
    pub min_count: usize,
}

impl TokenRules {
    /// Rules for a token type where every one of `count` tokens must be
    /// accounted for, and robots score a third of the arena value.
    pub fn new(arena_points: f64, count: usize) -> Self {
        Self {
            arena_points,
            robot_points: arena_points / ROBOT_POINTS_DIVISOR,
            max_count: count,
            min_count: count,
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            tokens: enum_map! {
                Token::Bronze => TokenRules::new(3.0, 20),
                Token::Silver => TokenRules::new(12.0, 12),
                Token::Gold => TokenRules::new(30.0, 4),
            },
            exit_bonus: default_exit_bonus(),
        }
    }
}

impl ScoringRules {
    /// Check the rules for internal consistency.
    /// Returns all problems at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (token, rules) in &self.tokens {
            let key = token.symbol();
            if !is_valid_points(rules.arena_points) {
                errors.push(format!(
                    "tokens.{}.arena_points: must be a non-negative number",
                    key
                ));
            }
            if !is_valid_points(rules.robot_points) {
                errors.push(format!(
                    "tokens.{}.robot_points: must be a non-negative number",
                    key
                ));
            }
            if rules.min_count > rules.max_count {
                errors.push(format!(
                    "tokens.{}: min_count ({}) exceeds max_count ({})",
                    key, rules.min_count, rules.max_count
                ));
            }
        }

        if !is_valid_points(self.exit_bonus) {
            errors.push("exit_bonus: must be a non-negative number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_rules() {
        let rules = ScoringRules::default();

        assert_eq!(rules.tokens[Token::Bronze], TokenRules::new(3.0, 20));
        assert_eq!(rules.tokens[Token::Silver].arena_points, 12.0);
        assert_eq!(rules.tokens[Token::Silver].robot_points, 4.0);
        assert_eq!(rules.tokens[Token::Gold].robot_points, 10.0);
        assert_eq!(rules.tokens[Token::Gold].max_count, 4);
        assert_eq!(rules.exit_bonus, 1.0);
    }

    #[test]
    fn test_default_tables_share_keys() {
        let rules = ScoringRules::default();
        let keys: Vec<Token> = rules.tokens.iter().map(|(token, _)| token).collect();
        assert_eq!(keys, Token::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_default_minimums_match_maximums() {
        let rules = ScoringRules::default();
        for (_, token_rules) in &rules.tokens {
            assert_eq!(token_rules.min_count, token_rules.max_count);
        }
    }

    #[test]
    fn test_default_robot_points_are_a_third() {
        let rules = ScoringRules::default();
        for (_, token_rules) in &rules.tokens {
            assert_eq!(token_rules.robot_points * 3.0, token_rules.arena_points);
        }
    }

    #[test]
    fn test_default_rules_are_valid() {
        assert!(ScoringRules::default().validate().is_ok());
    }

    #[test]
    fn test_rules_serde_roundtrip() {
        let rules = ScoringRules::default();
        let yaml = serde_saphyr::to_string(&rules).unwrap();
        let parsed: ScoringRules = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(rules, parsed);
    }

    #[test]
    fn test_full_rules_parse() {
        let yaml = r#"
exit_bonus: 5
tokens:
  B: { arena_points: 1, robot_points: 0.5, max_count: 10, min_count: 8 }
  S: { arena_points: 2, robot_points: 1, max_count: 6, min_count: 6 }
  G: { arena_points: 9, robot_points: 3, max_count: 2, min_count: 0 }
"#;
        let rules: ScoringRules = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(rules.exit_bonus, 5.0);
        assert_eq!(rules.tokens[Token::Bronze].robot_points, 0.5);
        assert_eq!(rules.tokens[Token::Bronze].min_count, 8);
        assert_eq!(rules.tokens[Token::Gold].min_count, 0);
    }

    #[test]
    fn test_exit_bonus_defaults() {
        let yaml = r#"
tokens:
  B: { arena_points: 3, robot_points: 1, max_count: 20, min_count: 20 }
  S: { arena_points: 12, robot_points: 4, max_count: 12, min_count: 12 }
  G: { arena_points: 30, robot_points: 10, max_count: 4, min_count: 4 }
"#;
        let rules: ScoringRules = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(rules, ScoringRules::default());
    }

    #[test]
    fn test_missing_token_rejected() {
        let yaml = r#"
tokens:
  B: { arena_points: 3, robot_points: 1, max_count: 20, min_count: 20 }
  S: { arena_points: 12, robot_points: 4, max_count: 12, min_count: 12 }
"#;
        assert!(serde_saphyr::from_str::<ScoringRules>(yaml).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
bonus: 1
tokens:
  B: { arena_points: 3, robot_points: 1, max_count: 20, min_count: 20 }
  S: { arena_points: 12, robot_points: 4, max_count: 12, min_count: 12 }
  G: { arena_points: 30, robot_points: 10, max_count: 4, min_count: 4 }
"#;
        assert!(serde_saphyr::from_str::<ScoringRules>(yaml).is_err());
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut rules = ScoringRules::default();
        rules.tokens[Token::Gold].min_count = 5;

        let errors = rules.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("tokens.G"));
    }

    #[test]
    fn test_nan_points_rejected() {
        let yaml = r#"
exit_bonus: .nan
tokens:
  B: { arena_points: .nan, robot_points: 1, max_count: 20, min_count: 20 }
  S: { arena_points: 12, robot_points: 4, max_count: 12, min_count: 12 }
  G: { arena_points: 30, robot_points: 10, max_count: 4, min_count: 4 }
"#;
        let rules: ScoringRules = serde_saphyr::from_str(yaml).unwrap();
        assert!(rules.exit_bonus.is_nan());

        let errors = rules.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("tokens.B.arena_points"));
        assert!(errors[1].contains("exit_bonus"));
    }

    #[test]
    fn test_infinite_points_rejected() {
        let mut rules = ScoringRules::default();
        rules.tokens[Token::Gold].robot_points = f64::INFINITY;
        rules.tokens[Token::Silver].arena_points = f64::NEG_INFINITY;

        let errors = rules.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("tokens.S.arena_points"));
        assert!(errors[1].contains("tokens.G.robot_points"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut rules = ScoringRules::default();
        rules.tokens[Token::Bronze].arena_points = -1.0; // Error 1
        rules.tokens[Token::Silver].robot_points = -1.0; // Error 2
        rules.exit_bonus = -2.0; // Error 3

        let errors = rules.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("tokens.B.arena_points"));
        assert!(errors[1].contains("tokens.S.robot_points"));
        assert!(errors[2].contains("exit_bonus"));
    }
}
