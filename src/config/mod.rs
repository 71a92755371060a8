use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::scoring::ScoringRules;

/// Load scoring rules from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to a rules file. If None, the standard rules are used
///
/// # Errors
///
/// Returns an error if:
/// - The rules file does not exist
/// - The rules file cannot be read
/// - The YAML cannot be parsed
///
/// The loaded rules are not checked for consistency; see [`ScoringRules::validate`].
pub fn load_rules(path: Option<&Path>) -> Result<ScoringRules> {
    let Some(rules_path) = path else {
        return Ok(ScoringRules::default());
    };

    if !rules_path.exists() {
        anyhow::bail!("Rules file not found at {}", rules_path.display());
    }

    let rules_content = fs::read_to_string(rules_path)
        .with_context(|| format!("Failed to read rules file at {}", rules_path.display()))?;

    let rules: ScoringRules = serde_saphyr::from_str(&rules_content).with_context(|| {
        format!("Failed to parse rules: invalid YAML in {}", rules_path.display())
    })?;

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Token;
    use std::env;

    #[test]
    fn test_no_path_gives_default_rules() {
        assert_eq!(load_rules(None).unwrap(), ScoringRules::default());
    }

    #[test]
    fn test_missing_file() {
        let temp_path = env::temp_dir().join("token_scorer_test_missing_rules.yaml");
        let _ = std::fs::remove_file(&temp_path);

        let err = load_rules(Some(temp_path.as_path())).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_path = env::temp_dir().join("token_scorer_test_rules.yaml");
        std::fs::write(
            &temp_path,
            r#"
exit_bonus: 2
tokens:
  B: { arena_points: 3, robot_points: 1, max_count: 20, min_count: 20 }
  S: { arena_points: 12, robot_points: 4, max_count: 12, min_count: 12 }
  G: { arena_points: 30, robot_points: 10, max_count: 5, min_count: 4 }
"#,
        )
        .unwrap();

        let rules = load_rules(Some(temp_path.as_path())).unwrap();
        assert_eq!(rules.exit_bonus, 2.0);
        assert_eq!(rules.tokens[Token::Gold].max_count, 5);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_path = env::temp_dir().join("token_scorer_test_bad_rules.yaml");
        std::fs::write(&temp_path, "tokens: [1, 2").unwrap();

        let err = load_rules(Some(temp_path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse rules"));

        let _ = std::fs::remove_file(&temp_path);
    }
}
