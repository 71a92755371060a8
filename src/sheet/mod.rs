mod schema;

pub use schema::ScoresheetDocument;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Blank scoresheet for a four-team match with every token in its
/// starting zone
pub const TEMPLATE: &str = include_str!("../../template.yaml");

/// Parse a scoresheet from YAML text
pub fn parse_scoresheet(content: &str) -> Result<ScoresheetDocument> {
    serde_saphyr::from_str(content).context("Failed to parse scoresheet: invalid YAML")
}

/// Load a scoresheet from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_scoresheet(path: &Path) -> Result<ScoresheetDocument> {
    if !path.exists() {
        anyhow::bail!("Scoresheet not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scoresheet at {}", path.display()))?;

    parse_scoresheet(&content).with_context(|| format!("Invalid scoresheet in {}", path.display()))
}

/// The embedded template, parsed
pub fn template() -> Result<ScoresheetDocument> {
    parse_scoresheet(TEMPLATE)
}
