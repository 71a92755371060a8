use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::IsTerminal;

use crate::scoring::{InvalidScoresheet, ScoreMap, TeamScore};

/// Format a point value. Whole numbers print without a decimal point;
/// fractional values print in full.
pub fn format_points(points: f64) -> String {
    // Avoid "-0" for sums of nothing
    if points == 0.0 {
        return "0".to_string();
    }
    format!("{}", points)
}

/// Format per-team scores as a table with columns: TLA, Zone, Robot, Exit, Total
/// Numeric columns are right-aligned to the widest value (or header)
pub fn format_score_table(breakdown: &BTreeMap<String, TeamScore>, use_colors: bool) -> String {
    if breakdown.is_empty() {
        return "No teams in scoresheet.".to_string();
    }

    let headers = ["TLA", "Zone", "Robot", "Exit", "Total"];
    let rows: Vec<[String; 5]> = breakdown
        .iter()
        .map(|(tla, score)| {
            [
                tla.clone(),
                format_points(score.zone_points),
                format_points(score.robot_points),
                format_points(score.exit_bonus),
                format_points(score.total),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = format!(
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}  {:>w4$}",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        headers[4],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    );

    let lines = rows.iter().map(|row| {
        let tla = format!("{:<width$}", row[0], width = widths[0]);
        let middle = format!(
            "{:>w1$}  {:>w2$}  {:>w3$}",
            row[1],
            row[2],
            row[3],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        let total = format!("{:>width$}", row[4], width = widths[4]);

        if use_colors {
            format!("{}  {}  {}", tla.cyan(), middle, total.bold())
        } else {
            format!("{}  {}  {}", tla, middle, total)
        }
    });

    let header = if use_colors {
        header.dimmed().to_string()
    } else {
        header
    };

    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format team scores as JSON, one key per team
pub fn format_json(scores: &ScoreMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(scores)
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    error: &'a InvalidScoresheet,
}

/// Format a validation failure as JSON: `{"error": {"code": ..., "message": ...}}`
pub fn format_invalid_json(err: &InvalidScoresheet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonFailure { error: err })
}

/// Format a validation failure for a human: "[code] message"
pub fn format_invalid(err: &InvalidScoresheet, use_colors: bool) -> String {
    let code = format!("[{}]", err.code);
    if use_colors {
        format!("{} {}", code.red().bold(), err.message)
    } else {
        format!("{} {}", code, err.message)
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
