use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::{TeamRecord, ZoneId, ZoneRecord};
use crate::sheet::ScoresheetDocument;

const TEAM_TLA: &str = "team_tla";
const PRESENT: &str = "present";
const LEFT_SCORING_ZONE: &str = "left_scoring_zone";
const ROBOT_TOKENS: &str = "robot_tokens";
const ZONE_TOKENS: &str = "zone_tokens";

/// Submitted form fields. Checkboxes only appear when ticked.
pub type FormData = BTreeMap<String, String>;

/// Values used to fill in a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Flag(bool),
    Text(String),
}

pub type FormValues = BTreeMap<String, FormValue>;

fn field(name: &str, zone: ZoneId) -> String {
    format!("{}_{}", name, zone)
}

fn text(form: &FormData, name: &str, zone: ZoneId) -> String {
    form.get(&field(name, zone)).cloned().unwrap_or_default()
}

fn ticked(form: &FormData, name: &str, zone: ZoneId) -> bool {
    form.contains_key(&field(name, zone))
}

/// Slots of a match, in zone order. An empty slot (or empty TLA) means no
/// team plays from that zone.
fn occupied_slots(slots: &[Option<String>]) -> impl Iterator<Item = (ZoneId, &str)> {
    (0..)
        .zip(slots)
        .filter_map(|(zone, tla)| match tla.as_deref() {
            Some(tla) if !tla.is_empty() => Some((zone, tla)),
            _ => None,
        })
}

/// Read one team's record from the form fields of its zone
pub fn form_team_to_record(form: &FormData, zone: ZoneId) -> TeamRecord {
    TeamRecord {
        zone,
        robot_tokens: text(form, ROBOT_TOKENS, zone),
        left_scoring_zone: ticked(form, LEFT_SCORING_ZONE, zone),
        present: ticked(form, PRESENT, zone),
    }
}

/// Build a scoresheet from a submitted form
pub fn form_to_scoresheet(slots: &[Option<String>], form: &FormData) -> ScoresheetDocument {
    let teams = occupied_slots(slots)
        .map(|(zone, tla)| (tla.to_string(), form_team_to_record(form, zone)))
        .collect();
    let arena_zones = (0..)
        .zip(slots)
        .map(|(zone, _)| (zone, ZoneRecord::new(text(form, ZONE_TOKENS, zone))))
        .collect();

    ScoresheetDocument {
        teams,
        arena_zones,
        other: None,
    }
}

/// Fill in a form from a stored scoresheet
pub fn scoresheet_to_form(document: &ScoresheetDocument) -> FormValues {
    let mut form = FormValues::new();

    for (tla, team) in &document.teams {
        let zone = team.zone;
        form.insert(field(TEAM_TLA, zone), FormValue::Text(tla.clone()));
        form.insert(field(PRESENT, zone), FormValue::Flag(team.present));
        form.insert(
            field(LEFT_SCORING_ZONE, zone),
            FormValue::Flag(team.left_scoring_zone),
        );
        form.insert(
            field(ROBOT_TOKENS, zone),
            FormValue::Text(team.robot_tokens.clone()),
        );
    }

    for (zone, record) in &document.arena_zones {
        form.insert(
            field(ZONE_TOKENS, *zone),
            FormValue::Text(record.tokens.clone()),
        );
    }

    form
}

/// Blank form for a match that has not been scored yet
pub fn match_to_form(slots: &[Option<String>]) -> FormValues {
    let mut form = FormValues::new();

    for (zone, tla) in occupied_slots(slots) {
        form.insert(field(TEAM_TLA, zone), FormValue::Text(tla.to_string()));
        form.insert(field(PRESENT, zone), FormValue::Flag(true));
        form.insert(field(LEFT_SCORING_ZONE, zone), FormValue::Flag(false));
        form.insert(field(ROBOT_TOKENS, zone), FormValue::Text(String::new()));
    }

    for zone in (0..).take(slots.len()) {
        form.insert(field(ZONE_TOKENS, zone), FormValue::Text(String::new()));
    }

    form
}
