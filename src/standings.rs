//! Wire types for the per-round standings document.
//!
//! Only the consumed subset is modeled. Everything is optional at this layer;
//! the extractor decides which absences are malformed.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct StandingsResponse {
    pub competition: Option<CompetitionInfo>,
    pub season: Option<SeasonInfo>,
    pub matchweek: Option<u32>,
    #[serde(default)]
    pub tables: Vec<StandingsTable>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompetitionInfo {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonInfo {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsTable {
    #[serde(default)]
    pub entries: Vec<StandingsEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsEntry {
    #[serde(default)]
    pub team: TeamBlock,
    #[serde(default)]
    pub overall: StatBlock,
    #[serde(default)]
    pub home: StatBlock,
    #[serde(default)]
    pub away: StatBlock,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamBlock {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub abbr: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
}

/// One cumulative statistics block (overall, home or away).
/// `starting_position` is only ever present on the overall block.
#[derive(Debug, Default, Deserialize)]
pub struct StatBlock {
    #[serde(rename = "goalsFor")]
    pub goals_for: Option<i64>,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: Option<i64>,
    pub won: Option<u32>,
    pub drawn: Option<u32>,
    pub lost: Option<u32>,
    pub played: Option<u32>,
    pub points: Option<i64>,
    pub position: Option<u32>,
    #[serde(rename = "startingPosition")]
    pub starting_position: Option<u32>,
}
