//! Roster resource: the richer team reference records, venue metadata
//! included.

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::config::logo_url;
use crate::tables::TeamRef;

#[derive(Debug, Default, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub data: Vec<RosterTeam>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterTeam {
    pub id: Option<u32>,
    pub abbr: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    pub name: Option<String>,
    pub stadium: Option<StadiumInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StadiumInfo {
    pub country: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,
    pub capacity: Option<u32>,
}

/// Build full reference records from the roster document. Any entry without
/// an id makes the whole document malformed; the caller degrades to
/// standings-only collection.
pub fn extract_teams(doc: &TeamsResponse) -> Result<Vec<TeamRef>> {
    doc.data
        .iter()
        .map(|team| {
            let id = team.id.ok_or_else(|| anyhow!("roster entry missing team id"))?;
            let stadium = team.stadium.as_ref();
            Ok(TeamRef {
                id,
                name: team.name.clone(),
                short_name: team.short_name.clone(),
                code: team.abbr.clone(),
                country: stadium.and_then(|s| s.country.clone()),
                city: stadium.and_then(|s| s.city.clone()),
                stadium: stadium.and_then(|s| s.name.clone()),
                capacity: stadium.and_then(|s| s.capacity),
                logo_url: Some(logo_url(id)),
            })
        })
        .collect()
}
