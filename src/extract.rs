//! Turns one round's standings document into normalized row records.

use anyhow::{anyhow, Result};

use crate::standings::{StandingsResponse, StatBlock};
use crate::tables::{
    PlayedTracker, RoundRecords, Side, StandingsMeta, StatRow, TeamRef, TrackerUpdate,
};

/// Extract all records carried by one round.
///
/// A document without tables or entries is a legitimate empty round. An entry
/// without a team id is malformed; the error discards the whole round at the
/// caller, nothing is partially applied.
///
/// Overall rows and team refs are built for every entry. Home/away rows are
/// filtered by played-count increase when `filter_unplayed` is set; otherwise
/// they are emitted unconditionally, repeating rows for teams idle in that
/// side (the unfiltered variant's documented behavior). Tracker advances are
/// staged in the result and committed by [`DataStore::absorb`].
///
/// [`DataStore::absorb`]: crate::tables::DataStore::absorb
pub fn extract_round(
    doc: &StandingsResponse,
    round: u32,
    filter_unplayed: bool,
    tracker: &PlayedTracker,
) -> Result<RoundRecords> {
    let mut records = RoundRecords {
        meta: extract_meta(doc),
        ..RoundRecords::default()
    };

    let Some(table) = doc.tables.first() else {
        return Ok(records);
    };

    for entry in &table.entries {
        let team_id = entry
            .team
            .id
            .ok_or_else(|| anyhow!("standings entry missing team id"))?;

        records.teams.push(TeamRef {
            id: team_id,
            name: entry.team.name.clone(),
            short_name: entry.team.short_name.clone(),
            code: entry.team.abbr.clone(),
            country: None,
            city: None,
            stadium: None,
            capacity: None,
            logo_url: None,
        });

        records
            .overall
            .push(stat_row(&entry.overall, round, team_id, true));

        for (side, block) in [(Side::Home, &entry.home), (Side::Away, &entry.away)] {
            if filter_unplayed {
                let played = block.played.unwrap_or(0);
                if played <= tracker.last_played(team_id, side) {
                    continue;
                }
                records.tracker_updates.push(TrackerUpdate {
                    team_id,
                    side,
                    played,
                });
            }
            let row = stat_row(block, round, team_id, false);
            match side {
                Side::Home => records.home.push(row),
                Side::Away => records.away.push(row),
            }
        }
    }

    Ok(records)
}

fn stat_row(block: &StatBlock, round: u32, team_id: u32, include_starting_position: bool) -> StatRow {
    // Derived, not read from the wire; the source field can be absent or stale.
    let goal_difference = match (block.goals_for, block.goals_against) {
        (Some(gf), Some(ga)) => Some(gf - ga),
        _ => None,
    };
    StatRow {
        round,
        team_id,
        goals_for: block.goals_for,
        goals_against: block.goals_against,
        goal_difference,
        won: block.won,
        drawn: block.drawn,
        lost: block.lost,
        played: block.played,
        points: block.points,
        position: block.position,
        starting_position: if include_starting_position {
            block.starting_position
        } else {
            None
        },
    }
}

fn extract_meta(doc: &StandingsResponse) -> Option<StandingsMeta> {
    if doc.season.is_none() && doc.competition.is_none() {
        return None;
    }
    let season = doc.season.as_ref();
    let competition = doc.competition.as_ref();
    Some(StandingsMeta {
        season_id: season.and_then(|s| s.id),
        season_name: season.and_then(|s| s.name.clone()),
        competition_id: competition.and_then(|c| c.id),
        competition_name: competition.and_then(|c| c.name.clone()),
        competition_code: competition.and_then(|c| c.code.clone()),
    })
}
