//! In-memory tables for one collection run: row types, the played-count
//! tracker, and the accumulating store.

use std::collections::{HashMap, HashSet};

/// Team reference record. Written at most once per team id; the first
/// observation wins, later ones are discarded even if fields differ.
/// Standings entries fill only the identity fields, the roster resource also
/// fills the venue fields and badge locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: u32,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub stadium: Option<String>,
    pub capacity: Option<u32>,
    pub logo_url: Option<String>,
}

/// One (round, team) statistics row for a single scope.
/// `goal_difference` is always recomputed from goals for/against, never read
/// from the wire. `starting_position` is populated for overall rows only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub round: u32,
    pub team_id: u32,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub goal_difference: Option<i64>,
    pub won: Option<u32>,
    pub drawn: Option<u32>,
    pub lost: Option<u32>,
    pub played: Option<u32>,
    pub points: Option<i64>,
    pub position: Option<u32>,
    pub starting_position: Option<u32>,
}

/// Season/competition metadata, captured from the first round that carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsMeta {
    pub season_id: Option<u32>,
    pub season_name: Option<String>,
    pub competition_id: Option<u32>,
    pub competition_name: Option<String>,
    pub competition_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Last-seen cumulative `played` per team and side. Carried across the whole
/// run, never reset between rounds; used only to decide whether a round
/// produced a new fixture for a team in that side.
#[derive(Debug, Default)]
pub struct PlayedTracker {
    seen: HashMap<u32, TeamPlayed>,
}

#[derive(Debug, Default, Clone, Copy)]
struct TeamPlayed {
    home: u32,
    away: u32,
}

impl PlayedTracker {
    pub fn last_played(&self, team_id: u32, side: Side) -> u32 {
        let entry = self.seen.get(&team_id).copied().unwrap_or_default();
        match side {
            Side::Home => entry.home,
            Side::Away => entry.away,
        }
    }

    pub fn advance(&mut self, team_id: u32, side: Side, played: u32) {
        let entry = self.seen.entry(team_id).or_default();
        match side {
            Side::Home => entry.home = played,
            Side::Away => entry.away = played,
        }
    }
}

/// Tracker advance staged by the extractor, committed only when the whole
/// round absorbs cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerUpdate {
    pub team_id: u32,
    pub side: Side,
    pub played: u32,
}

/// One round's extractor output.
#[derive(Debug, Default)]
pub struct RoundRecords {
    pub teams: Vec<TeamRef>,
    pub overall: Vec<StatRow>,
    pub home: Vec<StatRow>,
    pub away: Vec<StatRow>,
    pub meta: Option<StandingsMeta>,
    pub tracker_updates: Vec<TrackerUpdate>,
}

/// All tables accumulated over one run. Exclusively owned by the run; rows
/// are append-only apart from the team dedup check and tracker advances.
#[derive(Debug, Default)]
pub struct DataStore {
    pub teams: Vec<TeamRef>,
    team_ids: HashSet<u32>,
    pub overall: Vec<StatRow>,
    pub home: Vec<StatRow>,
    pub away: Vec<StatRow>,
    pub meta: Option<StandingsMeta>,
    pub tracker: PlayedTracker,
}

impl DataStore {
    /// First-write-wins insertion keyed by team id. Returns whether the
    /// record was kept.
    pub fn insert_team(&mut self, team: TeamRef) -> bool {
        if !self.team_ids.insert(team.id) {
            return false;
        }
        self.teams.push(team);
        true
    }

    /// Fold one round's records into the tables and commit its tracker
    /// advances. Stat rows are appended as-is; team refs go through the
    /// dedup check; meta is captured only once.
    pub fn absorb(&mut self, records: RoundRecords) {
        for team in records.teams {
            self.insert_team(team);
        }
        self.overall.extend(records.overall);
        self.home.extend(records.home);
        self.away.extend(records.away);
        if self.meta.is_none() {
            self.meta = records.meta;
        }
        for update in records.tracker_updates {
            self.tracker.advance(update.team_id, update.side, update.played);
        }
    }
}
