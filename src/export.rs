//! Table finalizer and workbook writer: sort each accumulated table by its
//! key and emit one sheet per table.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::tables::{DataStore, StandingsMeta, StatRow, TeamRef};

/// Per-sheet row counts for the final summary (header rows excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub teams: usize,
    pub overall: usize,
    pub home: usize,
    pub away: usize,
    pub meta: usize,
}

/// Sorted, export-ready tables.
#[derive(Debug)]
pub struct Tables {
    pub teams: Vec<TeamRef>,
    pub overall: Vec<StatRow>,
    pub home: Vec<StatRow>,
    pub away: Vec<StatRow>,
    pub meta: Option<StandingsMeta>,
}

/// Consume the store and sort every table by its defined key: teams by id,
/// stats by (round, position) with absent positions last.
pub fn finalize(store: DataStore) -> Tables {
    let mut tables = Tables {
        teams: store.teams,
        overall: store.overall,
        home: store.home,
        away: store.away,
        meta: store.meta,
    };
    tables.teams.sort_by_key(|team| team.id);
    for stats in [&mut tables.overall, &mut tables.home, &mut tables.away] {
        stats.sort_by_key(|row| (row.round, row.position.unwrap_or(u32::MAX)));
    }
    tables
}

/// Write the workbook, one sheet per table. Empty tables still produce a
/// well-formed sheet with the header row. Failures here are fatal to the run.
pub fn export_workbook(tables: &Tables, path: &Path) -> Result<ExportReport> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }

    let sheets = [
        ("teams", teams_sheet_rows(&tables.teams)),
        ("overall_stats", stats_sheet_rows(&tables.overall, true)),
        ("home_stats", stats_sheet_rows(&tables.home, false)),
        ("away_stats", stats_sheet_rows(&tables.away, false)),
        ("standings_meta", meta_sheet_rows(tables.meta.as_ref())),
    ];

    let mut workbook = Workbook::new();
    let mut counts = [0usize; 5];
    for ((name, rows), count) in sheets.iter().zip(counts.iter_mut()) {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name)?;
        write_rows(sheet, rows)?;
        *count = rows.len().saturating_sub(1);
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        teams: counts[0],
        overall: counts[1],
        home: counts[2],
        away: counts[3],
        meta: counts[4],
    })
}

pub fn teams_sheet_rows(teams: &[TeamRef]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "ID".to_string(),
        "code".to_string(),
        "short_name".to_string(),
        "name".to_string(),
        "country".to_string(),
        "city".to_string(),
        "stadium".to_string(),
        "capacity".to_string(),
        "logo_URL".to_string(),
    ]];
    rows.extend(teams.iter().map(team_row));
    rows
}

pub fn stats_sheet_rows(stats: &[StatRow], include_starting_position: bool) -> Vec<Vec<String>> {
    let mut header = vec![
        "round".to_string(),
        "ID".to_string(),
        "goals_for".to_string(),
        "goals_against".to_string(),
        "goal_difference".to_string(),
        "won".to_string(),
        "drawn".to_string(),
        "lost".to_string(),
        "played".to_string(),
        "points".to_string(),
        "position".to_string(),
    ];
    if include_starting_position {
        header.push("starting_position".to_string());
    }
    let mut rows = vec![header];
    rows.extend(
        stats
            .iter()
            .map(|row| stat_row_cells(row, include_starting_position)),
    );
    rows
}

pub fn meta_sheet_rows(meta: Option<&StandingsMeta>) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "season_id".to_string(),
        "season_name".to_string(),
        "competition_id".to_string(),
        "competition_name".to_string(),
        "competition_code".to_string(),
    ]];
    if let Some(meta) = meta {
        rows.push(vec![
            opt_to_string(meta.season_id),
            meta.season_name.clone().unwrap_or_default(),
            opt_to_string(meta.competition_id),
            meta.competition_name.clone().unwrap_or_default(),
            meta.competition_code.clone().unwrap_or_default(),
        ]);
    }
    rows
}

fn team_row(team: &TeamRef) -> Vec<String> {
    vec![
        team.id.to_string(),
        team.code.clone().unwrap_or_default(),
        team.short_name.clone().unwrap_or_default(),
        team.name.clone().unwrap_or_default(),
        team.country.clone().unwrap_or_default(),
        team.city.clone().unwrap_or_default(),
        team.stadium.clone().unwrap_or_default(),
        opt_to_string(team.capacity),
        team.logo_url.clone().unwrap_or_default(),
    ]
}

fn stat_row_cells(row: &StatRow, include_starting_position: bool) -> Vec<String> {
    let mut cells = vec![
        row.round.to_string(),
        row.team_id.to_string(),
        opt_to_string(row.goals_for),
        opt_to_string(row.goals_against),
        opt_to_string(row.goal_difference),
        opt_to_string(row.won),
        opt_to_string(row.drawn),
        opt_to_string(row.lost),
        opt_to_string(row.played),
        opt_to_string(row.points),
        opt_to_string(row.position),
    ];
    if include_starting_position {
        cells.push(opt_to_string(row.starting_position));
    }
    cells
}

fn opt_to_string<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
