use std::fs;

use pl_standings::export::{
    export_workbook, finalize, meta_sheet_rows, stats_sheet_rows, teams_sheet_rows,
};
use pl_standings::tables::{DataStore, StatRow, TeamRef};

fn team(id: u32) -> TeamRef {
    TeamRef {
        id,
        name: Some(format!("Team {id}")),
        short_name: None,
        code: None,
        country: None,
        city: None,
        stadium: None,
        capacity: None,
        logo_url: None,
    }
}

fn stat(round: u32, team_id: u32, position: Option<u32>) -> StatRow {
    StatRow {
        round,
        team_id,
        goals_for: Some(3),
        goals_against: Some(1),
        goal_difference: Some(2),
        won: Some(1),
        drawn: Some(0),
        lost: Some(0),
        played: Some(round),
        points: Some(3),
        position,
        starting_position: None,
    }
}

#[test]
fn finalize_sorts_each_table_by_its_key() {
    let mut store = DataStore::default();
    store.insert_team(team(21));
    store.insert_team(team(10));
    store.overall.extend([
        stat(2, 10, Some(1)),
        stat(1, 21, Some(2)),
        stat(1, 10, Some(1)),
        stat(2, 21, None),
    ]);

    let tables = finalize(store);

    let ids: Vec<_> = tables.teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![10, 21]);

    let keys: Vec<_> = tables
        .overall
        .iter()
        .map(|r| (r.round, r.position))
        .collect();
    // Within a round teams are ordered by standing; unknown positions last.
    assert_eq!(
        keys,
        vec![(1, Some(1)), (1, Some(2)), (2, Some(1)), (2, None)]
    );
}

#[test]
fn empty_tables_still_render_headers() {
    let tables = finalize(DataStore::default());

    assert_eq!(teams_sheet_rows(&tables.teams).len(), 1);
    assert_eq!(stats_sheet_rows(&tables.overall, true).len(), 1);
    assert_eq!(meta_sheet_rows(tables.meta.as_ref()).len(), 1);

    let path = std::env::temp_dir().join(format!(
        "pl_standings_empty_{}.xlsx",
        std::process::id()
    ));
    let report = export_workbook(&tables, &path).expect("empty export must succeed");
    assert_eq!(report.teams, 0);
    assert_eq!(report.overall, 0);
    assert_eq!(report.home, 0);
    assert_eq!(report.away, 0);
    assert_eq!(report.meta, 0);
    assert!(path.exists());
    let _ = fs::remove_file(path);
}

#[test]
fn workbook_reports_row_counts_per_sheet() {
    let mut store = DataStore::default();
    store.insert_team(team(10));
    store.overall.push(stat(1, 10, Some(1)));
    store.home.push(stat(1, 10, Some(1)));
    let tables = finalize(store);

    let path = std::env::temp_dir().join(format!(
        "pl_standings_counts_{}.xlsx",
        std::process::id()
    ));
    let report = export_workbook(&tables, &path).expect("export must succeed");
    assert_eq!(report.teams, 1);
    assert_eq!(report.overall, 1);
    assert_eq!(report.home, 1);
    assert_eq!(report.away, 0);
    let _ = fs::remove_file(path);
}

#[test]
fn overall_sheet_carries_starting_position_column() {
    let header = &stats_sheet_rows(&[], true)[0];
    assert_eq!(header.last().map(String::as_str), Some("starting_position"));
    let header = &stats_sheet_rows(&[], false)[0];
    assert_eq!(header.last().map(String::as_str), Some("position"));
}

#[test]
fn stats_rows_round_trip_through_rendering() {
    let rows = vec![
        StatRow {
            round: 1,
            team_id: 10,
            goals_for: Some(2),
            goals_against: Some(0),
            goal_difference: Some(2),
            won: Some(1),
            drawn: Some(0),
            lost: Some(0),
            played: Some(1),
            points: Some(3),
            position: Some(1),
            starting_position: Some(4),
        },
        StatRow {
            round: 2,
            team_id: 21,
            goals_for: None,
            goals_against: None,
            goal_difference: None,
            won: None,
            drawn: None,
            lost: None,
            played: Some(2),
            points: None,
            position: None,
            starting_position: None,
        },
    ];

    let rendered = stats_sheet_rows(&rows, true);
    let parsed: Vec<StatRow> = rendered[1..].iter().map(|cells| parse_cells(cells)).collect();
    assert_eq!(parsed, rows);
}

fn parse_cells(cells: &[String]) -> StatRow {
    fn opt<T: std::str::FromStr>(cell: &str) -> Option<T> {
        if cell.is_empty() { None } else { cell.parse().ok() }
    }
    StatRow {
        round: cells[0].parse().expect("round cell"),
        team_id: cells[1].parse().expect("team id cell"),
        goals_for: opt(&cells[2]),
        goals_against: opt(&cells[3]),
        goal_difference: opt(&cells[4]),
        won: opt(&cells[5]),
        drawn: opt(&cells[6]),
        lost: opt(&cells[7]),
        played: opt(&cells[8]),
        points: opt(&cells[9]),
        position: opt(&cells[10]),
        starting_position: opt(&cells[11]),
    }
}
