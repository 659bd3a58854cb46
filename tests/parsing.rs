use std::fs;
use std::path::PathBuf;

use pl_standings::extract::extract_round;
use pl_standings::standings::StandingsResponse;
use pl_standings::tables::PlayedTracker;
use pl_standings::teams::{extract_teams, TeamsResponse};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn round_doc(name: &str) -> StandingsResponse {
    serde_json::from_str(&read_fixture(name)).expect("fixture should parse")
}

#[test]
fn extracts_full_round_fixture() {
    let doc = round_doc("standings_round.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 1, true, &tracker).expect("fixture should extract");

    assert_eq!(records.teams.len(), 2);
    assert_eq!(records.teams[0].id, 10);
    assert_eq!(records.teams[0].name.as_deref(), Some("Arsenal"));
    assert_eq!(records.teams[0].code.as_deref(), Some("ARS"));

    assert_eq!(records.overall.len(), 2);
    let arsenal = &records.overall[0];
    assert_eq!(arsenal.round, 1);
    assert_eq!(arsenal.team_id, 10);
    assert_eq!(arsenal.played, Some(1));
    assert_eq!(arsenal.points, Some(3));
    assert_eq!(arsenal.starting_position, Some(4));
}

#[test]
fn goal_difference_is_recomputed() {
    let doc = round_doc("standings_round.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 1, true, &tracker).expect("fixture should extract");

    assert_eq!(records.overall[0].goal_difference, Some(2));
    assert_eq!(records.overall[1].goal_difference, Some(-3));
}

#[test]
fn starting_position_only_on_overall_rows() {
    let doc = round_doc("standings_round.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 1, false, &tracker).expect("fixture should extract");

    assert!(records.overall.iter().all(|r| r.starting_position.is_some()));
    assert!(records.home.iter().all(|r| r.starting_position.is_none()));
    assert!(records.away.iter().all(|r| r.starting_position.is_none()));
}

#[test]
fn filtered_round_skips_sides_without_new_fixtures() {
    let doc = round_doc("standings_round.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 1, true, &tracker).expect("fixture should extract");

    // Arsenal played home only, Everton away only.
    assert_eq!(records.home.len(), 1);
    assert_eq!(records.home[0].team_id, 10);
    assert_eq!(records.away.len(), 1);
    assert_eq!(records.away[0].team_id, 21);
    assert_eq!(records.tracker_updates.len(), 2);
}

#[test]
fn unfiltered_round_emits_every_side() {
    let doc = round_doc("standings_round.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 1, false, &tracker).expect("fixture should extract");

    assert_eq!(records.home.len(), 2);
    assert_eq!(records.away.len(), 2);
    assert!(records.tracker_updates.is_empty());
}

#[test]
fn meta_is_captured_when_present() {
    let doc = round_doc("standings_round.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 1, true, &tracker).expect("fixture should extract");

    let meta = records.meta.expect("fixture carries season info");
    assert_eq!(meta.season_id, Some(2024));
    assert_eq!(meta.season_name.as_deref(), Some("2024/25"));
    assert_eq!(meta.competition_id, Some(8));
    assert_eq!(meta.competition_code.as_deref(), Some("EN_PR"));
}

#[test]
fn empty_tables_round_is_a_noop() {
    let doc = round_doc("standings_empty.json");
    let tracker = PlayedTracker::default();
    let records = extract_round(&doc, 3, true, &tracker).expect("empty round is legitimate");

    assert!(records.teams.is_empty());
    assert!(records.overall.is_empty());
    assert!(records.home.is_empty());
    assert!(records.away.is_empty());
    assert!(records.meta.is_none());
}

#[test]
fn missing_team_id_is_a_malformed_round() {
    let doc = round_doc("standings_no_team_id.json");
    let tracker = PlayedTracker::default();
    let err = extract_round(&doc, 2, true, &tracker).expect_err("missing id should fail");
    assert!(err.to_string().contains("team id"));
}

#[test]
fn roster_fixture_builds_full_reference_records() {
    let doc: TeamsResponse =
        serde_json::from_str(&read_fixture("teams.json")).expect("fixture should parse");
    let teams = extract_teams(&doc).expect("fixture should extract");

    assert_eq!(teams.len(), 2);
    let arsenal = &teams[0];
    assert_eq!(arsenal.id, 10);
    assert_eq!(arsenal.stadium.as_deref(), Some("Emirates Stadium"));
    assert_eq!(arsenal.city.as_deref(), Some("London"));
    assert_eq!(arsenal.capacity, Some(60704));
    assert_eq!(
        arsenal.logo_url.as_deref(),
        Some("https://resources.premierleague.com/premierleague25/badges-alt/10.svg")
    );
}

#[test]
fn roster_entry_without_id_is_malformed() {
    let doc: TeamsResponse =
        serde_json::from_str(r#"{"data":[{"name":"Mystery FC"}]}"#).expect("should parse");
    assert!(extract_teams(&doc).is_err());
}
