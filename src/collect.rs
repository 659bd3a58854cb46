//! Sequential collection driver: roster first, then one standings fetch per
//! round in ascending order. A failed or malformed round is skipped, never
//! fatal.

use crate::config::CollectorConfig;
use crate::extract::extract_round;
use crate::fetch::{fetch_json, RetryPolicy, Transport};
use crate::standings::StandingsResponse;
use crate::tables::DataStore;
use crate::teams::{extract_teams, TeamsResponse};

pub struct CollectProgress {
    /// Rounds attempted so far.
    pub current: usize,
    /// Total rounds in the configured range.
    pub total: usize,
    pub message: String,
}

/// Run one full collection. Rounds are fetched strictly one at a time in
/// increasing order; the only suspension point is the retry backoff inside
/// the fetcher. The returned store owns every table.
pub fn collect_season<T: Transport + ?Sized>(
    cfg: &CollectorConfig,
    transport: &mut T,
    mut on_progress: impl FnMut(CollectProgress),
) -> DataStore {
    let policy = RetryPolicy {
        max_retries: cfg.max_retries,
        retry_wait: cfg.retry_wait,
    };
    let total = (cfg.end_round.saturating_sub(cfg.start_round) + 1) as usize;
    let mut current = 0usize;
    let mut store = DataStore::default();

    let mut report = |current: usize, message: String| {
        on_progress(CollectProgress {
            current,
            total,
            message,
        });
    };

    let teams_doc: Option<TeamsResponse> = fetch_json(
        transport,
        &cfg.teams_url(),
        "Teams",
        &policy,
        &mut |message| report(0, message),
    );
    match teams_doc.as_ref().map(extract_teams) {
        Some(Ok(teams)) => {
            let count = teams.len();
            for team in teams {
                store.insert_team(team);
            }
            report(0, format!("loaded {count} team records"));
        }
        Some(Err(err)) => {
            report(0, format!("[Teams] malformed roster, skipped: {err}"));
        }
        None => {
            report(0, "[Teams] unavailable, collecting standings only".to_string());
        }
    }

    for round in cfg.start_round..=cfg.end_round {
        let context = format!("Round {round}");
        let doc: Option<StandingsResponse> = fetch_json(
            transport,
            &cfg.standings_url(round),
            &context,
            &policy,
            &mut |message| report(current, message),
        );
        current += 1;

        let Some(doc) = doc else {
            report(current, format!("[{context}] no data, round skipped"));
            continue;
        };

        match extract_round(&doc, round, cfg.filter_unplayed, &store.tracker) {
            Ok(records) => {
                let rows = records.overall.len();
                store.absorb(records);
                report(current, format!("[{context}] collected {rows} entries"));
            }
            Err(err) => {
                report(current, format!("[{context}] malformed round discarded: {err}"));
            }
        }
    }

    store
}
