use std::path::PathBuf;
use std::time::Duration;

const BASE_URL: &str = "https://sdp-prem-prod.premier-league-prod.pulselive.com";
const LOGO_URL_BASE: &str = "https://resources.premierleague.com/premierleague25/badges-alt";

/// One collection run over a closed round range of a single season.
///
/// Defaults match the 2024/25 Premier League season. Every field can be
/// overridden from the environment, see [`CollectorConfig::from_env`].
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub competition_id: u32,
    pub season_id: u32,
    pub start_round: u32,
    pub end_round: u32,
    pub max_retries: u32,
    pub retry_wait: Duration,
    /// Emit a home/away row only when the team's cumulative played count for
    /// that side actually advanced. With this off, every round repeats rows
    /// for teams that did not play that side.
    pub filter_unplayed: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            competition_id: 8,
            season_id: 2024,
            start_round: 1,
            end_round: 38,
            max_retries: 3,
            retry_wait: Duration::from_secs(5),
            filter_unplayed: true,
        }
    }
}

impl CollectorConfig {
    /// Build a config from `PL_*` environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            competition_id: env_u32("PL_COMPETITION_ID", defaults.competition_id),
            season_id: env_u32("PL_SEASON_ID", defaults.season_id),
            start_round: env_u32("PL_START_ROUND", defaults.start_round),
            end_round: env_u32("PL_END_ROUND", defaults.end_round),
            max_retries: env_u32("PL_MAX_RETRIES", defaults.max_retries).max(1),
            retry_wait: Duration::from_secs(env_u64(
                "PL_RETRY_WAIT_SECS",
                defaults.retry_wait.as_secs(),
            )),
            filter_unplayed: std::env::var("PL_FILTER_UNPLAYED")
                .ok()
                .and_then(|val| val.parse::<bool>().ok())
                .unwrap_or(defaults.filter_unplayed),
        }
    }

    pub fn standings_url(&self, round: u32) -> String {
        format!(
            "{BASE_URL}/api/v5/competitions/{}/seasons/{}/matchweeks/{round}/standings",
            self.competition_id, self.season_id
        )
    }

    pub fn teams_url(&self) -> String {
        format!(
            "{BASE_URL}/api/v1/competitions/{}/seasons/{}/teams?_limit=20",
            self.competition_id, self.season_id
        )
    }

    /// Display label like `2024/25`.
    pub fn season_label(&self) -> String {
        format!("{}/{:02}", self.season_id, (self.season_id + 1) % 100)
    }

    pub fn default_output_path(&self) -> PathBuf {
        PathBuf::from("data").join(format!(
            "premier_league_table_{}-{:02}.xlsx",
            self.season_id,
            (self.season_id + 1) % 100
        ))
    }
}

pub fn logo_url(team_id: u32) -> String {
    format!("{LOGO_URL_BASE}/{team_id}.svg")
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|val| val.parse::<u32>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
