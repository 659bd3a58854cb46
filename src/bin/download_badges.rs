//! Fetch the season roster and download each team's badge image. Best-effort:
//! a failed badge is reported and skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pl_standings::config::CollectorConfig;
use pl_standings::fetch::{fetch_json, HttpTransport, RetryPolicy, Transport};
use pl_standings::http_client::http_client;
use pl_standings::teams::{extract_teams, TeamsResponse};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cfg = CollectorConfig::from_env();
    let policy = RetryPolicy {
        max_retries: cfg.max_retries,
        retry_wait: cfg.retry_wait,
    };

    let mut transport = HttpTransport::new(http_client()?);
    let doc: TeamsResponse = fetch_json(
        &mut transport,
        &cfg.teams_url(),
        "Teams",
        &policy,
        &mut |message| println!("{message}"),
    )
    .context("roster fetch failed")?;
    let teams = extract_teams(&doc)?;

    let out_dir = Path::new("team_logos");
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed creating {}", out_dir.display()))?;
    println!("downloading {} badges...", teams.len());

    let mut ok = 0usize;
    let mut failed = 0usize;
    for team in &teams {
        let Some(url) = team.logo_url.as_deref() else {
            continue;
        };
        let name = format!("team_{}.svg", team.id);
        match download_badge(&mut transport, url, &out_dir.join(&name)) {
            Ok(()) => {
                println!("OK   {name}");
                ok += 1;
            }
            Err(err) => {
                println!("FAIL {name}: {err}");
                failed += 1;
            }
        }
    }

    println!("\ndone: {ok} downloaded, {failed} failed");
    Ok(())
}

fn download_badge(transport: &mut impl Transport, url: &str, path: &Path) -> Result<()> {
    let resp = transport.get(url)?;
    if resp.status != 200 {
        anyhow::bail!("HTTP error {}", resp.status);
    }
    fs::write(path, resp.body).with_context(|| format!("failed writing {}", path.display()))
}
