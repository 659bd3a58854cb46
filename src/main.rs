use anyhow::Result;

use pl_standings::collect::collect_season;
use pl_standings::config::CollectorConfig;
use pl_standings::export::{export_workbook, finalize};
use pl_standings::fetch::HttpTransport;
use pl_standings::http_client::http_client;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cfg = CollectorConfig::from_env();

    println!(
        "=== Premier League Data Collection ({}) ===",
        cfg.season_label()
    );
    println!(
        "collecting rounds {}-{}...",
        cfg.start_round, cfg.end_round
    );

    let mut transport = HttpTransport::new(http_client()?);
    let store = collect_season(&cfg, &mut transport, |progress| {
        println!("[{}/{}] {}", progress.current, progress.total, progress.message);
    });

    let tables = finalize(store);
    let path = cfg.default_output_path();
    let report = export_workbook(&tables, &path)?;

    println!("\nsaved: {}", path.display());
    println!("  teams:          {} rows", report.teams);
    println!("  overall_stats:  {} rows", report.overall);
    println!("  home_stats:     {} rows", report.home);
    println!("  away_stats:     {} rows", report.away);
    println!("  standings_meta: {} rows", report.meta);

    Ok(())
}
