mod report;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "clipscout")]
#[command(about = "Find Great Clips coupons that apply to a given area")]
struct Cli {
    /// Area to match in coupon terms, e.g. "Wilmington" or "Kansas City".
    #[arg(long)]
    area: String,

    /// Results requested from each search backend.
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Print matches as JSON instead of the text block.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = clipscout_core::load_scout_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let scout = clipscout_scraper::CouponScout::new(&config, &cli.area)
        .map_err(|e| anyhow::anyhow!("failed to start coupon search: {e}"))?;
    tracing::info!(area = scout.target_area(), limit = cli.limit, "starting coupon search");

    let found = scout
        .run_with_progress(cli.limit, |p| {
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\r{}", report::progress_line(p));
            if p.processed == p.total {
                let _ = writeln!(stderr);
            }
        })
        .await;

    if cli.json {
        println!("{}", report::render_json(&found)?);
    } else if !found.is_empty() {
        print!("{}", report::render_text(&found));
    }

    Ok(())
}

#[cfg(test)]
mod tests;
