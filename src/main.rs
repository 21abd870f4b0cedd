//! Pixel Event Analytics Tool
//!
//! A command-line tool that fetches a shop's pixel-tracking events, buckets
//! them into time-of-day intervals, and renders a line chart image.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pixelstats::app::App;
use pixelstats::config::Config;
use pixelstats::fetch::EventClient;
use pixelstats::plotting::render_chart_async;
use pixelstats::types::EventFilter;

#[derive(Parser)]
#[command(name = "pixelstats", version, about = "Aggregate and chart e-commerce pixel events")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "pixelstats.toml")]
    config: PathBuf,

    /// Override the configured shop domain
    #[arg(long)]
    shop: Option<String>,

    /// Event filter: "All events" or a single event kind
    #[arg(long, default_value = EventFilter::ALL_LABEL)]
    filter: String,

    /// Where to write the rendered chart
    #[arg(long, default_value = "event_activity.png")]
    out: PathBuf,

    /// Keep refreshing on the configured interval instead of rendering once
    #[arg(long)]
    watch: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(verbose >= 2)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(shop) = cli.shop {
        config.shop = shop;
    }

    let client = Arc::new(EventClient::new(config.endpoint.clone())?);
    let app = Arc::new(Mutex::new(App::new(config.boundaries.clone())));
    app.lock()
        .unwrap()
        .select_filter(EventFilter::from(cli.filter.as_str()));

    info!(shop = %config.shop, filter = %cli.filter, "starting refresh cycle");
    refresh(&app, &client, &config.shop, &cli.out).await;

    if cli.watch {
        let mut ticker = tokio::time::interval(Duration::from_secs(config.refresh_secs.max(1)));
        ticker.tick().await; // the first tick fires immediately; already refreshed above
        loop {
            ticker.tick().await;
            let app = Arc::clone(&app);
            let client = Arc::clone(&client);
            let shop = config.shop.clone();
            let out = cli.out.clone();
            // Cycles may overlap when the endpoint is slower than the
            // interval; the generation check keeps only the newest response.
            tokio::spawn(async move {
                refresh(&app, &client, &shop, &out).await;
            });
        }
    }

    Ok(())
}

/// Run one fetch-aggregate-render cycle.
///
/// Every failure is logged and leaves the previous chart in place; nothing
/// here takes the process down.
async fn refresh(app: &Arc<Mutex<App>>, client: &EventClient, shop: &str, out: &Path) {
    let generation = app.lock().unwrap().begin_fetch();
    let outcome = client.fetch_events(shop).await;

    let applied = app.lock().unwrap().apply_fetch(generation, outcome);
    if !applied {
        return;
    }

    let data = app.lock().unwrap().chart_data();
    match render_chart_async(data, out.to_path_buf()).await {
        Ok(()) => info!(path = %out.display(), "chart updated"),
        Err(e) => error!(error = %e, "failed to render chart"),
    }
}
