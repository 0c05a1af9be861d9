//! Price Watch - Headless Server
//!
//! Watches CoinMarketCap prices for a fixed set of assets and emails
//! alerts when configured buy or sell thresholds are crossed.

mod config;
mod health;
mod monitor;

use clap::Parser;
use config::AppConfig;
use monitor::Monitor;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Price Watch CLI
#[derive(Parser, Debug)]
#[command(name = "pricewatch")]
#[command(about = "Crypto price threshold alerting service", long_about = None)]
struct Args {
    /// Run a single evaluation pass and exit
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Seconds between evaluation passes in continuous mode
    #[arg(short, long, default_value_t = 600)]
    interval_secs: u64,

    /// Number of top listings fetched per pass
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Port for the liveness endpoint
    #[arg(long, default_value_t = 8080)]
    health_port: u16,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_logging(&args.log_level);

    info!("🚀 Price Watch starting...");
    info!("  Mode: {}", if args.once { "once" } else { "continuous" });
    info!("  Interval: {}s", args.interval_secs);
    info!("  Fetch limit: {}", args.limit);
    info!("  Health port: {}", args.health_port);

    let mut app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    app_config.monitor.interval = std::time::Duration::from_secs(args.interval_secs);
    app_config.monitor.fetch_limit = args.limit;

    if app_config.recipients.is_empty() {
        warn!("TO_EMAIL is empty, alerts will be evaluated but not emailed");
    } else {
        info!("  Recipients: {}", app_config.recipients.len());
    }
    info!(
        "  Watching {} assets via {}",
        app_config.monitor.watchlist.len(),
        app_config.smtp.host
    );

    let monitor = match Monitor::new(&app_config) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("Setup error: {}", e);
            std::process::exit(1);
        }
    };

    let health_port = args.health_port;
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health::serve(health_port).await {
            error!("Liveness endpoint failed: {}", e);
        }
    });

    if args.once {
        match monitor.run_pass().await {
            Ok(sent) => info!(emails = sent, "Single pass complete"),
            Err(e) => {
                error!(error = %e, "Single pass failed");
                std::process::exit(1);
            }
        }
        health_handle.abort();
        info!("👋 Price Watch stopped");
        return;
    }

    let monitor_handle = tokio::spawn(async move {
        monitor.run_loop().await;
    });

    info!("Press Ctrl+C to stop...");

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");

    warn!("Shutdown signal received");
    monitor_handle.abort();
    health_handle.abort();

    info!("👋 Price Watch stopped");
}
