mod config;
mod error;
mod feed;
mod metrics;
mod notify;
mod state;
mod watcher;

pub use anyhow::Result;
pub use tracing::{info, warn};
use config::Config;
use feed::NamchiangFeed;
use notify::LineNotifier;
use watcher::Schedule;

/// `RUST_LOG` wins when it parses; otherwise the configured `LOG_LEVEL` applies.
fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing("info");
            tracing::error!(error = %err, "failed to load configuration");
            return Err(err.into());
        }
    };

    init_tracing(&config.log_level);

    info!(?config, "gold-price-notifier starting");

    if config.token.is_empty() {
        warn!("LINE_NOTIFY_TOKEN is empty, notifications will be rejected");
    }

    if let Some(port) = config.metrics_port {
        metrics::init_metrics_server(port)?;
        info!(port, "metrics exporter listening");
    }

    let feed = NamchiangFeed::new(config.feed_url.clone());
    let notifier = LineNotifier::new(config.notify_url.clone(), config.token.clone());
    let schedule = Schedule::from_config(&config);

    tokio::select! {
        _ = watcher::run_watcher(Box::new(feed), Box::new(notifier), schedule) => {
            warn!("watcher exited");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
