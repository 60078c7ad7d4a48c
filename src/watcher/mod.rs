pub mod message;

use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::feed::PriceFeed;
use crate::metrics::prometheus::record_price_check;
use crate::notify::Notifier;
use crate::state::LastNotified;
use message::format_message;

/// Delays between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub sleep: Duration,
    pub retry: Duration,
}

impl Schedule {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sleep: config.sleep_interval(),
            retry: config.retry_interval(),
        }
    }
}

/// What happened during one fetch/compare/notify cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    FetchFailed,
    Unchanged,
    Notified,
    NotifyFailed,
}

impl CycleOutcome {
    /// Fetch failures take the retry delay; everything else the normal interval.
    pub fn delay(self, schedule: &Schedule) -> Duration {
        match self {
            CycleOutcome::FetchFailed => schedule.retry,
            _ => schedule.sleep,
        }
    }
}

/// Runs a single cycle against the given state and returns the state to carry
/// into the next one. The state only advances after a successful send.
pub async fn run_cycle(
    feed: &dyn PriceFeed,
    notifier: &dyn Notifier,
    last: LastNotified,
) -> (LastNotified, CycleOutcome) {
    let snapshot = match feed.fetch().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(error = %err, "error fetching gold price");
            return (last, CycleOutcome::FetchFailed);
        }
    };

    debug!(
        buy_price = %snapshot.buy_price,
        sale_price = %snapshot.sale_price,
        gold_spot = %snapshot.gold_spot,
        usd_thb = %snapshot.usd_thb,
        update = %snapshot.update,
        "fetched snapshot"
    );

    if !last.has_changed(&snapshot) {
        record_price_check("unchanged");
        info!("no price change detected");
        return (last, CycleOutcome::Unchanged);
    }

    record_price_check("changed");
    info!(
        buy_price = %snapshot.buy_price,
        sale_price = %snapshot.sale_price,
        previous = ?last.prices(),
        "price change detected"
    );

    let message = format_message(&snapshot);

    match notifier.notify(&message).await {
        Ok(()) => {
            info!(%message, "sent notification");
            (LastNotified::from_snapshot(&snapshot), CycleOutcome::Notified)
        }
        Err(err) => {
            error!(error = %err, "error sending notification");
            (last, CycleOutcome::NotifyFailed)
        }
    }
}

/// Polls forever. Each cycle finishes before the next starts.
pub async fn run_watcher(feed: Box<dyn PriceFeed>, notifier: Box<dyn Notifier>, schedule: Schedule) {
    info!(
        sleep_secs = schedule.sleep.as_secs(),
        retry_secs = schedule.retry.as_secs(),
        "watcher started"
    );

    let mut last = LastNotified::new();

    loop {
        let (next, outcome) = run_cycle(feed.as_ref(), notifier.as_ref(), last).await;
        last = next;

        tokio::time::sleep(outcome.delay(&schedule)).await;
    }
}
