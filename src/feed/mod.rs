//! Gold price feed
//!
//! Polls the Namchiang `GoldPriceToday.xml` document over HTTP.

mod namchiang;
mod types;

pub use namchiang::NamchiangFeed;
pub use types::PriceSnapshot;

use async_trait::async_trait;

use crate::error::FetchError;

/// Trait for price feed implementations
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch and parse the current snapshot. No retry is done here.
    async fn fetch(&self) -> Result<PriceSnapshot, FetchError>;
}
