pub mod line;

pub use line::LineNotifier;

use async_trait::async_trait;

use crate::error::NotifyError;

/// Push-notification sink.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
