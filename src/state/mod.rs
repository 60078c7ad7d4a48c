pub mod last_notified;

pub use last_notified::LastNotified;
