use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_FEED_URL: &str = "https://www.namchiang.com/GoldPriceToday.xml";
pub const DEFAULT_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";

pub const DEFAULT_SLEEP_SECONDS: u64 = 30;
pub const DEFAULT_RETRY_SECONDS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    pub feed_url: String,
    pub notify_url: String,
    pub token: String,
    pub sleep_seconds: u64,
    pub retry_seconds: u64,
    pub metrics_port: Option<u16>,
    pub log_level: String,
}

impl Config {
    /// Loads `.env` (if present) and then reads the process environment.
    ///
    /// A missing `.env` is not an error, since the environment alone is a
    /// complete config; only an unreadable or malformed file fails startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        // dotenvy loads .env, but doesn't override already-set env vars
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed_url = url_var(&lookup, "FEED_URL", DEFAULT_FEED_URL)?;
        let notify_url = url_var(&lookup, "NOTIFY_URL", DEFAULT_NOTIFY_URL)?;

        let metrics_port = match lookup("METRICS_PORT") {
            Some(value) => Some(value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: "METRICS_PORT",
                value,
            })?),
            None => None,
        };

        Ok(Self {
            feed_url,
            notify_url,
            token: lookup("LINE_NOTIFY_TOKEN").unwrap_or_default(),
            sleep_seconds: positive_seconds(lookup("SLEEP_TIME"), DEFAULT_SLEEP_SECONDS),
            retry_seconds: positive_seconds(lookup("RETRY_TIME"), DEFAULT_RETRY_SECONDS),
            metrics_port,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn sleep_interval(&self) -> Duration {
        Duration::from_secs(self.sleep_seconds)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_seconds)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<empty>" } else { "<redacted>" };

        f.debug_struct("Config")
            .field("feed_url", &self.feed_url)
            .field("notify_url", &self.notify_url)
            .field("token", &token)
            .field("sleep_seconds", &self.sleep_seconds)
            .field("retry_seconds", &self.retry_seconds)
            .field("metrics_port", &self.metrics_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Unset, unparseable, zero and negative values all fall back to the default.
fn positive_seconds(raw: Option<String>, default: u64) -> u64 {
    match raw.as_deref().map(str::trim).map(str::parse::<i64>) {
        Some(Ok(secs)) if secs > 0 => secs as u64,
        _ => default,
    }
}

fn url_var<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default.to_string());
    };

    match url::Url::parse(&value) {
        Ok(_) => Ok(value),
        Err(source) => Err(ConfigError::InvalidUrl { var, value, source }),
    }
}
