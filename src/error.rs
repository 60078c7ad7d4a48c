use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed feed xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected root element <{0}>, expected <today>")]
    UnexpectedRoot(String),

    #[error("feed body contains no root element")]
    EmptyDocument,

    #[error("feed body ended before </today>")]
    UnclosedRoot,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notify request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("notify rejected with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

impl NotifyError {
    /// `outcome` label recorded on `notifications_total`.
    pub fn outcome(&self) -> &'static str {
        match self {
            NotifyError::Request(_) => "error",
            NotifyError::Rejected { .. } => "rejected",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("invalid {var} {value:?}: {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        source: url::ParseError,
    },

    #[error("invalid {var} {value:?}: expected a port number")]
    InvalidPort { var: &'static str, value: String },
}
