//! Namchiang XML feed over HTTP

use super::{PriceFeed, PriceSnapshot};
use crate::error::FetchError;
use crate::metrics::prometheus::{record_fetch, record_fetch_latency};
use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Client;
use std::time::Instant;

/// Root element every feed document must carry
const ROOT_ELEMENT: &str = "today";

/// HTTP client for the Namchiang gold price document
pub struct NamchiangFeed {
    url: String,
    http_client: Client,
}

impl NamchiangFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_client: Client::new(),
        }
    }

    async fn fetch_body(&self) -> Result<String, FetchError> {
        // Status is deliberately not checked: error pages fail in the parser instead.
        let response = self.http_client.get(&self.url).send().await?;
        Ok(response.text().await?)
    }

    /// Parse a feed document into a snapshot.
    ///
    /// Field text is kept exactly as published, surrounding whitespace included.
    /// A repeated element overwrites the earlier value.
    pub fn parse_document(body: &str) -> Result<PriceSnapshot, FetchError> {
        let mut reader = Reader::from_str(body);
        reader.config_mut().trim_text(false);

        let mut snapshot = PriceSnapshot::default();
        let mut depth = 0usize;
        // (element name, accumulated text) of the open child of <today>
        let mut current: Option<(Vec<u8>, String)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if depth == 0 {
                        check_root(e.name().as_ref())?;
                    } else if depth == 1 {
                        current = Some((e.name().as_ref().to_vec(), String::new()));
                    }
                    depth += 1;
                }
                Event::Empty(e) => {
                    if depth == 0 {
                        check_root(e.name().as_ref())?;
                        return Ok(snapshot);
                    }
                    if depth == 1 {
                        if let Some(field) = snapshot.field_mut(e.name().as_ref()) {
                            field.clear();
                        }
                    }
                }
                Event::Text(text) if depth == 2 => {
                    if let Some((_, buf)) = current.as_mut() {
                        buf.push_str(&text.unescape()?);
                    }
                }
                Event::CData(cdata) if depth == 2 => {
                    if let Some((_, buf)) = current.as_mut() {
                        buf.push_str(&String::from_utf8_lossy(&cdata));
                    }
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth == 1 {
                        if let Some((name, text)) = current.take() {
                            if let Some(field) = snapshot.field_mut(&name) {
                                *field = text;
                            }
                        }
                    }
                    if depth == 0 {
                        return Ok(snapshot);
                    }
                }
                Event::Eof if depth == 0 => return Err(FetchError::EmptyDocument),
                Event::Eof => return Err(FetchError::UnclosedRoot),
                _ => {}
            }
        }
    }
}

fn check_root(name: &[u8]) -> Result<(), FetchError> {
    if name == ROOT_ELEMENT.as_bytes() {
        Ok(())
    } else {
        Err(FetchError::UnexpectedRoot(String::from_utf8_lossy(name).into_owned()))
    }
}

#[async_trait]
impl PriceFeed for NamchiangFeed {
    async fn fetch(&self) -> Result<PriceSnapshot, FetchError> {
        let started = Instant::now();

        let result = match self.fetch_body().await {
            Ok(body) => Self::parse_document(&body),
            Err(err) => Err(err),
        };

        record_fetch_latency(started.elapsed().as_secs_f64() * 1_000.0);
        record_fetch(if result.is_ok() { "ok" } else { "error" });

        result
    }
}
