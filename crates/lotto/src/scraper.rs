use crate::parser::{ParseError, parse_draw};
use crate::types::Draw;

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    url: String,
}

fn user_agent() -> String {
    format!(
        "{}/{} (+{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY")
    )
}

fn client_builder() -> ClientBuilder {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent())
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self::from_client(client_builder().build()?))
    }

    fn from_client(client: Client) -> Self {
        Self {
            client,
            url: crate::BASE_URL.to_string(),
        }
    }

    /// Points the scraper at another page with the same layout.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_latest_draw(&self) -> Result<Draw, ScraperError> {
        let html = self.fetch_html().await?;
        let draw = parse_draw(&html)?;
        log::debug!("Parsed {} wheel(s) from {}", draw.rows.len(), self.url);
        Ok(draw)
    }

    pub async fn fetch_html(&self) -> Result<String, ScraperError> {
        log::info!("Downloading results page from {}...", self.url);
        Ok(self
            .client
            .get(&self.url)
            .send()
            .await
            .inspect_err(|e| log::error!("HTTP error: {e:?}"))?
            .error_for_status()
            .inspect_err(|e| log::error!("Unexpected status: {e}"))?
            .text()
            .await
            .inspect_err(|e| log::error!("Decode error: {e:?}"))?)
    }
}
