//! HTTP content fetcher

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::version::error::FetchError;
use crate::version::fetcher::ContentFetcher;

/// Fetches feed pages over HTTP(S)
///
/// `200` yields the body, `404` yields `None`, every other status is a
/// [`FetchError::UnexpectedStatus`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<String>, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Not found: {}", url);
            return Ok(None);
        }

        if status != StatusCode::OK {
            warn!("Unexpected status {} for {}", status, url);
            return Err(FetchError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(Some(body))
    }
}
