//! Fetcher trait for retrieving feed pages

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching the content of a feed page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetches the page at `url`
    ///
    /// # Returns
    /// * `Ok(Some(content))` - The page body
    /// * `Ok(None)` - The page does not exist
    /// * `Err(FetchError)` - Transport failure or an unexpected response
    async fn fetch(&self, url: &str) -> Result<Option<String>, FetchError>;
}
