//! In-memory fetcher for testing

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use kpatch_watch::version::error::FetchError;
use kpatch_watch::version::fetcher::ContentFetcher;

/// Serves fixed pages by URL and records every request
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, content: &str) -> Self {
        self.pages.insert(url.to_string(), content.to_string());
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<String>, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self.pages.get(url).cloned())
    }
}
