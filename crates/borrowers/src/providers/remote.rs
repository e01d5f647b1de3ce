//! Remote borrowers API provider
//!
//! Fetches the collection from the hosted `/api/borrowers` endpoint with a
//! blocking GET. Every call goes over the network; nothing is cached.

use crate::config::providers::REMOTE_BORROWERS_URL;
use crate::error::Result;
use crate::network::HttpClient;
use crate::record::Collection;

use super::traits::BorrowerProvider;

/// Provider backed by the remote borrowers API
pub struct RemoteProvider {
    client: HttpClient,
    url: String,
}

impl RemoteProvider {
    /// Create a provider for the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(REMOTE_BORROWERS_URL)
    }

    /// Create a provider for a custom URL (for testing or mirrors)
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            url: url.into(),
        })
    }

    /// Endpoint this provider reads from
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BorrowerProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "Borrowers API"
    }

    fn id(&self) -> &'static str {
        "remote"
    }

    fn fetch(&self) -> Result<Collection> {
        self.client.get_json(&self.url)
    }
}
