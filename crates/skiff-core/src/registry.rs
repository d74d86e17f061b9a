//! npm registry version lookups

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Default registry queried for version existence
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Environment variable name for overriding the registry URL
pub const REGISTRY_URL_ENV: &str = "SKIFF_REGISTRY_URL";

/// Per-request timeout; a slow registry reads as "version missing"
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for existence checks against an npm-compatible registry
pub struct RegistryClient {
    client: reqwest::Client,
    base: Url,
}

impl RegistryClient {
    /// Create a client against the given registry base URL
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("skiff")
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base,
        }
    }

    /// Create a client from the environment, falling back to the public
    /// npm registry when no override is set
    pub fn from_env() -> Result<Self> {
        let url_str =
            std::env::var(REGISTRY_URL_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());
        let base =
            Url::parse(&url_str).with_context(|| format!("Invalid registry URL: {}", url_str))?;
        Ok(Self::new(base))
    }

    /// Check whether `package@version` exists in the registry.
    ///
    /// Fail-closed: any failure (connect error, timeout, non-success
    /// status) reads as "does not exist". A transient registry outage is
    /// therefore indistinguishable from a genuinely missing version; the
    /// operator recovers by re-answering the prompt.
    pub async fn version_exists(&self, package: &str, version: &str) -> bool {
        let url = match self.version_url(package, version) {
            Ok(url) => url,
            Err(_) => return false,
        };

        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Build the `{base}/{package}/{version}` lookup URL, preserving any
    /// path the base already carries
    fn version_url(&self, package: &str, version: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Registry URL cannot have path segments: {}", self.base))?
            .pop_if_empty()
            .push(package)
            .push(version);
        Ok(url)
    }
}
