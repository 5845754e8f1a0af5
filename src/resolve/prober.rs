//! Resource existence probing
//!
//! A probe checks whether the current page's subpath exists under a
//! candidate version root and picks the best link target for it.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::FALLBACK_PAGE;

/// Trait for resolving a link target under a version's base URL
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    /// Resolves the best link target for `base_url` and `subpath`.
    ///
    /// # Returns
    /// `base_url + "/" + subpath` if that resource is reachable, otherwise
    /// the version's fallback index page. Always a URL string; probe
    /// failures never surface to the caller.
    async fn resolve_href(&self, base_url: &str, subpath: &str) -> String;
}

/// HTTP prober issuing at most one GET per invocation
pub struct HttpProber {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpProber {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Sets a per-request timeout. Without one, a hung probe hangs the
    /// whole menu construction.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn resolve_href(&self, base_url: &str, subpath: &str) -> String {
        let url = format!("{}/{}", base_url, subpath);
        let fallback = format!("{}/{}", base_url, FALLBACK_PAGE);

        debug!("Probing resource: {}", url);

        let mut request = self.client.get(&url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => url,
            Ok(response) => {
                debug!(
                    "Resource {} returned status {}, falling back to {}",
                    url,
                    response.status(),
                    fallback
                );
                fallback
            }
            Err(e) => {
                debug!("Probe for {} failed ({}), falling back to {}", url, e, fallback);
                fallback
            }
        }
    }
}
