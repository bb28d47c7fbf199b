//! Blocking client for the near-Earth-object catalog.
//!
//! The raw endpoints behave as a dumb proxy: the upstream status and body are
//! relayed unchanged and nothing is retried. The typed helpers used by the
//! harvesting workflows turn non-success statuses into errors instead.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::types::{BrowsePage, FeedPage, UpstreamResponse};
use super::{CatalogError, NeoSource};
use crate::config::Config;

/// Catalog API client.
pub struct CatalogClient {
    client: Client,
    config: Config,
}

impl CatalogClient {
    /// Create a client with the configured timeout.
    pub fn new(config: Config) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Client(e.without_url()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Browse the catalog one page at a time.
    ///
    /// `page` and `size` are forwarded as given.
    pub fn browse(&self, page: &str, size: &str) -> Result<UpstreamResponse, CatalogError> {
        self.get(&["neo", "browse"], &[("page", page), ("size", size)])
    }

    /// Look up a single object by its catalog identifier.
    pub fn lookup(&self, id: &str) -> Result<UpstreamResponse, CatalogError> {
        self.get(&["neo", id], &[])
    }

    /// Close-approach feed starting at `start_date` (YYYY-MM-DD).
    pub fn feed(&self, start_date: &str) -> Result<UpstreamResponse, CatalogError> {
        self.get(&["feed"], &[("start_date", start_date)])
    }

    /// Build `{base}/{segments..}`; segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<UpstreamResponse, CatalogError> {
        let url = self.endpoint(segments)?;
        // Logged before the credential is attached.
        let endpoint = url.to_string();
        debug!(%endpoint, ?params, "catalog request");

        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .map_err(|e| CatalogError::Transport {
                endpoint: endpoint.clone(),
                source: e.without_url(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| CatalogError::Transport {
            endpoint: endpoint.clone(),
            source: e.without_url(),
        })?;

        info!(%endpoint, status, bytes = body.len(), "catalog response");
        Ok(UpstreamResponse { status, body })
    }
}

/// Decode a successful upstream response into `T`.
pub(crate) fn decode<T: DeserializeOwned>(
    endpoint: &str,
    response: UpstreamResponse,
) -> Result<T, CatalogError> {
    if !response.is_success() {
        return Err(CatalogError::Status {
            endpoint: endpoint.to_string(),
            status: response.status,
        });
    }
    serde_json::from_str(&response.body).map_err(|source| CatalogError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

impl NeoSource for CatalogClient {
    fn browse_page(&self, page: u32, size: u32) -> Result<BrowsePage, CatalogError> {
        let response = self.browse(&page.to_string(), &size.to_string())?;
        decode("neo/browse", response)
    }

    fn feed_page(&self, start_date: NaiveDate) -> Result<FeedPage, CatalogError> {
        let response = self.feed(&start_date.format("%Y-%m-%d").to_string())?;
        decode("feed", response)
    }

    fn neo(&self, id: &str) -> Result<Value, CatalogError> {
        let response = self.lookup(id)?;
        decode(&format!("neo/{id}"), response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        let config = Config::new("test-key").unwrap().with_base_url(base).unwrap();
        CatalogClient::new(config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("https://api.nasa.gov/neo/rest/v1");
        let url = c.endpoint(&["neo", "browse"]).unwrap();
        assert_eq!(url.as_str(), "https://api.nasa.gov/neo/rest/v1/neo/browse");
    }

    #[test]
    fn test_endpoint_encodes_identifier() {
        let c = client("http://localhost:9");
        let url = c.endpoint(&["neo", "3542519/../x y"]).unwrap();
        assert_eq!(url.path(), "/neo/3542519%2F..%2Fx%20y");
    }

    #[test]
    fn test_endpoint_omits_api_key() {
        let c = client("https://api.nasa.gov/neo/rest/v1");
        let url = c.endpoint(&["feed"]).unwrap();
        assert!(!url.as_str().contains("test-key"));
    }

    #[test]
    fn test_decode_rejects_error_status() {
        let response = UpstreamResponse {
            status: 429,
            body: r#"{"error": "OVER_RATE_LIMIT"}"#.into(),
        };
        let err = decode::<Value>("neo/browse", response).unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 429, .. }));
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        let response = UpstreamResponse {
            status: 200,
            body: "<html>".into(),
        };
        let err = decode::<BrowsePage>("neo/browse", response).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[test]
    #[ignore] // Requires network access and a valid NASA_API_KEY
    fn test_browse_live() {
        let Ok(key) = std::env::var("NASA_API_KEY") else {
            return;
        };
        let c = CatalogClient::new(Config::new(key).unwrap()).unwrap();
        let page = c.browse_page(0, 5).unwrap();
        assert!(page.page.total_pages > 0);
        assert!(!page.near_earth_objects.is_empty());
    }
}
