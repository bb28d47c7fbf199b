//! Near-Earth-object catalog access.
//!
//! - `client`: blocking HTTP client relaying browse, lookup and feed calls
//! - `types`: response shapes the workflows navigate
//! - `harvest`: multi-request workflows that collect objects into a file

pub mod client;
pub mod harvest;
pub mod types;

use chrono::NaiveDate;
use serde_json::Value;

pub use client::CatalogClient;
pub use harvest::{sample_catalog, sample_pages, upcoming_approaches, write_objects, HarvestError};
pub use types::{BrowsePage, FeedEntry, FeedPage, PageInfo, UpstreamResponse};

/// Catalog access errors.
///
/// Transport errors never carry the request URL, so the credential in its
/// query string cannot leak into logs.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode catalog response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Typed access to the catalog, as needed by the harvesting workflows.
pub trait NeoSource {
    /// One browse page of `size` objects.
    fn browse_page(&self, page: u32, size: u32) -> Result<BrowsePage, CatalogError>;

    /// Close-approach feed starting at `start_date`.
    fn feed_page(&self, start_date: NaiveDate) -> Result<FeedPage, CatalogError>;

    /// Full record of a single object.
    fn neo(&self, id: &str) -> Result<Value, CatalogError>;
}
