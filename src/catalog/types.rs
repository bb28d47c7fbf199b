//! Catalog response shapes used by the harvesting workflows.
//!
//! Only the fields the workflows navigate are typed; individual object
//! records stay as raw JSON so nothing the provider sends is dropped.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw upstream response, relayed unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// HTTP status code returned by the provider.
    pub status: u16,
    /// Response body exactly as received.
    pub body: String,
}

impl UpstreamResponse {
    /// Content type relayed alongside the body.
    pub const CONTENT_TYPE: &'static str = "application/json";

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pagination block of a browse response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
}

/// One page of the catalog browse endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrowsePage {
    pub page: PageInfo,
    #[serde(default)]
    pub near_earth_objects: Vec<Value>,
}

/// Close-approach feed entry; only the identifier is needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: String,
}

/// Close-approach feed keyed by calendar date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub element_count: Option<u64>,
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<FeedEntry>>,
}

impl FeedPage {
    /// Unique object ids across all dates, in ascending order.
    pub fn unique_ids(&self) -> BTreeSet<String> {
        self.near_earth_objects
            .values()
            .flatten()
            .map(|entry| entry.id.clone())
            .collect()
    }
}
