//! Harvesting workflows over the catalog.
//!
//! Both workflows are sequential request loops with no retry: the first
//! upstream failure aborts the whole run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use indicatif::ProgressBar;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::{CatalogError, NeoSource};

/// Objects requested per browse page.
pub const PAGE_SIZE: u32 = 20;

/// Harvesting errors
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize objects: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pages to request after page 0, spread evenly across the catalog.
///
/// Page `i` of `request_count` is `floor(1 + (total_pages - 1) · i / request_count)`,
/// so the first follow-up request is always page 1.
pub fn sample_pages(total_pages: u32, request_count: usize) -> Vec<u32> {
    let span = f64::from(total_pages) - 1.0;
    (0..request_count)
        .map(|i| (1.0 + span * (i as f64 / request_count as f64)) as u32)
        .collect()
}

/// Number of follow-up requests needed for roughly `object_count` objects.
pub fn follow_up_requests(object_count: usize) -> usize {
    let page_size = PAGE_SIZE as usize;
    object_count.saturating_sub(page_size) / page_size
}

/// Collect approximately `object_count` objects sampled across the catalog.
///
/// Page 0 is always fetched; the remaining requests are spread over the
/// catalog according to [`sample_pages`].
pub fn sample_catalog<S: NeoSource + ?Sized>(
    source: &S,
    object_count: usize,
    progress: &ProgressBar,
) -> Result<Vec<Value>, HarvestError> {
    let initial = source.browse_page(0, PAGE_SIZE)?;
    let total_pages = initial.page.total_pages;
    let mut objects = initial.near_earth_objects;

    let request_count = follow_up_requests(object_count);
    // The progress bar owns the terminal line until it finishes.
    debug!(total_pages, request_count, "sampling catalog");

    progress.set_length(request_count as u64);
    for page in sample_pages(total_pages, request_count) {
        let batch = source.browse_page(page, PAGE_SIZE)?;
        objects.extend(batch.near_earth_objects);
        progress.inc(1);
    }
    progress.finish();

    debug!(objects = objects.len(), "catalog sample complete");
    Ok(objects)
}

/// Collect full records of every object in the close-approach feed that
/// starts at `start_date`.
///
/// Records are fetched once per unique id, in ascending id order.
pub fn upcoming_approaches<S: NeoSource + ?Sized>(
    source: &S,
    start_date: NaiveDate,
) -> Result<Vec<Value>, HarvestError> {
    let feed = source.feed_page(start_date)?;
    let ids = feed.unique_ids();
    info!(%start_date, objects = ids.len(), "close-approach feed loaded");

    let mut records = Vec::with_capacity(ids.len());
    for id in &ids {
        info!(%id, "fetching object");
        records.push(source.neo(id)?);
    }
    Ok(records)
}

/// Write `objects` as a JSON array to `path`, replacing any existing file.
pub fn write_objects(path: &Path, objects: &[Value]) -> Result<(), HarvestError> {
    let write_err = |source| HarvestError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, objects)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{BrowsePage, FeedEntry, FeedPage, PageInfo};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// In-memory catalog recording every request made against it.
    struct FakeCatalog {
        total_pages: u32,
        feed: FeedPage,
        fail_page: Option<u32>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeCatalog {
        fn new(total_pages: u32) -> Self {
            Self {
                total_pages,
                feed: FeedPage::default(),
                fail_page: None,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl NeoSource for FakeCatalog {
        fn browse_page(&self, page: u32, size: u32) -> Result<BrowsePage, CatalogError> {
            self.requests.borrow_mut().push(format!("browse {page}"));
            if self.fail_page == Some(page) {
                return Err(CatalogError::Status {
                    endpoint: "neo/browse".into(),
                    status: 500,
                });
            }
            Ok(BrowsePage {
                page: PageInfo {
                    size,
                    total_elements: u64::from(self.total_pages) * u64::from(size),
                    total_pages: self.total_pages,
                    number: page,
                },
                near_earth_objects: (0..size)
                    .map(|i| json!({"id": format!("{page}-{i}")}))
                    .collect(),
            })
        }

        fn feed_page(&self, start_date: NaiveDate) -> Result<FeedPage, CatalogError> {
            self.requests.borrow_mut().push(format!("feed {start_date}"));
            Ok(self.feed.clone())
        }

        fn neo(&self, id: &str) -> Result<Value, CatalogError> {
            self.requests.borrow_mut().push(format!("neo {id}"));
            Ok(json!({"id": id, "name": format!("object {id}")}))
        }
    }

    #[test]
    fn test_follow_up_requests() {
        assert_eq!(follow_up_requests(0), 0);
        assert_eq!(follow_up_requests(20), 0);
        assert_eq!(follow_up_requests(39), 0);
        assert_eq!(follow_up_requests(40), 1);
        assert_eq!(follow_up_requests(100), 4);
    }

    #[test]
    fn test_sample_pages_spread() {
        assert_eq!(sample_pages(101, 4), vec![1, 26, 51, 76]);
        assert_eq!(sample_pages(1, 3), vec![1, 1, 1]);
        assert!(sample_pages(500, 0).is_empty());
    }

    #[test]
    fn test_sample_pages_stay_below_total() {
        let pages = sample_pages(2050, 49);
        assert_eq!(pages[0], 1);
        assert!(pages.windows(2).all(|w| w[0] <= w[1]));
        assert!(pages.iter().all(|&p| p < 2050));
    }

    #[test]
    fn test_sample_catalog_collects_pages() {
        let catalog = FakeCatalog::new(101);
        let objects = sample_catalog(&catalog, 100, &ProgressBar::hidden()).unwrap();

        assert_eq!(objects.len(), 100);
        assert_eq!(
            *catalog.requests.borrow(),
            vec!["browse 0", "browse 1", "browse 26", "browse 51", "browse 76"]
        );
        assert_eq!(objects[20]["id"], "1-0");
    }

    #[test]
    fn test_sample_catalog_small_count_fetches_first_page_only() {
        let catalog = FakeCatalog::new(10);
        let objects = sample_catalog(&catalog, 5, &ProgressBar::hidden()).unwrap();
        assert_eq!(objects.len(), 20);
        assert_eq!(catalog.requests.borrow().len(), 1);
    }

    #[test]
    fn test_sample_catalog_aborts_on_upstream_failure() {
        let mut catalog = FakeCatalog::new(101);
        catalog.fail_page = Some(26);
        let err = sample_catalog(&catalog, 100, &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(
            err,
            HarvestError::Catalog(CatalogError::Status { status: 500, .. })
        ));
        assert_eq!(catalog.requests.borrow().len(), 3);
    }

    #[test]
    fn test_upcoming_approaches_fetches_unique_ids() {
        let mut catalog = FakeCatalog::new(1);
        let mut dates = BTreeMap::new();
        dates.insert(
            "2026-10-18".to_string(),
            vec![FeedEntry { id: "54".into() }, FeedEntry { id: "12".into() }],
        );
        dates.insert("2026-10-19".to_string(), vec![FeedEntry { id: "12".into() }]);
        catalog.feed = FeedPage {
            element_count: Some(3),
            near_earth_objects: dates,
        };

        let start = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let records = upcoming_approaches(&catalog, start).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], "12");
        assert_eq!(records[1]["id"], "54");
        assert_eq!(
            *catalog.requests.borrow(),
            vec!["feed 2026-10-18", "neo 12", "neo 54"]
        );
    }

    #[test]
    fn test_write_objects_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        std::fs::write(&path, "stale contents that are longer than the new file").unwrap();

        write_objects(&path, &[json!({"id": "1"})]).unwrap();

        let written: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, vec![json!({"id": "1"})]);
    }
}
