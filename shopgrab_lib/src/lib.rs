//! Extraction pipeline for shopgrab: page harvester, field extractor, asset
//! fetcher, and record sink.
//!
//! Drives a [`shopgrab_browser`] session across paginated search results,
//! extracts product records with independent per-field fallback, downloads
//! listing thumbnails into a content store, and serializes the result set to
//! CSV.

pub mod assets;
pub mod config;
pub mod extract;
pub mod harvest;
pub mod record;
pub mod sink;

pub use shopgrab_browser;

pub use assets::{AssetStore, AssetStoreError};
pub use config::ScrapeConfig;
pub use harvest::harvest;
pub use record::{ProductRecord, SENTINEL};
pub use sink::{write_csv, SinkError};
