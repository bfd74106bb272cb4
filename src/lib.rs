//! world_explorer
//!
//! A lightweight Rust library for browsing, exporting, and summarizing
//! country data from the REST Countries API. Pairs with the
//! `world-explorer` CLI and the `world-explorer-web` UI.
//!
//! ### Features
//! - One GET wrapper per query mode (name, code, currency, language,
//!   capital, region, subregion) plus a capital-proxy city search
//! - Flatten nested country records into 29 export-friendly scalar fields
//! - Save as CSV or pretty JSON, raw payload included
//! - Summary statistics (totals, per-region breakdown, top-10 lists)
//! - Three-route web UI rendering the same data
//!
//! ### Example
//! ```no_run
//! use world_explorer::Client;
//!
//! let client = Client::default();
//! let raw = client.all()?;
//! let flat = world_explorer::transform::flatten_records(&raw);
//! world_explorer::storage::save_csv(&flat, "countries_data.csv")?;
//! let summary = world_explorer::stats::summarize(&flat);
//! println!("{} countries", summary.total_countries);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod export;
pub mod models;
pub mod pages;
pub mod query;
pub mod stats;
pub mod storage;
pub mod transform;
pub mod web;

pub use api::Client;
pub use error::ApiError;
pub use models::{CityHit, FlatCountry, RawCountry};
pub use query::SearchMode;
