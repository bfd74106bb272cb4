//! Batch export pipeline: fetch the entire country collection, flatten,
//! and write the four export files.
//!
//! The bulk `/all` endpoint is preferred; when it fails or comes back
//! empty, the fixed region list is fetched one by one with a politeness
//! pause between requests. Only the all-empty case aborts the export.

use crate::api::Client;
use crate::stats::{self, Summary};
use crate::storage;
use crate::transform;
use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Fallback fetch order when the bulk endpoint fails.
pub const REGIONS: [&str; 5] = ["africa", "americas", "asia", "europe", "oceania"];

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory the export files are written into (created if missing).
    pub out_dir: PathBuf,
    /// Pause between successive regional fallback fetches. A politeness
    /// throttle toward the upstream API, not a correctness mechanism.
    pub region_delay: Duration,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            region_delay: Duration::from_millis(500),
        }
    }
}

/// What one export run produced.
#[derive(Debug)]
pub struct ExportReport {
    pub fetched: usize,
    pub exported: usize,
    /// Records that failed to flatten and were skipped.
    pub skipped: usize,
    pub summary: Summary,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub raw_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Fetch every country, preferring `/all` and falling back to the fixed
/// region list. Per-region failures are logged and skipped; the result may
/// be empty only if everything failed.
pub fn fetch_all_countries(client: &Client, region_delay: Duration) -> Vec<Value> {
    match client.all() {
        Ok(countries) if !countries.is_empty() => {
            info!("retrieved {} countries from /all", countries.len());
            return countries;
        }
        Ok(_) => warn!("bulk endpoint returned no countries"),
        Err(e) => warn!("bulk fetch failed: {e}"),
    }

    info!("falling back to region-by-region fetch");
    let mut all = Vec::new();
    for (i, region) in REGIONS.iter().enumerate() {
        if i > 0 && !region_delay.is_zero() {
            std::thread::sleep(region_delay);
        }
        match client.by_region(region) {
            Ok(countries) => {
                info!("{region}: {} countries", countries.len());
                all.extend(countries);
            }
            Err(e) => warn!("{region}: fetch failed: {e}"),
        }
    }
    all
}

/// Run the full export: fetch, flatten, sort, write
/// `countries_data.csv`, `countries_data.json`, `countries_raw.json`, and
/// `countries_summary.json` into the output directory.
pub fn run_export(client: &Client, opts: &ExportOptions) -> Result<ExportReport> {
    let raw = fetch_all_countries(client, opts.region_delay);
    if raw.is_empty() {
        bail!("could not fetch any country data (bulk and all regional fetches empty)");
    }

    let flat = transform::flatten_records(&raw);
    let skipped = raw.len() - flat.len();
    if skipped > 0 {
        warn!("{skipped} records failed to flatten and were skipped");
    }
    let summary = stats::summarize(&flat);

    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("create {}", opts.out_dir.display()))?;
    let csv_path = opts.out_dir.join("countries_data.csv");
    storage::save_csv(&flat, &csv_path)
        .with_context(|| format!("write {}", csv_path.display()))?;
    let json_path = opts.out_dir.join("countries_data.json");
    storage::save_json(&flat, &json_path)
        .with_context(|| format!("write {}", json_path.display()))?;
    let raw_path = opts.out_dir.join("countries_raw.json");
    storage::save_json(&raw, &raw_path)
        .with_context(|| format!("write {}", raw_path.display()))?;
    let summary_path = opts.out_dir.join("countries_summary.json");
    storage::save_json(&summary, &summary_path)
        .with_context(|| format!("write {}", summary_path.display()))?;

    Ok(ExportReport {
        fetched: raw.len(),
        exported: flat.len(),
        skipped,
        summary,
        csv_path,
        json_path,
        raw_path,
        summary_path,
    })
}
