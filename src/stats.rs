use crate::models::FlatCountry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Region label used when a record carries no region.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Per-region aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegionStats {
    pub count: usize,
    pub population: u64,
}

/// One entry of the top-10-by-population list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopByPopulation {
    pub name: String,
    pub population: u64,
}

/// One entry of the top-10-by-area list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopByArea {
    pub name: String,
    pub area_km2: f64,
}

/// Summary statistics over a flattened country list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_countries: usize,
    pub total_population: u64,
    pub total_area_km2: f64,
    pub regions: BTreeMap<String, RegionStats>,
    pub top_10_by_population: Vec<TopByPopulation>,
    pub top_10_by_area: Vec<TopByArea>,
}

/// Compute summary statistics. Pure function of its input; ties in the
/// top-10 lists keep input order (stable sort).
pub fn summarize(countries: &[FlatCountry]) -> Summary {
    let mut regions: BTreeMap<String, RegionStats> = BTreeMap::new();
    for c in countries {
        let key = if c.region.is_empty() {
            UNKNOWN_REGION
        } else {
            c.region.as_str()
        };
        let entry = regions.entry(key.to_string()).or_default();
        entry.count += 1;
        entry.population += c.population;
    }

    let mut by_population: Vec<&FlatCountry> = countries.iter().collect();
    by_population.sort_by(|a, b| b.population.cmp(&a.population));
    let top_10_by_population = by_population
        .iter()
        .take(10)
        .map(|c| TopByPopulation {
            name: c.name_common.clone(),
            population: c.population,
        })
        .collect();

    let mut by_area: Vec<&FlatCountry> = countries.iter().collect();
    by_area.sort_by(|a, b| b.area_km2.total_cmp(&a.area_km2));
    let top_10_by_area = by_area
        .iter()
        .take(10)
        .map(|c| TopByArea {
            name: c.name_common.clone(),
            area_km2: c.area_km2,
        })
        .collect();

    Summary {
        total_countries: countries.len(),
        total_population: countries.iter().map(|c| c.population).sum(),
        total_area_km2: countries.iter().map(|c| c.area_km2).sum(),
        regions,
        top_10_by_population,
        top_10_by_area,
    }
}
