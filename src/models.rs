use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `name` object of a country record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// One entry of the `currencies` map: `"EUR": {"name": "Euro", "symbol": "€"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyInfo {
    pub name: String,
    pub symbol: String,
}

/// International direct dialing block: root code plus suffixes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Idd {
    pub root: String,
    pub suffixes: Vec<String>,
}

/// Flag image URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub png: String,
    pub svg: String,
}

/// Road traffic information; only the driving side is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub side: String,
}

/// Raw country record as served by the REST Countries API (v3.1).
///
/// The upstream schema is optional everywhere: any field may be absent from
/// any record, so every field defaults and unknown fields are ignored.
/// Mapping-typed fields use `BTreeMap` so joined output is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCountry {
    pub name: CountryName,
    pub cca2: String,
    pub cca3: String,
    pub capital: Vec<String>,
    pub region: String,
    pub subregion: String,
    pub population: u64,
    pub area: f64,
    pub landlocked: bool,
    /// Explicitly nullable upstream (disputed territories).
    pub independent: Option<bool>,
    #[serde(rename = "unMember")]
    pub un_member: bool,
    /// `[latitude, longitude]`; either may be missing.
    pub latlng: Vec<f64>,
    pub languages: BTreeMap<String, String>,
    pub currencies: BTreeMap<String, CurrencyInfo>,
    pub idd: Idd,
    pub timezones: Vec<String>,
    pub borders: Vec<String>,
    /// Flag emoji.
    pub flag: String,
    pub flags: Flags,
    pub continents: Vec<String>,
    #[serde(rename = "startOfWeek")]
    pub start_of_week: String,
    pub car: Car,
    /// Gini index by year, e.g. `"2018": 32.8`.
    pub gini: BTreeMap<String, f64>,
}

/// Flat, export-friendly country record (one row = one country).
///
/// Field order here is the CSV column order. Every field is independently
/// defaulted when the source data is missing; see `transform::flatten`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlatCountry {
    pub name_common: String,
    pub name_official: String,
    pub cca2: String,
    pub cca3: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: u64,
    pub area_km2: f64,
    pub population_density: Option<f64>,
    pub landlocked: bool,
    pub independent: bool,
    pub un_member: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub languages: String,
    pub currencies: String,
    pub currency_names: String,
    pub calling_code: String,
    pub timezones: String,
    pub borders: String,
    pub num_borders: usize,
    pub flag_emoji: String,
    pub flag_png: String,
    pub flag_svg: String,
    pub continent: String,
    pub start_of_week: String,
    pub driving_side: String,
    pub gini_index: Option<f64>,
}

/// Synthetic city-like record produced by the capital-proxy city search.
///
/// The upstream API has no city endpoint; these are capital-name matches,
/// and `population` is the owning country's population.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CityHit {
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub population: u64,
    pub region: String,
    /// SVG flag URL of the owning country.
    pub flag: String,
}
