//! Flattening transform: nested upstream country records to flat,
//! export-friendly rows.
//!
//! Every extraction path supplies a default, so [`flatten`] is total: a
//! record missing any optional nested field still produces a row. Records
//! that fail to deserialize at all are skipped with a warning and the batch
//! continues.

use crate::models::{FlatCountry, RawCountry};
use log::warn;
use serde_json::Value;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn join<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    parts
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten one country into its 29 scalar export fields.
///
/// Derived fields:
/// - `population_density`: population / area rounded to 2 decimals when
///   area > 0, else `None`.
/// - `calling_code`: root + first suffix, only when both are non-empty.
/// - `gini_index`: first value of the gini map (key order), else `None`.
pub fn flatten(country: &RawCountry) -> FlatCountry {
    let population_density = if country.area > 0.0 {
        Some(round2(country.population as f64 / country.area))
    } else {
        None
    };

    let calling_code = match country.idd.suffixes.first() {
        Some(suffix) if !country.idd.root.is_empty() && !suffix.is_empty() => {
            format!("{}{}", country.idd.root, suffix)
        }
        _ => String::new(),
    };

    FlatCountry {
        name_common: country.name.common.clone(),
        name_official: country.name.official.clone(),
        cca2: country.cca2.clone(),
        cca3: country.cca3.clone(),
        capital: join(&country.capital),
        region: country.region.clone(),
        subregion: country.subregion.clone(),
        population: country.population,
        area_km2: country.area,
        population_density,
        landlocked: country.landlocked,
        independent: country.independent.unwrap_or(false),
        un_member: country.un_member,
        latitude: country.latlng.first().copied(),
        longitude: country.latlng.get(1).copied(),
        languages: join(country.languages.values()),
        currencies: join(country.currencies.keys()),
        currency_names: country
            .currencies
            .values()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        calling_code,
        timezones: join(&country.timezones),
        borders: join(&country.borders),
        num_borders: country.borders.len(),
        flag_emoji: country.flag.clone(),
        flag_png: country.flags.png.clone(),
        flag_svg: country.flags.svg.clone(),
        continent: join(&country.continents),
        start_of_week: country.start_of_week.clone(),
        driving_side: country.car.side.clone(),
        gini_index: country.gini.values().next().copied(),
    }
}

/// Flatten a batch of raw country values.
///
/// A value that does not deserialize is skipped (warned) and the rest of
/// the batch proceeds. The result is sorted descending by population;
/// a missing population has already defaulted to 0.
pub fn flatten_records(raw: &[Value]) -> Vec<FlatCountry> {
    let mut out = Vec::with_capacity(raw.len());
    for (idx, value) in raw.iter().enumerate() {
        match serde_json::from_value::<RawCountry>(value.clone()) {
            Ok(country) => out.push(flatten(&country)),
            Err(e) => warn!("skipping country record {idx}: {e}"),
        }
    }
    out.sort_by(|a, b| b.population.cmp(&a.population));
    out
}
