/// Synchronous client for the **REST Countries API (v3.1)**.
///
/// Every query mode is one GET against a fixed path (`/all`, `/name/{q}`,
/// `/alpha/{code}`, `/currency/{c}`, `/lang/{c}`, `/capital/{c}`,
/// `/region/{r}`, `/subregion/{r}`). Responses are JSON arrays of country
/// objects; an exact alpha-code lookup may return a single object instead,
/// which is normalized into a one-element list here so callers never see
/// the difference.
///
/// ### Notes
/// - A 404 means "no such country", not a fault: it surfaces as an empty
///   result (`Ok(None)` internally), never as an error.
/// - There is no city endpoint upstream. [`Client::search_cities`] is a
///   capital-name proxy: it queries by capital and filters the returned
///   capital lists for a case-insensitive substring match.
/// - Timeouts are fixed in the client builder (30 s total, 10 s connect).
///
/// Typical usage:
/// ```no_run
/// # use world_explorer::Client;
/// let client = Client::default();
/// let hits = client.by_name("france")?;
/// # Ok::<(), world_explorer::ApiError>(())
/// ```
use crate::error::{ApiError, ApiResult};
use crate::models::{CityHit, RawCountry};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("world_explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://restcountries.com/v3.1".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped in user-supplied terms (common in codes)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment.trim(), SAFE).to_string()
}

/// Normalize an upstream payload into a list of country objects.
///
/// Exact alpha-code lookups may yield a single object rather than a list;
/// wrap it. `null` collapses to empty.
pub fn normalize_list(v: Value) -> Vec<Value> {
    match v {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Extract city-like hits from country objects whose capital list contains
/// `term` case-insensitively. Records that do not parse are ignored.
pub fn capital_matches(countries: &[Value], term: &str) -> Vec<CityHit> {
    let needle = term.trim().to_lowercase();
    let mut hits = Vec::new();
    for value in countries {
        let Ok(country) = serde_json::from_value::<RawCountry>(value.clone()) else {
            continue;
        };
        for capital in &country.capital {
            if capital.to_lowercase().contains(&needle) {
                hits.push(CityHit {
                    name: capital.clone(),
                    country: country.name.common.clone(),
                    country_code: country.cca2.clone(),
                    population: country.population,
                    region: country.region.clone(),
                    flag: country.flags.svg.clone(),
                });
            }
        }
    }
    hits
}

impl Client {
    /// One GET against `{base_url}/{path}`. 404 becomes `Ok(None)`; any
    /// other non-success status or transport failure is an [`ApiError`].
    fn get(&self, path: &str) -> ApiResult<Option<Value>> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let v: Value = resp.json()?;
        Ok(Some(v))
    }

    fn get_list(&self, path: &str) -> ApiResult<Vec<Value>> {
        Ok(self.get(path)?.map(normalize_list).unwrap_or_default())
    }

    /// Fetch the entire country collection (`/all`).
    pub fn all(&self) -> ApiResult<Vec<Value>> {
        self.get_list("all")
    }

    /// Search by (partial) country name.
    pub fn by_name(&self, name: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("name/{}", enc(name)))
    }

    /// Look up by exact 2/3-letter code. A single-object response is
    /// normalized to a one-element list.
    pub fn by_code(&self, code: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("alpha/{}", enc(code)))
    }

    /// Countries using a currency code (e.g. `EUR`).
    pub fn by_currency(&self, currency: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("currency/{}", enc(currency)))
    }

    /// Countries speaking a language code (e.g. `fra`).
    pub fn by_language(&self, language: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("lang/{}", enc(language)))
    }

    /// Countries whose capital matches.
    pub fn by_capital(&self, capital: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("capital/{}", enc(capital)))
    }

    /// Countries of a region (e.g. `europe`).
    pub fn by_region(&self, region: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("region/{}", enc(region)))
    }

    /// Countries of a subregion (e.g. `Western Europe`).
    pub fn by_subregion(&self, subregion: &str) -> ApiResult<Vec<Value>> {
        self.get_list(&format!("subregion/{}", enc(subregion)))
    }

    /// Capital-proxy city search: query by capital, then keep each capital
    /// that contains `term` case-insensitively as a [`CityHit`].
    pub fn search_cities(&self, term: &str) -> ApiResult<Vec<CityHit>> {
        let countries = self.by_capital(term)?;
        Ok(capital_matches(&countries, term))
    }

    /// Capitals of the first country matching `country_name`.
    pub fn capitals_of(&self, country_name: &str) -> ApiResult<Vec<String>> {
        let results = self.by_name(country_name)?;
        let capitals = results
            .first()
            .and_then(|v| serde_json::from_value::<RawCountry>(v.clone()).ok())
            .map(|c| c.capital)
            .unwrap_or_default();
        Ok(capitals)
    }
}
