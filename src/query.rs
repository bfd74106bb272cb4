//! Query router for the interactive surface.
//!
//! Each recognized search mode forwards the user term to exactly one
//! upstream endpoint. Nothing here ever returns an error: a 404 collapses
//! to "no results" inside the client, and any other upstream fault degrades
//! to an empty outcome carrying a diagnostic message.

use crate::api::Client;
use crate::models::CityHit;
use clap::ValueEnum;
use log::warn;
use serde_json::Value;
use std::fmt;

/// Recognized search modes. `City` has no upstream equivalent and is a
/// capital-name proxy; see [`Client::search_cities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    Name,
    Code,
    Currency,
    Lang,
    Capital,
    Region,
    Subregion,
    City,
}

impl SearchMode {
    pub const ALL: [SearchMode; 8] = [
        SearchMode::Name,
        SearchMode::Code,
        SearchMode::Currency,
        SearchMode::Lang,
        SearchMode::Capital,
        SearchMode::Region,
        SearchMode::Subregion,
        SearchMode::City,
    ];

    /// Value used in the `type` query parameter and CLI flag.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Name => "name",
            SearchMode::Code => "code",
            SearchMode::Currency => "currency",
            SearchMode::Lang => "lang",
            SearchMode::Capital => "capital",
            SearchMode::Region => "region",
            SearchMode::Subregion => "subregion",
            SearchMode::City => "city",
        }
    }

    /// Human label for the search-form selector.
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Name => "Country name",
            SearchMode::Code => "Country code",
            SearchMode::Currency => "Currency code",
            SearchMode::Lang => "Language code",
            SearchMode::Capital => "Capital",
            SearchMode::Region => "Region",
            SearchMode::Subregion => "Subregion",
            SearchMode::City => "City (capital match)",
        }
    }

    /// Parse the `type` query parameter; unrecognized values fall back to
    /// name search.
    pub fn from_param(s: &str) -> SearchMode {
        let needle = s.trim().to_ascii_lowercase();
        SearchMode::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .unwrap_or(SearchMode::Name)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of one search: raw country objects, or synthetic city hits for
/// the city mode.
#[derive(Debug, Clone)]
pub enum SearchResults {
    Countries(Vec<Value>),
    Cities(Vec<CityHit>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Countries(v) => v.len(),
            SearchResults::Cities(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one search; `error` carries the diagnostic when the upstream
/// degraded, while `results` stays usable (possibly empty) either way.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: SearchResults,
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn empty(mode: SearchMode) -> SearchOutcome {
        let results = match mode {
            SearchMode::City => SearchResults::Cities(Vec::new()),
            _ => SearchResults::Countries(Vec::new()),
        };
        SearchOutcome {
            results,
            error: None,
        }
    }

    pub fn degraded(mode: SearchMode, message: String) -> SearchOutcome {
        let mut outcome = SearchOutcome::empty(mode);
        outcome.error = Some(message);
        outcome
    }
}

/// Run one search. Never fails: upstream faults degrade to an empty
/// outcome with a diagnostic, and a blank term short-circuits to empty.
pub fn search(client: &Client, mode: SearchMode, term: &str) -> SearchOutcome {
    if term.trim().is_empty() {
        return SearchOutcome::empty(mode);
    }

    let fetched = match mode {
        SearchMode::Name => client.by_name(term).map(SearchResults::Countries),
        SearchMode::Code => client.by_code(term).map(SearchResults::Countries),
        SearchMode::Currency => client.by_currency(term).map(SearchResults::Countries),
        SearchMode::Lang => client.by_language(term).map(SearchResults::Countries),
        SearchMode::Capital => client.by_capital(term).map(SearchResults::Countries),
        SearchMode::Region => client.by_region(term).map(SearchResults::Countries),
        SearchMode::Subregion => client.by_subregion(term).map(SearchResults::Countries),
        SearchMode::City => client.search_cities(term).map(SearchResults::Cities),
    };

    match fetched {
        Ok(results) => SearchOutcome {
            results,
            error: None,
        },
        Err(e) => {
            warn!("search mode={mode} term={term:?} degraded: {e}");
            SearchOutcome::degraded(mode, e.to_string())
        }
    }
}
