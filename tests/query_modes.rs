use world_explorer::query::{SearchMode, SearchOutcome, SearchResults};

#[test]
fn mode_param_round_trips() {
    for mode in SearchMode::ALL {
        assert_eq!(SearchMode::from_param(mode.as_str()), mode);
    }
}

#[test]
fn mode_param_is_case_insensitive_and_trimmed() {
    assert_eq!(SearchMode::from_param("Currency"), SearchMode::Currency);
    assert_eq!(SearchMode::from_param("  region "), SearchMode::Region);
    assert_eq!(SearchMode::from_param("SUBREGION"), SearchMode::Subregion);
}

#[test]
fn unrecognized_mode_falls_back_to_name() {
    assert_eq!(SearchMode::from_param("continent"), SearchMode::Name);
    assert_eq!(SearchMode::from_param(""), SearchMode::Name);
}

#[test]
fn display_matches_param_value() {
    assert_eq!(SearchMode::Lang.to_string(), "lang");
    assert_eq!(SearchMode::City.to_string(), "city");
}

#[test]
fn empty_outcome_matches_mode_shape() {
    let country_modes = [
        SearchMode::Name,
        SearchMode::Code,
        SearchMode::Currency,
        SearchMode::Lang,
        SearchMode::Capital,
        SearchMode::Region,
        SearchMode::Subregion,
    ];
    for mode in country_modes {
        let outcome = SearchOutcome::empty(mode);
        assert!(matches!(outcome.results, SearchResults::Countries(ref v) if v.is_empty()));
        assert!(outcome.error.is_none());
    }

    let outcome = SearchOutcome::empty(SearchMode::City);
    assert!(matches!(outcome.results, SearchResults::Cities(ref v) if v.is_empty()));
}

#[test]
fn degraded_outcome_keeps_empty_results_and_carries_message() {
    let outcome = SearchOutcome::degraded(SearchMode::Name, "upstream down".into());
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.error.as_deref(), Some("upstream down"));
}

#[test]
fn results_len_counts_both_variants() {
    let countries = SearchResults::Countries(vec![serde_json::json!({}), serde_json::json!({})]);
    assert_eq!(countries.len(), 2);
    assert!(!countries.is_empty());

    let cities = SearchResults::Cities(Vec::new());
    assert_eq!(cities.len(), 0);
    assert!(cities.is_empty());
}
