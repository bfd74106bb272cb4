use serde_json::json;
use world_explorer::models::CityHit;
use world_explorer::pages;
use world_explorer::query::{SearchMode, SearchOutcome, SearchResults};

#[test]
fn index_has_search_form_with_all_modes() {
    let html = pages::index_page();
    assert!(html.contains("<form class=\"search\" action=\"/search\""));
    for mode in SearchMode::ALL {
        assert!(html.contains(&format!("value=\"{}\"", mode.as_str())));
    }
}

#[test]
fn results_page_renders_country_cards_with_detail_links() {
    let outcome = SearchOutcome {
        results: SearchResults::Countries(vec![json!({
            "name": {"common": "France"},
            "cca2": "FR",
            "cca3": "FRA",
            "capital": ["Paris"],
            "region": "Europe",
            "population": 67391582u64,
            "flags": {"png": "https://flagcdn.com/w320/fr.png"}
        })]),
        error: None,
    };
    let html = pages::results_page("france", SearchMode::Name, &outcome);
    assert!(html.contains("1 result for"));
    assert!(html.contains("France"));
    assert!(html.contains("href=\"/country/FRA\""));
    assert!(html.contains("67,391,582"));
}

#[test]
fn results_page_renders_city_hits() {
    let outcome = SearchOutcome {
        results: SearchResults::Cities(vec![CityHit {
            name: "Paris".into(),
            country: "France".into(),
            country_code: "FR".into(),
            population: 67_391_582,
            region: "Europe".into(),
            flag: "https://flagcdn.com/fr.svg".into(),
        }]),
        error: None,
    };
    let html = pages::results_page("paris", SearchMode::City, &outcome);
    assert!(html.contains("Paris"));
    assert!(html.contains("href=\"/country/FR\""));
}

#[test]
fn results_page_escapes_the_query_echo() {
    let outcome = SearchOutcome::empty(SearchMode::Name);
    let html = pages::results_page("<script>alert(1)</script>", SearchMode::Name, &outcome);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn results_page_shows_diagnostic_when_degraded() {
    let outcome = SearchOutcome::degraded(SearchMode::Name, "HTTP 500 for /name/x".into());
    let html = pages::results_page("x", SearchMode::Name, &outcome);
    assert!(html.contains("Search unavailable"));
    assert!(html.contains("HTTP 500"));
}

#[test]
fn country_page_renders_profile_fields() {
    let country = json!({
        "name": {"common": "Germany", "official": "Federal Republic of Germany"},
        "cca2": "DE",
        "cca3": "DEU",
        "capital": ["Berlin"],
        "region": "Europe",
        "subregion": "Western Europe",
        "population": 83240525u64,
        "area": 357114.0,
        "unMember": true,
        "languages": {"deu": "German"},
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "idd": {"root": "+4", "suffixes": ["9"]},
        "borders": ["AUT", "BEL"],
        "car": {"side": "right"}
    });
    let html = pages::country_page("DEU", Some(&country));
    assert!(html.contains("Germany"));
    assert!(html.contains("Federal Republic of Germany"));
    assert!(html.contains("DE / DEU"));
    assert!(html.contains("Berlin"));
    assert!(html.contains("83,240,525"));
    assert!(html.contains("+49"));
    assert!(html.contains("AUT, BEL"));
}

#[test]
fn country_page_miss_is_friendly_not_found() {
    let html = pages::country_page("ZZZ", None);
    assert!(html.contains("Country not found"));
    assert!(html.contains("ZZZ"));
    assert!(html.contains("href=\"/\""));
}

#[test]
fn html_escape_covers_markup_characters() {
    assert_eq!(
        pages::html_escape("<a href=\"x\">&'"),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
}
