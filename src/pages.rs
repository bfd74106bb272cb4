//! Hand-rendered HTML for the three-route web UI.
//!
//! Pages are plain strings built with `format!`; every interpolated value
//! passes through [`html_escape`]. The detail page reuses the flattening
//! transform so the web view and the export share one shaping path.

use crate::models::{CityHit, RawCountry};
use crate::query::{SearchMode, SearchOutcome, SearchResults};
use crate::transform;
use num_format::{Locale, ToFormattedString};
use serde_json::Value;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f6f8;color:#1d2733}\
header{background:#1d3557;color:#fff;padding:1rem 1.5rem}\
header a{color:#fff;text-decoration:none;font-weight:600}\
main{max-width:60rem;margin:1.5rem auto;padding:0 1rem}\
form.search{display:flex;gap:.5rem;margin-bottom:1.5rem}\
form.search input[type=text]{flex:1;padding:.5rem;border:1px solid #c6ccd4;border-radius:4px}\
form.search select,form.search button{padding:.5rem;border:1px solid #c6ccd4;border-radius:4px}\
.card{background:#fff;border:1px solid #e2e6ea;border-radius:6px;padding:.75rem 1rem;margin-bottom:.75rem;display:flex;gap:1rem;align-items:center}\
.card img{width:48px;border:1px solid #e2e6ea}\
.card .meta{color:#5a6775;font-size:.9rem}\
.error{background:#fdecea;border:1px solid #f5c6c2;padding:.5rem 1rem;border-radius:4px}\
table.profile{border-collapse:collapse;background:#fff;width:100%}\
table.profile th,table.profile td{border:1px solid #e2e6ea;padding:.5rem .75rem;text-align:left}\
table.profile th{width:14rem;background:#f0f2f5;font-weight:600}";

/// Minimal HTML escaping for text and attribute positions.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn fmt_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n\
         <header><a href=\"/\">World Explorer</a></header>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        html_escape(title),
        STYLE,
        body
    )
}

fn search_form(term: &str, mode: SearchMode) -> String {
    let mut options = String::new();
    for m in SearchMode::ALL {
        let selected = if m == mode { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            m.as_str(),
            selected,
            html_escape(m.label())
        ));
    }
    format!(
        "<form class=\"search\" action=\"/search\" method=\"get\">\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search countries...\">\
         <select name=\"type\">{}</select>\
         <button type=\"submit\">Search</button></form>",
        html_escape(term),
        options
    )
}

/// Index page: the search form with a short intro.
pub fn index_page() -> String {
    let body = format!(
        "<h1>Explore the world</h1>\
         <p>Search countries by name, code, currency, language, capital, region, \
         or subregion &mdash; or look for a city among the capitals.</p>{}",
        search_form("", SearchMode::Name)
    );
    page("World Explorer", &body)
}

fn str_at<'a>(v: &'a Value, pointer: &str) -> &'a str {
    v.pointer(pointer).and_then(Value::as_str).unwrap_or_default()
}

fn country_card(v: &Value) -> String {
    let name = str_at(v, "/name/common");
    let cca3 = str_at(v, "/cca3");
    let code = if cca3.is_empty() {
        str_at(v, "/cca2")
    } else {
        cca3
    };
    let capital = str_at(v, "/capital/0");
    let region = str_at(v, "/region");
    let population = v.pointer("/population").and_then(Value::as_u64).unwrap_or(0);
    let flag = str_at(v, "/flags/png");

    let img = if flag.is_empty() {
        String::new()
    } else {
        format!("<img src=\"{}\" alt=\"\">", html_escape(flag))
    };
    format!(
        "<div class=\"card\">{}<div><a href=\"/country/{}\"><strong>{}</strong></a> ({})\
         <div class=\"meta\">{} &middot; {} &middot; pop {}</div></div></div>",
        img,
        html_escape(code),
        html_escape(name),
        html_escape(code),
        html_escape(capital),
        html_escape(region),
        fmt_count(population)
    )
}

fn city_card(hit: &CityHit) -> String {
    let img = if hit.flag.is_empty() {
        String::new()
    } else {
        format!("<img src=\"{}\" alt=\"\">", html_escape(&hit.flag))
    };
    format!(
        "<div class=\"card\">{}<div><strong>{}</strong>, \
         <a href=\"/country/{}\">{}</a>\
         <div class=\"meta\">{} &middot; country pop {}</div></div></div>",
        img,
        html_escape(&hit.name),
        html_escape(&hit.country_code),
        html_escape(&hit.country),
        html_escape(&hit.region),
        fmt_count(hit.population)
    )
}

/// Results page for one search outcome.
pub fn results_page(term: &str, mode: SearchMode, outcome: &SearchOutcome) -> String {
    let mut body = search_form(term, mode);

    if let Some(msg) = &outcome.error {
        body.push_str(&format!(
            "<p class=\"error\">Search unavailable: {}</p>",
            html_escape(msg)
        ));
    }

    body.push_str(&format!(
        "<h1>{} result{} for &ldquo;{}&rdquo;</h1>",
        outcome.results.len(),
        if outcome.results.len() == 1 { "" } else { "s" },
        html_escape(term)
    ));

    match &outcome.results {
        SearchResults::Countries(list) => {
            for v in list {
                body.push_str(&country_card(v));
            }
        }
        SearchResults::Cities(hits) => {
            for hit in hits {
                body.push_str(&city_card(hit));
            }
        }
    }

    if outcome.results.is_empty() && outcome.error.is_none() {
        body.push_str("<p>Nothing matched. Try another term or mode.</p>");
    }

    page("Search results", &body)
}

fn row(label: &str, value: &str) -> String {
    format!(
        "<tr><th>{}</th><td>{}</td></tr>",
        html_escape(label),
        html_escape(value)
    )
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Detail page for one country, or a friendly miss when the code matched
/// nothing.
pub fn country_page(code: &str, country: Option<&Value>) -> String {
    let parsed = country.and_then(|v| serde_json::from_value::<RawCountry>(v.clone()).ok());
    let Some(country) = parsed else {
        let body = format!(
            "<h1>Country not found</h1>\
             <p>No country matched the code <strong>{}</strong>.</p>\
             <p><a href=\"/\">Back to search</a></p>",
            html_escape(code)
        );
        return page("Country not found", &body);
    };

    let flat = transform::flatten(&country);
    let flag = if flat.flag_svg.is_empty() {
        &flat.flag_png
    } else {
        &flat.flag_svg
    };
    let img = if flag.is_empty() {
        String::new()
    } else {
        format!(
            "<p><img src=\"{}\" alt=\"Flag of {}\" width=\"160\"></p>",
            html_escape(flag),
            html_escape(&flat.name_common)
        )
    };

    let density = flat
        .population_density
        .map(|d| format!("{d} per km²"))
        .unwrap_or_default();
    let gini = flat.gini_index.map(|g| g.to_string()).unwrap_or_default();

    let mut table = String::from("<table class=\"profile\">");
    table.push_str(&row("Official name", &flat.name_official));
    table.push_str(&row(
        "Codes",
        &format!("{} / {}", flat.cca2, flat.cca3),
    ));
    table.push_str(&row("Capital", &flat.capital));
    table.push_str(&row("Region", &flat.region));
    table.push_str(&row("Subregion", &flat.subregion));
    table.push_str(&row("Continent", &flat.continent));
    table.push_str(&row("Population", &fmt_count(flat.population)));
    table.push_str(&row("Area", &format!("{} km²", flat.area_km2)));
    table.push_str(&row("Population density", &density));
    table.push_str(&row("Languages", &flat.languages));
    table.push_str(&row(
        "Currencies",
        &format!("{} ({})", flat.currency_names, flat.currencies),
    ));
    table.push_str(&row("Calling code", &flat.calling_code));
    table.push_str(&row("Timezones", &flat.timezones));
    table.push_str(&row(
        "Borders",
        if flat.borders.is_empty() {
            "none"
        } else {
            flat.borders.as_str()
        },
    ));
    table.push_str(&row("Driving side", &flat.driving_side));
    table.push_str(&row("Start of week", &flat.start_of_week));
    table.push_str(&row("UN member", yes_no(flat.un_member)));
    table.push_str(&row("Independent", yes_no(flat.independent)));
    table.push_str(&row("Landlocked", yes_no(flat.landlocked)));
    table.push_str(&row("Gini index", &gini));
    table.push_str("</table>");

    let body = format!(
        "<h1>{} {}</h1>{}{}<p><a href=\"/\">Back to search</a></p>",
        html_escape(&flat.flag_emoji),
        html_escape(&flat.name_common),
        img,
        table
    );
    page(&flat.name_common, &body)
}
