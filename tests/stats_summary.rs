use world_explorer::models::FlatCountry;
use world_explorer::stats::summarize;

fn country(name: &str, region: &str, population: u64, area: f64) -> FlatCountry {
    FlatCountry {
        name_common: name.into(),
        region: region.into(),
        population,
        area_km2: area,
        ..FlatCountry::default()
    }
}

#[test]
fn totals_sum_population_and_area() {
    let rows = vec![
        country("A", "Europe", 100, 10.0),
        country("B", "Europe", 200, 20.0),
        country("C", "Asia", 300, 30.0),
    ];
    let s = summarize(&rows);
    assert_eq!(s.total_countries, 3);
    assert_eq!(s.total_population, 600);
    assert_eq!(s.total_area_km2, 60.0);
}

#[test]
fn regions_group_counts_and_population_with_unknown_sentinel() {
    let rows = vec![
        country("A", "Europe", 100, 1.0),
        country("B", "Europe", 200, 1.0),
        country("C", "", 50, 1.0),
    ];
    let s = summarize(&rows);
    let europe = &s.regions["Europe"];
    assert_eq!(europe.count, 2);
    assert_eq!(europe.population, 300);
    let unknown = &s.regions["Unknown"];
    assert_eq!(unknown.count, 1);
    assert_eq!(unknown.population, 50);
}

#[test]
fn top_lists_are_capped_at_ten_and_sorted_descending() {
    let rows: Vec<FlatCountry> = (0..15)
        .map(|i| country(&format!("C{i}"), "R", i as u64, (15 - i) as f64))
        .collect();
    let s = summarize(&rows);

    assert_eq!(s.top_10_by_population.len(), 10);
    assert_eq!(s.top_10_by_population[0].name, "C14");
    assert_eq!(s.top_10_by_population[0].population, 14);
    assert!(
        s.top_10_by_population
            .windows(2)
            .all(|w| w[0].population >= w[1].population)
    );

    assert_eq!(s.top_10_by_area.len(), 10);
    assert_eq!(s.top_10_by_area[0].name, "C0");
    assert_eq!(s.top_10_by_area[0].area_km2, 15.0);
}

#[test]
fn top_list_ties_keep_input_order() {
    let rows = vec![
        country("First", "R", 100, 1.0),
        country("Second", "R", 100, 1.0),
        country("Third", "R", 100, 1.0),
    ];
    let s = summarize(&rows);
    let names: Vec<&str> = s
        .top_10_by_population
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn empty_input_yields_empty_summary() {
    let s = summarize(&[]);
    assert_eq!(s.total_countries, 0);
    assert_eq!(s.total_population, 0);
    assert_eq!(s.total_area_km2, 0.0);
    assert!(s.regions.is_empty());
    assert!(s.top_10_by_population.is_empty());
    assert!(s.top_10_by_area.is_empty());
}

#[test]
fn summary_serializes_with_expected_keys() {
    let s = summarize(&[country("A", "Europe", 1, 1.0)]);
    let v = serde_json::to_value(&s).unwrap();
    assert!(v.get("total_countries").is_some());
    assert!(v.get("total_population").is_some());
    assert!(v.get("total_area_km2").is_some());
    assert!(v.get("regions").is_some());
    assert!(v.get("top_10_by_population").is_some());
    assert!(v.get("top_10_by_area").is_some());
}
