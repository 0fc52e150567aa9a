use super::*;

fn catalog() -> LocationCatalog {
    LocationCatalog::new(vec![
        "Akola, Maharashtra".to_owned(),
        "Warangal, Telangana".to_owned(),
        "Latur, Maharashtra".to_owned(),
    ])
}

#[test]
fn matching_groups_owns_grouped_entries() {
    let groups = matching_groups(&catalog(), "");
    assert_eq!(
        groups,
        vec![
            ("Maharashtra".to_owned(), vec!["Akola, Maharashtra".to_owned(), "Latur, Maharashtra".to_owned()]),
            ("Telangana".to_owned(), vec!["Warangal, Telangana".to_owned()]),
        ]
    );
}

#[test]
fn matching_groups_filters_by_query() {
    let groups = matching_groups(&catalog(), "war");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, "Telangana");
}

#[test]
fn catalog_entry_round_trips_through_parse() {
    let location = LocationPreference::new("Maharashtra", "Akola");
    assert_eq!(catalog_entry(&location), "Akola, Maharashtra");
    assert_eq!(parse_location(&catalog_entry(&location)), Some(location));
}
