use super::*;

fn company(distance: f64, rating: f64) -> Opportunity {
    Opportunity {
        company_name: "Vidarbha Agro Fuels".to_owned(),
        address: "MIDC Akola".to_owned(),
        status: "Active".to_owned(),
        domain: "Biomass Energy".to_owned(),
        distance,
        rating,
    }
}

#[test]
fn district_defaults_to_selected_subregion() {
    let location = PreferenceState::Loaded(LocationPreference::new("Maharashtra", "Akola"));
    assert_eq!(default_district(&location), "Akola");
    assert_eq!(default_district(&PreferenceState::Empty), "");
}

#[test]
fn search_request_trims_district() {
    assert_eq!(search_request("Rice", "  Akola "), Ok(OpportunityRequest::new("Rice", "Akola")));
}

#[test]
fn search_request_needs_crop_and_district() {
    assert_eq!(search_request("", "Akola"), Err("Please choose a crop"));
    assert_eq!(search_request("Rice", "   "), Err("Please enter your district"));
}

#[test]
fn rating_line_rounds_to_one_decimal() {
    assert_eq!(rating_line(&company(12.0, 4.3)), "12.0 km away, rated 4.3");
}

#[test]
fn crop_options_are_unique() {
    let mut sorted = CROP_OPTIONS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), CROP_OPTIONS.len());
}
