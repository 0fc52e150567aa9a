use prefs::{LocationPreference, PreferenceState};

use super::*;

#[test]
fn known_regions_have_their_own_rows() {
    assert_eq!(suggestions_for("Telangana")[0].name, "Rice");
    assert_eq!(suggestions_for("Madhya Pradesh")[0].name, "Wheat");
}

#[test]
fn empty_location_reads_the_default_row() {
    let state: PreferenceState<LocationPreference> = PreferenceState::Empty;
    assert_eq!(suggestions_for(state.region_or(DEFAULT_REGION)), suggestions_for("Maharashtra"));
}

#[test]
fn unlisted_region_falls_back_to_default_row() {
    let state = PreferenceState::Loaded(LocationPreference::new("Punjab", "Ludhiana"));
    assert_eq!(state.region_or(DEFAULT_REGION), "Punjab");
    assert_eq!(suggestions_for(state.region_or(DEFAULT_REGION))[0].name, "Cotton");
}
