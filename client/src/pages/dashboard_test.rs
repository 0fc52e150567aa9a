use prefs::records::FarmSize;
use prefs::{Language, SoilType, UserRole, WaterSource};

use super::*;

fn profile() -> UserProfile {
    UserProfile {
        name: "Ravi".to_owned(),
        role: UserRole::ExtensionOfficer,
        phone: None,
        email: None,
        region: "Maharashtra".to_owned(),
        subregion: "Akola".to_owned(),
        locality: None,
        farm_size_acres: FarmSize::parse("10").expect("farm size"),
        soil_type: SoilType::BlackCotton,
        water_source: WaterSource::Canal,
        main_crop: None,
        language: Language::Marathi,
        notifications_enabled: true,
    }
}

#[test]
fn missing_profile_goes_to_setup_first() {
    assert_eq!(dashboard_redirect(&PreferenceState::Empty, &PreferenceState::Empty), Some("/profile-setup"));
}

#[test]
fn missing_location_goes_to_picker() {
    assert_eq!(
        dashboard_redirect(&PreferenceState::Loaded(profile()), &PreferenceState::Empty),
        Some("/location-selector")
    );
}

#[test]
fn complete_setup_stays() {
    let location = PreferenceState::Loaded(LocationPreference::new("Maharashtra", "Akola"));
    assert_eq!(dashboard_redirect(&PreferenceState::Loaded(profile()), &location), None);
}

#[test]
fn location_line_formats_or_falls_back() {
    assert_eq!(location_line(&PreferenceState::Empty), "Location not set");
    let location = PreferenceState::Loaded(LocationPreference::new("Maharashtra", "Akola").with_locality("Barshitakli"));
    assert_eq!(location_line(&location), "Barshitakli, Akola, Maharashtra");
}
