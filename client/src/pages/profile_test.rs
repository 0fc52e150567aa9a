use prefs::records::FarmSize;

use super::*;

fn profile() -> UserProfile {
    UserProfile {
        name: "Asha Reddy".to_owned(),
        role: UserRole::Farmer,
        phone: Some("9800000001".to_owned()),
        email: None,
        region: "Telangana".to_owned(),
        subregion: "Warangal".to_owned(),
        locality: None,
        farm_size_acres: FarmSize::parse("4.5").expect("farm size"),
        soil_type: SoilType::RedLaterite,
        water_source: WaterSource::BoreWell,
        main_crop: Some("Cotton".to_owned()),
        language: Language::Hindi,
        notifications_enabled: false,
    }
}

// =============================================================================
// profile_rows
// =============================================================================

#[test]
fn rows_show_every_field_in_order() {
    let rows = profile_rows(&profile());
    let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec![
            "Name",
            "Role",
            "Phone",
            "Email",
            "Location",
            "Farm Size",
            "Soil Type",
            "Water Source",
            "Main Crop",
            "Language",
            "Notifications"
        ]
    );
    assert_eq!(rows[4].1, "Warangal, Telangana");
    assert_eq!(rows[5].1, "4.5 acres");
    assert_eq!(rows[10].1, "Off");
}

#[test]
fn missing_optional_fields_render_blank() {
    let rows = profile_rows(&profile());
    assert_eq!(rows[3], ("Email", String::new()));
}

// =============================================================================
// editing
// =============================================================================

#[test]
fn draft_round_trips_through_the_wizard() {
    let mut original = profile();
    original.email = Some("asha@example.in".to_owned());
    let edited = edited_profile(draft_from_profile(&original)).expect("valid draft");
    assert_eq!(edited, original);
}

#[test]
fn profile_without_contact_details_saves() {
    let mut original = profile();
    original.phone = None;
    original.email = None;
    let edited = edited_profile(draft_from_profile(&original)).expect("contact details optional");
    assert_eq!(edited, original);
}

#[test]
fn clearing_farm_size_is_rejected() {
    let mut draft = draft_from_profile(&profile());
    draft.farm_size.clear();
    assert!(matches!(edited_profile(draft), Err(WizardError::MissingFarmSize)));
}

#[test]
fn delete_confirmation_passes_without_a_browser() {
    assert!(confirm_delete());
}
