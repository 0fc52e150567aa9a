use super::*;
use crate::codec::{decode, encode};

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Sunita Patil".to_owned(),
        role: UserRole::Farmer,
        phone: Some("9800000000".to_owned()),
        email: None,
        region: "Maharashtra".to_owned(),
        subregion: "Akola".to_owned(),
        locality: Some("Balapur".to_owned()),
        farm_size_acres: FarmSize::parse("5.5").expect("farm size"),
        soil_type: SoilType::BlackCotton,
        water_source: WaterSource::BoreWell,
        main_crop: Some("Cotton".to_owned()),
        language: Language::Marathi,
        notifications_enabled: false,
    }
}

// =============================================================
// LocationPreference
// =============================================================

#[test]
fn location_accepts_legacy_field_names() {
    let decoded: LocationPreference =
        decode(r#"{"state":"Punjab","district":"Ludhiana","village":"Khanna"}"#).expect("legacy keys");
    assert_eq!(decoded, LocationPreference::new("Punjab", "Ludhiana").with_locality("Khanna"));
}

#[test]
fn location_display_lists_finest_area_first() {
    assert_eq!(LocationPreference::new("Maharashtra", "Akola").to_string(), "Akola, Maharashtra");
    assert_eq!(
        LocationPreference::new("Maharashtra", "Akola").with_locality("Balapur").to_string(),
        "Balapur, Akola, Maharashtra"
    );
}

#[test]
fn location_key_matches_storage_layout() {
    assert_eq!(LocationPreference::KEY, "userLocation");
}

// =============================================================
// Enums
// =============================================================

#[test]
fn role_serializes_with_hyphenated_names() {
    assert_eq!(serde_json::to_string(&UserRole::ExtensionOfficer).expect("ser"), "\"extension-officer\"");
    assert_eq!(serde_json::to_string(&UserRole::AgriculturalOfficer).expect("ser"), "\"agricultural-officer\"");
}

#[test]
fn role_normalizes_legacy_spellings() {
    let kendra: UserRole = serde_json::from_str("\"krishi_kendra\"").expect("legacy");
    let officer: UserRole = serde_json::from_str("\"agricultural_officer\"").expect("legacy");
    assert_eq!(kendra, UserRole::ExtensionOfficer);
    assert_eq!(officer, UserRole::AgriculturalOfficer);
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<UserRole>("\"landlord\"").is_err());
}

#[test]
fn soil_type_uses_snake_case() {
    assert_eq!(serde_json::to_string(&SoilType::RedLaterite).expect("ser"), "\"red_laterite\"");
    assert!(serde_json::from_str::<SoilType>("\"peaty\"").is_err());
}

#[test]
fn labels_cover_every_variant() {
    assert!(UserRole::ALL.iter().all(|r| !r.label().is_empty()));
    assert!(SoilType::ALL.iter().all(|s| !s.label().is_empty()));
    assert!(WaterSource::ALL.iter().all(|w| !w.label().is_empty()));
    assert!(Language::ALL.iter().all(|l| !l.label().is_empty()));
}

// =============================================================
// FarmSize
// =============================================================

#[test]
fn farm_size_keeps_entered_text() {
    let size = FarmSize::parse(" 2.50 ").expect("valid");
    assert_eq!(size.as_str(), "2.50");
    assert!((size.acres() - 2.5).abs() < f64::EPSILON);
    assert_eq!(size.to_string(), "2.50 acres");
}

#[test]
fn farm_size_rejects_non_positive_and_non_numeric() {
    for raw in ["", "0", "-1", "abc", "NaN", "inf"] {
        assert!(FarmSize::parse(raw).is_err(), "`{raw}` should be rejected");
    }
}

// =============================================================
// UserProfile
// =============================================================

#[test]
fn profile_round_trips_through_codec() {
    let profile = sample_profile();
    let decoded: UserProfile = decode(&encode(&profile)).expect("round trip");
    assert_eq!(decoded, profile);
}

#[test]
fn profile_encodes_camel_case_keys() {
    let text = encode(&sample_profile());
    assert!(text.contains("\"farmSizeAcres\":\"5.5\""));
    assert!(text.contains("\"soilType\":\"black_cotton\""));
    assert!(text.contains("\"notificationsEnabled\":false"));
    assert!(!text.contains("\"email\""));
}

#[test]
fn profile_decodes_legacy_front_end_shape_with_defaults() {
    let raw = r#"{
        "name": "Ravi",
        "phone": "9811111111",
        "email": "ravi@example.com",
        "role": "krishi_kendra",
        "state": "Punjab",
        "district": "Ludhiana",
        "farmSize": "12",
        "soilType": "loamy"
    }"#;
    let profile: UserProfile = decode(raw).expect("legacy profile");
    assert_eq!(profile.role, UserRole::ExtensionOfficer);
    assert_eq!(profile.region, "Punjab");
    assert_eq!(profile.subregion, "Ludhiana");
    assert_eq!(profile.water_source, WaterSource::Rainwater);
    assert_eq!(profile.language, Language::English);
    assert!(profile.notifications_enabled);
}

#[test]
fn soil_type_accepts_edit_screen_spellings() {
    let black: SoilType = serde_json::from_str("\"black\"").expect("black");
    let red: SoilType = serde_json::from_str("\"red\"").expect("red");
    let alluvial: SoilType = serde_json::from_str("\"alluvial\"").expect("alluvial");
    assert_eq!(black, SoilType::BlackCotton);
    assert_eq!(red, SoilType::RedLaterite);
    assert_eq!(alluvial, SoilType::Alluvial);
    assert_eq!(serde_json::to_string(&black).expect("ser"), "\"black_cotton\"");
}

#[test]
fn profile_decodes_edit_screen_shape() {
    let raw = r#"{
        "name": "Asha",
        "role": "farmer",
        "state": "Maharashtra",
        "district": "Akola",
        "village": "Balapur",
        "farmSize": "5",
        "soilType": "black",
        "mainCrop": "Cotton",
        "language": "english",
        "notifications": true
    }"#;
    let profile: UserProfile = decode(raw).expect("edit screen profile");
    assert_eq!(profile.soil_type, SoilType::BlackCotton);
    assert_eq!(profile.location(), LocationPreference::new("Maharashtra", "Akola").with_locality("Balapur"));
    assert_eq!(profile.farm_size_acres.as_str(), "5");
    assert_eq!(profile.phone, None);
}

#[test]
fn profile_with_unknown_soil_is_rejected() {
    let mut value = serde_json::to_value(sample_profile()).expect("to value");
    value["soilType"] = serde_json::json!("volcanic");
    assert!(decode::<UserProfile>(&value.to_string()).is_err());
}

#[test]
fn profile_with_zero_farm_size_is_rejected() {
    let mut value = serde_json::to_value(sample_profile()).expect("to value");
    value["farmSizeAcres"] = serde_json::json!("0");
    assert!(decode::<UserProfile>(&value.to_string()).is_err());
}

#[test]
fn profile_with_blank_name_is_invalid() {
    let mut profile = sample_profile();
    profile.name = " ".to_owned();
    let err = decode::<UserProfile>(&encode(&profile)).expect_err("blank name");
    assert!(matches!(err, ParseError::Invalid { field: "name", .. }));
}

#[test]
fn profile_location_round_trips_through_setter() {
    let mut profile = sample_profile();
    let warangal = LocationPreference::new("Telangana", "Warangal");
    profile.set_location(&warangal);
    assert_eq!(profile.location(), warangal);
}

// =============================================================
// SignupDraft
// =============================================================

#[test]
fn signup_draft_tolerates_missing_fields() {
    let draft: SignupDraft = decode(r#"{"name":"Asha"}"#).expect("partial draft");
    assert_eq!(draft.name, "Asha");
    assert!(draft.phone.is_empty());
    assert_eq!(SignupDraft::KEY, "tempUserData");
}
