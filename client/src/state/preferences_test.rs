use std::path::PathBuf;

use prefs::records::FarmSize;
use prefs::{Language, SoilType, UserRole, WaterSource};

use super::*;

fn profile() -> UserProfile {
    UserProfile {
        name: "Asha".to_owned(),
        role: UserRole::Farmer,
        phone: None,
        email: None,
        region: "Telangana".to_owned(),
        subregion: "Warangal".to_owned(),
        locality: None,
        farm_size_acres: FarmSize::parse("2").expect("farm size"),
        soil_type: SoilType::BlackCotton,
        water_source: WaterSource::BoreWell,
        main_crop: Some("Cotton".to_owned()),
        language: Language::Hindi,
        notifications_enabled: false,
    }
}

#[test]
fn landing_for_logged_out_is_login() {
    assert_eq!(landing_for(false, &PreferenceState::Loaded(profile())), Landing::Login);
}

#[test]
fn landing_for_logged_in_depends_on_profile() {
    assert_eq!(landing_for(true, &PreferenceState::Empty), Landing::ProfileSetup);
    assert_eq!(landing_for(true, &PreferenceState::Loaded(profile())), Landing::Dashboard);
}

#[test]
fn storage_warning_text_names_the_cause() {
    assert!(storage_warning_text(&StorageWriteFailure::Unavailable).contains("turned off"));
    assert!(
        storage_warning_text(&StorageWriteFailure::QuotaExceeded { key: "userProfile".to_owned() }).contains("full")
    );
    let io = StorageWriteFailure::Io { path: PathBuf::from("/x"), source: std::io::Error::other("disk") };
    assert!(storage_warning_text(&io).starts_with("Your changes were not saved"));
}

// =============================================================================
// Signal mirroring (native storage rejects every write)
// =============================================================================

fn with_preferences(test: impl FnOnce(Preferences)) {
    let owner = Owner::new();
    owner.with(|| test(Preferences::mount()));
}

#[test]
fn set_location_updates_signal_and_raises_banner() {
    with_preferences(|prefs| {
        assert_eq!(prefs.location.get_untracked(), PreferenceState::Empty);

        prefs.set_location(LocationPreference::new("Telangana", "Warangal"));

        assert_eq!(
            prefs.location.get_untracked(),
            PreferenceState::Loaded(LocationPreference::new("Telangana", "Warangal"))
        );
        assert!(prefs.storage_warning.get_untracked().is_some_and(|text| text.contains("turned off")));
    });
}

#[test]
fn clear_location_empties_signal() {
    with_preferences(|prefs| {
        prefs.set_location(LocationPreference::new("Telangana", "Warangal"));
        prefs.clear_location();
        assert_eq!(prefs.location.get_untracked(), PreferenceState::Empty);
    });
}

#[test]
fn logout_drops_profile_and_flag_but_keeps_location() {
    with_preferences(|prefs| {
        prefs.login();
        prefs.set_location(LocationPreference::new("Telangana", "Warangal"));
        prefs.set_profile(profile());
        assert!(prefs.logged_in.get_untracked());
        assert!(prefs.profile.get_untracked().is_loaded());
        assert_eq!(prefs.landing(), Landing::Dashboard);

        prefs.logout();

        assert!(!prefs.logged_in.get_untracked());
        assert_eq!(prefs.profile.get_untracked(), PreferenceState::Empty);
        assert!(prefs.location.get_untracked().is_loaded());
        assert_eq!(prefs.landing(), Landing::Login);
    });
}

#[test]
fn delete_account_resets_every_signal() {
    with_preferences(|prefs| {
        prefs.login();
        prefs.set_location(LocationPreference::new("Telangana", "Warangal"));
        prefs.set_profile(profile());

        prefs.delete_account();

        assert!(!prefs.logged_in.get_untracked());
        assert_eq!(prefs.location.get_untracked(), PreferenceState::Empty);
        assert_eq!(prefs.profile.get_untracked(), PreferenceState::Empty);
        assert_eq!(prefs.storage_warning.get_untracked(), None);
    });
}
